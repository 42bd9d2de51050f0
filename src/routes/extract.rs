// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Extractors whose rejections become [`AppError`] responses.

use crate::error::AppError;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::{header, request::Parts};
use axum::{Form, Json};
use serde::de::DeserializeOwned;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Deserializes the body as a form when the content type says so, and as
/// JSON otherwise. Rejections become [`AppError::BadRequest`].
#[derive(Debug, Clone)]
pub struct JsonOrForm<T>(pub T);

impl<T, S> FromRequest<S> for JsonOrForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with(FORM_CONTENT_TYPE));

        if is_form {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            Ok(Self(value))
        }
    }
}

/// [`Path`] with rejections mapped to [`AppError::BadRequest`].
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        Ok(Self(value))
    }
}

/// Query string as ordered `(key, value)` pairs.
///
/// Repeated keys are all kept, so deserialization never fails on duplicates.
#[derive(Debug, Clone, Default)]
pub struct QueryPairs(pub Vec<(String, String)>);

impl QueryPairs {
    /// First value given for `key`, if any.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl<S> FromRequestParts<S> for QueryPairs
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        Ok(Self(pairs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Body1 {
        name: String,
    }

    async fn extract(content_type: &str, body: &'static str) -> Result<Body1, AppError> {
        let req = Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap();
        JsonOrForm::<Body1>::from_request(req, &())
            .await
            .map(|JsonOrForm(v)| v)
    }

    async fn query_pairs(uri: &str) -> QueryPairs {
        let (mut parts, _) = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap()
            .into_parts();
        QueryPairs::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn test_query_pairs_keep_first_duplicate() {
        let pairs = query_pairs("/logs?limit=1&limit=2&from=2024-01-01&from=junk").await;

        assert_eq!(pairs.first("limit"), Some("1"));
        assert_eq!(pairs.first("from"), Some("2024-01-01"));
        assert_eq!(pairs.first("to"), None);
    }

    #[tokio::test]
    async fn test_query_pairs_decode_and_tolerate_odd_input() {
        let pairs = query_pairs("/logs?from=Jan%2001%202024&&flag&to=%ZZ").await;

        assert_eq!(pairs.first("from"), Some("Jan 01 2024"));
        assert_eq!(pairs.first("flag"), Some(""));
        assert_eq!(pairs.first("to"), Some("%ZZ"));
    }

    #[tokio::test]
    async fn test_query_pairs_without_query_string() {
        assert!(query_pairs("/logs").await.0.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_utf8_path_is_bad_request() {
        let app = axum::Router::new().route(
            "/users/{id}",
            axum::routing::get(|ApiPath(id): ApiPath<String>| async move { id }),
        );

        let response = tower::ServiceExt::oneshot(
            app,
            Request::builder()
                .uri("/users/%FF")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_json_body() {
        let body = extract("application/json", r#"{"name":"alice"}"#)
            .await
            .unwrap();
        assert_eq!(body.name, "alice");
    }

    #[tokio::test]
    async fn test_form_body() {
        let body = extract("application/x-www-form-urlencoded", "name=al%20ice")
            .await
            .unwrap();
        assert_eq!(body.name, "al ice");
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let err = extract("application/json", r#"{"nom":"alice"}"#)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let err = extract("text/plain", "alice").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
