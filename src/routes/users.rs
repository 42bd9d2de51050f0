// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User, exercise and log routes.

use crate::error::{AppError, Result};
use crate::models::{ExerciseResponse, LogResponse, UserResponse};
use crate::routes::extract::{ApiPath, JsonOrForm, QueryPairs};
use crate::services::{self, LogParams, NewExercise};
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", post(create_user).get(list_users))
        .route("/api/users/{id}/exercises", post(create_exercise))
        .route("/api/users/{id}/logs", get(get_logs))
}

// ─── Users ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct CreateUserRequest {
    username: String,
}

async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonOrForm(body): JsonOrForm<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    let user = services::create_user(&state.db, body.username).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<UserResponse>>> {
    Ok(Json(services::list_users(&state.db).await?))
}

// ─── Exercises ───────────────────────────────────────────────

/// Duration as sent by clients: a JSON number, or a string from a form.
#[derive(Deserialize)]
#[serde(untagged)]
enum DurationInput {
    Minutes(i64),
    Text(String),
}

impl DurationInput {
    fn minutes(&self) -> Result<i64> {
        match self {
            DurationInput::Minutes(m) => Ok(*m),
            DurationInput::Text(s) => s.trim().parse().map_err(|_| {
                AppError::BadRequest(format!("Invalid duration '{}': must be whole minutes", s))
            }),
        }
    }
}

#[derive(Deserialize)]
struct CreateExerciseRequest {
    description: String,
    duration: DurationInput,
    #[serde(default)]
    date: Option<String>,
}

async fn create_exercise(
    State(state): State<Arc<AppState>>,
    ApiPath(user_id): ApiPath<String>,
    JsonOrForm(body): JsonOrForm<CreateExerciseRequest>,
) -> Result<(StatusCode, Json<ExerciseResponse>)> {
    let new_exercise = NewExercise {
        duration: body.duration.minutes()?,
        description: body.description,
        date: body.date,
    };

    let exercise = services::create_exercise(&state.db, &user_id, new_exercise).await?;
    Ok((StatusCode::CREATED, Json(exercise)))
}

// ─── Logs ────────────────────────────────────────────────────

/// Only the first value of a repeated filter key is used; the rest are ignored.
fn log_params(query: &QueryPairs) -> LogParams {
    LogParams {
        from: query.first("from").map(String::from),
        to: query.first("to").map(String::from),
        limit: query.first("limit").map(String::from),
    }
}

async fn get_logs(
    State(state): State<Arc<AppState>>,
    ApiPath(user_id): ApiPath<String>,
    query: QueryPairs,
) -> Result<Json<LogResponse>> {
    let params = log_params(&query);
    let log = services::build_and_run(&state.db, &user_id, &params).await?;
    Ok(Json(log))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_params_use_first_value() {
        let query = QueryPairs(vec![
            ("limit".to_string(), "1".to_string()),
            ("limit".to_string(), "2".to_string()),
            ("to".to_string(), "2024-01-31".to_string()),
            ("sort".to_string(), "desc".to_string()),
        ]);

        let params = log_params(&query);

        assert_eq!(params.from, None);
        assert_eq!(params.to.as_deref(), Some("2024-01-31"));
        assert_eq!(params.limit.as_deref(), Some("1"));
    }

    #[test]
    fn test_duration_input() {
        let json: DurationInput = serde_json::from_str("30").unwrap();
        assert_eq!(json.minutes().unwrap(), 30);

        let text: DurationInput = serde_json::from_str(r#"" 45 ""#).unwrap();
        assert_eq!(text.minutes().unwrap(), 45);

        let bad: DurationInput = serde_json::from_str(r#""half an hour""#).unwrap();
        assert!(matches!(bad.minutes(), Err(AppError::BadRequest(_))));

        assert!(serde_json::from_str::<DurationInput>("30.5").is_err());
    }
}
