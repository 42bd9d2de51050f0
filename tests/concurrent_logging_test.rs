// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use serde_json::json;

mod common;

const NUM_CONCURRENT_EXERCISES: usize = 20;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_exercise_logging() {
    let (app, _state) = common::create_test_app();
    let user_id = common::create_user(&app, "racer").await;

    let mut handles = vec![];
    for i in 0..NUM_CONCURRENT_EXERCISES {
        let app = app.clone();
        let user_id = user_id.clone();
        handles.push(tokio::spawn(async move {
            common::send(
                &app,
                "POST",
                &format!("/api/users/{}/exercises", user_id),
                Some(json!({"description": format!("lap {}", i), "duration": 1})),
            )
            .await
        }));
    }

    for handle in handles {
        let (status, _body) = handle.await.expect("Task join failed");
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) =
        common::send(&app, "GET", &format!("/api/users/{}/logs", user_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], NUM_CONCURRENT_EXERCISES);
}
