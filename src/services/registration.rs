// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User registration and exercise logging.

use crate::db::Db;
use crate::error::{AppError, Result};
use crate::models::{Exercise, ExerciseResponse, User, UserResponse};
use crate::time_utils::{format_date_string, now_millis, parse_date_millis};
use uuid::Uuid;

/// Exercise details supplied by a client.
#[derive(Debug, Clone)]
pub struct NewExercise {
    pub description: String,
    pub duration: i64,
    /// Date string; missing or blank means "now"
    pub date: Option<String>,
}

/// Time-ordered ID; IDs generated later in this process sort after earlier ones.
fn new_id() -> String {
    Uuid::now_v7().simple().to_string()
}

/// Resolve a client-supplied exercise date against the current time.
///
/// Blank means `now`. An unparseable date is kept as absent.
fn resolve_exercise_date(raw: Option<&str>, now: i64) -> Option<i64> {
    match raw.map(str::trim) {
        None | Some("") => Some(now),
        Some(raw) => parse_date_millis(raw),
    }
}

/// Register a new user. Usernames are not required to be unique.
pub async fn create_user(db: &Db, username: String) -> Result<UserResponse> {
    let user = User {
        id: new_id(),
        username,
        created_at: now_millis(),
    };

    db.insert_user(&user).await?;
    tracing::info!(user_id = %user.id, username = %user.username, "New user added");

    Ok(user.into())
}

/// List every registered user.
pub async fn list_users(db: &Db) -> Result<Vec<UserResponse>> {
    let users = db.list_users().await?;
    Ok(users.into_iter().map(UserResponse::from).collect())
}

/// Log an exercise for an existing user.
pub async fn create_exercise(
    db: &Db,
    user_id: &str,
    new_exercise: NewExercise,
) -> Result<ExerciseResponse> {
    // Resolve the owner first so no exercise is stored for an unknown user.
    let user = db
        .get_user(user_id)
        .await?
        .ok_or_else(|| AppError::user_not_found(user_id))?;

    let now = now_millis();
    let exercise = Exercise {
        id: new_id(),
        user_id: user.id.clone(),
        description: new_exercise.description,
        duration: new_exercise.duration,
        date: resolve_exercise_date(new_exercise.date.as_deref(), now),
        logged_at: now,
    };

    db.insert_exercise(&exercise).await?;
    tracing::info!(
        user_id = %user.id,
        exercise_id = %exercise.id,
        date = ?exercise.date,
        "New exercise added"
    );

    Ok(ExerciseResponse {
        username: user.username,
        description: exercise.description,
        duration: exercise.duration,
        date: format_date_string(exercise.date),
        id: user.id,
    })
}
