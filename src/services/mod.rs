// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Business logic behind the HTTP routes.

pub mod log_query;
pub mod registration;

pub use log_query::{build_and_run, LogParams};
pub use registration::{create_exercise, create_user, list_users, NewExercise};
