// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod exercise;
pub mod log;
pub mod user;

pub use exercise::{Exercise, ExerciseEntry, ExerciseResponse};
pub use log::{LogQuery, LogResponse};
pub use user::{User, UserResponse};
