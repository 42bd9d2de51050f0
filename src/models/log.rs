// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Exercise log filter and response.

use crate::models::{Exercise, ExerciseEntry, User};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Validated filter for a user's exercise log.
///
/// Bounds are inclusive epoch milliseconds. `from > to` is allowed and
/// simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    pub user_id: String,
    pub from: Option<i64>,
    pub to: Option<i64>,
    /// Maximum number of records to return
    pub limit: Option<u32>,
}

impl LogQuery {
    /// Query for every exercise of a user.
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            from: None,
            to: None,
            limit: None,
        }
    }

    /// Whether any date bound is set.
    pub fn has_date_range(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Check an exercise against the owner and date bounds (not the limit).
    ///
    /// Exercises without a stored date never match a bounded query.
    pub fn matches(&self, exercise: &Exercise) -> bool {
        if exercise.user_id != self.user_id {
            return false;
        }
        if !self.has_date_range() {
            return true;
        }

        let Some(date) = exercise.date else {
            return false;
        };
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

/// A user's exercise log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LogResponse {
    pub username: String,
    pub id: String,
    /// Number of entries in `log`
    pub count: usize,
    pub log: Vec<ExerciseEntry>,
}

impl LogResponse {
    /// Shape a user and their matching exercises into a log response.
    pub fn new(user: &User, exercises: &[Exercise]) -> Self {
        let log: Vec<ExerciseEntry> = exercises.iter().map(Exercise::shape).collect();

        Self {
            username: user.username.clone(),
            id: user.id.clone(),
            count: log.len(),
            log,
        }
    }
}
