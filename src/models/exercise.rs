// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Exercise model for storage and API.

use crate::time_utils::format_date_string;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Stored exercise record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Generated identifier (also used as document ID)
    pub id: String,
    /// Owning user's ID
    pub user_id: String,
    /// Free-form description
    pub description: String,
    /// Duration in minutes
    pub duration: i64,
    /// When the exercise took place (epoch ms); `None` if the supplied date was unparseable
    pub date: Option<i64>,
    /// When the record was inserted (epoch ms), used for insertion ordering
    pub logged_at: i64,
}

/// One entry of a user's exercise log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ExerciseEntry {
    pub description: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub duration: i64,
    pub date: String,
}

/// Response for a newly logged exercise, combined with its owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ExerciseResponse {
    pub username: String,
    pub description: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub duration: i64,
    pub date: String,
    /// The owning user's ID
    pub id: String,
}

impl Exercise {
    /// Shape the stored record into a log entry.
    pub fn shape(&self) -> ExerciseEntry {
        ExerciseEntry {
            description: self.description.clone(),
            duration: self.duration,
            date: format_date_string(self.date),
        }
    }
}
