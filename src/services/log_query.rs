// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise log queries.
//!
//! Raw query-string values are parsed leniently: a `from`, `to` or `limit`
//! that cannot be parsed is dropped and the query widens instead of failing.

use crate::db::Db;
use crate::error::{AppError, Result};
use crate::models::{LogQuery, LogResponse};
use crate::time_utils::parse_date_millis;

/// Raw `from`/`to`/`limit` query-string parameters.
#[derive(Debug, Clone, Default)]
pub struct LogParams {
    /// Inclusive lower date bound, any format [`parse_date_millis`] accepts
    pub from: Option<String>,
    /// Inclusive upper date bound
    pub to: Option<String>,
    /// Maximum number of entries, as a decimal string
    pub limit: Option<String>,
}

impl LogParams {
    /// Build the validated filter for a user.
    pub fn to_query(&self, user_id: &str) -> LogQuery {
        LogQuery {
            user_id: user_id.to_string(),
            from: self.from.as_deref().and_then(parse_date_millis),
            to: self.to.as_deref().and_then(parse_date_millis),
            limit: self.limit.as_deref().and_then(parse_limit),
        }
    }
}

/// Parse a result cap.
///
/// Any finite number is accepted and truncated. Values below 1 mean
/// "no cap", as does anything non-numeric.
pub fn parse_limit(raw: &str) -> Option<u32> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    let value = value.trunc();
    if value < 1.0 {
        return None;
    }
    // Saturates at u32::MAX.
    Some(value as u32)
}

/// Look up a user, run their log query and shape the result.
pub async fn build_and_run(db: &Db, user_id: &str, params: &LogParams) -> Result<LogResponse> {
    let user = db
        .get_user(user_id)
        .await?
        .ok_or_else(|| AppError::user_not_found(user_id))?;

    let query = params.to_query(&user.id);
    tracing::debug!(
        user_id = %user.id,
        from = ?query.from,
        to = ?query.to,
        limit = ?query.limit,
        "Fetching exercise log"
    );

    let exercises = db.find_exercises(&query).await?;

    Ok(LogResponse::new(&user, &exercises))
}
