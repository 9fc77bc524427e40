//! UTC calendar-day helpers for the MOT countdown and date labels.
//!
//! Countdowns compare UTC calendar days, not instants, so "due in N days"
//! does not change with the time of day the check runs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

pub const NOT_SET: &str = "Not set";

/// The UTC calendar day of a stored date string.
///
/// Accepts RFC 3339 instants (`2025-03-14T09:00:00.000Z`) and bare dates
/// (`2025-03-14`, read as UTC).
pub fn utc_day(iso: &str) -> Option<NaiveDate> {
    let trimmed = iso.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(at.with_timezone(&Utc).date_naive());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// `DD-MM-YYYY` in UTC, or "Not set" when the date does not parse.
pub fn format_day(iso: &str) -> String {
    match utc_day(iso) {
        Some(day) => day.format("%d-%m-%Y").to_string(),
        None => NOT_SET.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CountdownStatus {
    Ok,
    Warn,
    Bad,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MotCountdown {
    /// Calendar days from today until expiry; negative when overdue.
    pub days: i64,
    pub status: CountdownStatus,
    pub text: String,
}

fn days_label(n: i64) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", n)
    }
}

/// Classify an MOT expiry relative to `today`.
///
/// Overdue is `Bad`; due today or within `warn_days` is `Warn`; later is `Ok`.
pub fn mot_countdown(expiry_iso: &str, today: NaiveDate, warn_days: u32) -> Option<MotCountdown> {
    let expiry = utc_day(expiry_iso)?;
    let days = (expiry - today).num_days();

    let (status, text) = if days < 0 {
        (
            CountdownStatus::Bad,
            format!("Overdue by {}", days_label(-days)),
        )
    } else if days == 0 {
        (CountdownStatus::Warn, "Due today".to_string())
    } else if days <= i64::from(warn_days) {
        (CountdownStatus::Warn, format!("Due in {}", days_label(days)))
    } else {
        (CountdownStatus::Ok, format!("Due in {}", days_label(days)))
    };

    Some(MotCountdown { days, status, text })
}
