//! Age-based risk classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Risk verdict for an evaluated domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Status {
    /// The domain was registered within the threshold
    Danger,
    /// The domain is older than the threshold, or exempt
    Safe,
    /// No registration date could be determined
    Unknown,
}

/// The record an evaluation produces.
///
/// Serializes to the wire shape collaborators consume: camelCase keys,
/// `creationDate` as RFC 3339 or null, `checkedAt` as epoch milliseconds.
/// Classifications are never mutated in place; re-evaluations replace the
/// record wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// Normalized root domain that was evaluated
    pub domain: String,
    /// Registration date, when known
    pub creation_date: Option<DateTime<Utc>>,
    /// Whole days between registration and evaluation, when known
    pub age_days: Option<i64>,
    /// Whether the age is within the configured threshold
    pub is_recent: bool,
    /// Risk verdict
    pub status: Status,
    /// Moment the classification was produced
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub checked_at: DateTime<Utc>,
}

impl Classification {
    /// Builds the short-circuit record for an exempt domain.
    ///
    /// Exempt domains skip the lookup entirely, so the record carries no
    /// dates; they are reported `safe` and never cached.
    pub fn exempt(domain: &str, now: DateTime<Utc>) -> Self {
        Classification {
            domain: domain.to_string(),
            creation_date: None,
            age_days: None,
            is_recent: false,
            status: Status::Safe,
            checked_at: now,
        }
    }
}

/// Converts a registration date (or its absence) into a classification.
///
/// An absent date yields `unknown` with no age. Otherwise the age is the
/// whole number of days between registration and `now` (partial days
/// truncated), and a domain whose age is less than or equal to
/// `threshold_days` is `danger`. Pure given its inputs.
pub fn classify(
    domain: &str,
    creation_date: Option<DateTime<Utc>>,
    threshold_days: i64,
    now: DateTime<Utc>,
) -> Classification {
    let Some(created) = creation_date else {
        return Classification {
            domain: domain.to_string(),
            creation_date: None,
            age_days: None,
            is_recent: false,
            status: Status::Unknown,
            checked_at: now,
        };
    };

    let age_days = now.signed_duration_since(created).num_days();
    let is_recent = age_days <= threshold_days;
    Classification {
        domain: domain.to_string(),
        creation_date: Some(created),
        age_days: Some(age_days),
        is_recent,
        status: if is_recent { Status::Danger } else { Status::Safe },
        checked_at: now,
    }
}
