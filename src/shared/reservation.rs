/**
 * Reservation Data Structures
 *
 * This module defines the reservation record returned by the API and the
 * request payloads accepted by the reservation endpoints, together with the
 * parsing rules for calendar dates and hourly slot times.
 *
 * Times are exchanged as `HH:MM`. A slot always starts on the hour.
 */
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// A booked slot
///
/// # Example
/// ```json
/// {
///   "id": "8f0e1f38-52f8-4a0e-9a37-0b0c7d3f5a10",
///   "date": "2025-06-02",
///   "start_time": "09:00",
///   "end_time": "10:00",
///   "user_id": "123e4567-e89b-12d3-a456-426614174000",
///   "user_name": "Jean Dupont",
///   "object": "Sync"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    /// Calendar date of the slot
    pub date: NaiveDate,
    /// Slot start, on the hour
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    /// Slot end (start + one slot)
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    /// Owning user
    pub user_id: Uuid,
    /// Owner display name at booking time
    pub user_name: String,
    /// Free-text purpose of the booking
    pub object: String,
}

impl Reservation {
    /// Date and start time combined
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }
}

/// Body of `POST /api/reservations`
///
/// Fields are optional so that a missing field is reported by the booking
/// rules rather than by the JSON extractor.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CreateReservationRequest {
    /// `YYYY-MM-DD`
    pub date: Option<String>,
    /// `HH:MM` (also `HH`, `HH:MM:SS`, `HHh`)
    pub hour: Option<String>,
    pub object: Option<String>,
}

/// Body of `PUT /api/reservations/{id}`
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct UpdateReservationRequest {
    pub object: Option<String>,
}

/// Query of `GET /api/planning/week`
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct WeekQuery {
    pub date: Option<String>,
}

/// Plain acknowledgement body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(raw: &str) -> Result<NaiveDate, SharedError> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        SharedError::validation("date", format!("'{}' is not a valid date (expected YYYY-MM-DD)", trimmed))
    })
}

/// Parse a slot start time
///
/// Accepts `HH`, `HH:MM`, `HH:MM:SS` and `HHh`. Minutes and seconds must be
/// zero since slots are hourly.
pub fn parse_slot_time(raw: &str) -> Result<NaiveTime, SharedError> {
    let trimmed = raw.trim();
    let invalid = || {
        SharedError::validation("hour", format!("'{}' is not a valid hour (expected HH:MM)", trimmed))
    };

    let body = trimmed
        .strip_suffix(|c: char| c == 'h' || c == 'H')
        .unwrap_or(trimmed);
    let mut parts = body.split(':');

    let hour: u32 = parts
        .next()
        .filter(|p| !p.is_empty() && p.len() <= 2)
        .and_then(|p| p.parse().ok())
        .ok_or_else(invalid)?;

    let mut trailing = Vec::with_capacity(2);
    for part in parts {
        if part.len() != 2 {
            return Err(invalid());
        }
        let value: u32 = part.parse().map_err(|_| invalid())?;
        trailing.push(value);
    }
    if trailing.len() > 2 {
        return Err(invalid());
    }
    if trailing.iter().any(|v| *v != 0) {
        return Err(SharedError::validation("hour", "reservations start on the hour"));
    }

    NaiveTime::from_hms_opt(hour, 0, 0).ok_or_else(invalid)
}

/// Serde adapter emitting times as `HH:MM`
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&time.format("%H:%M"))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}
