use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recurring weekly availability window for a teacher.
///
/// `day_of_week` is 0-6 with Sunday = 0. A teacher may have several disjoint
/// windows on the same weekday. Rows with `start_time >= end_time` are
/// malformed and are skipped by the resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringAvailability {
    pub teacher_id: Uuid,
    pub day_of_week: u8,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_available: bool,
}

/// A one-off availability window for a specific calendar date.
///
/// When any override with `is_available = true` exists for a (teacher, date)
/// pair it replaces the recurring availability for that date entirely. A date
/// whose only overrides are `is_available = false` has zero availability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateOverride {
    pub teacher_id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_available: bool,
}

/// A full-day blackout. Presence of a row makes the whole date unavailable,
/// overriding recurring rows and overrides alike.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockedDate {
    pub teacher_id: Uuid,
    pub date: NaiveDate,
}

/// Response body for the per-day slot listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayScheduleResponse {
    pub teacher_id: Uuid,
    pub date: NaiveDate,
    pub slot_length_minutes: u32,
    pub slots: Vec<TimeSlot>,
}

/// A bookable (or already-taken) slot on a teacher's day.
///
/// Computed on demand for a (teacher, date) pair and never persisted.
/// Unavailable slots are kept in the output so the UI can render them as
/// disabled instead of omitting them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start_time: NaiveTime,
    pub is_available: bool,
}
