use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use maktab_core::models::availability::{BlockedDate, DateOverride, RecurringAvailability};
use maktab_core::models::booking::{Booking, BookingStatus};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTeacher {
    pub id: Uuid,
    pub display_name: String,
    pub gender: Option<String>,
    pub rating: f64,
    pub subjects: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbRecurringAvailability {
    pub id: Uuid,
    pub teacher_id: Uuid,
    pub day_of_week: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbDateOverride {
    pub id: Uuid,
    pub teacher_id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBlockedDate {
    pub teacher_id: Uuid,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub teacher_id: Uuid,
    pub student_id: Uuid,
    pub scheduled_start: DateTime<Utc>,
    pub duration_minutes: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbRecurringAvailability> for RecurringAvailability {
    fn from(row: DbRecurringAvailability) -> Self {
        Self {
            teacher_id: row.teacher_id,
            day_of_week: row.day_of_week.rem_euclid(7) as u8,
            start_time: row.start_time,
            end_time: row.end_time,
            is_available: row.is_available,
        }
    }
}

impl From<DbDateOverride> for DateOverride {
    fn from(row: DbDateOverride) -> Self {
        Self {
            teacher_id: row.teacher_id,
            date: row.date,
            start_time: row.start_time,
            end_time: row.end_time,
            is_available: row.is_available,
        }
    }
}

impl From<DbBlockedDate> for BlockedDate {
    fn from(row: DbBlockedDate) -> Self {
        Self {
            teacher_id: row.teacher_id,
            date: row.date,
        }
    }
}

impl From<DbBooking> for Booking {
    fn from(row: DbBooking) -> Self {
        // Unrecognized states keep occupying the calendar rather than
        // silently freeing the slot.
        let status = BookingStatus::parse(&row.status).unwrap_or(BookingStatus::Scheduled);
        Self {
            id: row.id,
            teacher_id: row.teacher_id,
            student_id: row.student_id,
            scheduled_start: row.scheduled_start,
            duration_minutes: row.duration_minutes,
            status,
        }
    }
}
