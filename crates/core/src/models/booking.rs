use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "scheduled" => Some(Self::Scheduled),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// An existing lesson on a teacher's calendar.
///
/// Occupies `[scheduled_start, scheduled_start + duration_minutes)` unless
/// the booking is cancelled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub teacher_id: Uuid,
    pub student_id: Uuid,
    pub scheduled_start: DateTime<Utc>,
    pub duration_minutes: i32,
    pub status: BookingStatus,
}

impl Booking {
    pub fn scheduled_end(&self) -> DateTime<Utc> {
        self.scheduled_start + Duration::minutes(self.duration_minutes as i64)
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == BookingStatus::Cancelled
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub teacher_id: Uuid,
    pub student_id: Uuid,
    pub scheduled_start: DateTime<Utc>,
    pub duration_minutes: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    pub id: Uuid,
    pub teacher_id: Uuid,
    pub student_id: Uuid,
    pub scheduled_start: DateTime<Utc>,
    pub duration_minutes: i32,
    pub status: BookingStatus,
}
