//! # Booking Handlers
//!
//! The booking hand-off boundary. Once a student confirms a slot, the chosen
//! (teacher, start, duration) tuple is handed to the booking repository; the
//! caller only sees pass/fail. Payment and conferencing-room provisioning
//! are downstream concerns outside this service.

use axum::{extract::State, Json};
use std::sync::Arc;
use maktab_core::{
    errors::MaktabError,
    models::booking::{BookingStatus, CreateBookingRequest, CreateBookingResponse},
};

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<Json<CreateBookingResponse>, AppError> {
    if payload.duration_minutes <= 0 {
        return Err(AppError(MaktabError::Validation(
            "duration_minutes must be greater than zero".to_string(),
        )));
    }

    // The teacher must exist before we persist a booking against them.
    maktab_db::repositories::teacher::get_teacher_by_id(&state.db_pool, payload.teacher_id)
        .await
        .map_err(MaktabError::DataUnavailable)?
        .ok_or_else(|| {
            MaktabError::NotFound(format!(
                "Teacher with ID {} not found",
                payload.teacher_id
            ))
        })?;

    let booking = maktab_db::repositories::booking::create_booking(
        &state.db_pool,
        payload.teacher_id,
        payload.student_id,
        payload.scheduled_start,
        payload.duration_minutes,
    )
    .await
    .map_err(MaktabError::DataUnavailable)?;

    let status = BookingStatus::parse(&booking.status).unwrap_or(BookingStatus::Scheduled);

    Ok(Json(CreateBookingResponse {
        id: booking.id,
        teacher_id: booking.teacher_id,
        student_id: booking.student_id,
        scheduled_start: booking.scheduled_start,
        duration_minutes: booking.duration_minutes,
        status,
    }))
}
