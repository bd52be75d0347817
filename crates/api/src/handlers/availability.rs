//! # Availability Handlers
//!
//! This module contains the handler for the per-day slot listing endpoint.
//! The handler is a thin composition root: it fetches the four input
//! collections (blocked dates, date overrides, recurring rows, existing
//! bookings), converts them to core models and runs the pure
//! [`maktab_core::scheduling::resolve_slots`] computation over them.
//!
//! ## Failure semantics
//!
//! If any of the four fetches fails, the whole operation fails with
//! `DataUnavailable` (HTTP 503). The handler never partially computes with
//! defaults: a transient fetch failure must surface as "could not load
//! availability, retry", never as an empty calendar day.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use std::sync::Arc;
use maktab_core::{
    errors::MaktabError,
    models::availability::{BlockedDate, DateOverride, DayScheduleResponse, RecurringAvailability},
    models::booking::Booking,
    models::preference::MINUTES_PER_DAY,
    scheduling::{self, SlotParams},
};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Query parameters for the slot listing endpoint
#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    /// Calendar date to list slots for, as YYYY-MM-DD
    pub date: String,

    /// Lesson length in minutes (default: 20)
    pub slot_length: Option<u32>,

    /// Minimum advance-booking time in minutes (default: 120)
    pub lead_time: Option<u32>,
}

/// Lists the time slots for one teacher on one calendar day
///
/// # Endpoint
///
/// ```text
/// GET /api/teachers/:id/slots?date=2026-09-07&slot_length=20&lead_time=120
/// ```
///
/// Unavailable slots are included in the response with `is_available = false`
/// so the booking UI can render them as disabled.
#[axum::debug_handler]
pub async fn list_slots(
    State(state): State<Arc<ApiState>>,
    Path(teacher_id): Path<Uuid>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<DayScheduleResponse>, AppError> {
    let date = NaiveDate::parse_from_str(&query.date, "%Y-%m-%d").map_err(|_| {
        AppError(MaktabError::Validation(
            "Invalid date format. Expected YYYY-MM-DD".to_string(),
        ))
    })?;

    let params = SlotParams {
        slot_length_minutes: query
            .slot_length
            .unwrap_or(scheduling::DEFAULT_SLOT_LENGTH_MINUTES),
        lead_time_minutes: query
            .lead_time
            .unwrap_or(scheduling::DEFAULT_LEAD_TIME_MINUTES),
    };
    if params.slot_length_minutes == 0 || params.slot_length_minutes > MINUTES_PER_DAY {
        return Err(AppError(MaktabError::Validation(
            "slot_length must be between 1 and 1440 minutes".to_string(),
        )));
    }

    // The teacher must exist; an unknown ID is 404, not an empty day.
    maktab_db::repositories::teacher::get_teacher_by_id(&state.db_pool, teacher_id)
        .await
        .map_err(MaktabError::DataUnavailable)?
        .ok_or_else(|| {
            MaktabError::NotFound(format!("Teacher with ID {} not found", teacher_id))
        })?;

    // Fetch all four input collections; any failure aborts the operation.
    let blocked: Vec<BlockedDate> =
        maktab_db::repositories::availability::get_blocked_date(&state.db_pool, teacher_id, date)
            .await
            .map_err(MaktabError::DataUnavailable)?
            .into_iter()
            .map(Into::into)
            .collect();

    let overrides: Vec<DateOverride> =
        maktab_db::repositories::availability::get_date_overrides(&state.db_pool, teacher_id, date)
            .await
            .map_err(MaktabError::DataUnavailable)?
            .into_iter()
            .map(Into::into)
            .collect();

    let weekday = scheduling::weekday_index(date) as i16;
    let recurring: Vec<RecurringAvailability> =
        maktab_db::repositories::availability::get_recurring_availability(
            &state.db_pool,
            teacher_id,
            weekday,
        )
        .await
        .map_err(MaktabError::DataUnavailable)?
        .into_iter()
        .map(Into::into)
        .collect();

    let bookings: Vec<Booking> =
        maktab_db::repositories::booking::get_bookings_for_day(&state.db_pool, teacher_id, date)
            .await
            .map_err(MaktabError::DataUnavailable)?
            .into_iter()
            .map(Into::into)
            .collect();

    let slots = scheduling::resolve_slots(
        date,
        &recurring,
        &overrides,
        &blocked,
        &bookings,
        params,
        Utc::now(),
    );

    Ok(Json(DayScheduleResponse {
        teacher_id,
        date,
        slot_length_minutes: params.slot_length_minutes,
        slots,
    }))
}
