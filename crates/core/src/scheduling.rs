//! # Availability Resolver
//!
//! Turns a teacher's availability data for one calendar day into the ordered
//! list of bookable time slots the booking UI renders.
//!
//! ## Resolution order
//!
//! 1. A blocked date wins over everything: the day has no slots.
//! 2. Date overrides are all-or-nothing: any `is_available = true` override
//!    replaces the recurring rows for that date entirely, while a date whose
//!    only overrides are `is_available = false` is an explicit day off.
//! 3. Otherwise the recurring rows for the date's weekday apply.
//! 4. Candidate slots are generated per window at a fixed stride and then
//!    checked against existing bookings, the current instant and the
//!    minimum advance-booking lead time.
//!
//! Slots that fail the checks are returned with `is_available = false`
//! rather than dropped, so callers can render them as disabled.
//!
//! All time arithmetic is done in whole minutes from midnight, which keeps
//! the end-of-day boundary (24:00) representable during slot generation.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Timelike, Utc};
use tracing::warn;

use crate::models::availability::{BlockedDate, DateOverride, RecurringAvailability, TimeSlot};
use crate::models::booking::Booking;

pub const DEFAULT_SLOT_LENGTH_MINUTES: u32 = 20;
pub const DEFAULT_LEAD_TIME_MINUTES: u32 = 120;

/// Tunable knobs for slot generation.
#[derive(Debug, Clone, Copy)]
pub struct SlotParams {
    /// Length of each lesson slot in minutes.
    pub slot_length_minutes: u32,
    /// Minimum advance-booking time: slots starting before
    /// `now + lead_time_minutes` are marked unavailable.
    pub lead_time_minutes: u32,
}

impl Default for SlotParams {
    fn default() -> Self {
        Self {
            slot_length_minutes: DEFAULT_SLOT_LENGTH_MINUTES,
            lead_time_minutes: DEFAULT_LEAD_TIME_MINUTES,
        }
    }
}

/// Weekday index of a date with Sunday = 0, matching
/// [`RecurringAvailability::day_of_week`].
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

pub(crate) fn minutes_from_midnight(t: NaiveTime) -> u32 {
    t.num_seconds_from_midnight() / 60
}

/// Validates a window against the `start < end` invariant, returning it in
/// minutes from midnight. Malformed rows are a data-quality signal: they are
/// logged and skipped instead of producing negative-length slots.
pub(crate) fn checked_window(
    start: NaiveTime,
    end: NaiveTime,
    context: &'static str,
) -> Option<(u32, u32)> {
    let (s, e) = (minutes_from_midnight(start), minutes_from_midnight(end));
    if s >= e {
        warn!(%start, %end, context, "skipping availability row with non-positive window");
        return None;
    }
    Some((s, e))
}

/// Computes the ordered slot list for one teacher and one calendar day.
///
/// All input collections must already be scoped to the teacher being viewed;
/// `overrides` and `blocked` may span other dates and are filtered here.
/// `now` is passed in explicitly so the computation is deterministic:
/// identical inputs always produce identical output.
pub fn resolve_slots(
    date: NaiveDate,
    recurring: &[RecurringAvailability],
    overrides: &[DateOverride],
    blocked: &[BlockedDate],
    bookings: &[Booking],
    params: SlotParams,
    now: DateTime<Utc>,
) -> Vec<TimeSlot> {
    // A blocked date is terminal, no further checks.
    if blocked.iter().any(|b| b.date == date) {
        return Vec::new();
    }

    let day_overrides: Vec<&DateOverride> =
        overrides.iter().filter(|o| o.date == date).collect();
    let has_available_override = day_overrides.iter().any(|o| o.is_available);
    let has_unavailable_override = day_overrides.iter().any(|o| !o.is_available);

    // Explicit day off: only "unavailable" overrides exist for this date.
    if has_unavailable_override && !has_available_override {
        return Vec::new();
    }

    let windows: Vec<(u32, u32)> = if has_available_override {
        // An available override is authoritative; recurring rows are ignored.
        day_overrides
            .iter()
            .filter(|o| o.is_available)
            .filter_map(|o| checked_window(o.start_time, o.end_time, "date_override"))
            .collect()
    } else {
        let weekday = weekday_index(date);
        recurring
            .iter()
            .filter(|r| r.day_of_week == weekday && r.is_available)
            .filter_map(|r| checked_window(r.start_time, r.end_time, "recurring_availability"))
            .collect()
    };

    if windows.is_empty() || params.slot_length_minutes == 0 {
        return Vec::new();
    }

    let slot_len = params.slot_length_minutes;

    // Candidate start times, deduplicated across overlapping windows. A slot
    // is only emitted when the full slot length fits before the window end.
    let mut starts: Vec<u32> = Vec::new();
    for (window_start, window_end) in windows {
        let mut start = window_start;
        // Oversized slot lengths must not overflow the stride arithmetic.
        while start
            .checked_add(slot_len)
            .is_some_and(|slot_end| slot_end <= window_end)
        {
            starts.push(start);
            start += slot_len;
        }
    }
    starts.sort_unstable();
    starts.dedup();

    let earliest_bookable = now + Duration::minutes(params.lead_time_minutes as i64);

    starts
        .into_iter()
        .filter_map(|start_minute| {
            let start_time = NaiveTime::from_num_seconds_from_midnight_opt(start_minute * 60, 0)?;
            let slot_start = date.and_time(start_time).and_utc();
            let slot_end = slot_start + Duration::minutes(slot_len as i64);

            // Half-open overlap against every non-cancelled booking.
            let booked = bookings.iter().any(|b| {
                !b.is_cancelled()
                    && slot_start < b.scheduled_end()
                    && slot_end > b.scheduled_start
            });
            let is_available = !booked && slot_start >= now && slot_start >= earliest_bookable;

            Some(TimeSlot {
                start_time,
                is_available,
            })
        })
        .collect()
}
