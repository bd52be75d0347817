use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use maktab_api::middleware::error_handling::AppError;
use maktab_core::{
    errors::MaktabError,
    models::availability::TimeSlot,
    scheduling::{self, SlotParams},
};
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::test_utils::{date, db_booking, db_recurring, time, TestContext};

// Replicates the list_slots handler orchestration against mock
// repositories: fetch the four input collections, convert, run the pure
// resolver. Any fetch failure aborts with DataUnavailable.
async fn list_slots_wrapper(
    ctx: &mut TestContext,
    teacher_id: Uuid,
    day: NaiveDate,
    params: SlotParams,
    now: DateTime<Utc>,
) -> Result<Vec<TimeSlot>, AppError> {
    let blocked: Vec<_> = ctx
        .availability_repo
        .get_blocked_date(teacher_id, day)
        .await
        .map_err(MaktabError::DataUnavailable)?
        .into_iter()
        .map(Into::into)
        .collect();

    let overrides: Vec<_> = ctx
        .availability_repo
        .get_date_overrides(teacher_id, day)
        .await
        .map_err(MaktabError::DataUnavailable)?
        .into_iter()
        .map(Into::into)
        .collect();

    let weekday = scheduling::weekday_index(day) as i16;
    let recurring: Vec<_> = ctx
        .availability_repo
        .get_recurring_availability(teacher_id, weekday)
        .await
        .map_err(MaktabError::DataUnavailable)?
        .into_iter()
        .map(Into::into)
        .collect();

    let bookings: Vec<_> = ctx
        .booking_repo
        .get_bookings_for_day(teacher_id, day)
        .await
        .map_err(MaktabError::DataUnavailable)?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(scheduling::resolve_slots(
        day, &recurring, &overrides, &blocked, &bookings, params, now,
    ))
}

fn zero_lead() -> SlotParams {
    SlotParams {
        slot_length_minutes: 20,
        lead_time_minutes: 0,
    }
}

#[tokio::test]
async fn test_list_slots_success() {
    let mut ctx = TestContext::new();
    let teacher_id = Uuid::new_v4();
    let monday = date(2026, 8, 24);

    ctx.availability_repo
        .expect_get_blocked_date()
        .returning(|_, _| Ok(None));
    ctx.availability_repo
        .expect_get_date_overrides()
        .returning(|_, _| Ok(vec![]));
    ctx.availability_repo
        .expect_get_recurring_availability()
        .returning(move |tid, _| Ok(vec![db_recurring(tid, 1, time(9, 0), time(10, 0))]));
    ctx.booking_repo
        .expect_get_bookings_for_day()
        .returning(|_, _| Ok(vec![]));

    let now = Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap();
    let slots = list_slots_wrapper(&mut ctx, teacher_id, monday, zero_lead(), now)
        .await
        .unwrap();

    let times: Vec<_> = slots.iter().map(|s| s.start_time).collect();
    assert_eq!(times, vec![time(9, 0), time(9, 20), time(9, 40)]);
    assert!(slots.iter().all(|s| s.is_available));
}

#[tokio::test]
async fn test_list_slots_fetch_failure_is_data_unavailable() {
    let mut ctx = TestContext::new();
    let teacher_id = Uuid::new_v4();
    let monday = date(2026, 8, 24);

    // The first fetch fails; the whole operation must fail rather than
    // synthesize an empty day.
    ctx.availability_repo
        .expect_get_blocked_date()
        .returning(|_, _| Err(eyre::eyre!("connection refused")));

    let now = Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap();
    let result = list_slots_wrapper(&mut ctx, teacher_id, monday, zero_lead(), now).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        MaktabError::DataUnavailable(_) => {}
        e => panic!("Expected DataUnavailable error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_list_slots_blocked_date_yields_empty_day() {
    let mut ctx = TestContext::new();
    let teacher_id = Uuid::new_v4();
    let monday = date(2026, 8, 24);

    ctx.availability_repo
        .expect_get_blocked_date()
        .returning(move |tid, d| {
            Ok(Some(maktab_db::models::DbBlockedDate {
                teacher_id: tid,
                date: d,
                created_at: Utc::now(),
            }))
        });
    ctx.availability_repo
        .expect_get_date_overrides()
        .returning(|_, _| Ok(vec![]));
    ctx.availability_repo
        .expect_get_recurring_availability()
        .returning(move |tid, _| Ok(vec![db_recurring(tid, 1, time(9, 0), time(17, 0))]));
    ctx.booking_repo
        .expect_get_bookings_for_day()
        .returning(|_, _| Ok(vec![]));

    let now = Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap();
    let slots = list_slots_wrapper(&mut ctx, teacher_id, monday, zero_lead(), now)
        .await
        .unwrap();

    assert!(slots.is_empty());
}

#[tokio::test]
async fn test_list_slots_sees_booking_spilling_in_from_previous_day() {
    let mut ctx = TestContext::new();
    let teacher_id = Uuid::new_v4();
    let monday = date(2026, 8, 24);
    // The booking repo returns every booking overlapping the viewed day,
    // including one that started Sunday evening and runs past midnight.
    let lesson_start = Utc.with_ymd_and_hms(2026, 8, 23, 23, 30, 0).unwrap();

    ctx.availability_repo
        .expect_get_blocked_date()
        .returning(|_, _| Ok(None));
    ctx.availability_repo
        .expect_get_date_overrides()
        .returning(|_, _| Ok(vec![]));
    ctx.availability_repo
        .expect_get_recurring_availability()
        .returning(move |tid, _| Ok(vec![db_recurring(tid, 1, time(0, 0), time(1, 0))]));
    ctx.booking_repo
        .expect_get_bookings_for_day()
        .returning(move |tid, _| Ok(vec![db_booking(tid, lesson_start, 60, "scheduled")]));

    let now = Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap();
    let slots = list_slots_wrapper(&mut ctx, teacher_id, monday, zero_lead(), now)
        .await
        .unwrap();

    // [23:30, 00:30) occupies the 00:00 and 00:20 slots.
    assert_eq!(slots.len(), 3);
    assert!(!slots[0].is_available);
    assert!(!slots[1].is_available);
    assert!(slots[2].is_available);
}

#[tokio::test]
async fn test_list_slots_booked_slot_is_disabled_not_dropped() {
    let mut ctx = TestContext::new();
    let teacher_id = Uuid::new_v4();
    let monday = date(2026, 8, 24);
    let lesson_start = Utc.with_ymd_and_hms(2026, 8, 24, 9, 20, 0).unwrap();

    ctx.availability_repo
        .expect_get_blocked_date()
        .returning(|_, _| Ok(None));
    ctx.availability_repo
        .expect_get_date_overrides()
        .returning(|_, _| Ok(vec![]));
    ctx.availability_repo
        .expect_get_recurring_availability()
        .returning(move |tid, _| Ok(vec![db_recurring(tid, 1, time(9, 0), time(10, 0))]));
    ctx.booking_repo
        .expect_get_bookings_for_day()
        .returning(move |tid, _| Ok(vec![db_booking(tid, lesson_start, 20, "scheduled")]));

    let now = Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap();
    let slots = list_slots_wrapper(&mut ctx, teacher_id, monday, zero_lead(), now)
        .await
        .unwrap();

    assert_eq!(slots.len(), 3);
    assert!(slots[0].is_available);
    assert!(!slots[1].is_available);
    assert!(slots[2].is_available);
}
