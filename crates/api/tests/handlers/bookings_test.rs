use chrono::{TimeZone, Utc};
use maktab_api::middleware::error_handling::AppError;
use maktab_core::{
    errors::MaktabError,
    models::booking::{BookingStatus, CreateBookingRequest},
};
use maktab_db::models::DbBooking;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::test_utils::{db_teacher, TestContext};

// Replicates the create_booking handler orchestration: validate, check the
// teacher exists, hand off to the booking repository.
async fn create_booking_wrapper(
    ctx: &mut TestContext,
    payload: CreateBookingRequest,
) -> Result<DbBooking, AppError> {
    if payload.duration_minutes <= 0 {
        return Err(AppError(MaktabError::Validation(
            "duration_minutes must be greater than zero".to_string(),
        )));
    }

    ctx.teacher_repo
        .get_teacher_by_id(payload.teacher_id)
        .await
        .map_err(MaktabError::DataUnavailable)?
        .ok_or_else(|| {
            AppError(MaktabError::NotFound(format!(
                "Teacher with ID {} not found",
                payload.teacher_id
            )))
        })?;

    let booking = ctx
        .booking_repo
        .create_booking(
            payload.teacher_id,
            payload.student_id,
            payload.scheduled_start,
            payload.duration_minutes,
        )
        .await
        .map_err(MaktabError::DataUnavailable)?;

    Ok(booking)
}

fn request(teacher_id: Uuid, duration_minutes: i32) -> CreateBookingRequest {
    CreateBookingRequest {
        teacher_id,
        student_id: Uuid::new_v4(),
        scheduled_start: Utc.with_ymd_and_hms(2026, 9, 7, 9, 0, 0).unwrap(),
        duration_minutes,
    }
}

#[tokio::test]
async fn test_create_booking_success() {
    let mut ctx = TestContext::new();
    let teacher = db_teacher("Ahmed", Some("male"), 4.5);
    let teacher_id = teacher.id;

    ctx.teacher_repo
        .expect_get_teacher_by_id()
        .returning(move |_| Ok(Some(teacher.clone())));
    ctx.booking_repo.expect_create_booking().returning(
        |teacher_id, student_id, scheduled_start, duration_minutes| {
            Ok(DbBooking {
                id: Uuid::new_v4(),
                teacher_id,
                student_id,
                scheduled_start,
                duration_minutes,
                status: "scheduled".to_string(),
                created_at: Utc::now(),
            })
        },
    );

    let booking = create_booking_wrapper(&mut ctx, request(teacher_id, 20))
        .await
        .unwrap();

    assert_eq!(booking.teacher_id, teacher_id);
    assert_eq!(booking.duration_minutes, 20);
    assert_eq!(
        BookingStatus::parse(&booking.status),
        Some(BookingStatus::Scheduled)
    );
}

#[tokio::test]
async fn test_create_booking_unknown_teacher_is_not_found() {
    let mut ctx = TestContext::new();

    ctx.teacher_repo
        .expect_get_teacher_by_id()
        .returning(|_| Ok(None));

    let result = create_booking_wrapper(&mut ctx, request(Uuid::new_v4(), 20)).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        MaktabError::NotFound(_) => {}
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_create_booking_rejects_non_positive_duration() {
    let mut ctx = TestContext::new();

    let result = create_booking_wrapper(&mut ctx, request(Uuid::new_v4(), 0)).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        MaktabError::Validation(_) => {}
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}
