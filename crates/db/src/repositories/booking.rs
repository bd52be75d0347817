use crate::models::DbBooking;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_booking(
    pool: &Pool<Postgres>,
    teacher_id: Uuid,
    student_id: Uuid,
    scheduled_start: DateTime<Utc>,
    duration_minutes: i32,
) -> Result<DbBooking> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating booking: id={}, teacher_id={}, start={}, duration={}m",
        id,
        teacher_id,
        scheduled_start,
        duration_minutes
    );

    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings
            (id, teacher_id, student_id, scheduled_start, duration_minutes, status, created_at)
        VALUES ($1, $2, $3, $4, $5, 'scheduled', $6)
        RETURNING id, teacher_id, student_id, scheduled_start, duration_minutes, status, created_at
        "#,
    )
    .bind(id)
    .bind(teacher_id)
    .bind(student_id)
    .bind(scheduled_start)
    .bind(duration_minutes)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(booking)
}

/// Non-cancelled bookings overlapping the given calendar day (UTC).
///
/// Matches on occupied interval rather than start time, so a lesson that
/// starts the previous evening and runs past midnight is still returned for
/// the day it spills into.
pub async fn get_bookings_for_day(
    pool: &Pool<Postgres>,
    teacher_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<DbBooking>> {
    let day_start = date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    let Some(day_start) = day_start else {
        return Ok(Vec::new());
    };
    let day_end = day_start + Duration::days(1);

    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, teacher_id, student_id, scheduled_start, duration_minutes, status, created_at
        FROM bookings
        WHERE teacher_id = $1
          AND scheduled_start < $3
          AND scheduled_start + duration_minutes * INTERVAL '1 minute' > $2
          AND status != 'cancelled'
        ORDER BY scheduled_start ASC
        "#,
    )
    .bind(teacher_id)
    .bind(day_start)
    .bind(day_end)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

pub async fn cancel_booking(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbBooking>> {
    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        UPDATE bookings
        SET status = 'cancelled'
        WHERE id = $1
        RETURNING id, teacher_id, student_id, scheduled_start, duration_minutes, status, created_at
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}
