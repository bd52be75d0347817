use crate::models::{DbBlockedDate, DbDateOverride, DbRecurringAvailability};
use chrono::{NaiveDate, NaiveTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_recurring_availability(
    pool: &Pool<Postgres>,
    teacher_id: Uuid,
    day_of_week: i16,
    start_time: NaiveTime,
    end_time: NaiveTime,
    is_available: bool,
) -> Result<DbRecurringAvailability> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let row = sqlx::query_as::<_, DbRecurringAvailability>(
        r#"
        INSERT INTO recurring_availability
            (id, teacher_id, day_of_week, start_time, end_time, is_available, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, teacher_id, day_of_week, start_time, end_time, is_available, created_at
        "#,
    )
    .bind(id)
    .bind(teacher_id)
    .bind(day_of_week)
    .bind(start_time)
    .bind(end_time)
    .bind(is_available)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn get_recurring_availability(
    pool: &Pool<Postgres>,
    teacher_id: Uuid,
    day_of_week: i16,
) -> Result<Vec<DbRecurringAvailability>> {
    let rows = sqlx::query_as::<_, DbRecurringAvailability>(
        r#"
        SELECT id, teacher_id, day_of_week, start_time, end_time, is_available, created_at
        FROM recurring_availability
        WHERE teacher_id = $1 AND day_of_week = $2
        ORDER BY start_time ASC
        "#,
    )
    .bind(teacher_id)
    .bind(day_of_week)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn get_all_recurring_availability(
    pool: &Pool<Postgres>,
    teacher_id: Uuid,
) -> Result<Vec<DbRecurringAvailability>> {
    let rows = sqlx::query_as::<_, DbRecurringAvailability>(
        r#"
        SELECT id, teacher_id, day_of_week, start_time, end_time, is_available, created_at
        FROM recurring_availability
        WHERE teacher_id = $1
        ORDER BY day_of_week ASC, start_time ASC
        "#,
    )
    .bind(teacher_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn create_date_override(
    pool: &Pool<Postgres>,
    teacher_id: Uuid,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    is_available: bool,
) -> Result<DbDateOverride> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let row = sqlx::query_as::<_, DbDateOverride>(
        r#"
        INSERT INTO availability_overrides
            (id, teacher_id, date, start_time, end_time, is_available, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, teacher_id, date, start_time, end_time, is_available, created_at
        "#,
    )
    .bind(id)
    .bind(teacher_id)
    .bind(date)
    .bind(start_time)
    .bind(end_time)
    .bind(is_available)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn get_date_overrides(
    pool: &Pool<Postgres>,
    teacher_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<DbDateOverride>> {
    let rows = sqlx::query_as::<_, DbDateOverride>(
        r#"
        SELECT id, teacher_id, date, start_time, end_time, is_available, created_at
        FROM availability_overrides
        WHERE teacher_id = $1 AND date = $2
        ORDER BY start_time ASC
        "#,
    )
    .bind(teacher_id)
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn create_blocked_date(
    pool: &Pool<Postgres>,
    teacher_id: Uuid,
    date: NaiveDate,
) -> Result<DbBlockedDate> {
    let now = Utc::now();

    let row = sqlx::query_as::<_, DbBlockedDate>(
        r#"
        INSERT INTO blocked_dates (teacher_id, date, created_at)
        VALUES ($1, $2, $3)
        ON CONFLICT (teacher_id, date)
        DO UPDATE SET date = EXCLUDED.date
        RETURNING teacher_id, date, created_at
        "#,
    )
    .bind(teacher_id)
    .bind(date)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn get_blocked_date(
    pool: &Pool<Postgres>,
    teacher_id: Uuid,
    date: NaiveDate,
) -> Result<Option<DbBlockedDate>> {
    let row = sqlx::query_as::<_, DbBlockedDate>(
        r#"
        SELECT teacher_id, date, created_at
        FROM blocked_dates
        WHERE teacher_id = $1 AND date = $2
        "#,
    )
    .bind(teacher_id)
    .bind(date)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}
