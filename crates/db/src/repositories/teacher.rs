use crate::models::DbTeacher;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_teacher(
    pool: &Pool<Postgres>,
    display_name: &str,
    gender: Option<&str>,
    subjects: &[String],
) -> Result<DbTeacher> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let teacher = sqlx::query_as::<_, DbTeacher>(
        r#"
        INSERT INTO teachers (id, display_name, gender, rating, subjects, is_active, created_at)
        VALUES ($1, $2, $3, 0.0, $4, TRUE, $5)
        RETURNING id, display_name, gender, rating, subjects, is_active, created_at
        "#,
    )
    .bind(id)
    .bind(display_name)
    .bind(gender)
    .bind(subjects)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(teacher)
}

pub async fn get_teacher_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbTeacher>> {
    let teacher = sqlx::query_as::<_, DbTeacher>(
        r#"
        SELECT id, display_name, gender, rating, subjects, is_active, created_at
        FROM teachers
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(teacher)
}

/// Active teachers, optionally narrowed to those teaching a subject.
pub async fn get_teacher_candidates(
    pool: &Pool<Postgres>,
    subject: Option<&str>,
) -> Result<Vec<DbTeacher>> {
    let teachers = sqlx::query_as::<_, DbTeacher>(
        r#"
        SELECT id, display_name, gender, rating, subjects, is_active, created_at
        FROM teachers
        WHERE is_active = TRUE
          AND ($1::text IS NULL OR $1 = ANY(subjects))
        ORDER BY rating DESC
        "#,
    )
    .bind(subject)
    .fetch_all(pool)
    .await?;

    Ok(teachers)
}
