use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create teachers table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS teachers (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            display_name VARCHAR(255) NOT NULL,
            gender VARCHAR(16) NULL,
            rating DOUBLE PRECISION NOT NULL DEFAULT 0.0,
            subjects TEXT[] NOT NULL DEFAULT '{}',
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create recurring_availability table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS recurring_availability (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            teacher_id UUID NOT NULL REFERENCES teachers(id),
            day_of_week SMALLINT NOT NULL CHECK (day_of_week BETWEEN 0 AND 6),
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            is_available BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_recurring_window CHECK (end_time > start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create availability_overrides table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS availability_overrides (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            teacher_id UUID NOT NULL REFERENCES teachers(id),
            date DATE NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            is_available BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_override_window CHECK (end_time > start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create blocked_dates table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS blocked_dates (
            teacher_id UUID NOT NULL REFERENCES teachers(id),
            date DATE NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            PRIMARY KEY (teacher_id, date)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create bookings table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            teacher_id UUID NOT NULL REFERENCES teachers(id),
            student_id UUID NOT NULL,
            scheduled_start TIMESTAMP WITH TIME ZONE NOT NULL,
            duration_minutes INTEGER NOT NULL CHECK (duration_minutes > 0),
            status VARCHAR(32) NOT NULL DEFAULT 'scheduled',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_recurring_availability_teacher_day
            ON recurring_availability(teacher_id, day_of_week);
        CREATE INDEX IF NOT EXISTS idx_availability_overrides_teacher_date
            ON availability_overrides(teacher_id, date);
        CREATE INDEX IF NOT EXISTS idx_bookings_teacher_start
            ON bookings(teacher_id, scheduled_start);
        CREATE INDEX IF NOT EXISTS idx_bookings_status ON bookings(status);
        CREATE INDEX IF NOT EXISTS idx_teachers_is_active ON teachers(is_active);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
