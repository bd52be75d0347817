use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::models::{
    DbBlockedDate, DbBooking, DbDateOverride, DbRecurringAvailability, DbTeacher,
};

// Mock repositories for testing

mock! {
    pub TeacherRepo {
        pub async fn create_teacher(
            &self,
            display_name: &'static str,
            gender: Option<&'static str>,
            subjects: Vec<String>,
        ) -> eyre::Result<DbTeacher>;

        pub async fn get_teacher_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbTeacher>>;

        pub async fn get_teacher_candidates(
            &self,
            subject: Option<&'static str>,
        ) -> eyre::Result<Vec<DbTeacher>>;
    }
}

mock! {
    pub AvailabilityRepo {
        pub async fn get_recurring_availability(
            &self,
            teacher_id: Uuid,
            day_of_week: i16,
        ) -> eyre::Result<Vec<DbRecurringAvailability>>;

        pub async fn get_all_recurring_availability(
            &self,
            teacher_id: Uuid,
        ) -> eyre::Result<Vec<DbRecurringAvailability>>;

        pub async fn get_date_overrides(
            &self,
            teacher_id: Uuid,
            date: NaiveDate,
        ) -> eyre::Result<Vec<DbDateOverride>>;

        pub async fn get_blocked_date(
            &self,
            teacher_id: Uuid,
            date: NaiveDate,
        ) -> eyre::Result<Option<DbBlockedDate>>;

        pub async fn create_recurring_availability(
            &self,
            teacher_id: Uuid,
            day_of_week: i16,
            start_time: NaiveTime,
            end_time: NaiveTime,
            is_available: bool,
        ) -> eyre::Result<DbRecurringAvailability>;
    }
}

mock! {
    pub BookingRepo {
        pub async fn create_booking(
            &self,
            teacher_id: Uuid,
            student_id: Uuid,
            scheduled_start: DateTime<Utc>,
            duration_minutes: i32,
        ) -> eyre::Result<DbBooking>;

        pub async fn get_bookings_for_day(
            &self,
            teacher_id: Uuid,
            date: NaiveDate,
        ) -> eyre::Result<Vec<DbBooking>>;

        pub async fn cancel_booking(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbBooking>>;
    }
}
