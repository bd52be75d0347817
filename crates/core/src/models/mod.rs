pub mod availability;
pub mod booking;
pub mod preference;
pub mod teacher;
