//! # Maktab Core
//!
//! Domain models and scheduling logic for the Maktab tutoring marketplace.
//! This crate contains the two pure computations the booking flow is built
//! around:
//!
//! - [`scheduling::resolve_slots`] merges a teacher's recurring weekly
//!   availability, date-specific overrides, blocked dates, existing bookings
//!   and a minimum lead-time rule into the list of bookable slots for one
//!   calendar day.
//! - [`matching::rank_teachers`] scores candidate teachers against a
//!   student's coarse schedule preferences and orders them by fit.
//!
//! Both functions operate on already-fetched in-memory collections and
//! perform no I/O; the current instant is always passed in explicitly so
//! slot computation is deterministic and testable.

pub mod errors;
pub mod matching;
pub mod models;
pub mod scheduling;
