//! # Teacher Matcher
//!
//! Scores candidate teachers against a student's coarse schedule preferences
//! and returns them in ranked order. Each preference can contribute at most
//! one point regardless of how many availability windows overlap it, so the
//! score is simply the fraction of preferences the teacher can serve,
//! expressed as 0-100.
//!
//! Candidate filtering (the age/gender rule) is a hard include/exclude step
//! that runs once before scoring; it is never a scoring factor.

use std::cmp::Ordering;

use crate::models::preference::{weekday_abbrev, weekday_name, SchedulePreference};
use crate::models::teacher::{RankedTeacher, StudentProfile, TeacherCandidate};
use crate::scheduling::checked_window;

/// Students at or above this age are only matched with teachers of their own
/// recorded gender.
pub const GENDER_MATCH_MIN_AGE: u8 = 12;

/// Applies the gender rule to the candidate pool.
///
/// Filtering only happens when the student is at least
/// [`GENDER_MATCH_MIN_AGE`] years old and has a recorded gender; younger
/// students and students without a recorded gender see the full pool.
pub fn filter_candidates(
    candidates: Vec<TeacherCandidate>,
    student: &StudentProfile,
) -> Vec<TeacherCandidate> {
    let Some(gender) = student.gender else {
        return candidates;
    };
    if student.age < GENDER_MATCH_MIN_AGE {
        return candidates;
    }
    candidates
        .into_iter()
        .filter(|c| c.gender == Some(gender))
        .collect()
}

/// Scores and orders candidates by preference overlap.
///
/// An empty preference list is a defined degenerate case: every candidate
/// scores 0 and the pool order falls back to rating. An empty candidate pool
/// yields an empty ranking, never an error.
pub fn rank_teachers(
    candidates: Vec<TeacherCandidate>,
    preferences: &[SchedulePreference],
) -> Vec<RankedTeacher> {
    // Guard the degenerate empty-preferences case: score 0, not a division
    // error.
    let denominator = preferences.len().max(1);

    let mut ranked: Vec<RankedTeacher> = candidates
        .into_iter()
        .map(|teacher| {
            // Validate each row once up front; malformed windows are logged
            // and dropped here rather than re-checked per preference.
            let usable_rows: Vec<(u8, u32, u32)> = teacher
                .availability
                .iter()
                .filter(|row| row.is_available)
                .filter_map(|row| {
                    checked_window(row.start_time, row.end_time, "recurring_availability")
                        .map(|(s, e)| (row.day_of_week, s, e))
                })
                .collect();

            let mut match_count = 0usize;
            let mut matching_slots: Vec<String> = Vec::new();

            for preference in preferences {
                let (range_start, range_end) = preference.minute_range();

                // First overlapping row wins; at most one increment per
                // preference no matter how many rows match.
                let matched_row = usable_rows.iter().find(|(day, s, e)| {
                    preference.weekdays().contains(day) && *s < range_end && *e > range_start
                });

                if let Some(&(day, _, _)) = matched_row {
                    match_count += 1;
                    let label = match preference.period_label() {
                        Some(period) => format!("{} {}", weekday_abbrev(day), period),
                        None => weekday_name(day).to_string(),
                    };
                    if !matching_slots.contains(&label) {
                        matching_slots.push(label);
                    }
                }
            }

            let match_score =
                ((match_count as f64 / denominator as f64) * 100.0).round() as u8;

            RankedTeacher {
                teacher,
                match_score,
                matching_slots,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.match_score
            .cmp(&a.match_score)
            .then_with(|| {
                b.teacher
                    .rating
                    .partial_cmp(&a.teacher.rating)
                    .unwrap_or(Ordering::Equal)
            })
    });

    ranked
}
