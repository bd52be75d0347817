//! # Teacher Matching Handlers
//!
//! Handler for ranking candidate teachers against a student's coarse
//! schedule preferences. The ranking itself is the pure
//! [`maktab_core::matching::rank_teachers`] computation; this handler
//! assembles its inputs.
//!
//! ## Failure semantics
//!
//! A failure to fetch the candidate pool aborts the operation. A failure to
//! fetch one candidate's availability rows does NOT: that candidate is
//! ranked with zero rows (score 0). Partial data degrades ranking quality
//! but never aborts the whole ranking.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use maktab_core::{
    errors::MaktabError,
    matching,
    models::preference::SchedulePreference,
    models::teacher::{
        Gender, MatchTeachersResponse, StudentProfile, TeacherCandidate,
    },
};
use tracing::warn;

use crate::{middleware::error_handling::AppError, ApiState};

/// Query parameters for the teacher matching endpoint
#[derive(Debug, Deserialize)]
pub struct MatchQuery {
    /// Comma-separated schedule preference tokens
    /// (e.g. "weekday_evenings,saturday")
    pub preferences: Option<String>,

    /// Student age in years; gender filtering applies from age 12 up
    pub age: Option<u8>,

    /// Student gender ("male" / "female")
    pub gender: Option<String>,

    /// Restrict the pool to teachers of this subject
    pub subject: Option<String>,
}

/// Ranks candidate teachers by overlap with the student's preferences
///
/// # Endpoint
///
/// ```text
/// GET /api/teachers/match?preferences=weekday_evenings,saturday&age=13&gender=female
/// ```
#[axum::debug_handler]
pub async fn match_teachers(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<MatchQuery>,
) -> Result<Json<MatchTeachersResponse>, AppError> {
    // Parse preference tokens; an unknown token is a client error.
    let preferences = parse_preferences(query.preferences.as_deref())
        .map_err(|token| {
            AppError(MaktabError::Validation(format!(
                "Unknown schedule preference: {}",
                token
            )))
        })?;

    let gender = match query.gender.as_deref() {
        Some(raw) => Some(Gender::parse(raw).ok_or_else(|| {
            AppError(MaktabError::Validation(format!("Unknown gender: {}", raw)))
        })?),
        None => None,
    };

    // Candidate pool fetch failure is fatal to the operation.
    let db_teachers = maktab_db::repositories::teacher::get_teacher_candidates(
        &state.db_pool,
        query.subject.as_deref(),
    )
    .await
    .map_err(MaktabError::DataUnavailable)?;

    // Per-teacher availability fetch failure only degrades that teacher's
    // score; the ranking itself proceeds.
    let mut candidates = Vec::with_capacity(db_teachers.len());
    for teacher in db_teachers {
        let availability =
            match maktab_db::repositories::availability::get_all_recurring_availability(
                &state.db_pool,
                teacher.id,
            )
            .await
            {
                Ok(rows) => rows.into_iter().map(Into::into).collect(),
                Err(err) => {
                    warn!(teacher_id = %teacher.id, error = %err,
                        "failed to fetch availability for candidate, ranking with zero rows");
                    Vec::new()
                }
            };

        candidates.push(TeacherCandidate {
            id: teacher.id,
            display_name: teacher.display_name,
            gender: teacher.gender.as_deref().and_then(Gender::parse),
            rating: teacher.rating,
            subjects: teacher.subjects,
            availability,
        });
    }

    // The gender rule only applies when the student's age is known.
    let candidates = match query.age {
        Some(age) => matching::filter_candidates(candidates, &StudentProfile { age, gender }),
        None => candidates,
    };

    let ranked = matching::rank_teachers(candidates, &preferences);

    Ok(Json(MatchTeachersResponse {
        teachers: ranked.into_iter().map(Into::into).collect(),
    }))
}

/// Parses a comma-separated preference list, returning the offending token
/// on failure. `None` or an empty string is the defined degenerate case: no
/// preferences, every candidate scores 0.
pub fn parse_preferences(raw: Option<&str>) -> Result<Vec<SchedulePreference>, String> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|token| SchedulePreference::parse(token).ok_or_else(|| token.to_string()))
        .collect()
}
