use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::availability::RecurringAvailability;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// A teacher considered by the matcher, with the recurring availability rows
/// the score is computed from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherCandidate {
    pub id: Uuid,
    pub display_name: String,
    pub gender: Option<Gender>,
    pub rating: f64,
    pub subjects: Vec<String>,
    pub availability: Vec<RecurringAvailability>,
}

/// The student attributes that drive candidate filtering. Gender filtering
/// only applies from age 12 up, and only when a gender is recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    pub age: u8,
    pub gender: Option<Gender>,
}

/// A candidate with its computed match score (0-100) and the human-readable
/// descriptions of the availability windows that matched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedTeacher {
    pub teacher: TeacherCandidate,
    pub match_score: u8,
    pub matching_slots: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedTeacherResponse {
    pub id: Uuid,
    pub display_name: String,
    pub rating: f64,
    pub subjects: Vec<String>,
    pub match_score: u8,
    pub matching_slots: Vec<String>,
}

impl From<RankedTeacher> for MatchedTeacherResponse {
    fn from(ranked: RankedTeacher) -> Self {
        Self {
            id: ranked.teacher.id,
            display_name: ranked.teacher.display_name,
            rating: ranked.teacher.rating,
            subjects: ranked.teacher.subjects,
            match_score: ranked.match_score,
            matching_slots: ranked.matching_slots,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchTeachersResponse {
    pub teachers: Vec<MatchedTeacherResponse>,
}
