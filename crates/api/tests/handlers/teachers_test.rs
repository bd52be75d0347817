use maktab_api::handlers::teachers::parse_preferences;
use maktab_api::middleware::error_handling::AppError;
use maktab_core::{
    errors::MaktabError,
    matching,
    models::preference::SchedulePreference,
    models::teacher::{Gender, RankedTeacher, StudentProfile, TeacherCandidate},
};
use pretty_assertions::assert_eq;

use crate::test_utils::{db_recurring, db_teacher, time, TestContext};

// Replicates the match_teachers handler orchestration against mock
// repositories. A candidate-pool fetch failure is fatal; a per-teacher
// availability fetch failure only zeroes that teacher's rows.
async fn match_teachers_wrapper(
    ctx: &mut TestContext,
    preferences: &[SchedulePreference],
    student: Option<StudentProfile>,
) -> Result<Vec<RankedTeacher>, AppError> {
    let db_teachers = ctx
        .teacher_repo
        .get_teacher_candidates(None)
        .await
        .map_err(MaktabError::DataUnavailable)?;

    let mut candidates = Vec::with_capacity(db_teachers.len());
    for teacher in db_teachers {
        let availability = match ctx
            .availability_repo
            .get_all_recurring_availability(teacher.id)
            .await
        {
            Ok(rows) => rows.into_iter().map(Into::into).collect(),
            Err(_) => Vec::new(),
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

    let candidates = match student {
        Some(student) => matching::filter_candidates(candidates, &student),
        None => candidates,
    };

    Ok(matching::rank_teachers(candidates, preferences))
}

#[test]
fn test_parse_preferences_accepts_known_tokens() {
    let parsed = parse_preferences(Some("weekday_evenings, saturday")).unwrap();
    assert_eq!(
        parsed,
        vec![
            SchedulePreference::WeekdayEvenings,
            SchedulePreference::Saturday
        ]
    );
}

#[test]
fn test_parse_preferences_rejects_unknown_token() {
    let err = parse_preferences(Some("weekday_evenings,weekends")).unwrap_err();
    assert_eq!(err, "weekends");
}

#[test]
fn test_parse_preferences_empty_is_degenerate_not_error() {
    assert!(parse_preferences(None).unwrap().is_empty());
    assert!(parse_preferences(Some("")).unwrap().is_empty());
}

#[tokio::test]
async fn test_match_teachers_candidate_fetch_failure_is_fatal() {
    let mut ctx = TestContext::new();

    ctx.teacher_repo
        .expect_get_teacher_candidates()
        .returning(|_| Err(eyre::eyre!("connection refused")));

    let result =
        match_teachers_wrapper(&mut ctx, &[SchedulePreference::Saturday], None).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        MaktabError::DataUnavailable(_) => {}
        e => panic!("Expected DataUnavailable error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_match_teachers_per_teacher_fetch_failure_degrades_to_zero() {
    let mut ctx = TestContext::new();
    let with_rows = db_teacher("Ahmed", Some("male"), 4.2);
    let fetch_fails = db_teacher("Bilal", Some("male"), 4.9);
    let with_rows_id = with_rows.id;
    let fetch_fails_id = fetch_fails.id;

    ctx.teacher_repo
        .expect_get_teacher_candidates()
        .returning(move |_| Ok(vec![with_rows.clone(), fetch_fails.clone()]));
    ctx.availability_repo
        .expect_get_all_recurring_availability()
        .returning(move |tid| {
            if tid == with_rows_id {
                Ok(vec![db_recurring(tid, 6, time(9, 0), time(12, 0))])
            } else {
                Err(eyre::eyre!("row fetch failed"))
            }
        });

    let ranked = match_teachers_wrapper(&mut ctx, &[SchedulePreference::Saturday], None)
        .await
        .unwrap();

    // Both teachers are still ranked; the one whose rows failed to load
    // simply scores 0.
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].teacher.id, with_rows_id);
    assert_eq!(ranked[0].match_score, 100);
    assert_eq!(ranked[1].teacher.id, fetch_fails_id);
    assert_eq!(ranked[1].match_score, 0);
}

#[tokio::test]
async fn test_match_teachers_gender_filter_end_to_end() {
    let mut ctx = TestContext::new();
    let teachers = vec![
        db_teacher("Aisha", Some("female"), 4.8),
        db_teacher("Maryam", Some("female"), 4.5),
        db_teacher("Omar", Some("male"), 4.9),
    ];

    ctx.teacher_repo
        .expect_get_teacher_candidates()
        .returning(move |_| Ok(teachers.clone()));
    ctx.availability_repo
        .expect_get_all_recurring_availability()
        .returning(|tid| Ok(vec![db_recurring(tid, 6, time(9, 0), time(12, 0))]));

    let student = StudentProfile {
        age: 13,
        gender: Some(Gender::Female),
    };
    let ranked = match_teachers_wrapper(
        &mut ctx,
        &[SchedulePreference::Saturday],
        Some(student),
    )
    .await
    .unwrap();

    assert_eq!(ranked.len(), 2);
    assert!(ranked
        .iter()
        .all(|r| r.teacher.gender == Some(Gender::Female)));
}

#[tokio::test]
async fn test_match_teachers_empty_pool_yields_empty_ranking() {
    let mut ctx = TestContext::new();

    ctx.teacher_repo
        .expect_get_teacher_candidates()
        .returning(|_| Ok(vec![]));

    let ranked = match_teachers_wrapper(&mut ctx, &[SchedulePreference::Sunday], None)
        .await
        .unwrap();

    assert!(ranked.is_empty());
}
