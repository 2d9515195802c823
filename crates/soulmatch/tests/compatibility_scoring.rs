//! End-to-end checks of scoring and match proposal through the public API,
//! starting from answer payloads shaped like the ones stored per user.

use soulmatch::compatibility::CompatibilityEngine;
use soulmatch::matching::{propose_matches, Candidate, MatchStatus, RankingOptions, UserId};
use soulmatch::questionnaire::{validate, QuestionnaireAnswers};
use soulmatch::week::week_start_key_at;
use soulmatch::{calculate_compatibility, week_start};

use chrono::{FixedOffset, TimeZone};

fn decode(json: &str) -> QuestionnaireAnswers {
    serde_json::from_str(json).expect("answers decode")
}

fn alice() -> QuestionnaireAnswers {
    decode(
        r#"{
            "q1": "reading", "q2": "jazz", "q3": "dinner", "q4": "mindful",
            "q5": "art", "q6": "balance", "q7": "deep", "q8": "honesty",
            "q9": "drama", "q10": "soulmate"
        }"#,
    )
}

fn bo() -> QuestionnaireAnswers {
    decode(
        r#"{
            "q1": "movie", "q2": "classical", "q3": "cafe", "q4": "stable",
            "q5": "reading", "q6": "family", "q7": "written", "q8": "loyalty",
            "q9": "art", "q10": "growth"
        }"#,
    )
}

fn cam() -> QuestionnaireAnswers {
    decode(
        r#"{
            "q1": "outdoor", "q2": "rock", "q3": "activity", "q4": "adventure",
            "q5": "sports", "q6": "travel", "q7": "direct", "q8": "freedom",
            "q9": "scifi", "q10": "passion"
        }"#,
    )
}

#[test]
fn stored_answer_payloads_are_valid_questionnaires() {
    for answers in [alice(), bo(), cam()] {
        validate(&answers).expect("complete questionnaire");
    }
}

#[test]
fn scores_a_close_pair_in_both_directions() {
    // alice -> bo: 0.8 + 0.8 + 0.7 + 0.7 + 0.7 + 0.9 + 0.8 + 0.9 + 0.9 + 0.8 = 8.0
    let forward = calculate_compatibility(&alice(), &bo());
    assert_eq!(forward.score, 80);
    assert_eq!(
        forward.reasons,
        vec!["都喜欢安静的阅读时光", "都欣赏爵士乐", "都追求平衡人生"]
    );

    // bo -> alice differs on q4: stable -> mindful is 0.8, mindful -> stable only 0.7.
    let backward = calculate_compatibility(&bo(), &alice());
    assert_eq!(backward.score, 81);
    assert_eq!(
        backward.reasons,
        vec!["都喜爱电影艺术", "都喜爱古典音乐", "生活态度都追求安稳"]
    );
}

#[test]
fn distant_pair_scores_zero() {
    let result = calculate_compatibility(&alice(), &cam());
    assert_eq!(result.score, 0);
    assert!(result.reasons.is_empty());
}

#[test]
fn proposes_weekly_matches_for_a_pool() {
    let candidates = vec![
        Candidate {
            user_id: UserId("cam".to_string()),
            answers: cam(),
        },
        Candidate {
            user_id: UserId("bo".to_string()),
            answers: bo(),
        },
        Candidate {
            user_id: UserId("alice".to_string()),
            answers: alice(),
        },
    ];
    let now = FixedOffset::east_opt(8 * 3600)
        .expect("valid offset")
        .with_ymd_and_hms(2026, 10, 18, 21, 0, 0)
        .single()
        .expect("valid local time");
    let week = week_start_key_at(&now);

    let records = propose_matches(
        &CompatibilityEngine::default(),
        &UserId("alice".to_string()),
        &alice(),
        &candidates,
        RankingOptions {
            limit: 3,
            min_score: 10,
        },
        &week,
    );

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.matched_user_id, UserId("bo".to_string()));
    assert_eq!(record.compatibility_score, 80);
    assert_eq!(record.status, MatchStatus::Pending);
    assert_eq!(record.week_start, "2026-10-11T16:00:00.000Z");
}

#[test]
fn current_week_key_is_stable_between_calls() {
    let first = week_start();
    let second = week_start();
    // Only differs if the calls straddle Monday midnight.
    if first != second {
        assert!(second > first);
    }
    assert!(chrono::DateTime::parse_from_rfc3339(&first).is_ok());
}
