use crate::infra::{load_answers, parse_instant};
use chrono::{DateTime, FixedOffset};
use clap::Args;
use soulmatch::compatibility::CompatibilityEngine;
use soulmatch::error::AppError;
use soulmatch::questionnaire::validate;
use soulmatch::week::{week_start, week_start_key_at};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// First user's answers: inline JSON object, or @path to a JSON file
    #[arg(long)]
    pub(crate) a: String,
    /// Second user's answers: inline JSON object, or @path to a JSON file
    #[arg(long)]
    pub(crate) b: String,
    /// Reject answer sets that are not complete, recognized questionnaires
    #[arg(long)]
    pub(crate) validate: bool,
}

#[derive(Args, Debug)]
pub(crate) struct WeekStartArgs {
    /// Reference instant (RFC 3339); its offset decides the local calendar
    #[arg(long, value_parser = parse_instant)]
    pub(crate) at: Option<DateTime<FixedOffset>>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    println!("{}", score_report(&args)?);
    Ok(())
}

pub(crate) fn run_week_start(args: WeekStartArgs) -> Result<(), AppError> {
    println!("{}", week_start_report(&args));
    Ok(())
}

fn score_report(args: &ScoreArgs) -> Result<String, AppError> {
    let first = load_answers(&args.a)?;
    let second = load_answers(&args.b)?;

    if args.validate {
        validate(&first)?;
        validate(&second)?;
    }

    let breakdown = CompatibilityEngine::default().evaluate(&first, &second);
    Ok(serde_json::to_string_pretty(&breakdown)?)
}

fn week_start_report(args: &WeekStartArgs) -> String {
    match &args.at {
        Some(at) => week_start_key_at(at),
        None => week_start(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use soulmatch::questionnaire::{QuestionId, QuestionnaireError};

    fn score_args(a: &str, b: &str, validate: bool) -> ScoreArgs {
        ScoreArgs {
            a: a.to_string(),
            b: b.to_string(),
            validate,
        }
    }

    #[test]
    fn score_report_prints_breakdown_json() {
        let args = score_args(
            r#"{"q1":"reading","q2":"jazz"}"#,
            r#"{"q1":"reading","q2":"classical"}"#,
            false,
        );

        let report = score_report(&args).expect("report renders");
        let value: Value = serde_json::from_str(&report).expect("report is json");
        assert_eq!(value["result"]["score"], 90);
        assert_eq!(value["compared_questions"], 2);
    }

    #[test]
    fn validate_flag_rejects_partial_answers() {
        let args = score_args(r#"{"q1":"reading"}"#, r#"{"q1":"reading"}"#, true);

        assert!(matches!(
            score_report(&args),
            Err(AppError::Questionnaire(QuestionnaireError::MissingAnswer(
                QuestionId::Q2
            )))
        ));
        assert!(score_report(&score_args(r#"{"q1":"reading"}"#, "{}", false)).is_ok());
    }

    #[test]
    fn week_start_report_uses_the_given_instant() {
        let at = parse_instant("2026-10-14T15:30:00+08:00").expect("valid timestamp");
        let report = week_start_report(&WeekStartArgs { at: Some(at) });
        assert_eq!(report, "2026-10-11T16:00:00.000Z");
    }

    #[test]
    fn week_start_report_defaults_to_now() {
        let report = week_start_report(&WeekStartArgs { at: None });
        assert!(report.ends_with(".000Z"));
    }
}
