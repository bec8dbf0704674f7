//! Validation rules for the application draft.
//!
//! Every rule runs on every pass and every violation lands in the returned
//! map; nothing short-circuits. The conditional rules (experience,
//! portfolio, management) are dispatched through a per-position check table
//! instead of scattered branching.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{ApplicationDraft, Field, Position};

/// Field name → user-facing message. Rebuilt wholesale on every pass, never
/// merged incrementally.
pub type ErrorMap = BTreeMap<Field, String>;

lazy_static! {
    /// local@domain.tld: no whitespace or extra `@`, at least one `.` after the `@`.
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();

    /// Digit groups separated by single hyphens. A bare digit string of any
    /// length also matches.
    static ref PHONE_REGEX: Regex = Regex::new(r"^\d+(-\d+)*$").unwrap();
}

/// Conditional requirements gated on the selected position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConditionalCheck {
    ExperienceYears,
    PortfolioUrl,
    ManagementExperience,
}

/// Which conditional checks a position is subject to. `Unselected` maps to
/// the empty slice, so none of them can fire.
fn conditional_checks(position: Position) -> &'static [ConditionalCheck] {
    match position {
        Position::Unselected => &[],
        Position::Developer => &[ConditionalCheck::ExperienceYears],
        Position::Designer => &[
            ConditionalCheck::ExperienceYears,
            ConditionalCheck::PortfolioUrl,
        ],
        Position::Manager => &[ConditionalCheck::ManagementExperience],
    }
}

/// Validates a draft and returns every violation at once.
pub fn validate(draft: &ApplicationDraft) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if draft.full_name.trim().is_empty() {
        errors.insert(Field::FullName, "Full Name is required".to_string());
    }

    if draft.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required".to_string());
    } else if !EMAIL_REGEX.is_match(&draft.email) {
        errors.insert(Field::Email, "Invalid email format".to_string());
    }

    if draft.phone_number.trim().is_empty() {
        errors.insert(Field::PhoneNumber, "Phone Number is required".to_string());
    } else if !PHONE_REGEX.is_match(&draft.phone_number) {
        errors.insert(Field::PhoneNumber, "Invalid phone number".to_string());
    }

    for check in conditional_checks(draft.applying_for_position) {
        match check {
            ConditionalCheck::ExperienceYears => {
                let value = draft.relevant_experience.trim();
                if value.is_empty() {
                    errors.insert(
                        Field::RelevantExperience,
                        "Relevant Experience is required".to_string(),
                    );
                } else if !is_positive_number(value) {
                    errors.insert(
                        Field::RelevantExperience,
                        "Relevant Experience must be a number greater than 0".to_string(),
                    );
                }
            }
            ConditionalCheck::PortfolioUrl => {
                if draft.portfolio_url.trim().is_empty() {
                    errors.insert(Field::PortfolioUrl, "Portfolio URL is required".to_string());
                }
            }
            ConditionalCheck::ManagementExperience => {
                if draft.management_experience.trim().is_empty() {
                    errors.insert(
                        Field::ManagementExperience,
                        "Management Experience is required".to_string(),
                    );
                }
            }
        }
    }

    if draft.additional_skills.is_empty() {
        errors.insert(
            Field::AdditionalSkills,
            "Please select at least one skill".to_string(),
        );
    }

    let time = draft.preferred_interview_time.trim();
    if time.is_empty() {
        errors.insert(
            Field::PreferredInterviewTime,
            "Preferred Interview Time is required".to_string(),
        );
    } else if parse_interview_time(time).is_none() {
        errors.insert(
            Field::PreferredInterviewTime,
            "Invalid date and time format".to_string(),
        );
    }

    errors
}

/// Numeric and strictly positive. Fractional years ("2.5") are valid.
fn is_positive_number(value: &str) -> bool {
    value.parse::<f64>().map(|n| n > 0.0).unwrap_or(false)
}

/// Shapes a datetime-local widget (or hand typing) can produce.
const INTERVIEW_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses the preferred interview time. `None` means unparseable.
pub fn parse_interview_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    if let Some(dt) = INTERVIEW_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return Some(dt);
    }

    // A bare date is a valid interview time at midnight.
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Skill;

    /// A draft that passes every rule for the given position.
    fn valid_draft(position: Position) -> ApplicationDraft {
        let mut draft = ApplicationDraft {
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone_number: "555-123-4567".to_string(),
            applying_for_position: position,
            preferred_interview_time: "2024-05-01T10:00".to_string(),
            ..ApplicationDraft::default()
        };
        draft.additional_skills.insert(Skill::Css);
        match position {
            Position::Developer => {
                draft.relevant_experience = "3".to_string();
            }
            Position::Designer => {
                draft.relevant_experience = "2".to_string();
                draft.portfolio_url = "https://jane.dev".to_string();
            }
            Position::Manager => {
                draft.management_experience = "Led a team of 4".to_string();
            }
            Position::Unselected => {}
        }
        draft
    }

    #[test]
    fn test_empty_draft_collects_all_unconditional_errors() {
        let errors = validate(&ApplicationDraft::default());
        assert_eq!(errors.len(), 5);
        assert_eq!(errors[&Field::FullName], "Full Name is required");
        assert_eq!(errors[&Field::Email], "Email is required");
        assert_eq!(errors[&Field::PhoneNumber], "Phone Number is required");
        assert_eq!(
            errors[&Field::AdditionalSkills],
            "Please select at least one skill"
        );
        assert_eq!(
            errors[&Field::PreferredInterviewTime],
            "Preferred Interview Time is required"
        );
    }

    #[test]
    fn test_unselected_position_never_requires_conditional_fields() {
        let errors = validate(&ApplicationDraft::default());
        assert!(!errors.contains_key(&Field::RelevantExperience));
        assert!(!errors.contains_key(&Field::PortfolioUrl));
        assert!(!errors.contains_key(&Field::ManagementExperience));
    }

    #[test]
    fn test_valid_developer_draft_passes() {
        assert!(validate(&valid_draft(Position::Developer)).is_empty());
    }

    #[test]
    fn test_valid_designer_draft_passes() {
        assert!(validate(&valid_draft(Position::Designer)).is_empty());
    }

    #[test]
    fn test_valid_manager_draft_passes() {
        assert!(validate(&valid_draft(Position::Manager)).is_empty());
    }

    #[test]
    fn test_valid_unselected_draft_passes() {
        assert!(validate(&valid_draft(Position::Unselected)).is_empty());
    }

    #[test]
    fn test_whitespace_full_name_is_rejected() {
        let mut draft = valid_draft(Position::Developer);
        draft.full_name = "   ".to_string();
        let errors = validate(&draft);
        assert_eq!(errors[&Field::FullName], "Full Name is required");
    }

    #[test]
    fn test_email_without_dot_after_at_is_invalid() {
        let mut draft = valid_draft(Position::Developer);
        draft.email = "jane@xcom".to_string();
        assert_eq!(validate(&draft)[&Field::Email], "Invalid email format");
    }

    #[test]
    fn test_email_with_whitespace_is_invalid() {
        let mut draft = valid_draft(Position::Developer);
        draft.email = "jane doe@x.com".to_string();
        assert_eq!(validate(&draft)[&Field::Email], "Invalid email format");
    }

    #[test]
    fn test_email_missing_local_part_is_invalid() {
        let mut draft = valid_draft(Position::Developer);
        draft.email = "@x.com".to_string();
        assert_eq!(validate(&draft)[&Field::Email], "Invalid email format");
    }

    #[test]
    fn test_phone_accepts_hyphenated_groups_and_bare_digits() {
        for phone in ["555-123-4567", "5551234567", "1"] {
            let mut draft = valid_draft(Position::Developer);
            draft.phone_number = phone.to_string();
            assert!(
                !validate(&draft).contains_key(&Field::PhoneNumber),
                "{phone} should be accepted"
            );
        }
    }

    #[test]
    fn test_phone_rejects_malformed_groups() {
        for phone in ["555--123", "-555", "555-", "555 123", "555a123"] {
            let mut draft = valid_draft(Position::Developer);
            draft.phone_number = phone.to_string();
            assert_eq!(
                validate(&draft)[&Field::PhoneNumber],
                "Invalid phone number",
                "{phone} should be rejected"
            );
        }
    }

    #[test]
    fn test_developer_requires_experience() {
        let mut draft = valid_draft(Position::Developer);
        draft.relevant_experience = String::new();
        assert_eq!(
            validate(&draft)[&Field::RelevantExperience],
            "Relevant Experience is required"
        );
    }

    #[test]
    fn test_experience_must_be_a_positive_number() {
        for value in ["abc", "-1", "-5", "0"] {
            let mut draft = valid_draft(Position::Developer);
            draft.relevant_experience = value.to_string();
            assert_eq!(
                validate(&draft)[&Field::RelevantExperience],
                "Relevant Experience must be a number greater than 0",
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn test_fractional_experience_is_valid() {
        let mut draft = valid_draft(Position::Developer);
        draft.relevant_experience = "2.5".to_string();
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn test_designer_requires_portfolio_url() {
        let mut draft = valid_draft(Position::Designer);
        draft.portfolio_url = String::new();
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&Field::PortfolioUrl], "Portfolio URL is required");
    }

    #[test]
    fn test_developer_does_not_require_portfolio_url() {
        let draft = valid_draft(Position::Developer);
        assert!(draft.portfolio_url.is_empty());
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn test_manager_requires_management_experience_only() {
        let mut draft = valid_draft(Position::Manager);
        draft.management_experience = String::new();
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[&Field::ManagementExperience],
            "Management Experience is required"
        );
        assert!(!errors.contains_key(&Field::RelevantExperience));
    }

    #[test]
    fn test_interview_time_accepts_common_shapes() {
        for time in [
            "2024-05-01T10:00",
            "2024-05-01T10:00:30",
            "2024-05-01 10:00",
            "2024-05-01",
            "2024-05-01T10:00:00+02:00",
        ] {
            let mut draft = valid_draft(Position::Developer);
            draft.preferred_interview_time = time.to_string();
            assert!(
                !validate(&draft).contains_key(&Field::PreferredInterviewTime),
                "{time} should parse"
            );
        }
    }

    #[test]
    fn test_interview_time_rejects_garbage() {
        for time in ["not-a-date", "2024-13-40T99:99", "tomorrow"] {
            let mut draft = valid_draft(Position::Developer);
            draft.preferred_interview_time = time.to_string();
            assert_eq!(
                validate(&draft)[&Field::PreferredInterviewTime],
                "Invalid date and time format",
                "{time} should be rejected"
            );
        }
    }

    #[test]
    fn test_all_violations_are_collected_in_one_pass() {
        let draft = ApplicationDraft {
            applying_for_position: Position::Designer,
            email: "not-an-email".to_string(),
            phone_number: "55-5a".to_string(),
            relevant_experience: "-5".to_string(),
            preferred_interview_time: "not-a-date".to_string(),
            ..ApplicationDraft::default()
        };

        let errors = validate(&draft);
        assert_eq!(errors.len(), 7);
        assert_eq!(errors[&Field::Email], "Invalid email format");
        assert_eq!(errors[&Field::PhoneNumber], "Invalid phone number");
        assert_eq!(
            errors[&Field::RelevantExperience],
            "Relevant Experience must be a number greater than 0"
        );
        assert_eq!(errors[&Field::PortfolioUrl], "Portfolio URL is required");
    }

    #[test]
    fn test_parse_interview_time_normalizes_bare_date_to_midnight() {
        let parsed = parse_interview_time("2024-05-01").unwrap();
        assert_eq!(parsed.format("%H:%M").to_string(), "00:00");
    }
}
