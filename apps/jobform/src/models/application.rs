#![allow(dead_code)]

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Position the applicant is applying for. `Unselected` is the dropdown's
/// empty choice and relaxes every conditional requirement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    #[default]
    #[serde(rename = "")]
    Unselected,
    Developer,
    Designer,
    Manager,
}

impl Position {
    /// Dropdown order, the empty choice first.
    pub const ALL: [Position; 4] = [
        Position::Unselected,
        Position::Developer,
        Position::Designer,
        Position::Manager,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Position::Unselected => "Select...",
            Position::Developer => "Developer",
            Position::Designer => "Designer",
            Position::Manager => "Manager",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Unselected => Ok(()),
            other => f.write_str(other.label()),
        }
    }
}

/// One of the multi-choice skills. `Ord` gives the skills set a stable
/// iteration order matching the checkbox layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Skill {
    JavaScript,
    #[serde(rename = "CSS")]
    Css,
    Python,
}

impl Skill {
    pub const ALL: [Skill; 3] = [Skill::JavaScript, Skill::Css, Skill::Python];

    pub fn label(&self) -> &'static str {
        match self {
            Skill::JavaScript => "JavaScript",
            Skill::Css => "CSS",
            Skill::Python => "Python",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error-map key: every attribute a validation message can attach to.
/// Declaration order matches the form layout, so iterating an error map
/// lists messages in field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    PhoneNumber,
    RelevantExperience,
    #[serde(rename = "portfolioURL")]
    PortfolioUrl,
    ManagementExperience,
    AdditionalSkills,
    PreferredInterviewTime,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Email => "Email",
            Field::PhoneNumber => "Phone Number",
            Field::RelevantExperience => "Relevant Experience",
            Field::PortfolioUrl => "Portfolio URL",
            Field::ManagementExperience => "Management Experience",
            Field::AdditionalSkills => "Additional Skills",
            Field::PreferredInterviewTime => "Preferred Interview Time",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The seven text-backed inputs `FormState::set_field` can write.
/// The position select and the skills checkboxes have their own operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    FullName,
    Email,
    PhoneNumber,
    RelevantExperience,
    PortfolioUrl,
    ManagementExperience,
    PreferredInterviewTime,
}

impl TextField {
    /// Error-map key for this input.
    pub fn field(&self) -> Field {
        match self {
            TextField::FullName => Field::FullName,
            TextField::Email => Field::Email,
            TextField::PhoneNumber => Field::PhoneNumber,
            TextField::RelevantExperience => Field::RelevantExperience,
            TextField::PortfolioUrl => Field::PortfolioUrl,
            TextField::ManagementExperience => Field::ManagementExperience,
            TextField::PreferredInterviewTime => Field::PreferredInterviewTime,
        }
    }
}

/// The in-progress application record. Every user-entered value is kept as
/// raw text; typed interpretation happens at validation and summary time.
/// Serialized field names use the form's JSON keys (camelCase, `portfolioURL`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationDraft {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub applying_for_position: Position,
    pub relevant_experience: String,
    #[serde(rename = "portfolioURL")]
    pub portfolio_url: String,
    pub management_experience: String,
    pub additional_skills: BTreeSet<Skill>,
    pub preferred_interview_time: String,
}
