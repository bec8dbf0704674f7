//! Read-only projection of an accepted application.
//!
//! Only reachable from the `Submitted` state, which already guarantees
//! validity; nothing here re-validates.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::form::validation::parse_interview_time;
use crate::models::{ApplicationDraft, Position, Skill};

/// Display format for the interview slot ("May 1, 2024 10:00 AM").
const INTERVIEW_TIME_DISPLAY: &str = "%B %-d, %Y %-I:%M %p";

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionSummary {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub position: Position,
    pub relevant_experience: Option<String>,
    pub portfolio_url: Option<String>,
    pub management_experience: Option<String>,
    pub additional_skills: Vec<Skill>,
    pub interview_time: Option<NaiveDateTime>,
    pub interview_time_raw: String,
}

impl SubmissionSummary {
    pub fn project(draft: &ApplicationDraft) -> Self {
        Self {
            full_name: draft.full_name.clone(),
            email: draft.email.clone(),
            phone_number: draft.phone_number.clone(),
            position: draft.applying_for_position,
            relevant_experience: non_empty(&draft.relevant_experience),
            portfolio_url: non_empty(&draft.portfolio_url),
            management_experience: non_empty(&draft.management_experience),
            additional_skills: draft.additional_skills.iter().copied().collect(),
            interview_time: parse_interview_time(&draft.preferred_interview_time),
            interview_time_raw: draft.preferred_interview_time.clone(),
        }
    }

    /// Labeled display block in form order. Optional rows
    /// appear only when their value is present.
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Full Name: {}", self.full_name),
            format!("Email: {}", self.email),
            format!("Phone Number: {}", self.phone_number),
            format!("Applying for Position: {}", self.position),
        ];
        if let Some(experience) = &self.relevant_experience {
            lines.push(format!("Relevant Experience: {experience} years"));
        }
        if let Some(url) = &self.portfolio_url {
            lines.push(format!("Portfolio URL: {url}"));
        }
        if let Some(experience) = &self.management_experience {
            lines.push(format!("Management Experience: {experience}"));
        }
        lines.push(format!("Additional Skills: {}", self.skills_display()));
        lines.push(format!(
            "Preferred Interview Time: {}",
            self.interview_time_display()
        ));
        lines
    }

    /// Comma-joined skill labels in checkbox order.
    pub fn skills_display(&self) -> String {
        self.additional_skills
            .iter()
            .map(|skill| skill.label())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Formatted slot, or the raw text when it no longer parses.
    pub fn interview_time_display(&self) -> String {
        match self.interview_time {
            Some(time) => time.format(INTERVIEW_TIME_DISPLAY).to_string(),
            None => self.interview_time_raw.clone(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
