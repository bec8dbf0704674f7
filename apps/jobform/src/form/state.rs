#![allow(dead_code)]

//! Form State Manager: owns the draft, the current error map, and the
//! Editing/Submitted status.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::form::summary::SubmissionSummary;
use crate::form::validation::{validate, ErrorMap};
use crate::models::{ApplicationDraft, Field, Position, Skill, TextField};

/// Lifecycle of one form session. `Submitted` is terminal; there is no
/// edit-after-submit transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    #[default]
    Editing,
    Submitted,
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    draft: ApplicationDraft,
    errors: ErrorMap,
    status: FormStatus,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_submitted(&self) -> bool {
        self.status == FormStatus::Submitted
    }

    /// Overwrites one text-backed attribute. No validation runs here.
    pub fn set_field(&mut self, field: TextField, value: impl Into<String>) {
        if self.frozen("set_field") {
            return;
        }
        let value = value.into();
        match field {
            TextField::FullName => self.draft.full_name = value,
            TextField::Email => self.draft.email = value,
            TextField::PhoneNumber => self.draft.phone_number = value,
            TextField::RelevantExperience => self.draft.relevant_experience = value,
            TextField::PortfolioUrl => self.draft.portfolio_url = value,
            TextField::ManagementExperience => self.draft.management_experience = value,
            TextField::PreferredInterviewTime => self.draft.preferred_interview_time = value,
        }
    }

    /// Overwrites the position selection.
    pub fn set_position(&mut self, position: Position) {
        if self.frozen("set_position") {
            return;
        }
        self.draft.applying_for_position = position;
    }

    /// Membership toggle; toggling the same skill twice restores the set.
    pub fn toggle_skill(&mut self, skill: Skill) {
        if self.frozen("toggle_skill") {
            return;
        }
        if !self.draft.additional_skills.remove(&skill) {
            self.draft.additional_skills.insert(skill);
        }
    }

    /// Validates the current draft. A clean pass transitions to `Submitted`
    /// and freezes the draft for the summary; otherwise the collected errors
    /// replace the previous map and the form stays editable. Never fails.
    pub fn submit(&mut self) -> FormStatus {
        if self.is_submitted() {
            return self.status;
        }
        let errors = validate(&self.draft);
        if errors.is_empty() {
            self.errors.clear();
            self.status = FormStatus::Submitted;
            info!("application accepted");
        } else {
            debug!(violations = errors.len(), "submission rejected");
            self.errors = errors;
        }
        self.status
    }

    /// Read-only summary of the accepted application. `None` while editing.
    pub fn summary(&self) -> Option<SubmissionSummary> {
        self.is_submitted()
            .then(|| SubmissionSummary::project(&self.draft))
    }

    fn frozen(&self, operation: &str) -> bool {
        if self.is_submitted() {
            debug!(operation, "mutation ignored on a submitted application");
            return true;
        }
        false
    }
}
