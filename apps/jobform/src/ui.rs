//! Terminal front-end: prompts for each field, submits, and either lists the
//! collected validation errors and re-prompts or prints the summary block.
//!
//! Prompt order and conditional visibility mirror the form layout: the
//! experience, portfolio, and management inputs only appear for positions
//! that require them. Text prompts are pre-filled with the current draft
//! value, so a rejected submit lets the applicant correct fields instead of
//! retyping everything.

use std::io::Write;

use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};

use crate::errors::AppError;
use crate::form::FormState;
use crate::models::{Position, Skill, TextField};

pub fn run() -> Result<(), AppError> {
    let theme = ColorfulTheme::default();
    let mut form = FormState::new();

    println!("Job Application Form");
    println!();

    while !form.is_submitted() {
        prompt_round(&mut form, &theme)?;
        form.submit();
        if !form.is_submitted() {
            print_errors(&form);
        }
    }

    let stdout = std::io::stdout();
    print_summary(&mut stdout.lock(), &form)?;
    Ok(())
}

/// One pass over every visible field, in form order.
fn prompt_round(form: &mut FormState, theme: &ColorfulTheme) -> Result<(), AppError> {
    prompt_text(form, theme, TextField::FullName)?;
    prompt_text(form, theme, TextField::Email)?;
    prompt_text(form, theme, TextField::PhoneNumber)?;
    prompt_position(form, theme)?;

    match form.draft().applying_for_position {
        Position::Developer => {
            prompt_text(form, theme, TextField::RelevantExperience)?;
        }
        Position::Designer => {
            prompt_text(form, theme, TextField::RelevantExperience)?;
            prompt_text(form, theme, TextField::PortfolioUrl)?;
        }
        Position::Manager => {
            prompt_text(form, theme, TextField::ManagementExperience)?;
        }
        Position::Unselected => {}
    }

    prompt_skills(form, theme)?;
    prompt_text(form, theme, TextField::PreferredInterviewTime)?;
    Ok(())
}

fn prompt_text(form: &mut FormState, theme: &ColorfulTheme, field: TextField) -> Result<(), AppError> {
    let label = match field {
        TextField::RelevantExperience => "Relevant Experience (years)",
        TextField::PreferredInterviewTime => "Preferred Interview Time (e.g. 2024-05-01T10:00)",
        other => other.field().label(),
    };
    let current = current_value(form, field).to_string();
    let value: String = Input::with_theme(theme)
        .with_prompt(label)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    form.set_field(field, value);
    Ok(())
}

fn prompt_position(form: &mut FormState, theme: &ColorfulTheme) -> Result<(), AppError> {
    let labels: Vec<&str> = Position::ALL.iter().map(|p| p.label()).collect();
    let current = Position::ALL
        .iter()
        .position(|p| *p == form.draft().applying_for_position)
        .unwrap_or(0);
    let chosen = Select::with_theme(theme)
        .with_prompt("Applying for Position")
        .items(&labels)
        .default(current)
        .interact()?;
    form.set_position(Position::ALL[chosen]);
    Ok(())
}

fn prompt_skills(form: &mut FormState, theme: &ColorfulTheme) -> Result<(), AppError> {
    let labels: Vec<&str> = Skill::ALL.iter().map(|s| s.label()).collect();
    let defaults: Vec<bool> = Skill::ALL
        .iter()
        .map(|skill| form.draft().additional_skills.contains(skill))
        .collect();
    let chosen = MultiSelect::with_theme(theme)
        .with_prompt("Additional Skills (space toggles, enter confirms)")
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    // Reconcile the selection through membership toggles.
    for (index, skill) in Skill::ALL.iter().enumerate() {
        if chosen.contains(&index) != defaults[index] {
            form.toggle_skill(*skill);
        }
    }
    Ok(())
}

fn current_value(form: &FormState, field: TextField) -> &str {
    let draft = form.draft();
    match field {
        TextField::FullName => &draft.full_name,
        TextField::Email => &draft.email,
        TextField::PhoneNumber => &draft.phone_number,
        TextField::RelevantExperience => &draft.relevant_experience,
        TextField::PortfolioUrl => &draft.portfolio_url,
        TextField::ManagementExperience => &draft.management_experience,
        TextField::PreferredInterviewTime => &draft.preferred_interview_time,
    }
}

fn print_errors(form: &FormState) {
    println!();
    println!("Please fix the following and resubmit:");
    for (field, message) in form.errors() {
        println!("  {}: {}", field.label(), message);
    }
    println!();
}

fn print_summary(out: &mut impl Write, form: &FormState) -> Result<(), AppError> {
    let Some(summary) = form.summary() else {
        return Ok(());
    };
    writeln!(out)?;
    writeln!(out, "Submission Summary")?;
    for line in summary.render_lines() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
