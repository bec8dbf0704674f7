// Applicant data model: the draft record and its enumerated fields.

pub mod application;

pub use application::{ApplicationDraft, Field, Position, Skill, TextField};
