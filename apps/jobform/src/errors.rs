use thiserror::Error;

/// Application-level error type for the terminal front-end.
///
/// Validation failures are not represented here: they are ordinary data in
/// the form's error map and never abort the session.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
