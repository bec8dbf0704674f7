// Form core: state manager, validation rules, and the submitted-summary
// projection. Pure logic only; the terminal front-end lives in `ui`.

pub mod state;
pub mod summary;
pub mod validation;

pub use state::{FormState, FormStatus};
pub use summary::SubmissionSummary;
pub use validation::{validate, ErrorMap};
