//! Form domain layer
//!
//! Field definitions, the form record and the reducer that edits it.

mod field;
mod form_state;

pub use field::{EducationLevel, Gender, Skill, TextField};
pub use form_state::{reduce, FormAction, FormState, FormValues};
