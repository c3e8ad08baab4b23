//! Form state and the reducer that updates it

use super::field::{EducationLevel, Gender, Skill, TextField};
use std::collections::BTreeSet;

/// Values entered into the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub dob: String,
    pub address: String,
    pub phone_number: String,
    pub work_experience: String,
    pub educational_level: EducationLevel,
}

impl FormValues {
    /// Read a text field
    pub fn get(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::Email => &self.email,
            TextField::Dob => &self.dob,
            TextField::Address => &self.address,
            TextField::PhoneNumber => &self.phone_number,
            TextField::WorkExperience => &self.work_experience,
        }
    }

    fn slot_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Name => &mut self.name,
            TextField::Email => &mut self.email,
            TextField::Dob => &mut self.dob,
            TextField::Address => &mut self.address,
            TextField::PhoneNumber => &mut self.phone_number,
            TextField::WorkExperience => &mut self.work_experience,
        }
    }
}

/// Everything the form holds for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub values: FormValues,
    pub gender: Gender,
    pub skills: BTreeSet<Skill>,
    /// Set once a submission succeeds; drives the success toast
    pub submitted: bool,
}

/// Edits and outcomes applied to a [`FormState`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Replace a text field with the given value, unchecked
    EditField { field: TextField, value: String },
    SetGender(Gender),
    SelectEducation(EducationLevel),
    /// Add the skill if absent, remove it if present
    ToggleSkill(Skill),
    MarkSubmitted,
    DismissNotification,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_skill(&self, skill: Skill) -> bool {
        self.skills.contains(&skill)
    }
}

/// Apply an action, returning the next state
pub fn reduce(mut state: FormState, action: FormAction) -> FormState {
    match action {
        FormAction::EditField { field, value } => {
            *state.values.slot_mut(field) = value;
        }
        FormAction::SetGender(gender) => state.gender = gender,
        FormAction::SelectEducation(level) => state.values.educational_level = level,
        FormAction::ToggleSkill(skill) => {
            if !state.skills.remove(&skill) {
                state.skills.insert(skill);
            }
        }
        FormAction::MarkSubmitted => state.submitted = true,
        FormAction::DismissNotification => state.submitted = false,
    }
    state
}
