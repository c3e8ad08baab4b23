//! Wire payload sent to the collector
//!
//! The receiving system identifies each value by a fixed numeric field id.
//! Those ids, the form id and the entity id are part of its schema and must
//! not change without coordinating with it.

use crate::state::FormState;
use serde::Serialize;

/// Form id registered with the collector
pub const FORM_ID: u32 = 8;

/// Entity the submission is filed under
pub const ENTITY_ID: u32 = 1;

/// Field ids known to the collector
pub mod field_id {
    pub const NAME: u32 = 31;
    pub const EMAIL: u32 = 32;
    pub const DOB: u32 = 33;
    pub const ADDRESS: u32 = 34;
    pub const PHONE_NUMBER: u32 = 35;
    pub const GENDER: u32 = 36;
    pub const EDUCATION_LEVEL: u32 = 37;
    pub const WORK_EXPERIENCE: u32 = 38;
}

/// One `{ id, value }` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldEntry {
    pub id: u32,
    pub value: String,
}

impl FieldEntry {
    fn new(id: u32, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }
}

/// Request body for the collector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    pub form_id: u32,
    pub entity_id: u32,
    pub fields: Vec<FieldEntry>,
}

impl SubmissionPayload {
    /// Build the payload from the current form state.
    ///
    /// Selected skills are not part of the collector schema and are left out.
    pub fn from_state(state: &FormState) -> Self {
        let values = &state.values;
        let fields = vec![
            FieldEntry::new(field_id::NAME, values.name.as_str()),
            FieldEntry::new(field_id::WORK_EXPERIENCE, values.work_experience.as_str()),
            FieldEntry::new(field_id::ADDRESS, values.address.as_str()),
            FieldEntry::new(field_id::DOB, values.dob.as_str()),
            FieldEntry::new(field_id::EMAIL, values.email.as_str()),
            FieldEntry::new(
                field_id::EDUCATION_LEVEL,
                values.educational_level.value(),
            ),
            FieldEntry::new(field_id::GENDER, state.gender.value()),
            FieldEntry::new(field_id::PHONE_NUMBER, values.phone_number.as_str()),
        ];

        Self {
            form_id: FORM_ID,
            entity_id: ENTITY_ID,
            fields,
        }
    }

    /// Value sent for a field id
    #[cfg(test)]
    pub fn value_of(&self, id: u32) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.id == id)
            .map(|f| f.value.as_str())
    }

    pub fn to_json(&self) -> super::Result<String> {
        serde_json::to_string(self).map_err(|e| super::SubmitError::Serialize(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{reduce, EducationLevel, FormAction, Gender, Skill, TextField};
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn alice() -> FormState {
        let edits = [
            (TextField::Name, "Alice"),
            (TextField::Email, "a@b.com"),
            (TextField::Dob, "2000-01-01"),
            (TextField::Address, "1 Rd"),
            (TextField::PhoneNumber, "555"),
            (TextField::WorkExperience, "2"),
        ];
        let mut state = FormState::new();
        for (field, value) in edits {
            state = reduce(
                state,
                FormAction::EditField {
                    field,
                    value: value.to_string(),
                },
            );
        }
        state = reduce(
            state,
            FormAction::SelectEducation(EducationLevel::University),
        );
        reduce(state, FormAction::SetGender(Gender::Male))
    }

    #[test]
    fn test_alice_payload_json() {
        let payload = SubmissionPayload::from_state(&alice());
        assert_eq!(
            payload.to_json().unwrap(),
            r#"{"form_id":8,"entity_id":1,"fields":[{"id":31,"value":"Alice"},{"id":38,"value":"2"},{"id":34,"value":"1 Rd"},{"id":33,"value":"2000-01-01"},{"id":32,"value":"a@b.com"},{"id":37,"value":"university"},{"id":36,"value":"male"},{"id":35,"value":"555"}]}"#
        );
    }

    #[test]
    fn test_default_state_payload() {
        let payload = SubmissionPayload::from_state(&FormState::new());
        assert_eq!(payload.form_id, FORM_ID);
        assert_eq!(payload.entity_id, ENTITY_ID);
        assert_eq!(payload.value_of(field_id::NAME), Some(""));
        assert_eq!(
            payload.value_of(field_id::EDUCATION_LEVEL),
            Some("elementarySchool")
        );
        assert_eq!(payload.value_of(field_id::GENDER), Some("female"));
    }

    #[test]
    fn test_ids_are_unique_and_cover_31_to_38() {
        let payload = SubmissionPayload::from_state(&alice());
        let ids: HashSet<u32> = payload.fields.iter().map(|f| f.id).collect();
        assert_eq!(payload.fields.len(), 8);
        assert_eq!(ids, (31..=38).collect::<HashSet<u32>>());
    }

    #[test]
    fn test_skills_are_not_sent() {
        let with_skills = reduce(alice(), FormAction::ToggleSkill(Skill::Design));
        assert_eq!(
            SubmissionPayload::from_state(&with_skills),
            SubmissionPayload::from_state(&alice())
        );
    }

    #[test]
    fn test_values_are_sent_verbatim() {
        let state = reduce(
            FormState::new(),
            FormAction::EditField {
                field: TextField::Address,
                value: "line one\nline two ".to_string(),
            },
        );
        let payload = SubmissionPayload::from_state(&state);
        assert_eq!(
            payload.value_of(field_id::ADDRESS),
            Some("line one\nline two ")
        );
    }
}
