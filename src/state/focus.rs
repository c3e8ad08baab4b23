//! Keyboard focus across the form widgets

use super::forms::{Skill, TextField};

/// A focusable widget on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Text(TextField),
    Gender,
    Education,
    Skills,
    Submit,
}

/// Widgets in tab order
pub const FOCUS_ORDER: [FocusTarget; 10] = [
    FocusTarget::Text(TextField::Name),
    FocusTarget::Text(TextField::Email),
    FocusTarget::Text(TextField::Dob),
    FocusTarget::Text(TextField::Address),
    FocusTarget::Text(TextField::PhoneNumber),
    FocusTarget::Gender,
    FocusTarget::Education,
    FocusTarget::Text(TextField::WorkExperience),
    FocusTarget::Skills,
    FocusTarget::Submit,
];

/// Which widget is active, plus the checkbox cursor inside the skills group
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusState {
    index: usize,
    skill_cursor: usize,
}

impl FocusState {
    pub fn current(&self) -> FocusTarget {
        FOCUS_ORDER[self.index]
    }

    pub fn is_focused(&self, target: FocusTarget) -> bool {
        self.current() == target
    }

    /// Move to the next widget (wraps around)
    pub fn next(&mut self) {
        self.index = (self.index + 1) % FOCUS_ORDER.len();
    }

    /// Move to the previous widget (wraps around)
    pub fn prev(&mut self) {
        if self.index == 0 {
            self.index = FOCUS_ORDER.len() - 1;
        } else {
            self.index -= 1;
        }
    }

    #[cfg(test)]
    pub fn focus(&mut self, target: FocusTarget) {
        if let Some(index) = FOCUS_ORDER.iter().position(|t| *t == target) {
            self.index = index;
        }
    }

    /// Skill under the checkbox cursor
    pub fn skill_cursor(&self) -> Skill {
        Skill::ALL[self.skill_cursor]
    }

    pub fn next_skill(&mut self) {
        self.skill_cursor = (self.skill_cursor + 1) % Skill::ALL.len();
    }

    pub fn prev_skill(&mut self) {
        if self.skill_cursor == 0 {
            self.skill_cursor = Skill::ALL.len() - 1;
        } else {
            self.skill_cursor -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_name() {
        let focus = FocusState::default();
        assert_eq!(focus.current(), FocusTarget::Text(TextField::Name));
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut focus = FocusState::default();
        for _ in 0..FOCUS_ORDER.len() {
            focus.next();
        }
        assert_eq!(focus.current(), FocusTarget::Text(TextField::Name));
    }

    #[test]
    fn test_prev_from_first_goes_to_submit() {
        let mut focus = FocusState::default();
        focus.prev();
        assert_eq!(focus.current(), FocusTarget::Submit);
    }

    #[test]
    fn test_focus_jumps_to_target() {
        let mut focus = FocusState::default();
        focus.focus(FocusTarget::Skills);
        assert!(focus.is_focused(FocusTarget::Skills));
        focus.next();
        assert_eq!(focus.current(), FocusTarget::Submit);
    }

    #[test]
    fn test_every_text_field_is_focusable() {
        for field in TextField::ALL {
            assert!(FOCUS_ORDER.contains(&FocusTarget::Text(field)));
        }
    }

    #[test]
    fn test_skill_cursor_wraps() {
        let mut focus = FocusState::default();
        assert_eq!(focus.skill_cursor(), Skill::SoftwareDevelopment);
        focus.prev_skill();
        assert_eq!(focus.skill_cursor(), Skill::OtherSkills);
        focus.next_skill();
        assert_eq!(focus.skill_cursor(), Skill::SoftwareDevelopment);
    }
}
