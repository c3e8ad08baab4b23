//! Form field identifiers and option sets

use serde::Serialize;

/// Free-text inputs of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Name,
    Email,
    Dob,
    Address,
    PhoneNumber,
    WorkExperience,
}

impl TextField {
    /// All text fields in display order
    #[cfg(test)]
    pub const ALL: [TextField; 6] = [
        TextField::Name,
        TextField::Email,
        TextField::Dob,
        TextField::Address,
        TextField::PhoneNumber,
        TextField::WorkExperience,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Dob => "Date of Birth",
            Self::Address => "Address",
            Self::PhoneNumber => "Phone Number",
            Self::WorkExperience => "Work Experience",
        }
    }

    /// Hint shown while the field is empty
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Dob => Some("YYYY-MM-DD"),
            _ => None,
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Address)
    }

    /// Whether the input widget for this field lets `c` through.
    ///
    /// This mirrors the input typing of each widget (number, date, text).
    /// The stored value is never checked afterwards.
    pub fn accepts(&self, c: char) -> bool {
        match self {
            Self::PhoneNumber | Self::WorkExperience => {
                c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')
            }
            Self::Dob => c.is_ascii_digit() || c == '-',
            _ => !c.is_control(),
        }
    }
}

/// Gender radio group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    #[default]
    Female,
    Male,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Female, Gender::Male];

    /// Value sent to the collector
    pub fn value(&self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Female => Self::Male,
            Self::Male => Self::Female,
        }
    }
}

/// Education level select options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationLevel {
    #[default]
    ElementarySchool,
    MiddleSchool,
    HighSchool,
    University,
    GraduateSchool,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 5] = [
        EducationLevel::ElementarySchool,
        EducationLevel::MiddleSchool,
        EducationLevel::HighSchool,
        EducationLevel::University,
        EducationLevel::GraduateSchool,
    ];

    /// Value sent to the collector
    pub fn value(&self) -> &'static str {
        match self {
            Self::ElementarySchool => "elementarySchool",
            Self::MiddleSchool => "middleSchool",
            Self::HighSchool => "highSchool",
            Self::University => "university",
            Self::GraduateSchool => "graduateSchool",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ElementarySchool => "Elementary School",
            Self::MiddleSchool => "Middle School",
            Self::HighSchool => "High School",
            Self::University => "University",
            Self::GraduateSchool => "Graduate School",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::ElementarySchool => Self::MiddleSchool,
            Self::MiddleSchool => Self::HighSchool,
            Self::HighSchool => Self::University,
            Self::University => Self::GraduateSchool,
            Self::GraduateSchool => Self::ElementarySchool,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::ElementarySchool => Self::GraduateSchool,
            Self::MiddleSchool => Self::ElementarySchool,
            Self::HighSchool => Self::MiddleSchool,
            Self::University => Self::HighSchool,
            Self::GraduateSchool => Self::University,
        }
    }
}

/// Skill checkbox tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Skill {
    SoftwareDevelopment,
    DataAnalysis,
    Design,
    ProjectManagement,
    OtherSkills,
}

impl Skill {
    pub const ALL: [Skill; 5] = [
        Skill::SoftwareDevelopment,
        Skill::DataAnalysis,
        Skill::Design,
        Skill::ProjectManagement,
        Skill::OtherSkills,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Self::SoftwareDevelopment => "softwareDevelopment",
            Self::DataAnalysis => "dataAnalysis",
            Self::Design => "design",
            Self::ProjectManagement => "projectManagement",
            Self::OtherSkills => "otherSkills",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SoftwareDevelopment => "Software Development",
            Self::DataAnalysis => "Data Analysis",
            Self::Design => "Design",
            Self::ProjectManagement => "Project Management",
            Self::OtherSkills => "Other",
        }
    }
}
