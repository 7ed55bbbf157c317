//! Member model matching the frontend Member interface.

use serde::{Deserialize, Serialize};

use super::optional_year;

/// One of the fixed groups members are listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberCategory {
    Coordinators,
    Professors,
    CurrentStudents,
    Alumni,
}

impl MemberCategory {
    /// Categories in the order they are scanned and displayed.
    pub const ALL: [MemberCategory; 4] = [
        MemberCategory::Coordinators,
        MemberCategory::Professors,
        MemberCategory::CurrentStudents,
        MemberCategory::Alumni,
    ];

    /// Table name used in the content file.
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberCategory::Coordinators => "coordinators",
            MemberCategory::Professors => "professors",
            MemberCategory::CurrentStudents => "current_students",
            MemberCategory::Alumni => "alumni",
        }
    }

    /// Heading shown above the category on the members page.
    pub fn label(&self) -> &'static str {
        match self {
            MemberCategory::Coordinators => "Coordenação",
            MemberCategory::Professors => "Professores Colaboradores",
            MemberCategory::CurrentStudents => "Estudantes Atuais",
            MemberCategory::Alumni => "Egressos",
        }
    }
}

impl std::fmt::Display for MemberCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lab participant as declared in `members.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research_area: Option<String>,
    #[serde(
        default,
        deserialize_with = "optional_year",
        skip_serializing_if = "Option::is_none"
    )]
    pub graduation_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thesis_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lattes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Member {
    /// Up to two uppercase initials taken from the first words of the name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// All members grouped by category, plus the research areas list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MembersData {
    pub coordinators: Vec<Member>,
    pub professors: Vec<Member>,
    pub current_students: Vec<Member>,
    pub alumni: Vec<Member>,
    pub research_areas: Vec<String>,
}

impl MembersData {
    /// Members of a single category in declaration order.
    pub fn category(&self, category: MemberCategory) -> &[Member] {
        match category {
            MemberCategory::Coordinators => &self.coordinators,
            MemberCategory::Professors => &self.professors,
            MemberCategory::CurrentStudents => &self.current_students,
            MemberCategory::Alumni => &self.alumni,
        }
    }

    /// Iterate categories in scan order.
    pub fn categories(&self) -> impl Iterator<Item = (MemberCategory, &[Member])> {
        MemberCategory::ALL
            .into_iter()
            .map(move |category| (category, self.category(category)))
    }

    /// Total number of members across all categories.
    pub fn len(&self) -> usize {
        self.categories().map(|(_, members)| members.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
