//! Project model matching the frontend Project interface.

use serde::{Deserialize, Serialize};

use super::{optional_year, year};

/// Lifecycle stage of a research project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "Ativo")]
    Active,
    #[serde(rename = "Concluído")]
    Completed,
    #[serde(rename = "Em Planejamento")]
    Planned,
}

impl ProjectStatus {
    /// Statuses in the order offered by the status filter.
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Active,
        ProjectStatus::Completed,
        ProjectStatus::Planned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Ativo",
            ProjectStatus::Completed => "Concluído",
            ProjectStatus::Planned => "Em Planejamento",
        }
    }

    /// Status whose label is exactly `label`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == label)
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A research initiative as declared in `projects.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub research_area: String,
    pub status: ProjectStatus,
    #[serde(deserialize_with = "year")]
    pub year_started: String,
    #[serde(
        default,
        deserialize_with = "optional_year",
        skip_serializing_if = "Option::is_none"
    )]
    pub year_ended: Option<String>,
    pub participants: Vec<String>,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_url: Option<String>,
    #[serde(rename = "abstract")]
    pub summary: String,
}

impl Project {
    /// Active project without an end year.
    pub fn is_ongoing(&self) -> bool {
        self.status == ProjectStatus::Active && self.year_ended.is_none()
    }

    /// Human-readable period, e.g. `2021 - 2023` or `2022 - Em andamento`.
    pub fn period_label(&self) -> String {
        match &self.year_ended {
            Some(end) => format!("{} - {}", self.year_started, end),
            None if self.is_ongoing() => format!("{} - Em andamento", self.year_started),
            None => self.year_started.clone(),
        }
    }
}

/// The full project collection plus the research areas offered as filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectsData {
    pub projects: Vec<Project>,
    pub research_areas: Vec<String>,
}
