//! Project list filtering by status, research area and free text.
//!
//! Filtering is a pure function of the collection and the predicates, cheap enough to run on
//! every keystroke. Results keep the collection order.

use serde::{Deserialize, Serialize};

use crate::models::{Project, ProjectStatus};

/// Optional predicates applied to the project list. Empty values disable a predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFilter {
    /// Exact project status label, e.g. `Ativo`.
    #[serde(default)]
    pub status: Option<String>,
    /// Exact research area label.
    #[serde(default)]
    pub area: Option<String>,
    /// Case-insensitive substring searched in name, description and abstract.
    #[serde(default, rename = "q")]
    pub search: Option<String>,
}

/// Outcome of applying a [`ProjectFilter`].
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredProjects<'a> {
    pub projects: Vec<&'a Project>,
    pub total: usize,
}

impl FilteredProjects<'_> {
    pub fn shown(&self) -> usize {
        self.projects.len()
    }
}

fn active(predicate: &Option<String>) -> Option<&str> {
    predicate.as_deref().filter(|value| !value.is_empty())
}

impl ProjectFilter {
    pub fn new(
        status: Option<impl Into<String>>,
        area: Option<impl Into<String>>,
        search: Option<impl Into<String>>,
    ) -> Self {
        Self {
            status: status.map(Into::into),
            area: area.map(Into::into),
            search: search.map(Into::into),
        }
    }

    /// Whether any predicate is set.
    pub fn is_active(&self) -> bool {
        active(&self.status).is_some()
            || active(&self.area).is_some()
            || active(&self.search).is_some()
    }

    pub fn matches(&self, project: &Project) -> bool {
        let matches_status = active(&self.status).map_or(true, |s| {
            ProjectStatus::from_label(s) == Some(project.status)
        });
        let matches_area = active(&self.area).map_or(true, |a| project.research_area == a);
        let matches_search = active(&self.search).map_or(true, |term| {
            let term = term.to_lowercase();
            [&project.name, &project.description, &project.summary]
                .iter()
                .any(|field| field.to_lowercase().contains(&term))
        });

        matches_status && matches_area && matches_search
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> FilteredProjects<'a> {
        FilteredProjects {
            projects: projects.iter().filter(|p| self.matches(p)).collect(),
            total: projects.len(),
        }
    }
}

/// Visible subset of `projects` for the given predicates, in collection order.
pub fn filter_projects<'a>(
    projects: &'a [Project],
    status: Option<&str>,
    area: Option<&str>,
    search: Option<&str>,
) -> Vec<&'a Project> {
    ProjectFilter::new(status, area, search).apply(projects).projects
}
