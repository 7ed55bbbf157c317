//! Project API endpoints.

use axum::extract::{Path, Query, State};
use serde::Serialize;

use super::{success, ApiResult, Identified};
use crate::content::{member_identifiers, project_identifiers};
use crate::errors::AppError;
use crate::filter::ProjectFilter;
use crate::models::{Project, ProjectStatus};
use crate::AppState;

/// A project with the display fields derived from it.
#[derive(Debug, Serialize)]
pub struct ProjectView {
    pub period: String,
    pub ongoing: bool,
    #[serde(flatten)]
    pub project: Project,
}

impl From<Project> for ProjectView {
    fn from(project: Project) -> Self {
        Self {
            period: project.period_label(),
            ongoing: project.is_ongoing(),
            project,
        }
    }
}

/// Filtered project list plus the options the filter controls offer.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListing {
    pub projects: Vec<Identified<ProjectView>>,
    pub shown: usize,
    pub total: usize,
    pub filter_active: bool,
    pub statuses: Vec<ProjectStatus>,
    pub research_areas: Vec<String>,
}

/// GET /api/projects - List projects, optionally filtered by `status`, `area` and `q`.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(filter): Query<ProjectFilter>,
) -> ApiResult<ProjectListing> {
    let data = state.content.projects().await?;
    let filtered = filter.apply(&data.projects);

    success(ProjectListing {
        shown: filtered.shown(),
        total: filtered.total,
        projects: filtered
            .projects
            .into_iter()
            .map(|p| Identified::new(&p.name, ProjectView::from(p.clone())))
            .collect(),
        filter_active: filter.is_active(),
        statuses: ProjectStatus::ALL.to_vec(),
        research_areas: data.research_areas.clone(),
    })
}

/// GET /api/projects/{identifier} - Get a single project.
pub async fn get_project(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> ApiResult<Identified<ProjectView>> {
    match state.content.project_by_identifier(&identifier).await? {
        Some(project) => success(Identified {
            identifier,
            record: ProjectView::from(project),
        }),
        None => Err(AppError::NotFound(format!(
            "Project {} not found",
            identifier
        ))),
    }
}

/// Every addressable identifier, for pre-rendering detail pages.
#[derive(Debug, Serialize)]
pub struct IdentifierIndex {
    pub members: Vec<String>,
    pub projects: Vec<String>,
}

/// GET /api/identifiers - List member and project identifiers.
pub async fn list_identifiers(State(state): State<AppState>) -> ApiResult<IdentifierIndex> {
    let members = state.content.members().await?;
    let projects = state.content.projects().await?;

    success(IdentifierIndex {
        members: member_identifiers(&members),
        projects: project_identifiers(&projects),
    })
}
