//! Member API endpoints.

use axum::extract::{Path, State};
use serde::Serialize;

use super::{success, ApiResult, Identified};
use crate::content::resolve_member;
use crate::errors::AppError;
use crate::models::{Member, MemberCategory};
use crate::AppState;

/// One category section of the members page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSection {
    pub category: MemberCategory,
    pub label: &'static str,
    pub members: Vec<Identified<Member>>,
}

/// Members page content.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembersDirectory {
    pub categories: Vec<MemberSection>,
    pub research_areas: Vec<String>,
}

/// A single member together with where it is listed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProfile {
    pub identifier: String,
    pub category: MemberCategory,
    pub category_label: &'static str,
    pub initials: String,
    pub member: Member,
}

/// GET /api/members - List all members grouped by category.
pub async fn list_members(State(state): State<AppState>) -> ApiResult<MembersDirectory> {
    let data = state.content.members().await?;

    let categories = data
        .categories()
        .map(|(category, members)| MemberSection {
            category,
            label: category.label(),
            members: members
                .iter()
                .map(|m| Identified::new(&m.name, m.clone()))
                .collect(),
        })
        .collect();

    success(MembersDirectory {
        categories,
        research_areas: data.research_areas.clone(),
    })
}

/// GET /api/members/{identifier} - Get a single member.
pub async fn get_member(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> ApiResult<MemberProfile> {
    let data = state.content.members().await?;

    let Some(found) = resolve_member(&data, &identifier) else {
        return Err(AppError::NotFound(format!("Member {} not found", identifier)));
    };

    success(MemberProfile {
        identifier,
        category: found.category,
        category_label: found.category.label(),
        initials: found.member.initials(),
        member: found.member.clone(),
    })
}
