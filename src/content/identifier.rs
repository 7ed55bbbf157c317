//! URL identifiers derived from display names, and lookups by identifier.

use deunicode::deunicode_char;
use serde::Serialize;

use crate::models::{Member, MemberCategory, MembersData, Project, ProjectsData};

/// Derive the URL-safe identifier for a display name.
///
/// Converts "Análise de Risco Financeiro" → "analise-de-risco-financeiro".
pub fn derive_identifier(name: &str) -> String {
    let folded: String = name
        .chars()
        .flat_map(|c| {
            // Fold accented letters to their base form; ASCII passes through untouched.
            let base = if c.is_ascii() {
                None
            } else {
                deunicode_char(c).filter(|s| s.chars().all(|b| b.is_ascii_alphanumeric()))
            };
            match base {
                Some(s) => s.chars().collect::<Vec<_>>(),
                None => vec![c],
            }
        })
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect();

    folded
        .split(|c: char| c == '-' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// A member found by identifier together with the category it is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MemberMatch<'a> {
    pub member: &'a Member,
    pub category: MemberCategory,
}

/// Find the first member whose derived identifier equals `identifier`.
///
/// Categories are scanned in [`MemberCategory::ALL`] order and members in declaration order.
pub fn resolve_member<'a>(data: &'a MembersData, identifier: &str) -> Option<MemberMatch<'a>> {
    data.categories().find_map(|(category, members)| {
        members
            .iter()
            .find(|member| derive_identifier(&member.name) == identifier)
            .map(|member| MemberMatch { member, category })
    })
}

/// Find the first project whose derived identifier equals `identifier`.
pub fn resolve_project<'a>(data: &'a ProjectsData, identifier: &str) -> Option<&'a Project> {
    data.projects
        .iter()
        .find(|project| derive_identifier(&project.name) == identifier)
}

/// Identifiers of every member, in scan order.
pub fn member_identifiers(data: &MembersData) -> Vec<String> {
    data.categories()
        .flat_map(|(_, members)| members.iter().map(|m| derive_identifier(&m.name)))
        .collect()
}

/// Identifiers of every project, in declaration order.
pub fn project_identifiers(data: &ProjectsData) -> Vec<String> {
    data.projects
        .iter()
        .map(|p| derive_identifier(&p.name))
        .collect()
}
