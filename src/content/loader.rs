//! TOML content loading and validation.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::identifier::derive_identifier;
use super::ConfigurationError;
use crate::models::{Member, MembersData, Project, ProjectStatus, ProjectsData};

/// File name of the members table inside the content directory.
pub const MEMBERS_FILE: &str = "members.toml";
/// File name of the projects table inside the content directory.
pub const PROJECTS_FILE: &str = "projects.toml";

/// `[[<category>.member]]` array of tables.
#[derive(Debug, Deserialize)]
struct CategoryTable {
    #[serde(default)]
    member: Vec<Member>,
}

#[derive(Debug, Deserialize)]
struct ResearchAreasTable {
    areas: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct MembersFile {
    coordinators: CategoryTable,
    professors: CategoryTable,
    current_students: CategoryTable,
    alumni: CategoryTable,
    research_areas: ResearchAreasTable,
}

#[derive(Debug, Deserialize)]
struct ProjectsFile {
    projects: Vec<Project>,
    research_areas: ResearchAreasTable,
}

/// Load and validate `members.toml` from the content directory.
pub fn load_members(content_dir: &Path) -> Result<MembersData, ConfigurationError> {
    let path = content_dir.join(MEMBERS_FILE);
    let contents = read(&path)?;
    parse_members(&contents, &path.display().to_string())
}

/// Load and validate `projects.toml` from the content directory.
pub fn load_projects(content_dir: &Path) -> Result<ProjectsData, ConfigurationError> {
    let path = content_dir.join(PROJECTS_FILE);
    let contents = read(&path)?;
    parse_projects(&contents, &path.display().to_string())
}

/// Parse members content. `source` names the origin in error messages.
pub fn parse_members(contents: &str, source: &str) -> Result<MembersData, ConfigurationError> {
    let file: MembersFile = toml::from_str(contents).map_err(|e| ConfigurationError::Parse {
        source_name: source.to_string(),
        source: e,
    })?;

    let data = MembersData {
        coordinators: file.coordinators.member,
        professors: file.professors.member,
        current_students: file.current_students.member,
        alumni: file.alumni.member,
        research_areas: file.research_areas.areas,
    };

    // Member identifiers share one namespace across categories.
    check_names(
        source,
        "members",
        data.categories()
            .flat_map(|(_, members)| members.iter().map(|m| m.name.as_str())),
    )?;

    tracing::debug!(
        source,
        members = data.len(),
        areas = data.research_areas.len(),
        "Loaded members"
    );
    Ok(data)
}

/// Parse projects content. `source` names the origin in error messages.
pub fn parse_projects(contents: &str, source: &str) -> Result<ProjectsData, ConfigurationError> {
    let file: ProjectsFile = toml::from_str(contents).map_err(|e| ConfigurationError::Parse {
        source_name: source.to_string(),
        source: e,
    })?;

    check_names(source, "projects", file.projects.iter().map(|p| p.name.as_str()))?;

    for project in &file.projects {
        if project.status == ProjectStatus::Active && project.year_ended.is_some() {
            tracing::warn!(
                source,
                project = %project.name,
                "Active project declares year_ended; it will not be shown as ongoing"
            );
        }
        if !file.research_areas.areas.contains(&project.research_area) {
            tracing::debug!(
                source,
                project = %project.name,
                area = %project.research_area,
                "Project research area is not listed in research_areas"
            );
        }
    }

    let data = ProjectsData {
        projects: file.projects,
        research_areas: file.research_areas.areas,
    };

    tracing::debug!(
        source,
        projects = data.projects.len(),
        areas = data.research_areas.len(),
        "Loaded projects"
    );
    Ok(data)
}

fn read(path: &Path) -> Result<String, ConfigurationError> {
    std::fs::read_to_string(path).map_err(|e| ConfigurationError::Read {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Reject blank names and names whose identifiers are empty or collide within `scope`.
fn check_names<'a>(
    source: &str,
    scope: &str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), ConfigurationError> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    for (index, name) in names.enumerate() {
        if name.trim().is_empty() {
            return Err(ConfigurationError::Invalid {
                source_name: source.to_string(),
                message: format!("{} entry #{} has an empty name", scope, index + 1),
            });
        }

        let identifier = derive_identifier(name);
        if identifier.is_empty() {
            return Err(ConfigurationError::Invalid {
                source_name: source.to_string(),
                message: format!("{} entry {:?} does not yield a usable identifier", scope, name),
            });
        }

        if let Some(first) = seen.get(&identifier) {
            return Err(ConfigurationError::DuplicateIdentifier {
                source_name: source.to_string(),
                scope: scope.to_string(),
                identifier,
                first: first.to_string(),
                second: name.to_string(),
            });
        }
        seen.insert(identifier, name);
    }

    Ok(())
}
