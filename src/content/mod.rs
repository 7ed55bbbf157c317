//! Static site content: members and projects read from TOML files.
//!
//! Content is loaded through an explicit step and handed to consumers. Whether it is read once
//! at start up or on every request is decided by [`ContentStore`], not by the callers.

mod identifier;
mod loader;

pub use identifier::*;
pub use loader::*;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::models::{MembersData, Project, ProjectsData};

/// Content could not be turned into a valid collection.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("failed to read content file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {source_name}: {source}")]
    Parse {
        source_name: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid content in {source_name}: {message}")]
    Invalid { source_name: String, message: String },

    #[error(
        "duplicate identifier {identifier:?} in {source_name} ({scope}): {first:?} and {second:?}"
    )]
    DuplicateIdentifier {
        source_name: String,
        scope: String,
        identifier: String,
        first: String,
        second: String,
    },

    #[error("content load task failed")]
    Interrupted {
        #[source]
        source: tokio::task::JoinError,
    },
}

/// Parsed content shared between requests when caching is enabled.
#[derive(Debug)]
struct Snapshot {
    members: Arc<MembersData>,
    projects: Arc<ProjectsData>,
}

/// Source of members and projects for request handlers.
#[derive(Debug)]
pub struct ContentStore {
    content_dir: PathBuf,
    snapshot: Option<Snapshot>,
}

impl ContentStore {
    /// Read and validate both content files once; later calls return the same data.
    pub fn cached(content_dir: impl Into<PathBuf>) -> Result<Self, ConfigurationError> {
        let content_dir = content_dir.into();
        let snapshot = Snapshot {
            members: Arc::new(load_members(&content_dir)?),
            projects: Arc::new(load_projects(&content_dir)?),
        };

        tracing::info!(
            members = snapshot.members.len(),
            projects = snapshot.projects.projects.len(),
            "Content loaded from {:?}",
            content_dir
        );

        Ok(Self {
            content_dir,
            snapshot: Some(snapshot),
        })
    }

    /// Re-read the content files on every call.
    pub fn reloading(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
            snapshot: None,
        }
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    pub async fn members(&self) -> Result<Arc<MembersData>, ConfigurationError> {
        match &self.snapshot {
            Some(snapshot) => Ok(Arc::clone(&snapshot.members)),
            None => self.reload(load_members).await,
        }
    }

    pub async fn projects(&self) -> Result<Arc<ProjectsData>, ConfigurationError> {
        match &self.snapshot {
            Some(snapshot) => Ok(Arc::clone(&snapshot.projects)),
            None => self.reload(load_projects).await,
        }
    }

    /// Load the project collection and return the project addressed by `identifier`.
    ///
    /// `Ok(None)` means no project derives that identifier.
    pub async fn project_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<Project>, ConfigurationError> {
        let projects = self.projects().await?;
        Ok(resolve_project(&projects, identifier).cloned())
    }

    /// Run a loader on the blocking pool so file reads stay off the async workers.
    async fn reload<T: Send + 'static>(
        &self,
        load: fn(&Path) -> Result<T, ConfigurationError>,
    ) -> Result<Arc<T>, ConfigurationError> {
        let content_dir = self.content_dir.clone();
        tokio::task::spawn_blocking(move || load(&content_dir))
            .await
            .map_err(|source| ConfigurationError::Interrupted { source })?
            .map(Arc::new)
    }
}
