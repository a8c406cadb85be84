//! Durable storage for the task list
//!
//! The store is a single TOML document acting as a small key-value map with
//! two keys: `tasks` (the ordered task list) and `theme`. When the file cannot
//! be read or written, storage degrades to memory-only for the rest of the
//! session and never touches the file again.

use crate::error::StoreError;
use crate::git_ops::GitOps;
use crate::tasks::Task;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Current version of the TOML layout
pub const FORMAT_VERSION: u32 = 1;

/// UI colour scheme preference, stored under the `theme` key
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    light,
    dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::light => Theme::dark,
            Theme::dark => Theme::light,
        }
    }
}

impl FromStr for Theme {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::light),
            "dark" => Ok(Theme::dark),
            other => Err(StoreError::InvalidTheme(other.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::light => "light",
            Theme::dark => "dark",
        })
    }
}

/// Everything read back from the storage file
#[derive(Debug, Default, Deserialize)]
pub struct StorageDocument {
    #[serde(default)]
    pub format_version: u32,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Serialize)]
struct StorageDocumentRef<'a> {
    format_version: u32,
    theme: Theme,
    tasks: &'a [Task],
}

/// Whether saves reach the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persistence {
    /// Saves are written to the storage file
    Durable,
    /// No file configured; nothing is ever written
    Ephemeral,
    /// The file failed; kept in memory for the rest of the session
    Degraded(String),
}

pub struct Storage {
    file_path: Option<PathBuf>,
    git_ops: Option<GitOps>,
    persistence: Persistence,
}

impl Storage {
    /// Storage backed by a TOML file, optionally committing each save to git
    pub fn new(file_path: impl AsRef<Path>, git_commit: bool) -> Self {
        let file_path = file_path.as_ref().to_path_buf();
        let git_ops = git_commit.then(|| GitOps::new(&file_path));
        if let Some(git) = &git_ops
            && !git.is_git_managed()
        {
            tracing::warn!(
                path = %file_path.display(),
                "git commit requested but the file is not inside a git repository"
            );
        }

        Self {
            file_path: Some(file_path),
            git_ops,
            persistence: Persistence::Durable,
        }
    }

    /// Storage that never touches the filesystem
    pub fn in_memory() -> Self {
        Self {
            file_path: None,
            git_ops: None,
            persistence: Persistence::Ephemeral,
        }
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn persistence(&self) -> &Persistence {
        &self.persistence
    }

    /// Stop writing to the file for the rest of the session
    pub fn degrade(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        tracing::error!(%reason, "storage unavailable, continuing in memory only");
        self.persistence = Persistence::Degraded(reason);
    }

    /// Read the storage document; a missing file is an empty document
    pub fn load(&self) -> Result<StorageDocument> {
        let path = match (&self.file_path, &self.persistence) {
            (Some(path), Persistence::Durable) => path,
            _ => return Ok(StorageDocument::default()),
        };

        if !path.exists() {
            tracing::info!(path = %path.display(), "storage file not found, starting empty");
            return Ok(StorageDocument::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let document: StorageDocument = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::debug!(
            tasks = document.tasks.len(),
            format_version = document.format_version,
            "loaded storage document"
        );
        Ok(document)
    }

    /// Write the full task list and theme, then commit if git is enabled
    ///
    /// Does nothing unless storage is durable. Git failures are logged only.
    pub fn save(&self, tasks: &[Task], theme: Theme, message: &str) -> Result<()> {
        let path = match (&self.file_path, &self.persistence) {
            (Some(path), Persistence::Durable) => path,
            _ => return Ok(()),
        };

        let document = StorageDocumentRef {
            format_version: FORMAT_VERSION,
            theme,
            tasks,
        };
        let content = toml::to_string_pretty(&document).context("Failed to serialize tasks")?;
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;

        if let Some(git) = &self.git_ops {
            match git.commit(path, message) {
                Ok(true) => tracing::debug!(%message, "committed storage file"),
                Ok(false) => {}
                Err(e) => tracing::warn!(error = %e, "git commit failed"),
            }
        }

        Ok(())
    }
}
