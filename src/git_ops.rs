use anyhow::{Context, Result};
use git2::{Repository, Signature, Time};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Local git history for the task file
///
/// Only commits; nothing is fetched from or pushed to a remote.
pub struct GitOps {
    repo: Option<Arc<Mutex<Repository>>>,
}

impl GitOps {
    /// Create a new GitOps instance by detecting if the path is in a git repository
    pub fn new(file_path: &Path) -> Self {
        let file_dir = match file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => Path::new(".").to_path_buf(),
        };

        let repo = Repository::discover(&file_dir)
            .ok()
            .map(|r| Arc::new(Mutex::new(r)));
        Self { repo }
    }

    /// Check if the file is under git version control
    pub fn is_git_managed(&self) -> bool {
        self.repo.is_some()
    }

    /// Commit the current content of `file_path`
    ///
    /// Returns `Ok(false)` when the file is outside a repository or the tree
    /// is unchanged since HEAD.
    pub fn commit(&self, file_path: &Path, message: &str) -> Result<bool> {
        let repo = match &self.repo {
            Some(r) => r
                .lock()
                .map_err(|_| anyhow::anyhow!("git repository lock poisoned"))?,
            None => return Ok(false),
        };

        let repo_workdir = repo
            .workdir()
            .context("Repository has no working directory")?
            .canonicalize()
            .context("Failed to resolve repository working directory")?;
        let absolute_path = file_path
            .canonicalize()
            .with_context(|| format!("Failed to resolve {}", file_path.display()))?;
        let relative_path = absolute_path
            .strip_prefix(&repo_workdir)
            .context("File is not in repository")?;

        let mut index = repo.index()?;
        index.add_path(relative_path)?;
        index.write()?;

        let tree_id = index.write_tree()?;
        let tree = repo.find_tree(tree_id)?;

        let parent_commit = match repo.head() {
            Ok(head) => {
                let oid = head.target().context("HEAD has no target")?;
                Some(repo.find_commit(oid)?)
            }
            Err(_) => None, // Initial commit
        };

        if let Some(parent) = &parent_commit
            && parent.tree_id() == tree_id
        {
            return Ok(false);
        }

        let signature = Self::get_signature(&repo)?;
        let parents: Vec<_> = parent_commit.iter().collect();

        repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )?;

        Ok(true)
    }

    /// Get or create a git signature for commits
    fn get_signature(repo: &Repository) -> Result<Signature<'_>> {
        let config = repo.config()?;

        let name = config
            .get_string("user.name")
            .unwrap_or_else(|_| "Taskpad MCP Server".to_string());

        let email = config
            .get_string("user.email")
            .unwrap_or_else(|_| "taskpad-mcp@localhost".to_string());

        match Signature::now(&name, &email) {
            Ok(sig) => Ok(sig),
            Err(_) => {
                // Fallback to a fixed time if now() fails (e.g., on some CI systems)
                let time = Time::new(1_700_000_000, 0);
                Signature::new(&name, &email, &time)
                    .context("Failed to create signature with fixed time")
            }
        }
    }
}
