pub mod checklist;
pub mod health;
pub mod introduce;
pub mod tdd;

use crate::error::AppError;
use serde::Deserialize;
use std::path::PathBuf;

/// Body shared by every repository-scoped endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoRequest {
    pub repo_path: String,
    #[serde(default)]
    pub dry_run: Option<bool>,
    #[serde(default)]
    pub language: Option<String>,
}

impl RepoRequest {
    /// The repository root as an absolute path, relative paths resolved
    /// against the server's working directory.
    pub fn root(&self) -> Result<PathBuf, AppError> {
        if self.repo_path.trim().is_empty() {
            return Err(AppError::bad_request("repoPath must not be empty"));
        }
        Ok(std::path::absolute(&self.repo_path)?)
    }

    /// Language hint, with blank strings treated as absent.
    pub fn language(&self) -> Option<String> {
        self.language
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
    }
}
