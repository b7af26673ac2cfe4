//! Locate-or-synthesize orchestration for a single repository.

use crate::checklist::Checklist;
use crate::error::Result;
use crate::{io, locate, paths, readme};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct EnsureOptions {
    /// Build the document but write nothing.
    pub dry_run: bool,
    /// Recorded as `metadata.default_language` when set.
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EnsureOutcome {
    /// Checklists already exist; nothing was generated.
    Found { paths: Vec<PathBuf> },
    /// Dry run: the document that would be written.
    Preview { path: PathBuf, content: String },
    Written { path: PathBuf },
}

/// Report existing checklists, or generate one from the README.
///
/// The write to `.mcp/checklist.yaml` happens only when the locator found no
/// checklist at all.
pub fn ensure_checklist(root: &Path, opts: &EnsureOptions) -> Result<EnsureOutcome> {
    let found = locate::find_checklists(root)?;
    if !found.is_empty() {
        tracing::info!(root = %root.display(), count = found.len(), "checklist already present");
        return Ok(EnsureOutcome::Found { paths: found });
    }

    let text = readme::read_readme(root);
    let job = readme::extract_job_section(&text);
    let checklist = Checklist::synthesize(&paths::repo_name(root), &job, opts.language.as_deref());
    let content = checklist.to_yaml()?;
    let path = paths::checklist_path(root);

    if opts.dry_run {
        return Ok(EnsureOutcome::Preview { path, content });
    }

    io::atomic_write(&path, content.as_bytes())?;
    tracing::info!(path = %path.display(), "wrote checklist");
    Ok(EnsureOutcome::Written { path })
}
