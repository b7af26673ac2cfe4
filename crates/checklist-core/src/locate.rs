//! Discovery of existing checklist documents under `<root>/.mcp/`.

use crate::checklist::Checklist;
use crate::error::Result;
use crate::paths;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// List checklist files in `<root>/.mcp/`, in directory enumeration order.
///
/// A missing `.mcp` directory is not an error: it yields an empty list.
pub fn find_checklists(root: &Path) -> Result<Vec<PathBuf>> {
    let dir = paths::mcp_dir(root);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    for entry in std::fs::read_dir(&dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        if paths::is_checklist_name(&name.to_string_lossy()) {
            found.push(entry.path());
        }
    }
    tracing::debug!(dir = %dir.display(), count = found.len(), "scanned for checklists");
    Ok(found)
}

/// A short description of one existing checklist document.
#[derive(Debug, Clone, Serialize)]
pub struct ChecklistSummary {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub tasks: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Find and parse every checklist under `<root>/.mcp/`.
///
/// Documents that fail to parse are still listed, with `error` set.
pub fn summarize_checklists(root: &Path) -> Result<Vec<ChecklistSummary>> {
    let summaries = find_checklists(root)?
        .into_iter()
        .map(|path| match Checklist::load(&path) {
            Ok(checklist) => ChecklistSummary {
                name: Some(checklist.metadata.name.clone()),
                tasks: checklist.tasks.iter().map(|t| t.id.clone()).collect(),
                error: None,
                path,
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable checklist");
                ChecklistSummary {
                    name: None,
                    tasks: Vec::new(),
                    error: Some(e.to_string()),
                    path,
                }
            }
        })
        .collect();
    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_mcp_dir_yields_nothing() {
        let dir = TempDir::new().unwrap();
        assert!(find_checklists(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn mcp_file_instead_of_dir_yields_nothing() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".mcp"), "not a dir").unwrap();
        assert!(find_checklists(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn finds_yaml_and_yml_only() {
        let dir = TempDir::new().unwrap();
        let mcp = dir.path().join(".mcp");
        std::fs::create_dir_all(mcp.join("nested.yaml")).unwrap();
        std::fs::write(mcp.join("a.yaml"), "version: 1\n").unwrap();
        std::fs::write(mcp.join("b.yml"), "version: 1\n").unwrap();
        std::fs::write(mcp.join("notes.md"), "# notes\n").unwrap();

        let mut found = find_checklists(dir.path()).unwrap();
        found.sort();
        assert_eq!(found, vec![mcp.join("a.yaml"), mcp.join("b.yml")]);
    }

    #[test]
    fn summaries_report_tasks_and_parse_errors() {
        let dir = TempDir::new().unwrap();
        let mcp = dir.path().join(".mcp");
        std::fs::create_dir_all(&mcp).unwrap();
        let generated = Checklist::synthesize("demo", "", None).to_yaml().unwrap();
        std::fs::write(mcp.join("checklist.yaml"), generated).unwrap();
        std::fs::write(mcp.join("broken.yml"), "tasks: [unclosed").unwrap();

        let mut summaries = summarize_checklists(dir.path()).unwrap();
        summaries.sort_by(|a, b| a.path.cmp(&b.path));
        assert_eq!(summaries.len(), 2);

        let broken = &summaries[0];
        assert!(broken.path.ends_with("broken.yml"));
        assert!(broken.error.is_some());

        let good = &summaries[1];
        assert_eq!(good.name.as_deref(), Some("demo Checklist"));
        assert_eq!(
            good.tasks,
            vec!["bootstrap-deps", "run-tests", "job-from-readme"]
        );
        assert!(good.error.is_none());
    }
}
