use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const MCP_DIR: &str = ".mcp";
pub const CHECKLIST_FILE: &str = "checklist.yaml";
pub const README_MD: &str = "README.md";

/// File extensions recognized as checklist documents.
pub const CHECKLIST_EXTENSIONS: [&str; 2] = [".yaml", ".yml"];

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn mcp_dir(root: &Path) -> PathBuf {
    root.join(MCP_DIR)
}

pub fn checklist_path(root: &Path) -> PathBuf {
    mcp_dir(root).join(CHECKLIST_FILE)
}

pub fn readme_path(root: &Path) -> PathBuf {
    root.join(README_MD)
}

/// True if `name` ends with one of the recognized checklist extensions.
pub fn is_checklist_name(name: &str) -> bool {
    CHECKLIST_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Repository name as used in generated metadata: the last path component.
pub fn repo_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checklist_path_is_under_mcp_dir() {
        let root = Path::new("/repo");
        assert_eq!(checklist_path(root), PathBuf::from("/repo/.mcp/checklist.yaml"));
    }

    #[test]
    fn recognizes_both_extensions() {
        assert!(is_checklist_name("checklist.yaml"));
        assert!(is_checklist_name("tasks.yml"));
        assert!(!is_checklist_name("notes.md"));
        assert!(!is_checklist_name("yaml"));
    }

    #[test]
    fn repo_name_is_basename() {
        assert_eq!(repo_name(Path::new("/home/dev/widget")), "widget");
        assert_eq!(repo_name(Path::new("/")), "/");
    }
}
