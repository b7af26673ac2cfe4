use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Environment variable supplying the default repository path.
pub const REPO_ENV: &str = "MCP_REPO_PATH";

/// Resolve the repository root.
///
/// Priority (first non-empty wins):
/// 1. `--repo` flag
/// 2. `MCP_REPO_PATH` env var
/// 3. Positional path argument
/// 4. `cwd`
///
/// Relative paths are resolved against `cwd`.
pub fn resolve_repo(
    flag: Option<&Path>,
    env: Option<&OsStr>,
    positional: Option<&Path>,
    cwd: &Path,
) -> PathBuf {
    let chosen = [flag, env.map(Path::new), positional]
        .into_iter()
        .flatten()
        .find(|p| !p.as_os_str().is_empty())
        .unwrap_or(cwd);
    normalize(&cwd.join(chosen))
}

/// Lexically remove `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
