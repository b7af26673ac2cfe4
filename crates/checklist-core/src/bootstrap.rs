//! Dependency install and test execution for a repository.
//!
//! Commands are chosen from an explicit language, or detected from the same
//! manifest files the generated checklist guards its steps with. Every
//! planned command runs even if an earlier one fails; the report is `ok` only
//! when all of them exit 0.

use crate::predicate::Predicate;
use serde::Serialize;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;
use wait_timeout::ChildExt;

/// Per-command wall clock limit.
pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(900);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    Go,
    Rust,
    Java,
    Cpp,
}

impl Language {
    /// Parse a user-supplied language name. Unknown names yield `None`,
    /// which selects manifest-based detection.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "python" | "py" => Some(Language::Python),
            "javascript" | "node" | "js" => Some(Language::JavaScript),
            "go" | "golang" => Some(Language::Go),
            "rust" => Some(Language::Rust),
            "java" => Some(Language::Java),
            "cpp" | "c++" => Some(Language::Cpp),
            _ => None,
        }
    }
}

/// Commands to run, or the reason nothing can run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pub commands: Vec<Vec<String>>,
    pub error: Option<String>,
}

impl Plan {
    fn push(&mut self, argv: &[&str]) {
        self.commands.push(argv.iter().map(|s| s.to_string()).collect());
    }

    fn fail(mut self, msg: impl Into<String>) -> Self {
        self.error = Some(msg.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    pub cmd: Vec<String>,
    /// Exit code; -1 when the command could not be spawned, timed out or was
    /// killed by a signal.
    pub code: i32,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BootstrapReport {
    pub ok: bool,
    pub results: Vec<CommandResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn has(root: &Path, file: &str) -> bool {
    Predicate::file_exists(file).holds(root)
}

fn unavailable(what: &str) -> String {
    format!("{what} not available on PATH")
}

fn plan_python(root: &Path, available: &dyn Fn(&str) -> bool, plan: &mut Plan) {
    plan.push(&["pip", "install", "-U", "pip"]);
    if has(root, "pyproject.toml") {
        plan.push(&["pip", "install", "-e", "."]);
    } else if has(root, "requirements.txt") {
        plan.push(&["pip", "install", "-r", "requirements.txt"]);
    }
    if available("pytest") {
        plan.push(&["pytest", "-q"]);
    }
}

fn plan_node(plan: &mut Plan) {
    plan.push(&["npm", "ci"]);
    plan.push(&["npm", "test", "--silent"]);
}

fn plan_go(plan: &mut Plan) {
    plan.push(&["go", "mod", "download"]);
    plan.push(&["go", "test", "./..."]);
}

/// Decide which commands to run. `available` reports whether a program is on PATH.
pub fn plan(root: &Path, language: Option<Language>, available: &dyn Fn(&str) -> bool) -> Plan {
    let mut plan = Plan::default();
    match language {
        Some(Language::Python) => plan_python(root, available, &mut plan),
        Some(Language::JavaScript) => {
            if !available("npm") {
                return plan.fail(unavailable("npm"));
            }
            if has(root, "package.json") {
                plan_node(&mut plan);
            }
        }
        Some(Language::Go) => {
            if has(root, "go.mod") {
                plan_go(&mut plan);
            }
        }
        Some(Language::Rust) => {
            if !available("cargo") {
                return plan.fail(unavailable("cargo"));
            }
            plan.push(&["cargo", "test"]);
        }
        Some(Language::Java) => {
            if !available("mvn") && !available("gradle") {
                return plan.fail(unavailable("mvn or gradle"));
            }
            if has(root, "pom.xml") {
                plan.push(&["mvn", "-q", "-DskipTests=false", "test"]);
            } else if has(root, "build.gradle") || has(root, "build.gradle.kts") {
                plan.push(&["gradle", "test"]);
            }
        }
        Some(Language::Cpp) => {
            return plan.fail("C++ projects need a project-specific build; not supported");
        }
        None => {
            if has(root, "package.json") && available("npm") {
                plan_node(&mut plan);
            }
            if has(root, "pyproject.toml") || has(root, "requirements.txt") {
                plan_python(root, available, &mut plan);
            }
            if has(root, "go.mod") {
                plan_go(&mut plan);
            }
        }
    }
    plan
}

fn on_path(program: &str) -> bool {
    which::which(program).is_ok()
}

/// Run one command in `cwd`, capturing stdout and stderr together.
pub fn run_command(argv: &[String], cwd: &Path, timeout: Duration) -> CommandResult {
    let result = |code: i32, output: String| CommandResult {
        cmd: argv.to_vec(),
        code,
        output,
    };
    let Some((program, args)) = argv.split_first() else {
        return result(-1, "Error: empty command".to_string());
    };

    // A file sink instead of pipes: a chatty child cannot block on a full pipe
    // while we wait on it.
    let spawn = || -> std::io::Result<(std::process::Child, std::fs::File)> {
        let sink = tempfile::tempfile()?;
        let child = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(sink.try_clone()?)
            .stderr(sink.try_clone()?)
            .spawn()?;
        Ok((child, sink))
    };
    let (mut child, mut sink) = match spawn() {
        Ok(pair) => pair,
        Err(e) => return result(-1, format!("Error: {e}")),
    };

    tracing::debug!(cmd = ?argv, cwd = %cwd.display(), "running");
    let status = match child.wait_timeout(timeout) {
        Ok(Some(status)) => status,
        Ok(None) => {
            let _ = child.kill();
            let _ = child.wait();
            tracing::warn!(cmd = ?argv, "command timed out");
            return result(-1, format!("Timeout: exceeded {}s", timeout.as_secs()));
        }
        Err(e) => return result(-1, format!("Error: {e}")),
    };

    let mut bytes = Vec::new();
    if let Err(e) = sink
        .seek(SeekFrom::Start(0))
        .and_then(|_| sink.read_to_end(&mut bytes))
    {
        tracing::warn!(error = %e, "failed to read command output");
    }
    result(
        status.code().unwrap_or(-1),
        String::from_utf8_lossy(&bytes).into_owned(),
    )
}

/// Install dependencies and run tests for the repository at `root`.
pub fn bootstrap_and_test(root: &Path, language: Option<Language>) -> BootstrapReport {
    let plan = plan(root, language, &on_path);
    let results: Vec<CommandResult> = plan
        .commands
        .iter()
        .map(|argv| run_command(argv, root, COMMAND_TIMEOUT))
        .collect();
    let ok = plan.error.is_none() && results.iter().all(|r| r.code == 0);
    tracing::info!(root = %root.display(), ?language, ok, commands = results.len(), "bootstrap finished");
    BootstrapReport {
        ok,
        results,
        error: plan.error,
    }
}
