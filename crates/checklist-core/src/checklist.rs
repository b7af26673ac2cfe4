use crate::error::{ChecklistError, Result};
use crate::paths::README_MD;
use crate::predicate::Predicate;
use crate::readme::JOB_SECTION;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

pub const CHECKLIST_VERSION: u32 = 1;

const METADATA_DESCRIPTION: &str = "Tasks for the MCP agent to perform in this repository";
const OWNER: &str = "auto-generated";
const DEFAULT_BRANCH: &str = "main";

const SHELL_WHITELIST: &[&str] = &["npm", "pnpm", "yarn", "pytest", "go", "make"];
const EDIT_PATH_ALLOWLIST: &[&str] = &[
    "src/**",
    "tests/**",
    "README.md",
    "package.json",
    "pyproject.toml",
];

/// Install commands, each guarded by the manifests that trigger it.
const INSTALL_STEPS: &[(&[&str], &str)] = &[
    (&["package.json"], "npm ci"),
    (&["pyproject.toml"], "pip install -U pip && pip install -e ."),
    (
        &["requirements.txt"],
        "pip install -U pip && pip install -r requirements.txt",
    ),
    (&["go.mod"], "go mod download"),
];

const TEST_STEPS: &[(&[&str], &str)] = &[
    (&["package.json"], "npm test --silent"),
    (&["pyproject.toml", "pytest.ini"], "pytest -q"),
    (&["go.mod"], "go test ./..."),
];

pub const TASK_BOOTSTRAP: &str = "bootstrap-deps";
pub const TASK_TESTS: &str = "run-tests";
pub const TASK_JOB: &str = "job-from-readme";

// ---------------------------------------------------------------------------
// Document model
// ---------------------------------------------------------------------------

/// A checklist document as stored in `.mcp/*.yaml`.
///
/// Field order here is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    pub version: u32,
    pub metadata: Metadata,
    pub permissions: Permissions,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    pub description: String,
    pub owner: String,
    pub default_branch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    pub allow_shell: bool,
    pub allow_git: bool,
    pub allow_file_edits: bool,
    #[serde(default)]
    pub shell_whitelist: Vec<String>,
    #[serde(default)]
    pub edit_path_allowlist: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub success_criteria: Vec<String>,
}

/// One step of a task: an optional guard plus a single action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<Predicate>,
    #[serde(flatten)]
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Shell command.
    Run(String),
    /// File to read, relative to the repository root.
    Read(String),
    /// Named extraction from the last file read.
    Parse(String),
}

impl Step {
    pub fn run(cmd: impl Into<String>) -> Self {
        Self {
            when: None,
            action: Action::Run(cmd.into()),
        }
    }

    pub fn read(path: impl Into<String>) -> Self {
        Self {
            when: None,
            action: Action::Read(path.into()),
        }
    }

    pub fn parse(extraction: impl Into<String>) -> Self {
        Self {
            when: None,
            action: Action::Parse(extraction.into()),
        }
    }

    pub fn when(mut self, predicate: Predicate) -> Self {
        self.when = Some(predicate);
        self
    }
}

fn guarded_steps(table: &[(&[&str], &str)]) -> Vec<Step> {
    table
        .iter()
        .map(|(manifests, cmd)| {
            Step::run(*cmd).when(Predicate::any_file_exists(manifests.iter().copied()))
        })
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Synthesis
// ---------------------------------------------------------------------------

impl Checklist {
    /// Build the checklist for a repository with no existing one.
    ///
    /// `job_description` is the text extracted from the README; when empty a
    /// default naming the repository is used. Newlines are collapsed so the
    /// description stays a single-line field.
    pub fn synthesize(repo_name: &str, job_description: &str, language: Option<&str>) -> Self {
        let job = if job_description.is_empty() {
            format!("Automated job for {repo_name}.")
        } else {
            job_description.to_string()
        };

        Self {
            version: CHECKLIST_VERSION,
            metadata: Metadata {
                name: format!("{repo_name} Checklist"),
                description: METADATA_DESCRIPTION.to_string(),
                owner: OWNER.to_string(),
                default_branch: DEFAULT_BRANCH.to_string(),
                default_language: language.map(str::to_string),
            },
            permissions: Permissions {
                allow_shell: true,
                allow_git: true,
                allow_file_edits: true,
                shell_whitelist: strings(SHELL_WHITELIST),
                edit_path_allowlist: strings(EDIT_PATH_ALLOWLIST),
            },
            tasks: vec![
                Task {
                    id: TASK_BOOTSTRAP.to_string(),
                    title: "Install dependencies".to_string(),
                    description: "Ensure dependencies are installed for the project language"
                        .to_string(),
                    steps: guarded_steps(INSTALL_STEPS),
                    success_criteria: strings(&["No non-zero exit codes from install steps"]),
                },
                Task {
                    id: TASK_TESTS.to_string(),
                    title: "Run test suite".to_string(),
                    description: "Execute tests to validate current state".to_string(),
                    steps: guarded_steps(TEST_STEPS),
                    success_criteria: strings(&[
                        "All tests pass (zero failures)",
                        "Process exit code == 0",
                    ]),
                },
                Task {
                    id: TASK_JOB.to_string(),
                    title: "Execute the primary job described in README".to_string(),
                    description: job.replace('\n', " "),
                    steps: vec![
                        Step::read(README_MD),
                        Step::parse(format!("mcp_section(\"{JOB_SECTION}\")")),
                        Step::run("echo \"Executing job steps...\""),
                    ],
                    success_criteria: strings(&[
                        "Marked completion condition in README achieved",
                        "Exit code == 0",
                    ]),
                },
            ],
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        let checklist: Checklist = serde_yaml::from_str(text)?;
        checklist.validate()?;
        Ok(checklist)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_yaml(&data)
    }

    /// Task ids must be unique within a document.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for task in &self.tasks {
            if !seen.insert(task.id.as_str()) {
                return Err(ChecklistError::DuplicateTaskId(task.id.clone()));
            }
        }
        Ok(())
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }
}
