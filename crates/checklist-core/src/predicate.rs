//! Step guards of the form `file_exists("<path>")`, optionally joined with `or`.

use crate::error::ChecklistError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

static FILE_EXISTS_RE: OnceLock<Regex> = OnceLock::new();

fn file_exists_re() -> &'static Regex {
    FILE_EXISTS_RE.get_or_init(|| Regex::new(r#"^file_exists\("([^"]+)"\)$"#).unwrap())
}

/// A filesystem-presence condition, evaluated by the agent that runs the checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Predicate {
    FileExists(String),
    Any(Vec<Predicate>),
}

impl Predicate {
    pub fn file_exists(path: impl Into<String>) -> Self {
        Predicate::FileExists(path.into())
    }

    /// Disjunction over `paths`; a single path collapses to a plain term.
    pub fn any_file_exists<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut terms: Vec<Predicate> = paths.into_iter().map(Predicate::file_exists).collect();
        if terms.len() == 1 {
            terms.remove(0)
        } else {
            Predicate::Any(terms)
        }
    }

    /// Evaluate against a repository root.
    pub fn holds(&self, root: &Path) -> bool {
        match self {
            Predicate::FileExists(p) => root.join(p).exists(),
            Predicate::Any(terms) => terms.iter().any(|t| t.holds(root)),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::FileExists(p) => write!(f, "file_exists(\"{p}\")"),
            Predicate::Any(terms) => {
                for (i, term) in terms.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" or ")?;
                    }
                    write!(f, "{term}")?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for Predicate {
    type Err = ChecklistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut terms = Vec::new();
        for raw in s.split(" or ") {
            let caps = file_exists_re()
                .captures(raw.trim())
                .ok_or_else(|| ChecklistError::InvalidPredicate(s.to_string()))?;
            terms.push(Predicate::FileExists(caps[1].to_string()));
        }
        if terms.len() == 1 {
            Ok(terms.remove(0))
        } else {
            Ok(Predicate::Any(terms))
        }
    }
}

impl TryFrom<String> for Predicate {
    type Error = ChecklistError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Predicate> for String {
    fn from(p: Predicate) -> Self {
        p.to_string()
    }
}
