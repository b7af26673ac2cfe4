//! Best-effort extraction of the "MCP Job" section from README text.

use crate::io::read_or_empty;
use crate::paths;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Heading text that names the job section, also used by generated checklists.
pub const JOB_SECTION: &str = "MCP Job";

/// How many non-blank lines after the title the fallback keeps.
const FALLBACK_LINES: usize = 5;

static JOB_HEADING_RE: OnceLock<Regex> = OnceLock::new();
static SECTION_BREAK_RE: OnceLock<Regex> = OnceLock::new();

fn job_heading_re() -> &'static Regex {
    JOB_HEADING_RE.get_or_init(|| Regex::new(r"(?i)^(##|###)\s+MCP\s+Job").unwrap())
}

fn section_break_re() -> &'static Regex {
    SECTION_BREAK_RE.get_or_init(|| Regex::new(r"^##\s+|^###\s+").unwrap())
}

/// Read `<root>/README.md`, yielding an empty string when it is missing or unreadable.
pub fn read_readme(root: &Path) -> String {
    read_or_empty(&paths::readme_path(root))
}

/// Extract the job description from README text.
///
/// With a `## MCP Job` / `### MCP Job` heading, returns the trimmed lines up
/// to the next level-2 or level-3 heading. Without one, returns up to five
/// non-blank lines following the first non-blank line (the title).
pub fn extract_job_section(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    // `str::lines` strips both "\n" and "\r\n" terminators.
    let lines: Vec<&str> = text.lines().collect();

    if let Some(start) = lines.iter().position(|l| job_heading_re().is_match(l)) {
        let section: Vec<&str> = lines[start + 1..]
            .iter()
            .take_while(|l| !section_break_re().is_match(l))
            .copied()
            .collect();
        return section.join("\n").trim().to_string();
    }

    let non_blank: Vec<&str> = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .copied()
        .collect();
    if non_blank.len() > 1 {
        return non_blank
            .iter()
            .skip(1)
            .take(FALLBACK_LINES)
            .copied()
            .collect::<Vec<_>>()
            .join("\n");
    }
    String::new()
}
