use crate::output::{print_json, say};
use anyhow::Context;
use checklist_core::{ensure_checklist, EnsureOptions, EnsureOutcome};
use serde::Serialize;
use std::path::Path;

pub fn run(root: &Path, dry_run: bool, language: Option<&str>, json: bool) -> anyhow::Result<()> {
    let opts = EnsureOptions {
        dry_run,
        language: language.map(str::to_string),
    };
    let outcome = ensure_checklist(root, &opts)
        .with_context(|| format!("failed to ensure checklist in {}", root.display()))?;

    if json {
        #[derive(Serialize)]
        struct EnsureOutput<'a> {
            repo: &'a Path,
            #[serde(flatten)]
            outcome: &'a EnsureOutcome,
        }
        return print_json(&EnsureOutput {
            repo: root,
            outcome: &outcome,
        });
    }

    say(format_args!("Repo: {}", root.display()));
    match &outcome {
        EnsureOutcome::Found { paths } => {
            say(format_args!("Found {} checklist(s):", paths.len()));
            for path in paths {
                println!(" - {}", path.display());
            }
        }
        EnsureOutcome::Preview { content, .. } => {
            say("No checklist found. Generating from README.md...");
            say("DRY RUN: would create .mcp directory and write checklist.yaml with content:");
            println!("---");
            print!("{content}");
            println!("---");
        }
        EnsureOutcome::Written { path } => {
            say("No checklist found. Generating from README.md...");
            say(format_args!("Wrote {}", path.display()));
        }
    }
    Ok(())
}
