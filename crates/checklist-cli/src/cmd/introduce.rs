use crate::output::{print_json, say};
use anyhow::Context;
use checklist_core::locate::summarize_checklists;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let checklists = summarize_checklists(root).context("failed to scan for checklists")?;

    if json {
        let value = serde_json::json!({
            "repo": root,
            "checklists": checklists,
            "has_checklist": !checklists.is_empty(),
        });
        return print_json(&value);
    }

    say(format_args!("Repo: {}", root.display()));
    if checklists.is_empty() {
        say("No checklist found. Run `mcp-checklist` to generate one.");
        return Ok(());
    }
    for c in &checklists {
        println!(" - {}", c.path.display());
        match (&c.name, &c.error) {
            (_, Some(err)) => println!("     unreadable: {err}"),
            (Some(name), None) => println!("     {name}: {}", c.tasks.join(", ")),
            (None, None) => {}
        }
    }
    Ok(())
}
