use crate::output::{print_json, say};
use checklist_core::bootstrap::{bootstrap_and_test, Language};
use std::path::Path;

pub fn run(root: &Path, language: Option<&str>, json: bool) -> anyhow::Result<()> {
    let lang = language.and_then(|l| {
        let parsed = Language::parse(l);
        if parsed.is_none() {
            tracing::warn!(language = l, "unknown language; detecting from manifest files");
        }
        parsed
    });

    let report = bootstrap_and_test(root, lang);

    if json {
        print_json(&report)?;
    } else {
        say(format_args!("Repo: {}", root.display()));
        if report.results.is_empty() && report.error.is_none() {
            say("Nothing to run: no recognized manifest files.");
        }
        for r in &report.results {
            say(format_args!("$ {} (exit {})", r.cmd.join(" "), r.code));
            if !r.output.is_empty() {
                print!("{}", r.output);
                if !r.output.ends_with('\n') {
                    println!();
                }
            }
        }
        if let Some(err) = &report.error {
            say(format_args!("error: {err}"));
        }
    }

    if !report.ok {
        anyhow::bail!("bootstrap failed");
    }
    Ok(())
}
