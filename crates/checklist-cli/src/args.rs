//! Pre-pass over argv that sets aside `--flags` clap does not know about.
//!
//! Unknown long flags are accepted for forward compatibility: `--key=value`
//! and bare `--key` tokens are collected instead of being rejected.

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;

pub struct SplitArgs {
    /// Arguments to hand to clap, program name included.
    pub args: Vec<OsString>,
    /// Unrecognized flags: `Some(value)` for `--key=value`, `None` for `--key`.
    pub extras: BTreeMap<String, Option<String>>,
}

/// Every long flag and alias defined anywhere in the command tree.
pub fn known_long_flags(cmd: &clap::Command) -> BTreeSet<String> {
    let mut known: BTreeSet<String> = ["help", "version"].iter().map(|s| s.to_string()).collect();
    collect_long_flags(cmd, &mut known);
    known
}

fn collect_long_flags(cmd: &clap::Command, known: &mut BTreeSet<String>) {
    for arg in cmd.get_arguments() {
        if let Some(long) = arg.get_long() {
            known.insert(long.to_string());
        }
        if let Some(aliases) = arg.get_all_aliases() {
            known.extend(aliases.into_iter().map(str::to_string));
        }
    }
    for sub in cmd.get_subcommands() {
        collect_long_flags(sub, known);
    }
}

/// Separates argv into what clap should parse and the unknown long flags.
///
/// A few spellings are normalised first: `--h` means `--help`, a valued
/// `--dry-run=<v>` (or `--dryrun=<v>`) means `--dry-run`, and a `--repo` with
/// no value is dropped so the repository falls back to the next source.
pub fn split_unknown<I>(argv: I, known: &BTreeSet<String>) -> SplitArgs
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = Vec::new();
    let mut extras = BTreeMap::new();
    let mut after_separator = false;
    let mut tokens = argv.into_iter().peekable();

    while let Some(token) = tokens.next() {
        if after_separator {
            args.push(token);
            continue;
        }
        let Some(text) = token.to_str() else {
            args.push(token);
            continue;
        };
        if text == "--" {
            after_separator = true;
            args.push(token);
            continue;
        }
        let Some(flag) = text.strip_prefix("--") else {
            args.push(token);
            continue;
        };
        let (key, value) = match flag.split_once('=') {
            Some((k, v)) => (k, Some(v.to_string())),
            None => (flag, None),
        };
        match (key, &value) {
            ("h", None) => args.push(OsString::from("--help")),
            ("dry-run" | "dryrun", Some(_)) => args.push(OsString::from("--dry-run")),
            ("repo", None) if !has_value(tokens.peek()) => {}
            _ if known.contains(key) => args.push(token),
            _ => {
                extras.insert(key.to_string(), value);
            }
        }
    }

    SplitArgs { args, extras }
}

/// True when the next token can serve as a flag's value.
fn has_value(next: Option<&OsString>) -> bool {
    match next {
        None => false,
        Some(token) => !token.to_string_lossy().starts_with('-'),
    }
}
