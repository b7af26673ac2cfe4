use serde::Serialize;

const PREFIX: &str = "[mcp-checklist]";

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a status line with the tool prefix.
pub fn say(msg: impl std::fmt::Display) {
    println!("{PREFIX} {msg}");
}
