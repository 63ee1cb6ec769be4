//! The `credits` command.

use anyhow::Result;

use super::Session;

/// Authors from the package manifest, one per entry.
fn authors() -> impl Iterator<Item = &'static str> {
    env!("CARGO_PKG_AUTHORS")
        .split(':')
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

pub fn execute(session: &mut Session<'_>) -> Result<()> {
    writeln!(
        session.out,
        "{} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )?;
    writeln!(session.out, "Authors:")?;
    for name in authors() {
        writeln!(session.out, "  {name}")?;
    }
    Ok(())
}
