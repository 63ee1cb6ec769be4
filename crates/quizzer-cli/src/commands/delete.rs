//! The `delete <id>` command.

use anyhow::Result;

use quizzer_core::id::parse_id;

use super::Session;

pub fn execute(session: &mut Session<'_>, arg: Option<&str>) -> Result<()> {
    let id = parse_id(arg)?;
    let removed = session.repo.delete_by_index(id)?;
    writeln!(session.out, "Deleted quiz {id}: {}", removed.question)?;
    Ok(())
}
