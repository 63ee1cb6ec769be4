//! The `list` command.

use anyhow::Result;

use super::Session;

pub fn execute(session: &mut Session<'_>) -> Result<()> {
    let quizzes = session.repo.get_all();
    if quizzes.is_empty() {
        writeln!(session.out, "There are no quizzes yet. Use 'add' to create one.")?;
    }
    for (id, quiz) in quizzes.iter().enumerate() {
        writeln!(session.out, "[{id}]: {}", quiz.question)?;
    }
    Ok(())
}
