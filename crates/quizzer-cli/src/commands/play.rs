//! The `play` command: answer every quiz in random order until the first
//! mistake.

use anyhow::Result;

use quizzer_core::exam::{Exam, Verdict};

use super::Session;

pub fn execute(session: &mut Session<'_>) -> Result<()> {
    let mut exam = Exam::new(session.repo.get_all());

    loop {
        let Some(quiz) = exam.next_question(&mut *session.rng) else {
            writeln!(session.out, "Nothing left to ask.")?;
            break;
        };
        let prompt = format!("{}? ", quiz.question);
        let answer = session.prompter.ask(&prompt)?;

        match exam.answer(&answer) {
            Some(Verdict::Correct { score }) => {
                writeln!(session.out, "CORRECT - {score} hits so far.")?;
            }
            Some(Verdict::Incorrect { .. }) | None => {
                writeln!(session.out, "INCORRECT.")?;
                break;
            }
        }
    }

    writeln!(session.out, "End of exam. Score: {}", exam.score())?;
    Ok(())
}
