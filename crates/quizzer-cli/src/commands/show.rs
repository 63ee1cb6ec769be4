//! The `show <id>` command.

use anyhow::Result;

use quizzer_core::id::parse_id;

use super::Session;

pub fn execute(session: &mut Session<'_>, arg: Option<&str>) -> Result<()> {
    let id = parse_id(arg)?;
    let quiz = session.repo.get_by_index(id)?;
    writeln!(session.out, "[{id}]: {quiz}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::testing::{capitals, run};

    #[test]
    fn prints_question_and_answer() {
        let mut repo = capitals();
        let (output, _) = run(&mut repo, &[], "show 1");
        assert_eq!(output, "[1]: Capital of France => Paris\n");
    }

    #[test]
    fn out_of_range_id_is_an_error_line() {
        let mut repo = capitals();
        let (output, _) = run(&mut repo, &[], "show 3");
        assert_eq!(
            output,
            "Error: the value of parameter <id> is not valid: no quiz with id=3\n"
        );
    }
}
