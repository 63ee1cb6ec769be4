//! Parsing of the `<id>` command parameter.

use crate::error::QuizError;

/// Turn the raw `<id>` argument into a position.
///
/// Range checking is left to the repository; this only separates "not
/// given" from "not a number". Digits too large for `usize` cannot name a
/// quiz and are reported as out of range.
pub fn parse_id(raw: Option<&str>) -> Result<usize, QuizError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty());
    let Some(raw) = raw else {
        return Err(QuizError::MissingId);
    };
    raw.parse::<usize>().map_err(|_| {
        if raw.bytes().all(|b| b.is_ascii_digit()) {
            QuizError::IdOutOfRange(raw.to_string())
        } else {
            QuizError::NotANumber(raw.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_is_missing() {
        assert!(matches!(parse_id(None), Err(QuizError::MissingId)));
        assert!(matches!(parse_id(Some("   ")), Err(QuizError::MissingId)));
    }

    #[test]
    fn non_numeric_is_not_a_number() {
        assert!(matches!(
            parse_id(Some("abc")),
            Err(QuizError::NotANumber(s)) if s == "abc"
        ));
        assert!(matches!(parse_id(Some("-1")), Err(QuizError::NotANumber(_))));
        assert!(matches!(parse_id(Some("1.5")), Err(QuizError::NotANumber(_))));
    }

    #[test]
    fn oversized_number_is_out_of_range() {
        let err = parse_id(Some("99999999999999999999")).unwrap_err();
        assert!(matches!(&err, QuizError::IdOutOfRange(s) if s == "99999999999999999999"));
        assert!(err.to_string().contains("no quiz with id=99999999999999999999"));
    }

    #[test]
    fn numbers_parse_with_surrounding_space() {
        assert_eq!(parse_id(Some("0")).unwrap(), 0);
        assert_eq!(parse_id(Some(" 42 ")).unwrap(), 42);
    }
}
