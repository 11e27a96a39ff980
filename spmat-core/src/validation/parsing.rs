//! Parsing utilities for matrix text fields
//!
//! Pure string-in/value-out helpers used by the codec. Every function
//! reports a [`FormatIssue`] and leaves line numbering to the caller.

use crate::codec::constants::{ENTRY_CLOSE, ENTRY_OPEN};
use crate::FormatIssue;

/// Parse a signed base-10 integer, ignoring surrounding whitespace
///
/// Unlike a lenient numeric parse, trailing garbage (`"12abc"`) and empty
/// fields are rejected.
pub fn parse_integer(field: &str) -> Result<i64, FormatIssue> {
    let field = field.trim();
    if field.is_empty() {
        return Err(FormatIssue::InvalidInteger);
    }
    field.parse::<i64>().map_err(|_| FormatIssue::InvalidInteger)
}

/// Parse a `<prefix><integer>` header line such as `rows=3`
///
/// The prefix check is literal and case-sensitive; whitespace around the
/// whole line and around the value is ignored.
pub fn parse_header(line: &str, prefix: &str) -> Result<i64, FormatIssue> {
    let value = line
        .trim()
        .strip_prefix(prefix)
        .ok_or(FormatIssue::MalformedHeader)?;
    parse_integer(value)
}

/// Parse a `(<row>, <col>, <value>)` entry line
///
/// The line must already be trimmed and non-empty.
pub fn parse_entry(line: &str) -> Result<(i64, i64, i64), FormatIssue> {
    let inner = line
        .strip_prefix(ENTRY_OPEN)
        .and_then(|rest| rest.strip_suffix(ENTRY_CLOSE))
        .ok_or(FormatIssue::MalformedEntry)?;

    let mut fields = inner.split(',');
    let (Some(row), Some(col), Some(value), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(FormatIssue::FieldCount);
    };

    Ok((parse_integer(row)?, parse_integer(col)?, parse_integer(value)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("0"), Ok(0));
        assert_eq!(parse_integer(" 42 "), Ok(42));
        assert_eq!(parse_integer("-17"), Ok(-17));

        // Invalid cases
        assert_eq!(parse_integer(""), Err(FormatIssue::InvalidInteger));
        assert_eq!(parse_integer("   "), Err(FormatIssue::InvalidInteger));
        assert_eq!(parse_integer("abc"), Err(FormatIssue::InvalidInteger));
        assert_eq!(parse_integer("12a"), Err(FormatIssue::InvalidInteger));
        assert_eq!(parse_integer("1.5"), Err(FormatIssue::InvalidInteger));
        assert_eq!(
            parse_integer("99999999999999999999"),
            Err(FormatIssue::InvalidInteger)
        );
    }

    #[test]
    fn test_parse_header() {
        assert_eq!(parse_header("rows=3", "rows="), Ok(3));
        assert_eq!(parse_header("  cols= 10 ", "cols="), Ok(10));
        assert_eq!(parse_header("rows=-1", "rows="), Ok(-1));

        assert_eq!(
            parse_header("cols=3", "rows="),
            Err(FormatIssue::MalformedHeader)
        );
        assert_eq!(
            parse_header("ROWS=3", "rows="),
            Err(FormatIssue::MalformedHeader)
        );
        assert_eq!(
            parse_header("rows=", "rows="),
            Err(FormatIssue::InvalidInteger)
        );
        assert_eq!(
            parse_header("rows=x", "rows="),
            Err(FormatIssue::InvalidInteger)
        );
    }

    #[test]
    fn test_parse_entry() {
        assert_eq!(parse_entry("(0, 1, 5)"), Ok((0, 1, 5)));
        assert_eq!(parse_entry("(3,4,-2)"), Ok((3, 4, -2)));
        assert_eq!(parse_entry("(  7 ,8 ,  0 )"), Ok((7, 8, 0)));

        assert_eq!(parse_entry("0, 1, 5"), Err(FormatIssue::MalformedEntry));
        assert_eq!(parse_entry("(0, 1, 5"), Err(FormatIssue::MalformedEntry));
        assert_eq!(parse_entry("(0, 0)"), Err(FormatIssue::FieldCount));
        assert_eq!(parse_entry("(0, 0, 1, 2)"), Err(FormatIssue::FieldCount));
        assert_eq!(parse_entry("()"), Err(FormatIssue::FieldCount));
        assert_eq!(parse_entry("(a, 0, 1)"), Err(FormatIssue::InvalidInteger));
        assert_eq!(parse_entry("(0, , 1)"), Err(FormatIssue::InvalidInteger));
    }
}
