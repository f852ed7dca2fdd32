//! The CSV dialect used by the roster and summary files.
//!
//! A restricted quote-aware dialect, not full RFC 4180: fields containing
//! quotes, commas, or newlines are quote-wrapped with every inner quote
//! doubled, and lines are split back with the standard doubled-quote rule.

use std::borrow::Cow;

/// Escapes a single field for output.
///
/// A field containing a double quote, comma, or newline gets every `"`
/// doubled and the whole field wrapped in quotes; anything else passes
/// through unchanged (borrowed).
pub fn escape(field: &str) -> Cow<'_, str> {
    if field.contains(['"', ',', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Splits one physical line into fields.
///
/// A `"` toggles quoted mode, except that `""` inside quotes is one literal
/// quote. A `,` outside quotes ends the current field. The final field is
/// always emitted, so an empty line yields a single empty field.
///
/// This operates on one line from a line-oriented reader, so a field whose
/// escaped form contains a literal newline cannot round-trip through it.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_field_unchanged() {
        assert!(matches!(escape("Alice"), Cow::Borrowed("Alice")));
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_escape_wraps_and_doubles_quotes() {
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn test_split_plain_line() {
        assert_eq!(split_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_empty_line_is_one_empty_field() {
        assert_eq!(split_line(""), vec![""]);
    }

    #[test]
    fn test_split_trailing_comma_yields_empty_last_field() {
        assert_eq!(split_line("a,"), vec!["a", ""]);
        assert_eq!(split_line(","), vec!["", ""]);
    }

    #[test]
    fn test_split_quoted_comma_stays_in_field() {
        assert_eq!(split_line("\"a,b\",c"), vec!["a,b", "c"]);
    }

    #[test]
    fn test_split_doubled_quote_is_literal() {
        assert_eq!(split_line("\"say \"\"hi\"\"\",x"), vec!["say \"hi\"", "x"]);
    }

    #[test]
    fn test_single_field_round_trip() {
        for original in ["plain", "a,b", "\"quoted\"", "mix,\"of\",both", ""] {
            let line = escape(original);
            assert_eq!(split_line(&line), vec![original]);
        }
    }

    #[test]
    fn test_joined_fields_round_trip() {
        let fields = ["Alice", "90|85.5", "has,comma", "has \"quotes\"", ""];
        let line = fields
            .iter()
            .map(|f| escape(f))
            .collect::<Vec<_>>()
            .join(",");
        assert_eq!(split_line(&line), fields);
    }
}
