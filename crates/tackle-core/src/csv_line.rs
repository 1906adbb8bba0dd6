//! # CSV Line Parser
//!
//! Splits one line of comma separated text into fields.
//!
//! ## Rules
//! ```text
//!   input:   Olivia Gray , "Flat 2, ""The Lodge""" ,CF11 8TN
//!   fields:  [Olivia Gray] [Flat 2, "The Lodge"] [CF11 8TN]
//! ```
//! - A `"` opens a quoted section; inside it commas are literal
//! - `""` inside a quoted section is one literal quote
//! - Whitespace outside quotes at either end of a field is trimmed,
//!   whitespace inside quotes is kept
//! - The only failure is a quote that is never closed
//!
//! Only single lines are handled; quoted fields cannot span line breaks.

use crate::error::{CoreError, CoreResult};

/// Parses one line into its fields.
///
/// An empty line yields a single empty field, matching how a spreadsheet
/// would read it.
///
/// ```rust
/// use tackle_core::csv_line::parse_csv_line;
///
/// let fields = parse_csv_line(r#"R3T, 3"#).unwrap();
/// assert_eq!(fields, vec!["R3T", "3"]);
///
/// assert!(parse_csv_line(r#""unterminated, 3"#).is_err());
/// ```
pub fn parse_csv_line(line: &str) -> CoreResult<Vec<String>> {
    let mut fields = Vec::new();
    let mut field = FieldBuf::default();
    let mut open_quote: Option<usize> = None;
    let mut chars = line.chars().enumerate().peekable();

    while let Some((column, ch)) = chars.next() {
        match (open_quote, ch) {
            (Some(_), '"') => {
                if matches!(chars.peek(), Some((_, '"'))) {
                    chars.next();
                    field.push_quoted('"');
                } else {
                    open_quote = None;
                    field.close_quote();
                }
            }
            (Some(_), c) => field.push_quoted(c),
            (None, '"') => open_quote = Some(column + 1),
            (None, ',') => fields.push(std::mem::take(&mut field).finish()),
            (None, c) => field.push_plain(c),
        }
    }

    if let Some(column) = open_quote {
        return Err(CoreError::MalformedCsvLine { column });
    }

    fields.push(field.finish());
    Ok(fields)
}

/// Renders fields as one line that [`parse_csv_line`] reads back unchanged.
///
/// Fields are quoted only when they contain a comma, a quote, or
/// leading/trailing whitespace.
pub fn format_csv_line<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|f| quote_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

fn quote_field(field: &str) -> String {
    let needs_quotes = field.contains([',', '"'])
        || field.trim() != field;
    if needs_quotes {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Accumulates one field while remembering which part came from quotes, so
/// trailing whitespace is only trimmed from the unquoted tail.
#[derive(Default)]
struct FieldBuf {
    text: String,
    /// Byte length of `text` that must survive trimming.
    protected: usize,
}

impl FieldBuf {
    fn push_plain(&mut self, c: char) {
        // leading whitespace outside quotes is dropped
        if self.text.is_empty() && c.is_whitespace() {
            return;
        }
        self.text.push(c);
    }

    fn push_quoted(&mut self, c: char) {
        self.text.push(c);
        self.protected = self.text.len();
    }

    fn close_quote(&mut self) {
        self.protected = self.text.len();
    }

    fn finish(mut self) -> String {
        let keep = self.protected + self.text[self.protected..].trim_end().len();
        self.text.truncate(keep);
        self.text
    }
}
