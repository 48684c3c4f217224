//! Filter query parser.
//!
//! Parses strings such as `user:"Bob Smith" from:2024-01-01 to:2024-03-31` into a
//! [`RecordFilter`].
//!
//! # Syntax
//!
//! ```text
//! filter_expr  := field_filter (WS field_filter)*
//! field_filter := field_name:value | field_name:"quoted value"
//! field_name   := user | from | to (case-insensitive)
//! ```
//!
//! # Examples
//!
//! ```rust
//! # use chat_analyzer::filters::parser::parse_filter;
//! // Single author
//! let filter = parse_filter("user:Alice").unwrap();
//!
//! // Author names with spaces need quotes
//! let filter = parse_filter("user:\"Bob Smith\"").unwrap();
//!
//! // Inclusive date range
//! let filter = parse_filter("from:2024-01-01 to:2024-01-31").unwrap();
//! ```
//!
//! # Validation
//!
//! - Dates must be YYYY-MM-DD and semantically valid; `from` must not be after `to`
//! - Each field may appear once
//! - Empty field names or values are rejected

use std::iter::Peekable;
use std::str::Chars;

use chrono::NaiveDate;

use super::ast::{AuthorChoice, RecordFilter};
use crate::errors::FilterError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterField {
    User,
    From,
    To,
}

/// Split input into `(field, value)` pairs
fn tokenize(input: &str) -> Result<Vec<(String, String)>, FilterError> {
    let mut terms = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }

        let word = read_word(&mut chars);
        let Some((field, value)) = word.split_once(':') else {
            return Err(FilterError::InvalidTerm(word.clone()));
        };
        if field.is_empty() {
            return Err(FilterError::InvalidTerm(word.clone()));
        }

        let value = match value.strip_prefix('"') {
            Some(rest) => read_quoted_value(&mut chars, field, rest)?,
            None => value.to_string(),
        };

        terms.push((field.to_string(), value));
    }

    Ok(terms)
}

/// Read a word (until whitespace or end)
fn read_word(chars: &mut Peekable<Chars>) -> String {
    let mut word = String::new();

    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            break;
        }
        word.push(ch);
        chars.next();
    }

    word
}

/// Finish a quoted value whose opening quote has been stripped from `initial`.
/// The closing quote must end the term.
fn read_quoted_value(
    chars: &mut Peekable<Chars>,
    field: &str,
    initial: &str,
) -> Result<String, FilterError> {
    let (value, trailing) = match initial.split_once('"') {
        Some((value, trailing)) => (value.to_string(), trailing.to_string()),
        None => {
            let mut value = initial.to_string();
            let mut closed = false;
            for ch in chars.by_ref() {
                if ch == '"' {
                    closed = true;
                    break;
                }
                value.push(ch);
            }
            if !closed {
                return Err(FilterError::UnterminatedQuote(field.to_string()));
            }
            (value, read_word(chars))
        }
    };

    if !trailing.is_empty() {
        return Err(FilterError::InvalidTerm(format!("{}:\"{}\"{}", field, value, trailing)));
    }
    Ok(value)
}

fn parse_field(field: &str) -> Result<FilterField, FilterError> {
    match field.to_lowercase().as_str() {
        "user" => Ok(FilterField::User),
        "from" => Ok(FilterField::From),
        "to" => Ok(FilterField::To),
        _ => Err(FilterError::UnknownField(field.to_string())),
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, FilterError> {
    // Enforce strict YYYY-MM-DD (10 chars); chrono rejects 2024-02-31
    if value.len() != 10 {
        return Err(FilterError::InvalidDate(value.to_string()));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| FilterError::InvalidDate(value.to_string()))
}

/// Parse a filter string into a [`RecordFilter`]. Blank input is the empty filter.
pub fn parse_filter(input: &str) -> Result<RecordFilter, FilterError> {
    let mut filter = RecordFilter::new();
    let mut seen: Vec<FilterField> = Vec::new();

    for (field_name, value) in tokenize(input)? {
        let field = parse_field(&field_name)?;
        if value.trim().is_empty() {
            return Err(FilterError::EmptyValue(field_name));
        }
        if seen.contains(&field) {
            return Err(FilterError::DuplicateField(field_name));
        }
        seen.push(field);

        match field {
            FilterField::User => filter.author = AuthorChoice::parse(&value),
            FilterField::From => filter.since = Some(parse_date(&value)?),
            FilterField::To => filter.until = Some(parse_date(&value)?),
        }
    }

    if let (Some(since), Some(until)) = (filter.since, filter.until)
        && since > until
    {
        return Err(FilterError::EmptyRange { from: since.to_string(), to: until.to_string() });
    }

    Ok(filter)
}
