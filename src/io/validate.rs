//! First-column integer validation.
//!
//! The header row is skipped without being looked at; every following row
//! must carry an integer token in its first field. The scan stops at the
//! first offending row.
//!
//! Rows are split out of the raw text before field parsing so that blank
//! lines count as (empty) rows and the offending row can be reported exactly
//! as it appears in the file.

use std::fs::File;
use std::io::Read;

use tracing::{debug, warn};

use crate::domain::{InvalidReason, InvalidRow, ValidateConfig, Validation};
use crate::error::{AppError, ErrorKind};

/// Scan `config.csv_path` and check the first column of every data row.
///
/// A missing file is returned as an `ErrorKind::NotFound` error; deciding
/// whether that is fatal is left to the caller.
pub fn validate_first_column(config: &ValidateConfig) -> Result<Validation, AppError> {
    let path = &config.csv_path;
    let mut file = File::open(path).map_err(|e| AppError::open(path, "open CSV", e))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|e| {
        AppError::new(ErrorKind::Io, format!("Failed to read CSV '{}': {e}", path.display()))
    })?;
    let text = String::from_utf8(bytes).map_err(|e| {
        AppError::new(
            ErrorKind::Parse,
            format!("CSV '{}' is not valid UTF-8: {e}", path.display()),
        )
    })?;
    debug!(
        path = %path.display(),
        allow_negative = config.allow_negative,
        "validating first column"
    );

    Ok(validate_rows(&text, config.allow_negative))
}

fn validate_rows(text: &str, allow_negative: bool) -> Validation {
    let mut rows = 0usize;
    for raw in split_rows(text).into_iter().skip(1) {
        let Some(first) = first_field(raw.text) else {
            return reject(raw, InvalidReason::MalformedRow);
        };
        if !is_integer_token(&first, allow_negative) {
            return reject(raw, InvalidReason::NotAnInteger);
        }
        rows += 1;
    }

    debug!(rows, "first column valid");
    Validation::Valid { rows }
}

/// One logical CSV row as it appears in the file, without its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RawRow<'a> {
    /// 1-based line the row starts on.
    line: u64,
    text: &'a str,
}

/// Split on `\n`, `\r\n` or `\r` outside quoted fields.
///
/// An empty line yields an empty row; the empty tail after a final
/// terminator does not.
fn split_rows(text: &str) -> Vec<RawRow<'_>> {
    let bytes = text.as_bytes();
    let mut rows = Vec::new();
    let mut start = 0usize;
    let mut start_line = 1u64;
    let mut line = 1u64;
    let mut in_quotes = false;
    let mut i = 0usize;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => in_quotes = !in_quotes,
            b'\r' | b'\n' => {
                let term_len = if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                    2
                } else {
                    1
                };
                line += 1;
                if !in_quotes {
                    rows.push(RawRow {
                        line: start_line,
                        text: &text[start..i],
                    });
                    start = i + term_len;
                    start_line = line;
                }
                i += term_len;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    if start < bytes.len() {
        rows.push(RawRow {
            line: start_line,
            text: &text[start..],
        });
    }
    rows
}

/// First field of a single non-empty row, unquoted. `None` for a row with no fields.
fn first_field(row: &str) -> Option<String> {
    if row.is_empty() {
        return None;
    }
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(row.as_bytes());
    let record = reader.records().next()?.ok()?;
    record.get(0).map(str::to_string)
}

fn reject(raw: RawRow<'_>, reason: InvalidReason) -> Validation {
    warn!(line = raw.line, row = raw.text, ?reason, "rejected row");
    Validation::Invalid(InvalidRow {
        line: raw.line,
        row: raw.text.to_string(),
        reason,
    })
}

/// `[+|-]digits`, ignoring surrounding whitespace. Any length is accepted.
///
/// Single underscores between digits are allowed (`1_000`), matching the
/// usual integer literal grouping.
fn is_integer_token(s: &str, allow_negative: bool) -> bool {
    let s = s.trim();
    let digits = match s.as_bytes().first() {
        Some(b'+') => &s[1..],
        Some(b'-') if allow_negative => &s[1..],
        _ => s,
    };
    digits
        .split('_')
        .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn config_for(file: &NamedTempFile) -> ValidateConfig {
        ValidateConfig {
            csv_path: file.path().to_path_buf(),
            ..ValidateConfig::default()
        }
    }

    fn invalid(result: Validation) -> InvalidRow {
        match result {
            Validation::Invalid(bad) => bad,
            other => panic!("expected invalid, got {other:?}"),
        }
    }

    #[test]
    fn integer_tokens() {
        assert!(is_integer_token("42", true));
        assert!(is_integer_token(" 7 ", true));
        assert!(is_integer_token("+3", false));
        assert!(is_integer_token("-3", true));
        assert!(!is_integer_token("-3", false));
        assert!(is_integer_token("123456789012345678901234567890", true));
        assert!(!is_integer_token("", true));
        assert!(!is_integer_token("-", true));
        assert!(!is_integer_token("1.5", true));
        assert!(!is_integer_token("12a", true));
        assert!(!is_integer_token("--1", true));
    }

    #[test]
    fn underscore_grouping() {
        assert!(is_integer_token("1_000", true));
        assert!(is_integer_token("-1_000_000", true));
        assert!(!is_integer_token("_1", true));
        assert!(!is_integer_token("1_", true));
        assert!(!is_integer_token("1__0", true));
        assert!(!is_integer_token("_", true));
    }

    #[test]
    fn rows_split_on_any_terminator() {
        let rows = split_rows("a\r\nb\rc\n\nd");
        let texts: Vec<_> = rows.iter().map(|r| r.text).collect();
        assert_eq!(texts, ["a", "b", "c", "", "d"]);
        let lines: Vec<_> = rows.iter().map(|r| r.line).collect();
        assert_eq!(lines, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn trailing_terminator_adds_no_row() {
        assert_eq!(split_rows("a\nb\n").len(), 2);
        assert!(split_rows("").is_empty());
    }

    #[test]
    fn quoted_newlines_stay_in_the_row() {
        let rows = split_rows("id\n\"1\n2\",x\n3\n");
        assert_eq!(rows[1].text, "\"1\n2\",x");
        assert_eq!(rows[2], RawRow { line: 4, text: "3" });
    }

    #[test]
    fn all_integer_rows_are_valid() {
        let file = csv_file("id,name\n1,Sol\n2,Vega\n30,Rigel\n");
        let result = validate_first_column(&config_for(&file)).unwrap();
        assert_eq!(result, Validation::Valid { rows: 3 });
    }

    #[test]
    fn header_is_never_validated() {
        let file = csv_file("not a number,also text\n");
        let result = validate_first_column(&config_for(&file)).unwrap();
        assert_eq!(result, Validation::Valid { rows: 0 });
    }

    #[test]
    fn empty_file_is_valid() {
        let file = csv_file("");
        let result = validate_first_column(&config_for(&file)).unwrap();
        assert_eq!(result, Validation::Valid { rows: 0 });
    }

    #[test]
    fn non_numeric_row_is_reported_verbatim() {
        let file = csv_file("id,name\n1,Sol\nabc,Vega\n3,Rigel\n");
        let result = validate_first_column(&config_for(&file)).unwrap();
        assert_eq!(
            result,
            Validation::Invalid(InvalidRow {
                line: 3,
                row: "abc,Vega".to_string(),
                reason: InvalidReason::NotAnInteger,
            })
        );
    }

    #[test]
    fn quoted_row_is_reported_as_written() {
        let file = csv_file("id,name\n\"a,b\",x\n");
        let bad = invalid(validate_first_column(&config_for(&file)).unwrap());
        assert_eq!(bad.row, "\"a,b\",x");
        assert_eq!(bad.reason, InvalidReason::NotAnInteger);
    }

    #[test]
    fn quoted_integer_is_accepted() {
        let file = csv_file("id,name\n\"12\",\"Sol, the Sun\"\n");
        assert!(validate_first_column(&config_for(&file)).unwrap().is_valid());
    }

    #[test]
    fn blank_line_is_a_malformed_row() {
        let file = csv_file("id,name\n1,Sol\n\n2,Vega\n");
        let bad = invalid(validate_first_column(&config_for(&file)).unwrap());
        assert_eq!(
            bad,
            InvalidRow {
                line: 3,
                row: String::new(),
                reason: InvalidReason::MalformedRow,
            }
        );
    }

    #[test]
    fn empty_first_field_is_invalid() {
        let file = csv_file("id,name\n,Vega\n");
        let bad = invalid(validate_first_column(&config_for(&file)).unwrap());
        assert_eq!(bad.row, ",Vega");
        assert_eq!(bad.reason, InvalidReason::NotAnInteger);
    }

    #[test]
    fn stops_at_first_failure() {
        let file = csv_file("id\n1\nx\ny\n");
        let bad = invalid(validate_first_column(&config_for(&file)).unwrap());
        assert_eq!(bad.row, "x");
        assert_eq!(bad.line, 3);
    }

    #[test]
    fn negatives_follow_allow_negative() {
        let file = csv_file("id\n-4\n");
        let mut config = config_for(&file);
        assert!(validate_first_column(&config).unwrap().is_valid());

        config.allow_negative = false;
        assert!(!validate_first_column(&config).unwrap().is_valid());
    }

    #[test]
    fn invalid_utf8_is_a_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"id\n\xff\xfe\n").unwrap();
        file.flush().unwrap();
        let err = validate_first_column(&config_for(&file)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn missing_file_is_not_found() {
        let config = ValidateConfig {
            csv_path: PathBuf::from("/definitely/not/here.csv"),
            ..ValidateConfig::default()
        };
        let err = validate_first_column(&config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
