//! Splitting a line on its resolved delimiter.

use records_model::{Diagnostic, DiagnosticKind};

use crate::options::IngestOptions;

/// Splits `line` on every `delimiter` and checks the field count.
///
/// Empty segments are kept and fields are not trimmed; empty values are a
/// validation concern, not a structural one.
pub fn split(line: &str, delimiter: char, expected: usize) -> Result<Vec<String>, Diagnostic> {
    let fields: Vec<String> = line.split(delimiter).map(str::to_string).collect();
    if fields.len() != expected {
        return Err(field_count(fields.len(), expected));
    }
    Ok(fields)
}

/// Like [`split`] with the field count fixed by the array length.
pub fn split_exact<const N: usize>(line: &str, delimiter: char) -> Result<[String; N], Diagnostic> {
    let fields = split(line, delimiter, N)?;
    <[String; N]>::try_from(fields).map_err(|fields| field_count(fields.len(), N))
}

/// Resolves the delimiter of `line`, then splits it.
pub fn parse_line(line: &str, options: &IngestOptions) -> Result<Vec<String>, Diagnostic> {
    let delimiter = options.delimiters.resolve(line)?;
    split(line, delimiter, options.field_count)
}

pub(crate) fn field_count(actual: usize, expected: usize) -> Diagnostic {
    Diagnostic::new(
        DiagnosticKind::FieldCount,
        format!("there were {actual} fields when there should have been {expected}"),
    )
}
