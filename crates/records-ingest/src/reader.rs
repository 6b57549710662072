//! Line-batch reading.

use std::io::BufRead;

use records_model::{Diagnostic, DiagnosticKind, Diagnostics};
use tracing::{debug, warn};

use crate::options::IngestOptions;
use crate::split::{field_count, parse_line};

/// Reads every line of `reader` into a field list.
///
/// Lines are numbered from 1 and checked independently. Diagnostics are
/// collected according to `options.policy`. The batch is all-or-nothing:
/// if any line fails, no field lists are returned.
///
/// A read failure before a clean end of input replaces any line
/// diagnostics with a single [`DiagnosticKind::SourceRead`] diagnostic.
pub fn read_all<R: BufRead>(
    reader: R,
    options: &IngestOptions,
) -> Result<Vec<Vec<String>>, Diagnostics> {
    let mut diagnostics = Diagnostics::new(options.policy);
    let mut records = Vec::new();
    let mut line_count = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(error) => {
                warn!(line = idx + 1, error = %error, "line source failed");
                diagnostics.replace_with(Diagnostic::new(
                    DiagnosticKind::SourceRead,
                    format!("unexpected error reading file: {error}"),
                ));
                return Err(diagnostics);
            }
        };
        line_count += 1;
        match parse_line(&line, options) {
            Ok(fields) => records.push(fields),
            Err(diagnostic) => {
                debug!(line = line_count, kind = diagnostic.kind.label(), "line rejected");
                if diagnostics.push(diagnostic.at_line(line_count)).is_break() {
                    break;
                }
            }
        }
    }

    debug!(
        lines = line_count,
        records = records.len(),
        diagnostics = diagnostics.len(),
        "batch read"
    );
    diagnostics.finish(records)
}

/// Like [`read_all`] with the field count fixed by the array length.
/// `options.field_count` is ignored.
pub fn read_records<const N: usize, R: BufRead>(
    reader: R,
    options: &IngestOptions,
) -> Result<Vec<[String; N]>, Diagnostics> {
    let options = options.clone().with_field_count(N);
    let rows = read_all(reader, &options)?;
    rows.into_iter()
        .enumerate()
        .map(|(idx, fields)| {
            <[String; N]>::try_from(fields)
                .map_err(|fields| field_count(fields.len(), N).at_line(idx + 1))
        })
        .collect::<Result<Vec<_>, Diagnostic>>()
        .map_err(Diagnostics::from)
}
