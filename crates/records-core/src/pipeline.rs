//! Record processing pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Open**: Open every named source (standard input when none are named)
//! 2. **Structure**: Resolve delimiters and split every line of every source
//! 3. **Semantics**: Validate every field list into a [`Person`]
//!
//! Each stage runs over all sources before the next one starts. Any
//! diagnostic stops the run at the end of its stage, so structural problems
//! are never mixed with validation problems.

use std::path::PathBuf;
use std::time::Instant;

use records_ingest::{IngestOptions, LineSource, read_records, split_exact};
use records_model::{Diagnostics, ErrorPolicy, Person};
use records_validate::{RecordFields, validate};
use tracing::{debug, info, info_span, warn};

// ============================================================================
// Stage 1: Open
// ============================================================================

/// Opens every path in order, or standard input when `paths` is empty.
pub fn open_sources(
    paths: &[PathBuf],
    policy: ErrorPolicy,
) -> Result<Vec<LineSource>, Diagnostics> {
    if paths.is_empty() {
        debug!("no sources named, reading standard input");
        return Ok(vec![LineSource::stdin()]);
    }

    let mut diagnostics = Diagnostics::new(policy);
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        match LineSource::open(path) {
            Ok(source) => sources.push(source),
            Err(error) => {
                warn!(path = %path.display(), reason = %error.reason(), "source open failed");
                if diagnostics.push(error.into_diagnostic()).is_break() {
                    break;
                }
            }
        }
    }
    diagnostics.finish(sources)
}

// ============================================================================
// Stage 2: Structure
// ============================================================================

/// Field lists read from one source, in line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecords {
    pub name: String,
    pub records: Vec<RecordFields>,
}

/// Reads and splits every source.
///
/// Diagnostics are tagged with the source name. With
/// [`ErrorPolicy::FailFast`] reading stops at the first failing source.
pub fn read_structure(
    sources: Vec<LineSource>,
    options: &IngestOptions,
) -> Result<Vec<SourceRecords>, Diagnostics> {
    let mut diagnostics = Diagnostics::new(options.policy);
    let mut read = Vec::with_capacity(sources.len());

    for source in sources {
        let (name, reader) = source.into_parts();
        let source_span = info_span!("source", name = %name);
        let _source_guard = source_span.enter();

        match read_records::<{ Person::FIELD_COUNT }, _>(reader, options) {
            Ok(records) => {
                debug!(records = records.len(), "source read");
                read.push(SourceRecords { name, records });
            }
            Err(mut found) => {
                found.tag_source(&name);
                warn!(diagnostics = found.len(), "source rejected");
                if diagnostics.extend(found).is_break() {
                    break;
                }
            }
        }
    }
    diagnostics.finish(read)
}

// ============================================================================
// Stage 3: Semantics
// ============================================================================

/// Validates every record of every source.
///
/// All field problems of one record are kept together; with
/// [`ErrorPolicy::FailFast`] validation stops after the first bad record.
pub fn validate_records(
    sources: &[SourceRecords],
    policy: ErrorPolicy,
) -> Result<Vec<Person>, Diagnostics> {
    let mut diagnostics = Diagnostics::new(policy);
    let mut persons = Vec::with_capacity(sources.iter().map(|s| s.records.len()).sum());

    'sources: for source in sources {
        for (idx, fields) in source.records.iter().enumerate() {
            match validate(fields) {
                Ok(person) => persons.push(person),
                Err(found) => {
                    let located = found
                        .into_iter()
                        .map(|diagnostic| diagnostic.at_line(idx + 1).in_source(&source.name));
                    if diagnostics.extend(located).is_break() {
                        break 'sources;
                    }
                }
            }
        }
    }
    diagnostics.finish(persons)
}

// ============================================================================
// Whole runs
// ============================================================================

/// Runs the structure and semantic stages over already opened sources.
pub fn run_sources(
    sources: Vec<LineSource>,
    options: &IngestOptions,
) -> Result<Vec<Person>, Diagnostics> {
    let source_count = sources.len();
    let run_span = info_span!("run", sources = source_count);
    let _run_guard = run_span.enter();
    let run_start = Instant::now();

    let structured = info_span!("structure").in_scope(|| {
        let start = Instant::now();
        let result = read_structure(sources, options);
        debug!(
            ok = result.is_ok(),
            duration_ms = start.elapsed().as_millis(),
            "structure stage complete"
        );
        result
    })?;

    let persons = info_span!("semantics").in_scope(|| {
        let start = Instant::now();
        let result = validate_records(&structured, options.policy);
        debug!(
            ok = result.is_ok(),
            duration_ms = start.elapsed().as_millis(),
            "semantic stage complete"
        );
        result
    })?;

    info!(
        sources = source_count,
        records = persons.len(),
        duration_ms = run_start.elapsed().as_millis(),
        "records loaded"
    );
    Ok(persons)
}

/// Opens `paths` (standard input when empty) and runs every stage.
pub fn run(paths: &[PathBuf], options: &IngestOptions) -> Result<Vec<Person>, Diagnostics> {
    let sources = info_span!("open").in_scope(|| open_sources(paths, options.policy))?;
    run_sources(sources, options)
}

/// Parses and validates a single line, as received by the request service.
///
/// The field count is always [`Person::FIELD_COUNT`]; `options.field_count`
/// is ignored. No line number is attached.
pub fn parse_record_line(line: &str, options: &IngestOptions) -> Result<Person, Diagnostics> {
    let delimiter = options.delimiters.resolve(line)?;
    let fields: RecordFields = split_exact(line, delimiter)?;
    validate(&fields).map_err(|found| found.into_iter().collect())
}
