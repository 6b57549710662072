use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use records_api::RecordsService;
use records_api::http::{serve, shutdown_signal};
use records_core::{RecordStore, run};
use records_ingest::IngestOptions;
use records_model::{Diagnostics, ErrorPolicy, Person, SortStyle};
use tokio::net::TcpListener;
use tokio::runtime::Runtime;
use tracing::{info, info_span, trace};

use crate::cli::{ServeArgs, SortArgs};
use crate::logging::redact_value;

/// Loads every record from `files` (standard input when empty) and sorts
/// them by `style`. No records are returned if any source has a problem.
pub fn load_sorted(
    files: &[PathBuf],
    style: SortStyle,
    policy: ErrorPolicy,
) -> Result<Vec<Person>, Diagnostics> {
    let sort_span = info_span!("sort", style = %style, sources = files.len());
    let _sort_guard = sort_span.enter();

    let options = IngestOptions::default().with_policy(policy);
    let mut persons = run(files, &options)?;
    style.sort(&mut persons);

    for person in &persons {
        trace!(record = %redact_value(&person.to_record_line()), "record sorted");
    }
    info!(records = persons.len(), "records sorted");
    Ok(persons)
}

pub fn run_sort(args: &SortArgs) -> Result<Vec<Person>, Diagnostics> {
    load_sorted(&args.files, args.sort.into(), args.policy())
}

/// Serves an empty in-memory store on `args.addr` until Ctrl-C.
pub fn run_serve(args: &ServeArgs) -> Result<()> {
    let runtime = Runtime::new().context("start async runtime")?;
    runtime.block_on(async {
        let listener = TcpListener::bind(args.addr)
            .await
            .with_context(|| format!("bind {}", args.addr))?;
        let service = RecordsService::new(Arc::new(RecordStore::new()));
        serve(listener, service, shutdown_signal())
            .await
            .context("serve records")
    })
}
