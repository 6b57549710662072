pub mod pipeline;
pub mod store;

pub use pipeline::{
    SourceRecords, open_sources, parse_record_line, read_structure, run, run_sources,
    validate_records,
};
pub use store::RecordStore;
