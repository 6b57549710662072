//! Turns raw text lines into field lists.
//!
//! A line may use any one of several candidate delimiters. The delimiter is
//! resolved per line, the line is split, and the field count is checked.
//! Every problem becomes a [`records_model::Diagnostic`].

pub mod delimiter;
pub mod error;
pub mod options;
pub mod reader;
pub mod source;
pub mod split;

pub use delimiter::{DelimiterSet, resolve};
pub use error::{IngestError, Result};
pub use options::IngestOptions;
pub use reader::{read_all, read_records};
pub use source::{LineSource, STDIN_NAME};
pub use split::{parse_line, split, split_exact};
