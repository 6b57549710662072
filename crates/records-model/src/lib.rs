pub mod diagnostic;
pub mod error;
pub mod person;
pub mod sort;

pub use diagnostic::{Diagnostic, DiagnosticKind, Diagnostics, ErrorPolicy};
pub use error::{RecordsError, Result};
pub use person::Person;
pub use sort::SortStyle;
