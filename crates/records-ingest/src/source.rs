//! Named line sources: files, standard input or any buffered reader.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{IngestError, Result};

/// Name used for standard input in diagnostics.
pub const STDIN_NAME: &str = "(standard input)";

/// A buffered reader paired with the name diagnostics are reported under.
pub struct LineSource {
    name: String,
    reader: Box<dyn BufRead + Send>,
}

impl LineSource {
    /// Opens a file. The source is named by the path as given.
    pub fn open(path: &Path) -> Result<Self> {
        let file =
            File::open(path).map_err(|e| IngestError::from_open(path.to_path_buf(), e))?;
        Ok(Self {
            name: path.display().to_string(),
            reader: Box::new(BufReader::new(file)),
        })
    }

    pub fn stdin() -> Self {
        Self {
            name: STDIN_NAME.to_string(),
            reader: Box::new(BufReader::new(io::stdin())),
        }
    }

    pub fn from_reader<R>(name: impl Into<String>, reader: R) -> Self
    where
        R: BufRead + Send + 'static,
    {
        Self {
            name: name.into(),
            reader: Box::new(reader),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_parts(self) -> (String, Box<dyn BufRead + Send>) {
        (self.name, self.reader)
    }
}

impl fmt::Debug for LineSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineSource")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
