use records_model::{Diagnostics, Person};
use serde::Serialize;

use crate::error::Result;

/// Status codes the service answers with.
pub mod status {
    pub const OK: u16 = 200;
    pub const BAD_REQUEST: u16 = 400;
    pub const NOT_FOUND: u16 = 404;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
}

/// Structured response body plus the status it should be sent with.
///
/// The status is not part of the JSON body; empty parts are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    #[serde(skip)]
    pub status: u16,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<Person>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl Response {
    pub fn ok() -> Self {
        Self {
            status: status::OK,
            data: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn with_data(data: Vec<Person>) -> Self {
        Self {
            data,
            ..Self::ok()
        }
    }

    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            data: Vec::new(),
            errors: vec![message.into()],
        }
    }

    /// 400 carrying every diagnostic message.
    pub fn rejected(diagnostics: &Diagnostics) -> Self {
        Self {
            status: status::BAD_REQUEST,
            data: Vec::new(),
            errors: diagnostics.messages(),
        }
    }

    /// 500 with a generic message; the cause is only logged.
    pub fn unexpected() -> Self {
        Self::error(status::INTERNAL_SERVER_ERROR, "unexpected error")
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
