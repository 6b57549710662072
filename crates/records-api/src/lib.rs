//! Request handling for the records service.
//!
//! The service is independent of any transport: a caller hands it a method,
//! a path and a body reader and gets back a [`Response`] holding the status
//! and the JSON envelope `{"data": [...], "errors": [...]}`. The [`http`]
//! module serves it over HTTP.

pub mod error;
pub mod http;
pub mod response;
pub mod route;
pub mod service;

pub use error::{ApiError, Result};
pub use response::{Response, status};
pub use route::{Method, Route};
pub use service::RecordsService;
