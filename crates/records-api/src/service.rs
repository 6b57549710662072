//! Request handlers over a shared [`RecordStore`].

use std::io::BufRead;
use std::sync::Arc;

use records_core::{RecordStore, parse_record_line};
use records_ingest::IngestOptions;
use records_model::SortStyle;
use tracing::{debug, error, info, info_span};

use crate::error::{ApiError, Result};
use crate::response::{Response, status};
use crate::route::{Method, Route};

/// Answers record requests. Cheap to clone; clones share the store.
#[derive(Debug, Clone)]
pub struct RecordsService {
    store: Arc<RecordStore>,
    options: IngestOptions,
}

impl RecordsService {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self {
            store,
            options: IngestOptions::default(),
        }
    }

    /// Replaces the line format used for posted records.
    #[must_use]
    pub fn with_options(mut self, options: IngestOptions) -> Self {
        self.options = options;
        self
    }

    pub fn store(&self) -> &Arc<RecordStore> {
        &self.store
    }

    /// Routes one request. Never fails: internal errors become a 500.
    pub fn handle<R: BufRead>(&self, method: Method, path: &str, body: R) -> Response {
        let request_span = info_span!("request", method = %method, path = %path);
        let _request_guard = request_span.enter();

        let response = match Route::resolve(path) {
            Some(route) => self.dispatch(route, method, body),
            None => Response::error(status::NOT_FOUND, format!("no route for {path}")),
        };
        info!(status = response.status, "request handled");
        response
    }

    fn dispatch<R: BufRead>(&self, route: Route, method: Method, body: R) -> Response {
        match route.method() {
            Some(expected) if expected != method => {
                return Response::error(
                    status::BAD_REQUEST,
                    format!("this endpoint works with a {expected} request, not a {method}"),
                );
            }
            _ => {}
        }

        let result = match route {
            Route::Healthcheck => Ok(Response::ok()),
            Route::PostRecord => self.post_record(body),
            Route::Sorted(style) => self.sorted(style),
        };
        result.unwrap_or_else(|err| {
            error!(error = %err, "request failed");
            Response::unexpected()
        })
    }

    /// Parses the first line of `body` into a record and stores it.
    ///
    /// Surrounding whitespace is trimmed and later lines are ignored.
    /// Parse problems are a 400 response; only body and store failures are
    /// errors.
    pub fn post_record<R: BufRead>(&self, mut body: R) -> Result<Response> {
        let mut line = String::new();
        body.read_line(&mut line).map_err(ApiError::BodyRead)?;

        match parse_record_line(line.trim(), &self.options) {
            Ok(person) => {
                self.store.append(person)?;
                Ok(Response::ok())
            }
            Err(diagnostics) => {
                debug!(diagnostics = diagnostics.len(), "record rejected");
                Ok(Response::rejected(&diagnostics))
            }
        }
    }

    /// Every stored record ordered by `style`. The store keeps its order.
    pub fn sorted(&self, style: SortStyle) -> Result<Response> {
        let persons = self.store.snapshot_sorted(style)?;
        debug!(style = %style, records = persons.len(), "records listed");
        Ok(Response::with_data(persons))
    }
}
