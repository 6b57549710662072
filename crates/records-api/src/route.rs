//! Request methods and the route table.

use std::fmt;
use std::str::FromStr;

use records_model::SortStyle;

use crate::error::ApiError;

/// Request method, as named on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Options,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Self::Get),
            "HEAD" => Ok(Self::Head),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            "OPTIONS" => Ok(Self::Options),
            other => Err(ApiError::UnknownMethod(other.to_string())),
        }
    }
}

/// Every endpoint the service answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Healthcheck,
    PostRecord,
    Sorted(SortStyle),
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Healthcheck,
        Route::PostRecord,
        Route::Sorted(SortStyle::GenderLastNameAsc),
        Route::Sorted(SortStyle::BirthdateAsc),
        Route::Sorted(SortStyle::LastNameDesc),
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Healthcheck => "/healthcheck",
            Self::PostRecord => "/records",
            Self::Sorted(SortStyle::GenderLastNameAsc) => "/records/gender",
            Self::Sorted(SortStyle::BirthdateAsc) => "/records/birthdate",
            Self::Sorted(SortStyle::LastNameDesc) => "/records/name",
        }
    }

    /// The only method the route accepts. The health check answers any.
    pub fn method(self) -> Option<Method> {
        match self {
            Self::Healthcheck => None,
            Self::PostRecord => Some(Method::Post),
            Self::Sorted(_) => Some(Method::Get),
        }
    }

    /// Exact path match.
    pub fn resolve(path: &str) -> Option<Route> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}
