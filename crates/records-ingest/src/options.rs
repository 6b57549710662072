use records_model::{ErrorPolicy, Person};

use crate::delimiter::DelimiterSet;

/// How lines are read and checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestOptions {
    /// Candidate field delimiters.
    /// Defaults to pipe, comma and space.
    pub delimiters: DelimiterSet,

    /// Exact number of fields every line must have.
    /// Defaults to [`Person::FIELD_COUNT`].
    pub field_count: usize,

    /// Collect every line diagnostic or stop at the first one.
    pub policy: ErrorPolicy,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiters: DelimiterSet::default(),
            field_count: Person::FIELD_COUNT,
            policy: ErrorPolicy::default(),
        }
    }
}

impl IngestOptions {
    /// Set the candidate delimiters.
    #[must_use]
    pub fn with_delimiters(mut self, delimiters: DelimiterSet) -> Self {
        self.delimiters = delimiters;
        self
    }

    /// Set the expected field count.
    #[must_use]
    pub fn with_field_count(mut self, field_count: usize) -> Self {
        self.field_count = field_count;
        self
    }

    /// Set the error policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }
}
