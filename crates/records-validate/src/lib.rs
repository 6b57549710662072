//! Record validation: raw fields in, [`Person`] or diagnostics out.
//!
//! Every field is checked independently and all violations are reported
//! together, in field order.

pub mod date;
pub mod issue;

pub use date::parse_calendar_date;
pub use issue::{Field, Issue};

use chrono::NaiveDate;
use records_model::{Diagnostic, Person, RecordsError};
use tracing::debug;

/// Raw fields of one record line, in record order.
pub type RecordFields = [String; Person::FIELD_COUNT];

/// Collects every field violation in `fields`.
pub fn check(fields: &RecordFields) -> Vec<Issue> {
    inspect(fields).0
}

/// Checks every field once, keeping the parsed date of birth when it is valid.
fn inspect(fields: &RecordFields) -> (Vec<Issue>, Option<NaiveDate>) {
    let mut issues = Vec::new();
    for field in Field::TEXT {
        if fields[field.index()].is_empty() {
            issues.push(Issue::Empty { field });
        }
    }
    let raw_dob = &fields[Field::DateOfBirth.index()];
    let dob = parse_calendar_date(raw_dob);
    if dob.is_none() {
        issues.push(Issue::InvalidDate {
            field: Field::DateOfBirth,
            value: raw_dob.clone(),
        });
    }
    (issues, dob)
}

/// Builds a [`Person`] from five validated fields.
///
/// The length precondition is carried by the array type; splitting enforces
/// it upstream.
pub fn validate(fields: &RecordFields) -> Result<Person, Vec<Diagnostic>> {
    let (issues, dob) = inspect(fields);
    match dob {
        Some(dob) if issues.is_empty() => {
            let [last_name, first_name, gender, favorite_color, _] = fields;
            Ok(Person::new(
                last_name.as_str(),
                first_name.as_str(),
                gender.as_str(),
                favorite_color.as_str(),
                dob,
            ))
        }
        _ => {
            debug!(issues = issues.len(), "record rejected");
            Err(issues.into_iter().map(Issue::into_diagnostic).collect())
        }
    }
}

/// [`validate`] for callers holding a field list of unchecked length.
///
/// A wrong length is a caller error, not a data diagnostic.
pub fn validate_slice(fields: &[String]) -> Result<Result<Person, Vec<Diagnostic>>, RecordsError> {
    let fields: &RecordFields = fields.try_into().map_err(|_| RecordsError::FieldCount {
        actual: fields.len(),
        expected: Person::FIELD_COUNT,
    })?;
    Ok(validate(fields))
}
