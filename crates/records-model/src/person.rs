use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// A validated person record.
///
/// Fields are private so a `Person` cannot be edited after it is built.
/// Text input should go through `records_validate::validate`, which checks
/// every field before calling [`Person::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    last_name: String,
    first_name: String,
    gender: String,
    favorite_color: String,
    date_of_birth: NaiveDate,
}

impl Person {
    /// Number of delimited fields in one record line.
    pub const FIELD_COUNT: usize = 5;

    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        gender: impl Into<String>,
        favorite_color: impl Into<String>,
        date_of_birth: NaiveDate,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            gender: gender.into(),
            favorite_color: favorite_color.into(),
            date_of_birth,
        }
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Raw gender value; used as an ordering key, not interpreted.
    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn favorite_color(&self) -> &str {
        &self.favorite_color
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    /// Comma-separated output line with the date as `MM/DD/YYYY`.
    pub fn to_record_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dob = self.date_of_birth;
        write!(
            f,
            "{},{},{},{},{:02}/{:02}/{}",
            self.last_name,
            self.first_name,
            self.gender,
            self.favorite_color,
            dob.month(),
            dob.day(),
            dob.year()
        )
    }
}
