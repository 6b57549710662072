//! The comparator family over [`Person`] records.
//!
//! Every style is a total order applied with a stable sort, so records with
//! equal keys keep their input order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RecordsError;
use crate::person::Person;

/// Named sort orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortStyle {
    /// Gender ascending (case-sensitive), then last name ascending
    /// (case-insensitive).
    #[default]
    #[serde(rename = "gender-lastname-asc")]
    GenderLastNameAsc,
    /// Date of birth ascending.
    #[serde(rename = "birthdate-asc")]
    BirthdateAsc,
    /// Last name descending (case-insensitive).
    #[serde(rename = "lastname-desc")]
    LastNameDesc,
}

impl SortStyle {
    pub const ALL: [SortStyle; 3] = [
        SortStyle::GenderLastNameAsc,
        SortStyle::BirthdateAsc,
        SortStyle::LastNameDesc,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::GenderLastNameAsc => "gender-lastname-asc",
            Self::BirthdateAsc => "birthdate-asc",
            Self::LastNameDesc => "lastname-desc",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::GenderLastNameAsc => "gender ascending, then last name ascending",
            Self::BirthdateAsc => "date of birth ascending",
            Self::LastNameDesc => "last name descending",
        }
    }

    pub fn comparator(self) -> fn(&Person, &Person) -> Ordering {
        match self {
            Self::GenderLastNameAsc => compare_gender_last_name_asc,
            Self::BirthdateAsc => compare_birthdate_asc,
            Self::LastNameDesc => compare_last_name_desc,
        }
    }

    /// Stable in-place sort.
    pub fn sort(self, persons: &mut [Person]) {
        persons.sort_by(self.comparator());
    }

    /// Style names joined by ", " in alphabetical order.
    pub fn allowed_names() -> String {
        let mut names: Vec<&str> = Self::ALL.iter().map(|style| style.name()).collect();
        names.sort_unstable();
        names.join(", ")
    }
}

impl fmt::Display for SortStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortStyle {
    type Err = RecordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| RecordsError::UnknownSortStyle {
                name: s.to_string(),
                allowed: Self::allowed_names(),
            })
    }
}

pub fn compare_gender_last_name_asc(a: &Person, b: &Person) -> Ordering {
    a.gender()
        .cmp(b.gender())
        .then_with(|| cmp_ignore_case(a.last_name(), b.last_name()))
}

pub fn compare_birthdate_asc(a: &Person, b: &Person) -> Ordering {
    a.date_of_birth().cmp(&b.date_of_birth())
}

pub fn compare_last_name_desc(a: &Person, b: &Person) -> Ordering {
    cmp_ignore_case(b.last_name(), a.last_name())
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
