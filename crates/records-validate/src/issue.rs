//! Validation issue types.
//!
//! Each variant carries only the data its message needs.

use records_model::{Diagnostic, DiagnosticKind};

/// The five positional fields of a record line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    LastName,
    FirstName,
    Gender,
    FavoriteColor,
    DateOfBirth,
}

impl Field {
    /// Fields in record order.
    pub const ALL: [Field; 5] = [
        Field::LastName,
        Field::FirstName,
        Field::Gender,
        Field::FavoriteColor,
        Field::DateOfBirth,
    ];

    /// The fields that only need to be non-empty.
    pub const TEXT: [Field; 4] = [
        Field::LastName,
        Field::FirstName,
        Field::Gender,
        Field::FavoriteColor,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::LastName => "last name",
            Self::FirstName => "first name",
            Self::Gender => "gender",
            Self::FavoriteColor => "favorite color",
            Self::DateOfBirth => "date of birth",
        }
    }

    /// 0-based index into the field list.
    pub fn index(self) -> usize {
        match self {
            Self::LastName => 0,
            Self::FirstName => 1,
            Self::Gender => 2,
            Self::FavoriteColor => 3,
            Self::DateOfBirth => 4,
        }
    }

    /// 1-based position used in messages.
    pub fn position(self) -> usize {
        self.index() + 1
    }
}

/// A single field violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// A text field is empty.
    Empty { field: Field },
    /// The date field is not a `YYYY-MM-DD` calendar date.
    InvalidDate { field: Field, value: String },
}

impl Issue {
    pub fn field(&self) -> Field {
        match self {
            Issue::Empty { field } | Issue::InvalidDate { field, .. } => *field,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::Empty { field } => format!(
                "{} (field {}) must be a non-empty string",
                field.label(),
                field.position()
            ),
            Issue::InvalidDate { field, .. } => format!(
                "{} (field {}) must have the format YYYY-MM-DD",
                field.label(),
                field.position()
            ),
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::new(DiagnosticKind::FieldValidation, self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_follow_record_order() {
        let positions: Vec<usize> = Field::ALL.iter().map(|f| f.position()).collect();
        assert_eq!(positions, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn messages() {
        assert_eq!(
            Issue::Empty {
                field: Field::FavoriteColor
            }
            .message(),
            "favorite color (field 4) must be a non-empty string"
        );
        assert_eq!(
            Issue::InvalidDate {
                field: Field::DateOfBirth,
                value: "1100-04-".to_string()
            }
            .message(),
            "date of birth (field 5) must have the format YYYY-MM-DD"
        );
    }
}
