use crate::pattern::FieldKind;
use std::fmt::Display;
use thiserror::Error;

/// Crate specific Errors implementation.
///
/// Every variant is produced while a [`Schedule`](crate::Schedule) is being constructed,
/// so a successfully built schedule never fails a query.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
pub enum CronError {
    /// The expression doesn't consist of exactly five whitespace-separated fields.
    #[error("invalid cron expression `{expression}`: expected 5 fields, found {count}")]
    InvalidFieldCount {
        /// Expression as provided.
        expression: String,
        /// Number of fields found.
        count: usize,
    },
    /// One or more elements of a single field are invalid.
    #[error("invalid {kind} field `{input}`: {errors}")]
    InvalidField {
        /// Which of the five fields failed.
        kind: FieldKind,
        /// Field text as provided.
        input: String,
        /// All element errors of the field, in element order.
        errors: FieldErrors,
    },
    /// `Either` day selection mode requires exactly one of the day fields to be `?`.
    #[error("invalid days pattern: exactly one of day of month `{day_of_month}` and day of week `{day_of_week}` must be `?`")]
    InvalidDaysPattern {
        /// Day of month field text.
        day_of_month: String,
        /// Day of week field text.
        day_of_week: String,
    },
}

/// Error of a single comma-separated element of a field.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
#[error("`{element}`: {kind}")]
pub struct FieldError {
    /// Offending element text.
    pub element: String,
    /// Reason of the failure.
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub(crate) fn new(element: impl Into<String>, kind: FieldErrorKind) -> Self {
        Self {
            element: element.into(),
            kind,
        }
    }
}

/// Reason of an element parse failure.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldErrorKind {
    /// The element matches none of the known patterns.
    #[error("unrecognized pattern")]
    UnrecognizedPattern,
    /// A bound, target or ordinal lies outside of its valid range.
    #[error("{value} is out of range {min}...{max}")]
    OutOfRange {
        /// Offending value.
        value: u32,
        /// Lowest valid value.
        min: u32,
        /// Highest valid value.
        max: u32,
    },
    /// Step is zero or unparsable.
    #[error("step must be a positive value")]
    BadStep,
    /// Range end is lower than its beginning.
    #[error("invalid range {begin}...{end}")]
    InvalidRange {
        /// Range beginning.
        begin: u32,
        /// Range end.
        end: u32,
    },
    /// `?` is used together with other elements.
    #[error("`?` must be the only element of the field")]
    MisplacedBlank,
}

/// Non-empty list of element errors collected from a single field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub(crate) fn new(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }

    /// Returns collected errors.
    pub fn as_slice(&self) -> &[FieldError] {
        &self.0
    }

    /// Returns an iterator over collected errors.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Number of failed elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for errors produced by the parser.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let errors = self.0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; ");
        write!(f, "{errors}")
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
