use thiserror::Error;

use crate::query::Mode;

/// Errors produced while turning a record into SQL.
///
/// Nothing here is fatal: one-shot generators return the error directly and
/// the [`QueryBuilder`](crate::QueryBuilder) keeps the first one it saw.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The argument was not a usable record (e.g. an absent `Option`).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An UPDATE would have an empty SET list.
    #[error("no fields to update")]
    NoFieldsToUpdate,

    /// The identifier column was missing from the record or zero-valued.
    #[error("no value for identifier column `{0}`")]
    MissingIdentifierValue(String),

    /// The record exposes no column-mapped field.
    #[error("{0} must have at least one field mapped to a column")]
    NoTaggedFields(String),

    /// The record has no column-mapped field with a non-zero value.
    #[error("{0} must have at least one non-zero field mapped to a column")]
    NoMatchingFields(String),

    /// A table or column name contained characters outside `[A-Za-z0-9_]`.
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// A call that is only legal in SELECT mode was made in another mode.
    #[error("{operation} can only be used in SELECT mode, builder is in {mode} mode")]
    WrongMode { operation: &'static str, mode: Mode },

    /// Rendering was requested before any mode was chosen.
    #[error("cannot build a query: no mode configured")]
    NoModeConfigured,

    /// Rendering was requested but no table was ever set or derived.
    #[error("cannot build a query: no table configured")]
    MissingTable,
}

impl Error {
    pub(crate) fn absent(what: &str) -> Self {
        Self::InvalidInput(format!("{what} must be a present record"))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
