//! Identifier validation and literal escaping.
//!
//! Table and column names cannot be bound as query parameters, so every one
//! of them goes through [`sanitize`] before it is written into SQL text.
//! Values are never sanitized; they are bound as `?` arguments or, when a
//! record is inlined into a WHERE fragment, quoted with [`quote_literal`].

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};

lazy_static! {
    /// Allowlist: letters, digits and underscores only.
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z0-9_]+$").expect("valid identifier regex");
}

/// Returns `identifier` unchanged if it only contains `[A-Za-z0-9_]`.
///
/// Empty strings, quotes, whitespace, punctuation and every other SQL
/// significant character are rejected with [`Error::InvalidIdentifier`].
pub fn sanitize(identifier: &str) -> Result<&str> {
    if IDENTIFIER.is_match(identifier) {
        Ok(identifier)
    } else {
        Err(Error::InvalidIdentifier(identifier.to_owned()))
    }
}

/// Doubles every single quote so `value` can sit inside a `'...'` literal.
///
/// This is the only escaping performed; it is not a replacement for bound
/// parameters.
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// `escape_literal` wrapped in single quotes.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", escape_literal(value))
}

/// `sanitize` wrapped in backticks.
pub(crate) fn quote_identifier(identifier: &str) -> Result<String> {
    sanitize(identifier).map(|name| format!("`{name}`"))
}
