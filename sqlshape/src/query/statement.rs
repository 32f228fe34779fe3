//! Single-call generators that turn one record into one statement, without
//! going through the [`QueryBuilder`](super::builder::QueryBuilder).

use tracing::debug;

use super::condition::to_literal;
use super::{Statement, PLACEHOLDER};
use crate::error::{Error, Result};
use crate::ident::sanitize;
use crate::record::{columns_of, Describable};

/// Builds `UPDATE <table> SET a = ?, b = ? WHERE <identifier> = ?`.
///
/// Only non-zero fields are set. The field mapped to `identifier` is never
/// part of the SET list; its value is bound last, for the WHERE clause.
/// Names follow the same `[A-Za-z0-9_]+` rule as [`generate_select`].
///
/// # Errors
/// * [`Error::InvalidInput`] if the record is absent.
/// * [`Error::InvalidIdentifier`] if the table or a column name is unsafe.
/// * [`Error::NoFieldsToUpdate`] if nothing besides the identifier is set.
/// * [`Error::MissingIdentifierValue`] if the identifier is missing or zero.
///
/// # Example
/// ```
/// use sqlshape::prelude::*;
///
/// #[derive(Describable, Default)]
/// struct User {
///     id: u32,
///     username: String,
///     email: String,
/// }
///
/// let user = User { id: 1, username: "jo".into(), ..Default::default() };
/// let stmt = generate_update(&user, "users", "id")?;
/// assert_eq!(stmt.sql, "UPDATE users SET username = ? WHERE id = ?");
/// assert_eq!(stmt.args, [Value::Text("jo".into()), Value::UInt(1)]);
/// # Ok::<(), sqlshape::Error>(())
/// ```
pub fn generate_update<R: Describable + ?Sized>(
    record: &R,
    table: &str,
    identifier: &str,
) -> Result<Statement> {
    if !record.is_present() {
        return Err(Error::absent("update source"));
    }
    let table = sanitize(table)?;
    let identifier = sanitize(identifier)?;

    let mut assignments = Vec::new();
    let mut args = Vec::new();
    let mut identifier_value = None;

    for binding in columns_of(record) {
        if binding.is_zero {
            continue;
        }
        if binding.column == identifier {
            identifier_value = Some(binding.value);
            continue;
        }
        assignments.push(format!("{} = {PLACEHOLDER}", sanitize(&binding.column)?));
        args.push(binding.value);
    }

    if assignments.is_empty() {
        return Err(Error::NoFieldsToUpdate);
    }
    let identifier_value =
        identifier_value.ok_or_else(|| Error::MissingIdentifierValue(identifier.to_owned()))?;
    args.push(identifier_value);

    let sql = format!(
        "UPDATE {table} SET {assignments} WHERE {identifier} = {PLACEHOLDER}",
        assignments = assignments.join(", "),
    );
    debug!(sql = %sql, args = args.len(), "generated update");
    Ok(Statement { sql, args })
}

/// Builds `SELECT a, b, c FROM <table>` with a `WHERE` clause matching every
/// non-zero field, if there is one.
///
/// Values are inlined: text is quoted and escaped, other values are written
/// as is. No statement terminator is appended.
///
/// Table and column names must match `[A-Za-z0-9_]+`. Schema-qualified or
/// quoted names such as `public.users` are not accepted.
///
/// # Errors
/// * [`Error::InvalidInput`] if the record is absent.
/// * [`Error::InvalidIdentifier`] if the table or a column name is unsafe.
pub fn generate_select<R: Describable + ?Sized>(record: &R, table: &str) -> Result<String> {
    if !record.is_present() {
        return Err(Error::absent("select source"));
    }
    let table = sanitize(table)?;

    let mut columns = Vec::new();
    let mut conditions = Vec::new();

    for binding in columns_of(record) {
        let column = sanitize(&binding.column)?;
        if !binding.is_zero {
            conditions.push(format!("{column} = {}", to_literal(&binding.value)));
        }
        columns.push(column.to_owned());
    }

    let mut sql = format!("SELECT {} FROM {table}", columns.join(", "));
    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }
    debug!(sql = %sql, "generated select");
    Ok(sql)
}
