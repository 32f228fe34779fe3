use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::ident::{quote_identifier, quote_literal};
use crate::record::{columns_of, Describable};
use crate::types::Value;

/// What a SELECT projects: a comma separated list of column names, or every
/// column-mapped field of a record.
pub enum Projection<'a> {
    Columns(Cow<'a, str>),
    Record(&'a dyn Describable),
}

impl<'a> From<&'a str> for Projection<'a> {
    fn from(columns: &'a str) -> Self {
        Projection::Columns(Cow::Borrowed(columns))
    }
}

impl From<String> for Projection<'static> {
    fn from(columns: String) -> Self {
        Projection::Columns(Cow::Owned(columns))
    }
}

impl<'a, R: Describable> From<&'a R> for Projection<'a> {
    fn from(record: &'a R) -> Self {
        Projection::Record(record)
    }
}

/// A WHERE condition.
///
/// `Raw` is written into the statement verbatim: it is trusted input and the
/// caller is responsible for its safety. `Record` matches every non-zero
/// column-mapped field. `Pairs` is what [`conditions!`](crate::conditions)
/// builds.
pub enum Predicate<'a> {
    Raw(Cow<'a, str>),
    Record(&'a dyn Describable),
    Pairs(Vec<(String, Value)>),
}

impl<'a> From<&'a str> for Predicate<'a> {
    fn from(expr: &'a str) -> Self {
        Predicate::Raw(Cow::Borrowed(expr))
    }
}

impl From<String> for Predicate<'static> {
    fn from(expr: String) -> Self {
        Predicate::Raw(Cow::Owned(expr))
    }
}

impl<'a, R: Describable> From<&'a R> for Predicate<'a> {
    fn from(record: &'a R) -> Self {
        Predicate::Record(record)
    }
}

impl From<Vec<(String, Value)>> for Predicate<'static> {
    fn from(pairs: Vec<(String, Value)>) -> Self {
        Predicate::Pairs(pairs)
    }
}

/// `value` as an inline SQL literal: text quoted and escaped, the rest as is.
pub fn to_literal(value: &Value) -> String {
    match value {
        Value::Text(text) => quote_literal(text),
        other => other.to_string(),
    }
}

/// "id, username" -> "`id`, `username`".
pub(crate) fn quote_column_list(columns: &str) -> Result<String> {
    columns
        .split(',')
        .map(|column| quote_identifier(column.trim()))
        .collect::<Result<Vec<_>>>()
        .map(|quoted| quoted.join(", "))
}

/// Every column-mapped field of `record`, backtick-quoted.
pub(crate) fn record_column_list(record: &dyn Describable) -> Result<String> {
    if !record.is_present() {
        return Err(Error::absent("projection"));
    }
    let quoted = columns_of(record)
        .iter()
        .map(|binding| quote_identifier(&binding.column))
        .collect::<Result<Vec<_>>>()?;
    if quoted.is_empty() {
        return Err(Error::NoTaggedFields(record.type_name().to_owned()));
    }
    Ok(quoted.join(", "))
}

/// AND-joined `` `column` = literal `` terms for the non-zero fields.
pub(crate) fn record_conditions(record: &dyn Describable) -> Result<String> {
    if !record.is_present() {
        return Err(Error::absent("predicate"));
    }
    let mut terms = Vec::new();
    for binding in columns_of(record) {
        if binding.is_zero {
            continue;
        }
        let column = quote_identifier(&binding.column)?;
        terms.push(format!("{column} = {}", to_literal(&binding.value)));
    }
    if terms.is_empty() {
        return Err(Error::NoMatchingFields(record.type_name().to_owned()));
    }
    Ok(terms.join(" AND "))
}

/// AND-joined terms for explicit pairs; a `NULL` value matches with `IS NULL`.
pub(crate) fn pair_conditions(pairs: &[(String, Value)]) -> Result<String> {
    let mut terms = Vec::with_capacity(pairs.len());
    for (column, value) in pairs {
        let column = quote_identifier(column)?;
        match value {
            Value::Null => terms.push(format!("{column} IS NULL")),
            value => terms.push(format!("{column} = {}", to_literal(value))),
        }
    }
    if terms.is_empty() {
        return Err(Error::NoMatchingFields("conditions".to_owned()));
    }
    Ok(terms.join(" AND "))
}
