use tracing::{debug, trace};

use super::condition::{
    pair_conditions, quote_column_list, record_column_list, record_conditions, Predicate,
    Projection,
};
use super::{placeholders, Direction, Mode, Statement, PLACEHOLDER};
use crate::error::{Error, Result};
use crate::ident::sanitize;
use crate::record::{columns_of, Describable};
use crate::types::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Order {
    column: String,
    direction: Direction,
}

/// Fluent, single-table statement builder.
///
/// Every call mutates the builder in place and returns it for chaining. The
/// first error is kept and later errors are dropped, but calls are never
/// skipped: a call made after an error still updates the state. Nothing is
/// reset by [`raw`](Self::raw), so the state can be rendered and inspected
/// repeatedly.
///
/// A builder is meant for one caller assembling one statement. It is not
/// synchronised; wrap it in a lock if it has to be shared between threads.
///
/// ```
/// use sqlshape::QueryBuilder;
///
/// let sql = QueryBuilder::new()
///     .select("id")
///     .from("custom_tablename")
///     .desc("email")
///     .r#where("`id` = 1")
///     .raw();
/// assert_eq!(sql, "SELECT `id` FROM custom_tablename WHERE `id` = 1 ORDER BY `email` DESC;");
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    mode: Option<Mode>,
    columns: String,
    assignments: Vec<String>,
    args: Vec<Value>,
    table: Option<String>,
    where_clause: Option<String>,
    order: Option<Order>,
    error: Option<Error>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches to SELECT mode and sets the projection.
    ///
    /// A column list is split on commas and every name is sanitized. A
    /// record projects all of its column-mapped fields and, if no table was
    /// set yet, provides the table as well.
    pub fn select<'a>(&mut self, projection: impl Into<Projection<'a>>) -> &mut Self {
        self.mode = Some(Mode::Select);
        match projection.into() {
            Projection::Columns(columns) => match quote_column_list(&columns) {
                Ok(columns) => self.columns = columns,
                Err(err) => self.fail(err),
            },
            Projection::Record(record) => match record_column_list(record) {
                Ok(columns) => {
                    self.columns = columns;
                    self.default_table(record);
                }
                Err(err) => self.fail(err),
            },
        }
        self
    }

    /// Switches to INSERT mode with the non-zero fields of `record`.
    pub fn insert<R: Describable + ?Sized>(&mut self, record: &R) -> &mut Self {
        self.mode = Some(Mode::Insert);
        self.assign(&record)
    }

    /// Switches to UPDATE mode, setting the non-zero fields of `record`.
    pub fn update<R: Describable + ?Sized>(&mut self, record: &R) -> &mut Self {
        self.mode = Some(Mode::Update);
        self.assign(&record)
    }

    /// Switches to DELETE mode. The table must already be set with
    /// [`from`](Self::from).
    pub fn delete(&mut self) -> &mut Self {
        self.mode = Some(Mode::Delete);
        self
    }

    /// Sets the WHERE condition, replacing any previous one.
    pub fn r#where<'a>(&mut self, predicate: impl Into<Predicate<'a>>) -> &mut Self {
        let rendered = match predicate.into() {
            Predicate::Raw(expr) => Ok(expr.into_owned()),
            Predicate::Record(record) => record_conditions(record),
            Predicate::Pairs(pairs) => pair_conditions(&pairs),
        };
        match rendered {
            Ok(clause) => self.where_clause = Some(clause),
            Err(err) => self.fail(err),
        }
        self
    }

    /// Sets the table. Only legal before a mode is chosen or in SELECT mode.
    pub fn from(&mut self, table: &str) -> &mut Self {
        match self.mode {
            Some(mode) if mode != Mode::Select => self.fail(Error::WrongMode {
                operation: "FROM",
                mode,
            }),
            _ => match sanitize(table) {
                Ok(table) => self.table = Some(table.to_owned()),
                Err(err) => self.fail(err),
            },
        }
        self
    }

    pub fn asc(&mut self, column: &str) -> &mut Self {
        self.order_by(column, Direction::Ascending)
    }

    pub fn desc(&mut self, column: &str) -> &mut Self {
        self.order_by(column, Direction::Descending)
    }

    /// Renders the statement for the current mode.
    ///
    /// Returns an empty string, and records the error, when no mode or no
    /// table is configured.
    pub fn raw(&mut self) -> String {
        let Some(mode) = self.mode else {
            self.fail(Error::NoModeConfigured);
            return String::new();
        };
        let Some(table) = self.table.as_deref() else {
            self.fail(Error::MissingTable);
            return String::new();
        };

        let mut sql = match mode {
            Mode::Select => format!("SELECT {} FROM {table}", self.columns),
            Mode::Insert => format!(
                "INSERT INTO {table} ({}) VALUES ({})",
                self.assignments
                    .iter()
                    .map(|column| format!("`{column}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
                placeholders(self.assignments.len()),
            ),
            Mode::Update => format!(
                "UPDATE {table} SET {}",
                self.assignments
                    .iter()
                    .map(|column| format!("`{column}` = {PLACEHOLDER}"))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Mode::Delete => format!("DELETE FROM {table}"),
        };
        if mode != Mode::Insert {
            if let Some(clause) = &self.where_clause {
                sql.push_str(" WHERE ");
                sql.push_str(clause);
            }
        }
        // ORDER BY only applies to SELECT.
        if let (Mode::Select, Some(order)) = (mode, &self.order) {
            sql.push_str(&format!(" ORDER BY `{}` {}", order.column, order.direction));
        }
        sql.push(';');

        debug!(%mode, sql = %sql, "rendered query");
        #[cfg(debug_assertions)]
        trace!("\n{}", crate::utils::format_sql(&sql));
        sql
    }

    /// Renders the statement and pairs it with its positional arguments, or
    /// returns the first error of the chain.
    pub fn build(&mut self) -> Result<Statement> {
        let sql = self.raw();
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(Statement {
                sql,
                args: self.args().to_vec(),
            }),
        }
    }

    /// First error recorded by the chain, if any. Never cleared.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Positional arguments for the `?` placeholders of an INSERT or UPDATE.
    pub fn args(&self) -> &[Value] {
        match self.mode {
            Some(Mode::Insert | Mode::Update) => &self.args,
            _ => &[],
        }
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Rendered projection, e.g. "`id`, `username`".
    pub fn columns(&self) -> &str {
        &self.columns
    }

    pub fn where_clause(&self) -> Option<&str> {
        self.where_clause.as_deref()
    }

    fn order_by(&mut self, column: &str, direction: Direction) -> &mut Self {
        match sanitize(column) {
            Ok(column) => {
                self.order = Some(Order {
                    column: column.to_owned(),
                    direction,
                })
            }
            Err(err) => self.fail(err),
        }
        self
    }

    fn assign(&mut self, record: &dyn Describable) -> &mut Self {
        if !record.is_present() {
            self.fail(Error::absent("assignment source"));
            return self;
        }
        let mut assignments = Vec::new();
        let mut args = Vec::new();
        for binding in columns_of(record) {
            if binding.is_zero {
                continue;
            }
            match sanitize(&binding.column) {
                Ok(column) => assignments.push(column.to_owned()),
                Err(err) => {
                    self.fail(err);
                    return self;
                }
            }
            args.push(binding.value);
        }
        if assignments.is_empty() {
            self.fail(Error::NoFieldsToUpdate);
            return self;
        }
        self.assignments = assignments;
        self.args = args;
        self.default_table(record);
        self
    }

    fn default_table(&mut self, record: &dyn Describable) {
        if self.table.is_some() {
            return;
        }
        let table = record.table_name();
        match sanitize(&table) {
            Ok(_) => self.table = Some(table),
            Err(err) => self.fail(err),
        }
    }

    fn fail(&mut self, err: Error) {
        if let Some(first) = &self.error {
            trace!(error = %err, first = %first, "query builder error dropped");
            return;
        }
        debug!(error = %err, "query builder error");
        self.error = Some(err);
    }
}
