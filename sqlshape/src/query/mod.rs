pub mod builder;
pub mod condition;
pub mod statement;

use std::fmt;

use serde::Serialize;

use crate::types::Value;

pub const PLACEHOLDER: &str = "?";

/// Kind of statement a [`builder::QueryBuilder`] renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Select,
    Insert,
    Update,
    Delete,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self {
            Mode::Select => "SELECT",
            Mode::Insert => "INSERT",
            Mode::Update => "UPDATE",
            Mode::Delete => "DELETE",
        };
        f.write_str(mode)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Ascending => "ASC",
            Direction::Descending => "DESC",
        })
    }
}

/// SQL text plus the positional arguments for its `?` placeholders, in
/// placeholder order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statement {
    pub sql: String,
    pub args: Vec<Value>,
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

/// `?, ?, ?` for `count` arguments.
pub(crate) fn placeholders(count: usize) -> String {
    vec![PLACEHOLDER; count].join(", ")
}
