//! Generate SQL text and positional arguments from the shape of a record.
//!
//! Records describe their fields through [`Describable`], usually derived.
//! From there the crate offers two one-shot generators,
//! [`generate_update`] and [`generate_select`], and a chained
//! [`QueryBuilder`]. Nothing is executed: the output is a string and a list
//! of [`Value`]s for a `?`-placeholder driver.
//!
//! Table and column names are always sanitized before they are written into
//! SQL. Raw WHERE strings are trusted and written as given.

/// This module contains the macros used in the crate.
#[macro_use]
mod macros;

pub mod error;
pub mod ident;
pub mod prelude;
pub mod query;
pub mod record;

/// This module contains the value types read from records.
pub mod types;

mod utils;

pub use error::{Error, Result};
pub use ident::{escape_literal, quote_literal, sanitize};
pub use query::builder::QueryBuilder;
pub use query::condition::{Predicate, Projection};
pub use query::statement::{generate_select, generate_update};
pub use query::{Direction, Mode, Statement, PLACEHOLDER};
pub use record::{columns_of, ColumnBinding, Describable, Field};
pub use types::{ToValue, Value};
pub use utils::{default_table_name, to_snake_case};

#[cfg(feature = "derive")]
pub use sqlshape_derive::Describable;
