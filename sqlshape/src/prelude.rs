pub use super::conditions;
pub use super::query::condition::{Predicate, Projection};
pub use super::record::{columns_of, Describable, Field};
pub use super::types::{ToValue, Value};
pub use super::{generate_select, generate_update, Error, QueryBuilder, Statement};

#[cfg(feature = "derive")]
pub use sqlshape_derive::Describable;
