//! Record introspection.
//!
//! A record is any type implementing [`Describable`]: it lists its fields in
//! declaration order together with their optional column annotation and
//! current value. Usually the implementation comes from
//! `#[derive(Describable)]`:
//!
//! ```
//! use sqlshape::prelude::*;
//!
//! #[derive(Describable, Default)]
//! struct User {
//!     #[sql(column = "id")]
//!     id: u32,
//!     username: String,
//!     #[sql(skip = true)]
//!     session: String,
//! }
//!
//! let columns: Vec<_> = columns_of(&User::default())
//!     .into_iter()
//!     .map(|binding| binding.column)
//!     .collect();
//! assert_eq!(columns, ["id", "username"]);
//! ```

use crate::types::{ToValue, Value};
use crate::utils::{default_table_name, get_type_name, to_snake_case};

/// One field of a record.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The field name as declared.
    pub name: &'static str,
    /// `None`: not annotated. `Some("")`: excluded from all SQL.
    /// `Some(name)`: explicit column name.
    pub column: Option<&'static str>,
    pub value: Value,
    /// Whether the value equals the default of the field's type.
    pub is_zero: bool,
}

impl Field {
    /// Reads a field; zero-ness is the field compared to `T::default()`.
    pub fn new<T>(name: &'static str, column: Option<&'static str>, value: &T) -> Self
    where
        T: ToValue + Default + PartialEq,
    {
        Self {
            name,
            column,
            value: value.to_value(),
            is_zero: *value == T::default(),
        }
    }

    /// Column this field maps to, `None` when it opted out.
    pub fn column_name(&self) -> Option<String> {
        match self.column {
            Some("") => None,
            Some(column) => Some(column.to_owned()),
            None => Some(to_snake_case(self.name)),
        }
    }
}

/// A resolved `(column, value, is_zero)` triple.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnBinding {
    pub column: String,
    pub value: Value,
    pub is_zero: bool,
}

/// Capability of a record to enumerate its fields.
///
/// The trait is object safe; the query builder works on `&dyn Describable`.
pub trait Describable {
    /// Bare type name, used to derive the default table.
    fn type_name(&self) -> &'static str;

    /// Fields in declaration order.
    fn fields(&self) -> Vec<Field>;

    /// Table used when none is given explicitly.
    fn table_name(&self) -> String {
        default_table_name(self.type_name())
    }

    /// `false` for an absent record such as `None`.
    fn is_present(&self) -> bool {
        true
    }
}

impl<R: Describable + ?Sized> Describable for &R {
    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn fields(&self) -> Vec<Field> {
        (**self).fields()
    }

    fn table_name(&self) -> String {
        (**self).table_name()
    }

    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<R: Describable + ?Sized> Describable for Box<R> {
    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn fields(&self) -> Vec<Field> {
        (**self).fields()
    }

    fn table_name(&self) -> String {
        (**self).table_name()
    }

    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<R: Describable> Describable for Option<R> {
    fn type_name(&self) -> &'static str {
        match self {
            Some(record) => record.type_name(),
            None => get_type_name::<R>(),
        }
    }

    fn fields(&self) -> Vec<Field> {
        self.as_ref().map(R::fields).unwrap_or_default()
    }

    fn table_name(&self) -> String {
        match self {
            Some(record) => record.table_name(),
            None => default_table_name(get_type_name::<R>()),
        }
    }

    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(R::is_present)
    }
}

/// Ordered column bindings of `record`; empty for an absent record.
///
/// Fields that opted out with an empty annotation are left out.
pub fn columns_of<R: Describable + ?Sized>(record: &R) -> Vec<ColumnBinding> {
    if !record.is_present() {
        return Vec::new();
    }
    record
        .fields()
        .into_iter()
        .filter_map(|field| {
            field.column_name().map(|column| ColumnBinding {
                column,
                value: field.value,
                is_zero: field.is_zero,
            })
        })
        .collect()
}
