use std::fmt;

use serde::Serialize;

/// A dynamically typed scalar taken from a record field.
///
/// Used both as a positional argument for `?` placeholders and, in WHERE
/// fragments built from records, as an inline literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
}

/// Renders the value the way it is inlined into SQL text, without quoting.
/// Booleans become `1`/`0`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Bool(true) => f.write_str("1"),
            Value::Bool(false) => f.write_str("0"),
            Value::Int(i) => write!(f, "{i}"),
            Value::UInt(u) => write!(f, "{u}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

/// Conversion of a field into a [`Value`].
///
/// Implemented for the scalar types a record usually carries; derived
/// records call it once per field.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

macro_rules! to_value {
    ($variant:ident as $target:ty: $($ty:ty),*) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    Value::$variant(*self as $target)
                }
            }
        )*
    };
}

to_value!(Int as i64: i8, i16, i32, i64, isize);
to_value!(UInt as u64: u8, u16, u32, u64, usize);
to_value!(Float as f64: f32, f64);

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl ToValue for &str {
    fn to_value(&self) -> Value {
        Value::Text((*self).to_owned())
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}

#[cfg(feature = "chrono")]
mod chrono_values {
    use super::{ToValue, Value};

    pub const DATE_FORMAT: &str = "%Y-%m-%d";
    pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    impl ToValue for chrono::NaiveDate {
        fn to_value(&self) -> Value {
            Value::Text(self.format(DATE_FORMAT).to_string())
        }
    }

    impl ToValue for chrono::NaiveDateTime {
        fn to_value(&self) -> Value {
            Value::Text(self.format(DATETIME_FORMAT).to_string())
        }
    }

    impl ToValue for chrono::DateTime<chrono::Utc> {
        fn to_value(&self) -> Value {
            Value::Text(self.format(DATETIME_FORMAT).to_string())
        }
    }
}

#[cfg(feature = "chrono")]
pub use chrono_values::{DATETIME_FORMAT, DATE_FORMAT};
