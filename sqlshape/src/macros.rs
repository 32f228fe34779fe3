/// Builds a WHERE [`Predicate`](crate::query::condition::Predicate) from
/// `column = value` pairs.
///
/// Column names are sanitized when the predicate is applied; values are
/// inlined as literals (text quoted and escaped), `None` becomes `IS NULL`.
/// Unlike a record predicate, zero values are kept.
///
/// # Example
///
/// ```
/// use sqlshape::prelude::*;
///
/// let sql = QueryBuilder::new()
///     .select("id, username")
///     .from("users")
///     .r#where(conditions!(username = "jo", active = true))
///     .raw();
/// assert_eq!(
///     sql,
///     "SELECT `id`, `username` FROM users WHERE `username` = 'jo' AND `active` = 1;"
/// );
/// ```
#[macro_export]
macro_rules! conditions {
    ($($field:ident = $value:expr),* $(,)?) => {
        $crate::query::condition::Predicate::Pairs(vec![
            $(
                (
                    stringify!($field).to_string(),
                    $crate::types::ToValue::to_value(&$value),
                ),
            )*
        ])
    };
}
