/// Bare name of `T`: module path and generic arguments stripped.
///
/// `my_app::models::User` becomes `User`, `Wrapper<my_app::User>` becomes
/// `Wrapper`.
pub(crate) fn get_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Converts `CamelCase` to `snake_case`.
///
/// Every uppercase letter after the first character gets its own leading
/// underscore, so acronyms are split letter by letter (`ID` -> `i_d`).
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Default table for a record type: its name lower-cased with an `s`.
pub fn default_table_name(type_name: &str) -> String {
    format!("{}s", type_name.to_lowercase())
}

/// Pretty-prints a statement for logs.
#[cfg_attr(not(debug_assertions), allow(dead_code))]
pub(crate) fn format_sql(sql: &str) -> String {
    sqlformat::format(
        sql,
        &sqlformat::QueryParams::None,
        &sqlformat::FormatOptions::default(),
    )
}
