use pretty_assertions::assert_eq;
use sqlshape::prelude::*;
use sqlshape::Mode;

use crate::models::{Hidden, Person, User};

#[test]
fn select_from_where_order_with_strings() {
    let mut qb = QueryBuilder::new();
    let sql = qb
        .select("id")
        .from("custom_tablename")
        .desc("email")
        .r#where("`id` = 1")
        .raw();
    assert_eq!(
        sql,
        "SELECT `id` FROM custom_tablename WHERE `id` = 1 ORDER BY `email` DESC;"
    );
    assert_eq!(qb.error(), None);
}

#[test]
fn call_order_does_not_matter_for_select() {
    let sql = QueryBuilder::new()
        .from("custom_tablename")
        .select("id")
        .desc("email")
        .r#where("`id` = 1")
        .raw();
    assert_eq!(
        sql,
        "SELECT `id` FROM custom_tablename WHERE `id` = 1 ORDER BY `email` DESC;"
    );
}

#[test]
fn select_column_list_is_quoted() {
    let mut qb = QueryBuilder::new();
    qb.select("id, username ,email").from("users");
    assert_eq!(qb.columns(), "`id`, `username`, `email`");
    assert_eq!(qb.raw(), "SELECT `id`, `username`, `email` FROM users;");
}

#[test]
fn select_record_projects_columns_and_defaults_table() {
    let mut qb = QueryBuilder::new();
    qb.select(&User::default());
    assert_eq!(qb.columns(), "`id`, `username`, `email`, `password`");
    assert_eq!(qb.table(), Some("users"));
    assert_eq!(qb.mode(), Some(Mode::Select));
    assert_eq!(qb.error(), None);
}

#[test]
fn select_record_keeps_an_explicit_table() {
    let user = User {
        id: 1,
        ..Default::default()
    };
    let mut qb = QueryBuilder::new();
    qb.from("custom_tablename");
    let sql = qb
        .select(&User::default())
        .desc("email")
        .r#where(&user)
        .raw();
    assert_eq!(
        sql,
        "SELECT `id`, `username`, `email`, `password` FROM custom_tablename WHERE `id` = 1 ORDER BY `email` DESC;"
    );
    assert_eq!(qb.error(), None);
}

#[test]
fn select_record_uses_table_attribute() {
    let sql = QueryBuilder::new().select(&Person::default()).raw();
    assert_eq!(sql, "SELECT `id`, `name`, `active`, `score` FROM people;");
}

#[test]
fn where_record_quotes_text_and_joins_with_and() {
    let filter = User {
        id: 4,
        username: "O'Neil".into(),
        ..Default::default()
    };
    let mut qb = QueryBuilder::new();
    qb.select("id").from("users").r#where(&filter);
    assert_eq!(qb.where_clause(), Some("`id` = 4 AND `username` = 'O''Neil'"));
}

#[test]
fn where_record_without_non_zero_fields_fails() {
    let mut qb = QueryBuilder::new();
    qb.select("id").from("users").r#where(&User::default());
    assert_eq!(qb.error(), Some(&Error::NoMatchingFields("User".into())));
    assert_eq!(qb.where_clause(), None);
}

#[test]
fn where_conditions_macro() {
    let sql = QueryBuilder::new()
        .select("id, username")
        .from("users")
        .r#where(conditions!(username = "jo", active = true, deleted_at = None::<String>))
        .raw();
    assert_eq!(
        sql,
        "SELECT `id`, `username` FROM users WHERE `username` = 'jo' AND `active` = 1 AND `deleted_at` IS NULL;"
    );
}

#[test]
fn select_record_without_columns_fails() {
    let mut qb = QueryBuilder::new();
    qb.select(&Hidden::default());
    assert_eq!(qb.error(), Some(&Error::NoTaggedFields("Hidden".into())));
    assert_eq!(qb.table(), None);
}

#[test]
fn select_absent_record_fails() {
    let mut qb = QueryBuilder::new();
    qb.select(&None::<User>);
    assert!(matches!(qb.error(), Some(Error::InvalidInput(_))));
}

#[test]
fn raw_without_mode_reports_no_mode() {
    let mut qb = QueryBuilder::new();
    let sql = qb.from("user").raw();
    assert_eq!(sql, "");
    assert_eq!(qb.table(), Some("user"));
    assert_eq!(qb.error(), Some(&Error::NoModeConfigured));
}

#[test]
fn raw_without_table_reports_missing_table() {
    let mut qb = QueryBuilder::new();
    assert_eq!(qb.select("id").raw(), "");
    assert_eq!(qb.error(), Some(&Error::MissingTable));
}

#[test]
fn first_error_is_sticky_and_calls_pass_through() {
    let mut qb = QueryBuilder::new();
    qb.select("id, user name").from("also bad!").from("users").asc("id");

    let first = Error::InvalidIdentifier("user name".into());
    assert_eq!(qb.error(), Some(&first));
    assert_eq!(qb.error(), Some(&first));

    // Later calls still ran.
    assert_eq!(qb.table(), Some("users"));
    assert_eq!(qb.raw(), "SELECT  FROM users ORDER BY `id` ASC;");
    assert_eq!(qb.error(), Some(&first));

    qb.select("id");
    assert_eq!(qb.raw(), "SELECT `id` FROM users ORDER BY `id` ASC;");
    assert_eq!(qb.error(), Some(&first));
    assert_eq!(qb.build(), Err(first));
}

#[test]
fn later_sort_replaces_earlier_one() {
    let sql = QueryBuilder::new()
        .select("id")
        .from("users")
        .desc("email")
        .asc("id")
        .raw();
    assert_eq!(sql, "SELECT `id` FROM users ORDER BY `id` ASC;");
}

#[test]
fn sort_column_is_sanitized() {
    let mut qb = QueryBuilder::new();
    qb.select("id").from("users").desc("email; --");
    assert_eq!(qb.error(), Some(&Error::InvalidIdentifier("email; --".into())));
    assert_eq!(qb.raw(), "SELECT `id` FROM users;");
}

#[test]
fn from_after_non_select_mode_fails() {
    let user = User {
        username: "jo".into(),
        ..Default::default()
    };
    let mut qb = QueryBuilder::new();
    qb.update(&user).from("accounts");
    assert_eq!(
        qb.error(),
        Some(&Error::WrongMode {
            operation: "FROM",
            mode: Mode::Update,
        })
    );
    assert_eq!(qb.table(), Some("users"));
}

#[test]
fn insert_binds_non_zero_fields() -> anyhow::Result<()> {
    let user = User {
        username: "jo".into(),
        email: "jo@example.com".into(),
        ..Default::default()
    };
    let stmt = QueryBuilder::new().insert(&user).build()?;
    assert_eq!(
        stmt.sql,
        "INSERT INTO users (`username`, `email`) VALUES (?, ?);"
    );
    assert_eq!(
        serde_json::to_value(&stmt.args)?,
        serde_json::json!(["jo", "jo@example.com"])
    );
    Ok(())
}

#[test]
fn update_with_where() -> anyhow::Result<()> {
    let user = User {
        username: "jo".into(),
        password: "pw".into(),
        ..Default::default()
    };
    let stmt = QueryBuilder::new()
        .update(&user)
        .r#where(conditions!(id = 1))
        .build()?;
    assert_eq!(
        stmt.sql,
        "UPDATE users SET `username` = ?, `password` = ? WHERE `id` = 1;"
    );
    assert_eq!(
        stmt.args,
        [Value::Text("jo".into()), Value::Text("pw".into())]
    );
    Ok(())
}

#[test]
fn update_with_nothing_to_set_fails() {
    let mut qb = QueryBuilder::new();
    qb.update(&User::default());
    assert_eq!(qb.error(), Some(&Error::NoFieldsToUpdate));
}

#[test]
fn delete_uses_table_set_before() -> anyhow::Result<()> {
    let stmt = QueryBuilder::new()
        .from("users")
        .delete()
        .r#where("`id` = 1")
        .build()?;
    assert_eq!(stmt.sql, "DELETE FROM users WHERE `id` = 1;");
    assert!(stmt.args.is_empty());
    Ok(())
}

#[test]
fn select_has_no_args_after_switching_mode() -> anyhow::Result<()> {
    let user = User {
        username: "jo".into(),
        ..Default::default()
    };
    let mut qb = QueryBuilder::new();
    qb.update(&user);
    assert_eq!(qb.args().len(), 1);
    let stmt = qb.select("id").build()?;
    assert_eq!(stmt.sql, "SELECT `id` FROM users;");
    assert!(stmt.args.is_empty());
    Ok(())
}

#[cfg(feature = "chrono")]
mod dates {
    use chrono::{NaiveDate, NaiveDateTime};
    use pretty_assertions::assert_eq;
    use sqlshape::prelude::*;

    #[derive(Describable, Default)]
    struct Event {
        id: u64,
        day: NaiveDate,
    }

    #[derive(Describable, Default)]
    struct AuditLog {
        id: u64,
        created_at: NaiveDateTime,
    }

    #[test]
    fn dates_are_inlined_as_text() -> anyhow::Result<()> {
        let event = Event {
            day: NaiveDate::from_ymd_opt(2020, 1, 2).ok_or_else(|| anyhow::anyhow!("date"))?,
            ..Default::default()
        };
        let sql = QueryBuilder::new()
            .select(&Event::default())
            .r#where(&event)
            .raw();
        assert_eq!(
            sql,
            "SELECT `id`, `day` FROM events WHERE `day` = '2020-01-02';"
        );
        Ok(())
    }

    #[test]
    fn datetimes_are_inlined_with_seconds() -> anyhow::Result<()> {
        let created_at = NaiveDate::from_ymd_opt(2021, 3, 4)
            .and_then(|day| day.and_hms_opt(5, 6, 7))
            .ok_or_else(|| anyhow::anyhow!("datetime"))?;
        let log = AuditLog {
            created_at,
            ..Default::default()
        };
        let sql = QueryBuilder::new()
            .select("id")
            .from("audit_logs")
            .r#where(&log)
            .raw();
        assert_eq!(
            sql,
            "SELECT `id` FROM audit_logs WHERE `created_at` = '2021-03-04 05:06:07';"
        );
        Ok(())
    }

    #[test]
    fn default_datetime_is_zero() {
        let mut qb = QueryBuilder::new();
        qb.select("id").from("audit_logs").r#where(&AuditLog::default());
        assert_eq!(
            qb.error(),
            Some(&Error::NoMatchingFields("AuditLog".into()))
        );
    }
}
