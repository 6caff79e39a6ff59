#[cfg(feature = "postgres")]
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
#[cfg(any(feature = "postgres", feature = "sqlite"))]
use serde_json::{Map, Value};
#[cfg(any(feature = "postgres", feature = "sqlite"))]
use sqlx_core::{column::Column, from_row::FromRow, row::Row, type_info::TypeInfo, value::ValueRef};
#[cfg(feature = "postgres")]
use sqlx_postgres::{PgColumn, PgRow};
#[cfg(feature = "sqlite")]
use sqlx_sqlite::{SqliteColumn, SqliteRow};

#[cfg(any(feature = "postgres", feature = "sqlite"))]
use super::User;

/// Every column of the row becomes one JSON field, in column order.
macro_rules! impl_from_row {
    ($row:ty, $decode:ident) => {
        impl FromRow<'_, $row> for User {
            fn from_row(row: &$row) -> Result<Self, sqlx_core::Error> {
                let mut columns = Map::new();
                for column in row.columns() {
                    columns.insert(column.name().to_string(), $decode(row, column)?);
                }
                Ok(Self::from_columns(columns))
            }
        }
    };
}

#[cfg(feature = "postgres")]
impl_from_row!(PgRow, pg_value);
#[cfg(feature = "sqlite")]
impl_from_row!(SqliteRow, sqlite_value);

#[cfg(feature = "postgres")]
fn pg_value(row: &PgRow, column: &PgColumn) -> Result<Value, sqlx_core::Error> {
    let index = column.ordinal();
    if row.try_get_raw(index)?.is_null() {
        return Ok(Value::Null);
    }
    let value = match column.type_info().name() {
        "INT2" => Value::from(row.try_get::<i16, _>(index)?),
        "INT4" => Value::from(row.try_get::<i32, _>(index)?),
        "INT8" => Value::from(row.try_get::<i64, _>(index)?),
        "FLOAT4" => Value::from(row.try_get::<f32, _>(index)?),
        "FLOAT8" => Value::from(row.try_get::<f64, _>(index)?),
        "BOOL" => Value::from(row.try_get::<bool, _>(index)?),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => Value::from(row.try_get::<String, _>(index)?),
        "UUID" => Value::from(row.try_get::<uuid::Uuid, _>(index)?.to_string()),
        "JSON" | "JSONB" => row.try_get::<Value, _>(index)?,
        "TIMESTAMPTZ" => Value::from(timestamp(row.try_get::<DateTime<Utc>, _>(index)?)),
        "TIMESTAMP" => Value::from(timestamp(
            row.try_get::<NaiveDateTime, _>(index)?.and_utc(),
        )),
        "DATE" => Value::from(row.try_get::<NaiveDate, _>(index)?.to_string()),
        "BYTEA" => Value::from(row.try_get::<Vec<u8>, _>(index)?),
        other => return Err(unsupported(column.name(), other)),
    };
    Ok(value)
}

/// Timestamps render the way a JavaScript `Date` serializes.
#[cfg(feature = "postgres")]
fn timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(feature = "postgres")]
fn unsupported(column: &str, type_name: &str) -> sqlx_core::Error {
    sqlx_core::Error::ColumnDecode {
        index: format!("{column:?}"),
        source: format!("unsupported column type {type_name}").into(),
    }
}

/// SQLite is dynamically typed, so the value's storage class decides the
/// JSON type rather than the declared column type.
#[cfg(feature = "sqlite")]
fn sqlite_value(row: &SqliteRow, column: &SqliteColumn) -> Result<Value, sqlx_core::Error> {
    let index = column.ordinal();
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let value = match raw.type_info().name() {
        "INTEGER" | "BOOLEAN" => Value::from(row.try_get_unchecked::<i64, _>(index)?),
        "REAL" | "NUMERIC" => Value::from(row.try_get_unchecked::<f64, _>(index)?),
        "BLOB" => Value::from(row.try_get_unchecked::<Vec<u8>, _>(index)?),
        _ => Value::from(row.try_get_unchecked::<String, _>(index)?),
    };
    Ok(value)
}
