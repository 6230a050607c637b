use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use serde_json::{Number, Value};
use sqlx::{
    postgres::{PgColumn, PgRow, PgTypeKind},
    types::BigDecimal,
    Column, Decode, Postgres, Row as _, Type, TypeInfo, ValueRef,
};
use uuid::Uuid;

use super::DatabaseError;

/// A result row keyed by column name, in projection order
pub type Row = serde_json::Map<String, Value>;

/// Converts a Postgres row into its JSON object form
pub fn decode_row(row: &PgRow) -> Result<Row, DatabaseError> {
    let mut out = Row::with_capacity(row.len());
    for column in row.columns() {
        out.insert(column.name().to_string(), decode_column(row, column)?);
    }
    Ok(out)
}

fn decode_column(row: &PgRow, column: &PgColumn) -> Result<Value, DatabaseError> {
    let index = column.ordinal();
    let raw = row
        .try_get_raw(index)
        .map_err(|e| decode_error(column, e))?;
    if raw.is_null() {
        return Ok(Value::Null);
    }

    let value = match column.type_info().name() {
        "BOOL" => Value::Bool(get(row, column)?),
        "INT2" => Value::from(get::<i16>(row, column)?),
        "INT4" => Value::from(get::<i32>(row, column)?),
        "INT8" => Value::from(get::<i64>(row, column)?),
        "FLOAT4" => float_to_json(f64::from(get::<f32>(row, column)?)),
        "FLOAT8" => float_to_json(get(row, column)?),
        "NUMERIC" => numeric_to_json(&get(row, column)?),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => Value::String(get(row, column)?),
        "\"CHAR\"" => Value::String(char::from(get::<i8>(row, column)? as u8).to_string()),
        "DATE" => Value::String(get::<NaiveDate>(row, column)?.to_string()),
        "TIME" => Value::String(get::<NaiveTime>(row, column)?.to_string()),
        "TIMESTAMP" => Value::String(format_timestamp(get(row, column)?)),
        "TIMESTAMPTZ" => Value::String(format_timestamptz(get(row, column)?)),
        "UUID" => Value::String(get::<Uuid>(row, column)?.to_string()),
        "JSON" | "JSONB" => get(row, column)?,
        // user-defined enums arrive as their text label
        _ if is_enum(column.type_info().kind()) => Value::String(
            row.try_get_unchecked::<String, _>(index)
                .map_err(|e| decode_error(column, e))?,
        ),
        name => {
            return Err(DatabaseError::Decode {
                column: column.name().to_string(),
                message: format!("{name} columns are not supported"),
            })
        }
    };

    Ok(value)
}

fn get<'r, T>(row: &'r PgRow, column: &PgColumn) -> Result<T, DatabaseError>
where
    T: Decode<'r, Postgres> + Type<Postgres>,
{
    row.try_get(column.ordinal())
        .map_err(|e| decode_error(column, e))
}

fn decode_error(column: &PgColumn, err: sqlx::Error) -> DatabaseError {
    DatabaseError::Decode {
        column: column.name().to_string(),
        message: err.to_string(),
    }
}

fn is_enum(kind: &PgTypeKind) -> bool {
    matches!(kind, PgTypeKind::Enum(_))
}

fn float_to_json(value: f64) -> Value {
    Number::from_f64(value).map(Value::Number).unwrap_or(Value::Null)
}

/// Whole numerics within i64 become integers. Other values become floats only
/// when the float reads back as the exact same decimal; otherwise the decimal
/// text is kept.
fn numeric_to_json(value: &BigDecimal) -> Value {
    let text = value.to_string();
    if let Ok(int) = text.parse::<i64>() {
        return Value::from(int);
    }

    let exact = text
        .parse::<f64>()
        .ok()
        .filter(|float| {
            BigDecimal::from_str(&float.to_string())
                .map(|back| &back == value)
                .unwrap_or(false)
        })
        .and_then(Number::from_f64);

    match exact {
        Some(number) => Value::Number(number),
        None => Value::String(text),
    }
}

fn format_timestamp(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

fn format_timestamptz(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
