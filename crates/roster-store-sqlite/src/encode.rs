//! Encoding and decoding helpers between chrono timestamps and the
//! RFC 3339 TEXT columns used by the store.

use chrono::{DateTime, Utc};
use rusqlite::{Row, types::Type};

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

fn decode_dt(idx: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(raw)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| {
      rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
    })
}

/// Read a NOT NULL timestamp column.
pub fn dt_col(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
  let raw: String = row.get(idx)?;
  decode_dt(idx, &raw)
}

/// Read a nullable timestamp column.
pub fn opt_dt_col(
  row: &Row<'_>,
  idx: usize,
) -> rusqlite::Result<Option<DateTime<Utc>>> {
  let raw: Option<String> = row.get(idx)?;
  raw.map(|s| decode_dt(idx, &s)).transpose()
}
