//! [`SqliteStore`] — the SQLite implementation of
//! [`RecordStore`](roster_core::store::RecordStore).

use std::path::Path;

use chrono::Utc;
use roster_core::{
  Error, Result,
  store::{Page, RecordStore},
};
use rusqlite::{OptionalExtension as _, params_from_iter, types::Value};

use crate::{record::SqlRecord, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A roster store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. Every call
/// is queued onto the connection's worker thread, so each operation runs to
/// completion before the next starts; combined with the UNIQUE constraints
/// in the schema this makes insert-and-detect atomic, with no
/// check-then-act window.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path)
      .await
      .map_err(storage)?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory()
      .await
      .map_err(storage)?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await
      .map_err(storage)
  }
}

// ─── Error translation ───────────────────────────────────────────────────────

/// Wrap a backend failure that has no domain meaning.
fn storage(err: tokio_rusqlite::Error) -> Error { Error::Storage(Box::new(err)) }

/// Translate a failed write against `E`'s table into a domain error.
///
/// SQLite reports unique collisions as
/// `UNIQUE constraint failed: <table>.<column>`; the column name tells us
/// which of the two unique columns collided. Anything else propagates as a
/// storage error.
fn write_error<E: SqlRecord>(err: tokio_rusqlite::Error) -> Error {
  if let tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(
    e,
    Some(msg),
  )) = &err
    && e.code == rusqlite::ErrorCode::ConstraintViolation
  {
    if msg.contains(&format!("{}.{}", E::TABLE, E::CODE_FIELD)) {
      return Error::Duplicate { entity: E::NOUN, field: E::CODE_FIELD };
    }
    if msg.contains(&format!("{}.email", E::TABLE)) {
      return Error::Duplicate { entity: E::NOUN, field: "email" };
    }
    return Error::Constraint { table: E::TABLE };
  }
  storage(err)
}

// ─── Statement builders ──────────────────────────────────────────────────────

const COL_CREATED_AT: &str = "created_at";

fn insert_sql<E: SqlRecord>() -> String {
  let marks: Vec<String> =
    (1..=E::COLUMNS.len()).map(|i| format!("?{i}")).collect();
  format!(
    "INSERT INTO {} ({}) VALUES ({})",
    E::TABLE,
    E::COLUMNS.join(", "),
    marks.join(", "),
  )
}

fn select_sql<E: SqlRecord>(key: &str) -> String {
  format!(
    "SELECT id, {} FROM {} WHERE {key} = ?1",
    E::COLUMNS.join(", "),
    E::TABLE,
  )
}

fn list_sql<E: SqlRecord>() -> String {
  format!(
    "SELECT id, {} FROM {} ORDER BY id ASC LIMIT ?1 OFFSET ?2",
    E::COLUMNS.join(", "),
    E::TABLE,
  )
}

/// SET every column except the write-once `created_at`.
fn update_sql<E: SqlRecord>() -> String {
  let sets: Vec<String> = E::COLUMNS
    .iter()
    .filter(|col| **col != COL_CREATED_AT)
    .enumerate()
    .map(|(i, col)| format!("{col} = ?{}", i + 1))
    .collect();
  format!(
    "UPDATE {} SET {} WHERE id = ?{}",
    E::TABLE,
    sets.join(", "),
    sets.len() + 1,
  )
}

/// Bind values matching [`update_sql`]: the record's columns minus
/// `created_at`, then the row id.
fn update_values<E: SqlRecord>(record: &E, id: i64) -> Vec<Value> {
  let mut values: Vec<Value> = record
    .column_values()
    .into_iter()
    .zip(E::COLUMNS)
    .filter(|(_, col)| **col != COL_CREATED_AT)
    .map(|(value, _)| value)
    .collect();
  values.push(id.into());
  values
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl<E: SqlRecord> RecordStore<E> for SqliteStore {
  async fn create(&self, input: E::Create) -> Result<E> {
    let mut record = E::build(input, Utc::now());
    let sql = insert_sql::<E>();

    self
      .conn
      .call(move |conn| {
        conn.execute(&sql, params_from_iter(record.column_values()))?;
        record.assign_id(conn.last_insert_rowid());
        Ok(record)
      })
      .await
      .map_err(write_error::<E>)
  }

  async fn get(&self, id: i64) -> Result<Option<E>> {
    let sql = select_sql::<E>("id");

    self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(&sql, [id], E::from_row).optional()?)
      })
      .await
      .map_err(storage)
  }

  async fn get_by_code(&self, code: &str) -> Result<Option<E>> {
    let sql = select_sql::<E>(E::CODE_FIELD);
    let code = code.to_owned();

    self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(&sql, [code], E::from_row).optional()?)
      })
      .await
      .map_err(storage)
  }

  async fn list(&self, page: Page) -> Result<Vec<E>> {
    let sql = list_sql::<E>();

    self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(
            rusqlite::params![page.limit as i64, page.offset as i64],
            E::from_row,
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await
      .map_err(storage)
  }

  async fn update(&self, id: i64, patch: E::Update) -> Result<E> {
    let now = Utc::now();
    let select = select_sql::<E>("id");
    let update = update_sql::<E>();

    // Lookup, apply, and write-back run inside one serialized call, so no
    // other operation can interleave between the read and the write.
    let updated: Option<E> = self
      .conn
      .call(move |conn| {
        let Some(mut record) =
          conn.query_row(&select, [id], E::from_row).optional()?
        else {
          return Ok(None);
        };

        record.apply(patch);
        record.touch(now);

        conn.execute(&update, params_from_iter(update_values(&record, id)))?;
        Ok(Some(record))
      })
      .await
      .map_err(write_error::<E>)?;

    updated.ok_or(Error::NotFound { entity: E::NOUN, id })
  }

  async fn delete(&self, id: i64) -> Result<bool> {
    let sql = format!("DELETE FROM {} WHERE id = ?1", E::TABLE);

    let deleted = self
      .conn
      .call(move |conn| Ok(conn.execute(&sql, [id])?))
      .await
      .map_err(storage)?;

    Ok(deleted > 0)
  }
}
