//! [`SqliteStore`] — the SQLite implementation of [`SubscriptionStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use subtrack_core::{
  store::{CostQuery, ListParams, SubscriptionStore},
  subscription::{NewSubscription, Subscription},
};

use crate::{
  Error, Result,
  encode::{RawSubscription, encode_month, encode_uuid},
  schema::SCHEMA,
};

const SUBSCRIPTION_COLUMNS: &str =
  "id, service_name, price, user_id, start_date, end_date";

fn raw_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawSubscription> {
  Ok(RawSubscription {
    id:           row.get(0)?,
    service_name: row.get(1)?,
    price:        row.get(2)?,
    user_id:      row.get(3)?,
    start_date:   row.get(4)?,
    end_date:     row.get(5)?,
  })
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A subscription store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
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
      .await?;
    Ok(())
  }
}

// ─── SubscriptionStore impl ──────────────────────────────────────────────────

impl SubscriptionStore for SqliteStore {
  type Error = Error;

  async fn create(&self, input: NewSubscription) -> Result<Subscription> {
    input.validate()?;

    let user_id_str = encode_uuid(input.user_id);
    let start_str   = encode_month(input.start_date);
    let end_str     = input.end_date.map(encode_month);
    let service     = input.service_name.clone();
    let price       = input.price;

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO subscriptions (service_name, price, user_id, start_date, end_date)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![service, price, user_id_str, start_str, end_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(input.into_subscription(id))
  }

  async fn get(&self, id: i64) -> Result<Option<Subscription>> {
    let raw: Option<RawSubscription> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {SUBSCRIPTION_COLUMNS} FROM subscriptions WHERE id = ?1"
              ),
              rusqlite::params![id],
              raw_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawSubscription::into_subscription).transpose()
  }

  async fn list(&self, params: ListParams) -> Result<Vec<Subscription>> {
    let limit = i64::from(params.limit);
    let offset = i64::from(params.offset);

    let raws: Vec<RawSubscription> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {SUBSCRIPTION_COLUMNS} FROM subscriptions
           ORDER BY id
           LIMIT ?1 OFFSET ?2"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![limit, offset], raw_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws
      .into_iter()
      .map(RawSubscription::into_subscription)
      .collect()
  }

  async fn update(
    &self,
    id: i64,
    input: NewSubscription,
  ) -> Result<Option<Subscription>> {
    input.validate()?;

    let user_id_str = encode_uuid(input.user_id);
    let start_str   = encode_month(input.start_date);
    let end_str     = input.end_date.map(encode_month);
    let service     = input.service_name.clone();
    let price       = input.price;

    let rows = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE subscriptions
           SET service_name = ?1, price = ?2, user_id = ?3,
               start_date = ?4, end_date = ?5
           WHERE id = ?6",
          rusqlite::params![service, price, user_id_str, start_str, end_str, id],
        )?)
      })
      .await?;

    if rows == 0 {
      return Ok(None);
    }

    Ok(Some(input.into_subscription(id)))
  }

  async fn delete(&self, id: i64) -> Result<bool> {
    let rows = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM subscriptions WHERE id = ?1",
          rusqlite::params![id],
        )?)
      })
      .await?;

    Ok(rows > 0)
  }

  async fn list_overlapping(&self, query: &CostQuery) -> Result<Vec<Subscription>> {
    // The window bounds always bind as ?1/?2; the optional filters extend
    // the WHERE clause and the parameter list together.
    let mut args: Vec<String> =
      vec![encode_month(query.end), encode_month(query.start)];
    let mut conds: Vec<String> =
      vec!["start_date <= ?1 AND (end_date IS NULL OR end_date >= ?2)".into()];

    if let Some(user_id) = query.user_id {
      args.push(encode_uuid(user_id));
      conds.push(format!("user_id = ?{}", args.len()));
    }
    if let Some(service) = &query.service_name {
      args.push(service.clone());
      conds.push(format!("service_name = ?{}", args.len()));
    }

    let sql = format!(
      "SELECT {SUBSCRIPTION_COLUMNS} FROM subscriptions
       WHERE {}
       ORDER BY id",
      conds.join(" AND ")
    );

    let raws: Vec<RawSubscription> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(args), raw_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws
      .into_iter()
      .map(RawSubscription::into_subscription)
      .collect()
  }
}
