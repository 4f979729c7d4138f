//! SQL schema for the subtrack SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `PRAGMA user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// Month dates are stored as `YYYY-MM` text so that lexicographic string
/// comparison in SQL equals chronological comparison. The overlap query in
/// `list_overlapping` relies on this.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS subscriptions (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    service_name TEXT    NOT NULL,
    price        INTEGER NOT NULL,  -- per active month, minor currency units
    user_id      TEXT    NOT NULL,  -- hyphenated lowercase UUID
    start_date   TEXT    NOT NULL,  -- 'YYYY-MM'
    end_date     TEXT               -- 'YYYY-MM'; NULL = still active
);

CREATE INDEX IF NOT EXISTS subscriptions_user_idx    ON subscriptions(user_id);
CREATE INDEX IF NOT EXISTS subscriptions_service_idx ON subscriptions(service_name);
CREATE INDEX IF NOT EXISTS subscriptions_start_idx   ON subscriptions(start_date);

PRAGMA user_version = 1;
";
