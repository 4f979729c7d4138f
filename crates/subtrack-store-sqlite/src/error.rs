//! Error type for `subtrack-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] subtrack_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("month date parse error: {0}")]
  MonthParse(#[from] subtrack_core::month::ParseMonthDateError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
