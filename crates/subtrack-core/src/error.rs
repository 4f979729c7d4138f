//! Error types for `subtrack-core`.

use thiserror::Error;

use crate::month::MonthDate;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid interval: start {start} is after end {end}")]
  InvalidInterval { start: MonthDate, end: MonthDate },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
