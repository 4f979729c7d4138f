//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! UUIDs are stored as hyphenated lowercase strings. Month dates are stored
//! as `YYYY-MM` so lexicographic comparison matches chronological order.

use subtrack_core::{month::MonthDate, subscription::Subscription};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── MonthDate ───────────────────────────────────────────────────────────────

pub fn encode_month(d: MonthDate) -> String {
  format!("{:04}-{:02}", d.year, d.month)
}

pub fn decode_month(s: &str) -> Result<MonthDate> {
  let parse = || -> Option<MonthDate> {
    let (yyyy, mm) = s.split_once('-')?;
    if yyyy.len() != 4 || mm.len() != 2 {
      return None;
    }
    MonthDate::new(yyyy.parse().ok()?, mm.parse().ok()?)
  };

  parse().ok_or_else(|| {
    Error::MonthParse(subtrack_core::month::ParseMonthDateError(s.to_owned()))
  })
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw values read directly from a `subscriptions` row.
pub struct RawSubscription {
  pub id:           i64,
  pub service_name: String,
  pub price:        i64,
  pub user_id:      String,
  pub start_date:   String,
  pub end_date:     Option<String>,
}

impl RawSubscription {
  pub fn into_subscription(self) -> Result<Subscription> {
    Ok(Subscription {
      id:           self.id,
      service_name: self.service_name,
      price:        self.price,
      user_id:      decode_uuid(&self.user_id)?,
      start_date:   decode_month(&self.start_date)?,
      end_date:     self.end_date.as_deref().map(decode_month).transpose()?,
    })
  }
}
