//! Month-granularity calendar dates.
//!
//! Subscriptions are billed per calendar month, so every date in the system
//! is a (year, month) pair. The wire format is `MM-YYYY` (e.g. `07-2025`),
//! inherited from the public API contract. Storage backends are free to use
//! a different textual encoding.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A calendar month, e.g. July 2025.
///
/// Field order gives the derived `Ord` chronological meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDate {
  pub year:  i32,
  /// 1-based (January = 1).
  pub month: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid month date {0:?}, expected MM-YYYY")]
pub struct ParseMonthDateError(pub String);

impl MonthDate {
  /// Construct from a year and 1-based month. Returns `None` when `month`
  /// is outside `1..=12`.
  pub fn new(year: i32, month: u32) -> Option<Self> {
    (1..=12).contains(&month).then_some(Self { year, month })
  }

  /// Inclusive count of calendar months from `self` to `end`.
  ///
  /// `jan-2024.months_until_inclusive(mar-2024) == 3`. Spans year
  /// boundaries; non-positive when `end` precedes `self`.
  pub fn months_until_inclusive(self, end: MonthDate) -> i64 {
    12 * i64::from(end.year - self.year)
      + i64::from(end.month) - i64::from(self.month)
      + 1
  }
}

impl fmt::Display for MonthDate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:02}-{:04}", self.month, self.year)
  }
}

impl FromStr for MonthDate {
  type Err = ParseMonthDateError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let err = || ParseMonthDateError(s.to_owned());

    let (mm, yyyy) = s.split_once('-').ok_or_else(err)?;
    if mm.len() != 2 || yyyy.len() != 4 {
      return Err(err());
    }

    let month: u32 = mm.parse().map_err(|_| err())?;
    let year: i32 = yyyy.parse().map_err(|_| err())?;

    MonthDate::new(year, month).ok_or_else(err)
  }
}

// Serde goes through the wire format so `MonthDate` fields serialize as
// `"MM-YYYY"` strings in JSON bodies.

impl Serialize for MonthDate {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for MonthDate {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(serde::de::Error::custom)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn md(year: i32, month: u32) -> MonthDate {
    MonthDate::new(year, month).unwrap()
  }

  #[test]
  fn parse_and_display_roundtrip() {
    let d: MonthDate = "07-2025".parse().unwrap();
    assert_eq!(d, md(2025, 7));
    assert_eq!(d.to_string(), "07-2025");
  }

  #[test]
  fn parse_rejects_malformed_input() {
    for s in ["2025-07", "7-2025", "13-2025", "00-2024", "07/2025", "julio", ""] {
      assert!(s.parse::<MonthDate>().is_err(), "accepted {s:?}");
    }
  }

  #[test]
  fn ordering_is_chronological() {
    assert!(md(2024, 12) < md(2025, 1));
    assert!(md(2025, 1) < md(2025, 2));
    assert_eq!(md(2025, 3), md(2025, 3));
  }

  #[test]
  fn months_inclusive_same_year() {
    assert_eq!(md(2024, 1).months_until_inclusive(md(2024, 3)), 3);
    assert_eq!(md(2024, 5).months_until_inclusive(md(2024, 5)), 1);
  }

  #[test]
  fn months_inclusive_spans_year_boundary() {
    assert_eq!(md(2024, 11).months_until_inclusive(md(2025, 2)), 4);
    assert_eq!(md(2023, 1).months_until_inclusive(md(2025, 1)), 25);
  }

  #[test]
  fn months_inclusive_non_positive_for_reversed_interval() {
    assert_eq!(md(2024, 3).months_until_inclusive(md(2024, 2)), 0);
    assert!(md(2025, 1).months_until_inclusive(md(2024, 1)) < 0);
  }

  #[test]
  fn serde_uses_wire_format() {
    let d = md(2024, 1);
    assert_eq!(serde_json::to_string(&d).unwrap(), "\"01-2024\"");
    let back: MonthDate = serde_json::from_str("\"01-2024\"").unwrap();
    assert_eq!(back, d);
  }
}
