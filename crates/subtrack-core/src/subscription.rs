//! Subscription — one user's paid enrollment in a service.
//!
//! A subscription is billable for every calendar month of its active
//! interval, from `start_date` through `end_date` inclusive. An absent
//! `end_date` means the subscription is still running (open-ended).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result, month::MonthDate};

/// A persisted subscription record. The id is store-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
  pub id:           i64,
  pub service_name: String,
  /// Cost per active month, in minor currency units.
  pub price:        i64,
  pub user_id:      Uuid,
  pub start_date:   MonthDate,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub end_date:     Option<MonthDate>,
}

/// Input for creating a subscription, and for updating one (update is a
/// full replace of every field except the id).
#[derive(Debug, Clone, Deserialize)]
pub struct NewSubscription {
  pub service_name: String,
  pub price:        i64,
  pub user_id:      Uuid,
  pub start_date:   MonthDate,
  #[serde(default)]
  pub end_date:     Option<MonthDate>,
}

impl NewSubscription {
  /// Enforce the interval invariant: `start_date <= end_date` when an end
  /// date is present.
  pub fn validate(&self) -> Result<()> {
    if let Some(end) = self.end_date
      && end < self.start_date
    {
      return Err(Error::InvalidInterval { start: self.start_date, end });
    }
    Ok(())
  }

  /// Attach a store-assigned id, producing the persisted record.
  pub fn into_subscription(self, id: i64) -> Subscription {
    Subscription {
      id,
      service_name: self.service_name,
      price:        self.price,
      user_id:      self.user_id,
      start_date:   self.start_date,
      end_date:     self.end_date,
    }
  }
}
