//! Aggregate billing cost over a query window.
//!
//! Each overlapping subscription contributes `price` for every calendar
//! month its active interval shares with the window. The computation is a
//! pure read: fetch, clip, multiply, sum.

use crate::{
  store::{CostQuery, SubscriptionStore},
  subscription::Subscription,
};

/// Total cost of all subscriptions matching `query`, over the months in
/// which they overlap the window `[query.start, query.end]`.
///
/// Returns 0 when nothing matches. Store failures propagate unchanged;
/// there is nothing to recover from locally.
pub async fn evaluate_total_cost<S>(
  store: &S,
  query: &CostQuery,
) -> Result<i64, S::Error>
where
  S: SubscriptionStore,
{
  let subscriptions = store.list_overlapping(query).await?;

  Ok(
    subscriptions
      .iter()
      .map(|sub| contribution(sub, query))
      .fold(0i64, i64::saturating_add),
  )
}

/// Cost contributed by one subscription: its active interval clipped to the
/// query window, times the monthly price.
///
/// A subscription that does not actually overlap the window contributes 0
/// rather than a negative amount, so callers need not trust the store's
/// overlap predicate. The multiply saturates at `i64::MAX` so one
/// pathological price cannot wrap the aggregate.
pub fn contribution(sub: &Subscription, query: &CostQuery) -> i64 {
  let effective_start = sub.start_date.max(query.start);
  let effective_end = match sub.end_date {
    Some(end) if end <= query.end => end,
    _ => query.end,
  };

  let months = effective_start.months_until_inclusive(effective_end);
  if months <= 0 {
    return 0;
  }

  sub.price.saturating_mul(months)
}
