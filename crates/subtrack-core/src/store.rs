//! The `SubscriptionStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g.
//! `subtrack-store-sqlite`). The API layer depends on this abstraction, not
//! on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::{
  month::MonthDate,
  subscription::{NewSubscription, Subscription},
};

// ─── Query types ─────────────────────────────────────────────────────────────

/// Pagination for [`SubscriptionStore::list`].
#[derive(Debug, Clone, Copy)]
pub struct ListParams {
  pub limit:  u32,
  pub offset: u32,
}

impl Default for ListParams {
  fn default() -> Self {
    Self { limit: 100, offset: 0 }
  }
}

/// Parameters for [`SubscriptionStore::list_overlapping`] and for
/// [`evaluate_total_cost`](crate::cost::evaluate_total_cost).
///
/// The window `[start, end]` is required (`start <= end`); the remaining
/// fields are optional exact-match filters — `Some` means "present and must
/// match", `None` means "no constraint".
#[derive(Debug, Clone)]
pub struct CostQuery {
  pub start:        MonthDate,
  pub end:          MonthDate,
  pub user_id:      Option<Uuid>,
  pub service_name: Option<String>,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a subscription store backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait SubscriptionStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new subscription and return it with its assigned id.
  fn create(
    &self,
    input: NewSubscription,
  ) -> impl Future<Output = Result<Subscription, Self::Error>> + Send + '_;

  /// Retrieve a subscription by id. Returns `None` if not found.
  fn get(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Subscription>, Self::Error>> + Send + '_;

  /// List subscriptions ordered by id, paginated.
  fn list(
    &self,
    params: ListParams,
  ) -> impl Future<Output = Result<Vec<Subscription>, Self::Error>> + Send + '_;

  /// Replace every field of the subscription with id `id`.
  ///
  /// Returns `None` if no such row exists.
  fn update(
    &self,
    id: i64,
    input: NewSubscription,
  ) -> impl Future<Output = Result<Option<Subscription>, Self::Error>> + Send + '_;

  /// Delete the subscription with id `id`.
  ///
  /// Returns `false` if no such row exists.
  fn delete(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Return subscriptions whose active interval overlaps the query window
  /// and which match the optional user/service filters.
  ///
  /// Overlap test: `start_date <= query.end AND (end_date IS NULL OR
  /// end_date >= query.start)`.
  fn list_overlapping<'a>(
    &'a self,
    query: &'a CostQuery,
  ) -> impl Future<Output = Result<Vec<Subscription>, Self::Error>> + Send + 'a;
}
