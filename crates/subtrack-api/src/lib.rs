//! JSON REST API for subtrack.
//!
//! Exposes an axum [`Router`] backed by any
//! [`subtrack_core::store::SubscriptionStore`]. TLS and transport concerns
//! are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .merge(subtrack_api::api_router(store.clone()))
//! ```

pub mod cost;
pub mod error;
pub mod subscriptions;

use std::sync::Arc;

use axum::{
  Router,
  routing::get,
};
use subtrack_core::store::SubscriptionStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: SubscriptionStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route(
      "/subscriptions",
      get(subscriptions::list::<S>).post(subscriptions::create::<S>),
    )
    .route(
      "/subscriptions/{id}",
      get(subscriptions::get_one::<S>)
        .put(subscriptions::update_one::<S>)
        .delete(subscriptions::delete_one::<S>),
    )
    // Literal segment first: axum rejects two parameter names at the same
    // path position, so `{start}/{end}/total-cost` cannot coexist with
    // `{id}`.
    .route(
      "/subscriptions/total-cost/{start}/{end}",
      get(cost::total_cost::<S>),
    )
    .with_state(store)
}
