//! Handlers for `/subscriptions` CRUD endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/subscriptions` | Optional `?limit=&offset=` (defaults 100/0) |
//! | `POST`   | `/subscriptions` | Body: subscription fields; 201 + stored record |
//! | `GET`    | `/subscriptions/:id` | 404 if not found |
//! | `PUT`    | `/subscriptions/:id` | Full-field replace; 204 on success |
//! | `DELETE` | `/subscriptions/:id` | 204 on success |
//!
//! Dates in request and response bodies are `MM-YYYY` strings; a response
//! omits `end_date` for open-ended subscriptions.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use subtrack_core::{
  store::{ListParams, SubscriptionStore},
  subscription::{NewSubscription, Subscription},
};

use crate::error::ApiError;

/// Ids are store-assigned positive integers; anything else is a client
/// mistake, not a missing row.
fn check_id(id: i64) -> Result<(), ApiError> {
  if id <= 0 {
    return Err(ApiError::BadRequest(format!("invalid subscription id {id}")));
  }
  Ok(())
}

fn validated(input: NewSubscription) -> Result<NewSubscription, ApiError> {
  input
    .validate()
    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
  Ok(input)
}

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListQuery {
  pub limit:  Option<u32>,
  pub offset: Option<u32>,
}

/// `GET /subscriptions[?limit=<n>&offset=<n>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Subscription>>, ApiError>
where
  S: SubscriptionStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let defaults = ListParams::default();
  let params = ListParams {
    limit:  query.limit.unwrap_or(defaults.limit),
    offset: query.offset.unwrap_or(defaults.offset),
  };

  let subscriptions = store
    .list(params)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(subscriptions))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /subscriptions` — returns 201 + the stored record.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewSubscription>,
) -> Result<impl IntoResponse, ApiError>
where
  S: SubscriptionStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let subscription = store
    .create(validated(body)?)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(subscription)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /subscriptions/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Subscription>, ApiError>
where
  S: SubscriptionStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  check_id(id)?;

  let subscription = store
    .get(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or(ApiError::NotFound(id))?;
  Ok(Json(subscription))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /subscriptions/:id` — body carries every field; 204 on success.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<NewSubscription>,
) -> Result<StatusCode, ApiError>
where
  S: SubscriptionStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  check_id(id)?;

  store
    .update(id, validated(body)?)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or(ApiError::NotFound(id))?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /subscriptions/:id` — 204 on success.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: SubscriptionStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  check_id(id)?;

  let deleted = store
    .delete(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if !deleted {
    return Err(ApiError::NotFound(id));
  }
  Ok(StatusCode::NO_CONTENT)
}
