//! Handler for `GET /subscriptions/total-cost/:start/:end`.
//!
//! Computes the total billed cost of all subscriptions overlapping the
//! month window `[start, end]`, optionally restricted to one user and/or
//! one service via query parameters.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use subtrack_core::{
  cost::evaluate_total_cost,
  month::MonthDate,
  store::{CostQuery, SubscriptionStore},
};
use uuid::Uuid;

use crate::error::ApiError;

#[derive(Debug, Deserialize, Default)]
pub struct CostParams {
  /// UUID of the user to restrict to. An empty value means no constraint.
  pub user_id:      Option<String>,
  /// Exact service name to restrict to. An empty value means no constraint.
  pub service_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TotalCostResponse {
  #[serde(rename = "totalCost")]
  pub total_cost: i64,
}

fn parse_month(label: &str, s: &str) -> Result<MonthDate, ApiError> {
  s.parse()
    .map_err(|_| ApiError::BadRequest(format!("invalid {label} month {s:?}, expected MM-YYYY")))
}

/// `GET /subscriptions/total-cost/:start/:end[?user_id=...][&service_name=...]`
pub async fn total_cost<S>(
  State(store): State<Arc<S>>,
  Path((start, end)): Path<(String, String)>,
  Query(params): Query<CostParams>,
) -> Result<Json<TotalCostResponse>, ApiError>
where
  S: SubscriptionStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let start = parse_month("start", &start)?;
  let end = parse_month("end", &end)?;
  if start > end {
    return Err(ApiError::BadRequest(format!(
      "start month {start} is after end month {end}"
    )));
  }

  let user_id = params
    .user_id
    .filter(|s| !s.is_empty())
    .map(|s| {
      Uuid::parse_str(&s)
        .map_err(|_| ApiError::BadRequest(format!("invalid user_id {s:?}")))
    })
    .transpose()?;
  let service_name = params.service_name.filter(|s| !s.is_empty());

  let query = CostQuery { start, end, user_id, service_name };

  let total = evaluate_total_cost(store.as_ref(), &query)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(Json(TotalCostResponse { total_cost: total }))
}
