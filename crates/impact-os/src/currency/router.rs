use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{CurrencyKind, MissionId, UserId};
use super::service::{CurrencyLedger, CurrencyServiceError};
use super::store::LedgerStore;

#[derive(Debug, Deserialize)]
pub(crate) struct HistoryQuery {
    #[serde(default)]
    pub(crate) kind: Option<CurrencyKind>,
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AffordQuery {
    pub(crate) kind: CurrencyKind,
    pub(crate) cost: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreditRequest {
    pub(crate) kind: CurrencyKind,
    pub(crate) amount: i64,
    pub(crate) reason: String,
    #[serde(default)]
    pub(crate) mission_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DebitRequest {
    pub(crate) kind: CurrencyKind,
    pub(crate) amount: i64,
    pub(crate) reason: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DecayRequest {
    #[serde(default)]
    pub(crate) rate: Option<f64>,
}

/// Router exposing balances, history, the display triad and ledger writes.
pub fn currency_router<S>(ledger: Arc<CurrencyLedger<S>>) -> Router
where
    S: LedgerStore + 'static,
{
    Router::new()
        .route("/api/v1/jobs/momentum-decay", post(decay_sweep_handler::<S>))
        .route("/api/v1/currency/:user_id/balance", get(balance_handler::<S>))
        .route(
            "/api/v1/currency/:user_id/transactions",
            get(history_handler::<S>),
        )
        .route("/api/v1/currency/:user_id/triad", get(triad_handler::<S>))
        .route(
            "/api/v1/currency/:user_id/can-afford",
            get(can_afford_handler::<S>),
        )
        .route("/api/v1/currency/:user_id/credit", post(credit_handler::<S>))
        .route("/api/v1/currency/:user_id/debit", post(debit_handler::<S>))
        .route("/api/v1/currency/:user_id/decay", post(decay_handler::<S>))
        .with_state(ledger)
}

pub(crate) async fn balance_handler<S>(
    State(ledger): State<Arc<CurrencyLedger<S>>>,
    Path(user_id): Path<String>,
) -> Response
where
    S: LedgerStore + 'static,
{
    match ledger.get_balance(&UserId(user_id)) {
        Ok(balance) => (StatusCode::OK, Json(balance)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn history_handler<S>(
    State(ledger): State<Arc<CurrencyLedger<S>>>,
    Path(user_id): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> Response
where
    S: LedgerStore + 'static,
{
    match ledger.transaction_history(&UserId(user_id), query.kind, query.limit) {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn triad_handler<S>(
    State(ledger): State<Arc<CurrencyLedger<S>>>,
    Path(user_id): Path<String>,
) -> Response
where
    S: LedgerStore + 'static,
{
    match ledger.skill_triad(&UserId(user_id)) {
        Ok(triad) => (StatusCode::OK, Json(triad)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn can_afford_handler<S>(
    State(ledger): State<Arc<CurrencyLedger<S>>>,
    Path(user_id): Path<String>,
    Query(query): Query<AffordQuery>,
) -> Response
where
    S: LedgerStore + 'static,
{
    match ledger.can_afford(&UserId(user_id), query.kind, query.cost) {
        Ok(affordable) => {
            let payload = json!({
                "kind": query.kind,
                "cost": query.cost,
                "affordable": affordable,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn credit_handler<S>(
    State(ledger): State<Arc<CurrencyLedger<S>>>,
    Path(user_id): Path<String>,
    Json(request): Json<CreditRequest>,
) -> Response
where
    S: LedgerStore + 'static,
{
    let CreditRequest {
        kind,
        amount,
        reason,
        mission_id,
    } = request;
    match ledger.credit(
        &UserId(user_id),
        kind,
        amount,
        &reason,
        mission_id.map(MissionId),
    ) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn debit_handler<S>(
    State(ledger): State<Arc<CurrencyLedger<S>>>,
    Path(user_id): Path<String>,
    Json(request): Json<DebitRequest>,
) -> Response
where
    S: LedgerStore + 'static,
{
    match ledger.debit(&UserId(user_id), request.kind, request.amount, &request.reason) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn decay_handler<S>(
    State(ledger): State<Arc<CurrencyLedger<S>>>,
    Path(user_id): Path<String>,
    request: Option<Json<DecayRequest>>,
) -> Response
where
    S: LedgerStore + 'static,
{
    let Json(request) = request.unwrap_or_default();
    let rate = request.rate.unwrap_or(ledger.config().decay_rate);
    match ledger.apply_momentum_decay(&UserId(user_id), rate) {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn decay_sweep_handler<S>(
    State(ledger): State<Arc<CurrencyLedger<S>>>,
    request: Option<Json<DecayRequest>>,
) -> Response
where
    S: LedgerStore + 'static,
{
    let Json(request) = request.unwrap_or_default();
    let rate = request.rate.unwrap_or(ledger.config().decay_rate);
    match ledger.decay_all_momentum(rate) {
        Ok(outcomes) => {
            let users: Vec<_> = outcomes
                .into_iter()
                .map(|(user_id, outcome)| json!({ "user_id": user_id, "outcome": outcome }))
                .collect();
            let payload = json!({ "rate": rate, "users": users });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

fn error_response(err: CurrencyServiceError) -> Response {
    let payload = json!({ "error": err.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}
