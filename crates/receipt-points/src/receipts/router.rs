use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tracing::error;

use super::domain::{Receipt, ReceiptId};
use super::repository::{PointsView, ReceiptRepository};
use super::service::{ReceiptService, ReceiptServiceError};

/// Router exposing receipt submission and points lookup.
pub fn receipt_router<R>(service: Arc<ReceiptService<R>>) -> Router
where
    R: ReceiptRepository + 'static,
{
    Router::new()
        .route("/receipts/process", post(process_handler::<R>))
        .route("/receipts/:receipt_id", get(receipt_handler::<R>))
        .route("/receipts/:receipt_id/points", get(points_handler::<R>))
        .with_state(service)
}

pub(crate) async fn process_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    axum::Json(receipt): axum::Json<Option<Receipt>>,
) -> Response
where
    R: ReceiptRepository + 'static,
{
    match service.submit(receipt) {
        Ok(id) => (StatusCode::OK, axum::Json(json!({ "id": id }))).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn points_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    Path(receipt_id): Path<String>,
) -> Response
where
    R: ReceiptRepository + 'static,
{
    match service.lookup(&ReceiptId::from(receipt_id)) {
        Ok(points) => (StatusCode::OK, axum::Json(PointsView { points })).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn receipt_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    Path(receipt_id): Path<String>,
) -> Response
where
    R: ReceiptRepository + 'static,
{
    match service.get(&ReceiptId::from(receipt_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.detail_view())).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: ReceiptServiceError) -> Response {
    let status = match &err {
        ReceiptServiceError::InvalidInput => StatusCode::BAD_REQUEST,
        ReceiptServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ReceiptServiceError::Repository(source) => {
            error!(error = %source, "receipt store failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
