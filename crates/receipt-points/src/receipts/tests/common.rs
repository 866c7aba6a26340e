use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::receipts::domain::{Item, Receipt, ReceiptId};
use crate::receipts::repository::{
    InMemoryReceiptRepository, ReceiptRecord, ReceiptRepository, RepositoryError,
};
use crate::receipts::{receipt_router, ReceiptService};

/// Scores exactly 11: six retailer characters plus one item pair.
pub(super) fn target_receipt() -> Receipt {
    Receipt {
        retailer: Some("Target".to_string()),
        purchase_date: Some("2022-01-02".to_string()),
        purchase_time: Some("13:01".to_string()),
        items: vec![
            Item::new("Mountain Dew 12PK", "6.49"),
            Item::new("Doritos Nacho Cheese", "28.86"),
        ],
        total: Some("35.35".to_string()),
    }
}

/// Scores 109: 14 retailer characters, 50 + 25 for the round total, 10 for two item pairs,
/// and 10 for the afternoon purchase.
pub(super) fn corner_market_receipt() -> Receipt {
    Receipt {
        retailer: Some("M&M Corner Market".to_string()),
        purchase_date: Some("2022-03-20".to_string()),
        purchase_time: Some("14:33".to_string()),
        items: vec![
            Item::new("Gatorade", "2.25"),
            Item::new("Gatorade", "2.25"),
            Item::new("Gatorade", "2.25"),
            Item::new("Gatorade", "2.25"),
        ],
        total: Some("9.00".to_string()),
    }
}

pub(super) fn build_service() -> (
    ReceiptService<InMemoryReceiptRepository>,
    Arc<InMemoryReceiptRepository>,
) {
    let repository = Arc::new(InMemoryReceiptRepository::default());
    let service = ReceiptService::new(repository.clone());
    (service, repository)
}

pub(super) fn receipt_router_with_service(
    service: ReceiptService<InMemoryReceiptRepository>,
) -> axum::Router {
    receipt_router(Arc::new(service))
}

pub(super) struct ConflictRepository;

impl ReceiptRepository for ConflictRepository {
    fn insert(&self, record: ReceiptRecord) -> Result<ReceiptRecord, RepositoryError> {
        Err(RepositoryError::Conflict(record.id))
    }

    fn fetch(&self, _id: &ReceiptId) -> Result<Option<ReceiptRecord>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableRepository;

impl ReceiptRepository for UnavailableRepository {
    fn insert(&self, _record: ReceiptRecord) -> Result<ReceiptRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &ReceiptId) -> Result<Option<ReceiptRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
