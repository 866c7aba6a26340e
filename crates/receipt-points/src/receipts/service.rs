use std::sync::Arc;

use tracing::{debug, info};

use super::domain::{Receipt, ReceiptId};
use super::repository::{ReceiptRecord, ReceiptRepository, RepositoryError};
use super::scoring::score_breakdown;

/// Service composing the scoring rules with a receipt repository.
pub struct ReceiptService<R> {
    repository: Arc<R>,
}

impl<R> ReceiptService<R>
where
    R: ReceiptRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Score and store a receipt under a freshly generated id.
    ///
    /// Every call stores a new record, even for a receipt identical to one already submitted.
    /// An absent receipt is rejected and nothing is stored.
    pub fn submit(
        &self,
        receipt: impl Into<Option<Receipt>>,
    ) -> Result<ReceiptId, ReceiptServiceError> {
        let receipt = receipt.into().ok_or(ReceiptServiceError::InvalidInput)?;

        let breakdown = score_breakdown(&receipt);
        let record = ReceiptRecord {
            id: ReceiptId::generate(),
            receipt,
            points: breakdown.total,
            components: breakdown.components,
        };

        let stored = self.repository.insert(record)?;
        info!(receipt_id = %stored.id, points = stored.points, "receipt processed");
        Ok(stored.id)
    }

    /// Points awarded to a previously submitted receipt.
    pub fn lookup(&self, id: &ReceiptId) -> Result<u32, ReceiptServiceError> {
        self.get(id).map(|record| record.points)
    }

    pub fn get(&self, id: &ReceiptId) -> Result<ReceiptRecord, ReceiptServiceError> {
        match self.repository.fetch(id)? {
            Some(record) => Ok(record),
            None => {
                debug!(receipt_id = %id, "receipt lookup missed");
                Err(ReceiptServiceError::NotFound(id.clone()))
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error("receipt payload is required")]
    InvalidInput,
    #[error("no receipt found for id {0}")]
    NotFound(ReceiptId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
