use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use super::domain::{Receipt, ReceiptId};
use super::scoring::{ReceiptRule, ScoreComponent};

/// A receipt finalized at submission: its id, the submitted payload, and the awarded points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptRecord {
    pub id: ReceiptId,
    pub receipt: Receipt,
    pub points: u32,
    pub components: Vec<ScoreComponent>,
}

impl ReceiptRecord {
    pub fn detail_view(&self) -> ReceiptDetailView {
        ReceiptDetailView {
            id: self.id.clone(),
            points: self.points,
            breakdown: self
                .components
                .iter()
                .map(|component| RuleScoreView {
                    rule: component.rule,
                    label: component.rule.label(),
                    points: component.points,
                })
                .collect(),
            receipt: self.receipt.clone(),
        }
    }
}

/// Storage abstraction so the service can be exercised against fakes.
pub trait ReceiptRepository: Send + Sync {
    fn insert(&self, record: ReceiptRecord) -> Result<ReceiptRecord, RepositoryError>;
    fn fetch(&self, id: &ReceiptId) -> Result<Option<ReceiptRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("a receipt with id {0} already exists")]
    Conflict(ReceiptId),
    #[error("receipt store unavailable: {0}")]
    Unavailable(String),
}

/// Process-lifetime store keyed by receipt id. Clones share the same map.
#[derive(Debug, Default, Clone)]
pub struct InMemoryReceiptRepository {
    records: Arc<RwLock<HashMap<ReceiptId, ReceiptRecord>>>,
}

impl InMemoryReceiptRepository {
    pub fn len(&self) -> Result<usize, RepositoryError> {
        let guard = self.records.read().map_err(|_| poisoned())?;
        Ok(guard.len())
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        self.len().map(|len| len == 0)
    }
}

fn poisoned() -> RepositoryError {
    RepositoryError::Unavailable("receipt map lock poisoned".to_string())
}

impl ReceiptRepository for InMemoryReceiptRepository {
    fn insert(&self, record: ReceiptRecord) -> Result<ReceiptRecord, RepositoryError> {
        let mut guard = self.records.write().map_err(|_| poisoned())?;
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict(record.id));
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ReceiptId) -> Result<Option<ReceiptRecord>, RepositoryError> {
        let guard = self.records.read().map_err(|_| poisoned())?;
        Ok(guard.get(id).cloned())
    }
}

/// Response body for a points lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PointsView {
    pub points: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RuleScoreView {
    pub rule: ReceiptRule,
    pub label: &'static str,
    pub points: u32,
}

/// Full stored record as exposed over HTTP.
#[derive(Debug, Clone, Serialize)]
pub struct ReceiptDetailView {
    pub id: ReceiptId,
    pub points: u32,
    pub breakdown: Vec<RuleScoreView>,
    pub receipt: Receipt,
}
