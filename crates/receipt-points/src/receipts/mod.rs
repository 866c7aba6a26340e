//! Receipt intake, scoring, and lookup.
//!
//! [`scoring`] holds the pure rule engine; [`service::ReceiptService`] assigns ids and keeps the
//! scored records in a [`repository::ReceiptRepository`]; [`router`] exposes both over HTTP.

pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Item, Receipt, ReceiptId};
pub use repository::{
    InMemoryReceiptRepository, PointsView, ReceiptDetailView, ReceiptRecord, ReceiptRepository,
    RepositoryError, RuleScoreView,
};
pub use router::receipt_router;
pub use scoring::{score, score_breakdown, PointsBreakdown, ReceiptRule, ScoreComponent};
pub use service::{ReceiptService, ReceiptServiceError};
