pub mod rules;

use serde::{Deserialize, Serialize};

use super::domain::Receipt;

/// The independent scoring rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptRule {
    RetailerName,
    RoundDollarTotal,
    QuarterMultipleTotal,
    ItemPairs,
    ItemDescriptions,
    OddPurchaseDay,
    AfternoonPurchase,
}

impl ReceiptRule {
    pub const ALL: [ReceiptRule; 7] = [
        ReceiptRule::RetailerName,
        ReceiptRule::RoundDollarTotal,
        ReceiptRule::QuarterMultipleTotal,
        ReceiptRule::ItemPairs,
        ReceiptRule::ItemDescriptions,
        ReceiptRule::OddPurchaseDay,
        ReceiptRule::AfternoonPurchase,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReceiptRule::RetailerName => "Retailer name",
            ReceiptRule::RoundDollarTotal => "Round dollar total",
            ReceiptRule::QuarterMultipleTotal => "Total is a multiple of 0.25",
            ReceiptRule::ItemPairs => "Item pairs",
            ReceiptRule::ItemDescriptions => "Item descriptions",
            ReceiptRule::OddPurchaseDay => "Odd purchase day",
            ReceiptRule::AfternoonPurchase => "Purchased between 14:00 and 16:00",
        }
    }

    /// Points this rule alone awards to `receipt`. Absent fields score as empty text.
    pub fn evaluate(self, receipt: &Receipt) -> u32 {
        match self {
            ReceiptRule::RetailerName => rules::retailer_name_points(text(&receipt.retailer)),
            ReceiptRule::RoundDollarTotal => rules::round_dollar_points(text(&receipt.total)),
            ReceiptRule::QuarterMultipleTotal => {
                rules::quarter_multiple_points(text(&receipt.total))
            }
            ReceiptRule::ItemPairs => rules::item_pair_points(receipt.items.len()),
            ReceiptRule::ItemDescriptions => rules::item_description_points(&receipt.items),
            ReceiptRule::OddPurchaseDay => rules::odd_day_points(text(&receipt.purchase_date)),
            ReceiptRule::AfternoonPurchase => {
                rules::afternoon_points(text(&receipt.purchase_time))
            }
        }
    }
}

fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or_default()
}

/// Points contributed by a single rule, kept so stored scores can be audited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub rule: ReceiptRule,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsBreakdown {
    pub total: u32,
    pub components: Vec<ScoreComponent>,
}

/// Scores `receipt` rule by rule. The total saturates rather than overflowing.
pub fn score_breakdown(receipt: &Receipt) -> PointsBreakdown {
    let components: Vec<ScoreComponent> = ReceiptRule::ALL
        .iter()
        .map(|&rule| ScoreComponent {
            rule,
            points: rule.evaluate(receipt),
        })
        .collect();
    let total = components
        .iter()
        .fold(0u32, |total, component| total.saturating_add(component.points));

    PointsBreakdown { total, components }
}

pub fn score(receipt: &Receipt) -> u32 {
    score_breakdown(receipt).total
}
