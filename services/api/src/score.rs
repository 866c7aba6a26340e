use clap::Args;
use receipt_points::error::AppError;
use receipt_points::receipts::{score_breakdown, PointsBreakdown, Receipt};
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a receipt JSON document
    pub(crate) receipt: PathBuf,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.receipt)?;
    let receipt = parse_receipt(&raw)?;
    let breakdown = score_breakdown(&receipt);
    print!("{}", render_breakdown(&receipt, &breakdown));
    Ok(())
}

fn parse_receipt(raw: &str) -> Result<Receipt, AppError> {
    Ok(serde_json::from_str(raw)?)
}

fn render_breakdown(receipt: &Receipt, breakdown: &PointsBreakdown) -> String {
    let mut out = String::new();
    let retailer = receipt.retailer.as_deref().unwrap_or("(unknown retailer)");
    let _ = writeln!(out, "Receipt from {retailer}");
    for component in &breakdown.components {
        let _ = writeln!(
            out,
            "- {:<36} {:>6}",
            component.rule.label(),
            component.points
        );
    }
    let _ = writeln!(out, "Total points: {}", breakdown.total);
    out
}
