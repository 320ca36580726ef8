use contracts::dataset::Dataset;
use contracts::summaries::QuickSummary;

/// Scalar dataset-level totals: one linear pass per collection, integer sums
/// only. Cents are divided by 100 at the presentation boundary, never here.
pub fn quick_summary(dataset: &Dataset) -> QuickSummary {
    QuickSummary {
        user_count: dataset.users.len() as u64,
        transaction_count: dataset.transactions.len() as u64,
        transaction_cents: dataset.transactions.iter().map(|t| t.amount_cents).sum(),
        receipt_cents: dataset.receipts.iter().map(|r| r.total_cents).sum(),
        tip_cents: dataset.receipts.iter().map(|r| r.tip_cents).sum(),
    }
}
