use std::path::Path;

use contracts::dataset::Dataset;

use crate::error::InsightsError;

/// Parse a dataset from its JSON representation
pub fn parse_dataset(json: &str) -> Result<Dataset, InsightsError> {
    let dataset: Dataset = serde_json::from_str(json)?;
    Ok(dataset)
}

/// Read and parse the dataset file
pub fn load_dataset(path: &Path) -> Result<Dataset, InsightsError> {
    let contents = std::fs::read_to_string(path).map_err(|source| InsightsError::DatasetRead {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = parse_dataset(&contents)?;

    tracing::info!(
        menu_items = dataset.menu_items.len(),
        venues = dataset.venues.len(),
        users = dataset.users.len(),
        orders = dataset.orders.len(),
        transactions = dataset.transactions.len(),
        receipts = dataset.receipts.len(),
        "dataset loaded from {}",
        path.display()
    );

    Ok(dataset)
}
