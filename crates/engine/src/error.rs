use std::path::PathBuf;

/// Errors at the ingest boundary. The aggregation engine itself never fails:
/// dangling references are skipped, and an empty dataset yields empty tables.
#[derive(Debug, thiserror::Error)]
pub enum InsightsError {
    #[error("failed to read dataset file {path}")]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset JSON")]
    DatasetParse(#[from] serde_json::Error),
}
