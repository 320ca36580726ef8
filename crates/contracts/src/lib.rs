pub mod dataset;
pub mod summaries;
