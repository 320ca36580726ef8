//! Aggregation engine for the static venue/menu dataset: reference
//! catalogs, three independent sales reducers, and memoized read-only
//! summary accessors. Presentation concerns live in consumers.

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod insights;
pub mod loader;
pub mod reducers;
pub mod totals;

pub use error::InsightsError;
pub use insights::Insights;
