//! Aggregation engine
//!
//! Three independent reducers, each a pure single pass over the order stream
//! consulting the read-only catalogs. They share no state and may run in any
//! order, or in parallel with partial tables combined via the `merge` module.
//!
//! None of them ever fails or logs: a line, order, or user with a dangling
//! reference is excluded from every total and the walk continues. Iteration
//! order does not affect totals; consumers must sort or key-access
//! explicitly rather than rely on map order.

mod by_archetype;
mod by_item;
mod by_venue;
mod merge;

pub use by_archetype::sales_by_archetype;
pub use by_item::sales_by_item;
pub use by_venue::sales_by_venue;
pub use merge::{merge_by_archetype, merge_by_item, merge_by_venue};
