use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One sub-bucket of a sales breakdown: quantity and revenue for a single
/// (outer key, sub key) pair. All money stays in integer cents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleSlice {
    pub qty: i64,
    pub revenue_cents: i64,
}

impl SaleSlice {
    pub fn add(&mut self, qty: i64, revenue_cents: i64) {
        self.qty += qty;
        self.revenue_cents += revenue_cents;
    }
}

/// Aggregated sales for a single menu item across all orders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSale {
    pub item_id: String,
    pub name: String,
    pub item_type: String,
    pub total_qty: i64,
    pub total_revenue_cents: i64,
    /// venue_id -> slice; holds an entry only for venues where this item sold
    pub per_venue: HashMap<String, SaleSlice>,
}

impl ItemSale {
    /// Fresh bucket with zero totals and an empty venue breakdown
    pub fn new(item_id: &str, name: &str, item_type: &str) -> Self {
        Self {
            item_id: item_id.to_string(),
            name: name.to_string(),
            item_type: item_type.to_string(),
            total_qty: 0,
            total_revenue_cents: 0,
            per_venue: HashMap::new(),
        }
    }

    pub fn record(&mut self, venue_id: &str, qty: i64, revenue_cents: i64) {
        self.total_qty += qty;
        self.total_revenue_cents += revenue_cents;
        self.per_venue
            .entry(venue_id.to_string())
            .or_default()
            .add(qty, revenue_cents);
    }
}

/// Aggregated sales for a single venue across all orders placed there
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueSale {
    pub venue_id: String,
    pub name: String,
    pub category: String,
    pub total_qty: i64,
    pub total_revenue_cents: i64,
    /// menu_item_id -> slice; holds an entry only for items that sold here
    pub items_sold: HashMap<String, SaleSlice>,
}

impl VenueSale {
    pub fn new(venue_id: &str, name: &str, category: &str) -> Self {
        Self {
            venue_id: venue_id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            total_qty: 0,
            total_revenue_cents: 0,
            items_sold: HashMap::new(),
        }
    }

    pub fn record(&mut self, menu_item_id: &str, qty: i64, revenue_cents: i64) {
        self.total_qty += qty;
        self.total_revenue_cents += revenue_cents;
        self.items_sold
            .entry(menu_item_id.to_string())
            .or_default()
            .add(qty, revenue_cents);
    }
}

/// Aggregated sales for a single customer archetype
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchetypeSale {
    /// archetypes.archetype_id, or "unknown" for users without one
    pub archetype_id: String,
    /// Display name; falls back to the raw id when the catalog has no entry
    pub archetype_name: String,
    pub total_qty: i64,
    pub total_revenue_cents: i64,
    /// menu_item_id -> slice
    pub items_sold: HashMap<String, SaleSlice>,
}

impl ArchetypeSale {
    pub fn new(archetype_id: &str, archetype_name: &str) -> Self {
        Self {
            archetype_id: archetype_id.to_string(),
            archetype_name: archetype_name.to_string(),
            total_qty: 0,
            total_revenue_cents: 0,
            items_sold: HashMap::new(),
        }
    }

    pub fn record(&mut self, menu_item_id: &str, qty: i64, revenue_cents: i64) {
        self.total_qty += qty;
        self.total_revenue_cents += revenue_cents;
        self.items_sold
            .entry(menu_item_id.to_string())
            .or_default()
            .add(qty, revenue_cents);
    }
}

/// Summary table keyed by menu_item_id
pub type SalesByItem = HashMap<String, ItemSale>;
/// Summary table keyed by venue_id
pub type SalesByVenue = HashMap<String, VenueSale>;
/// Summary table keyed by archetype_id (or "unknown")
pub type SalesByArchetype = HashMap<String, ArchetypeSale>;

/// Sentinel archetype key for users without an assigned archetype
pub const UNKNOWN_ARCHETYPE: &str = "unknown";

/// Scalar dataset-level totals, raw integers only; the presentation layer
/// divides cents by 100
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickSummary {
    pub user_count: u64,
    pub transaction_count: u64,
    pub transaction_cents: i64,
    pub receipt_cents: i64,
    pub tip_cents: i64,
}
