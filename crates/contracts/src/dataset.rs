use serde::{Deserialize, Serialize};

/// A single row of the `menu_items` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    /// Stable identifier, e.g. "m_101_01"
    pub menu_item_id: String,
    /// Venue this item is catalogued under (venues.venue_id)
    pub venue_id: String,
    /// Human-readable name, e.g. "Smoke & Citrus"
    pub name: String,
    /// Menu item type, e.g. "cocktail"
    #[serde(rename = "type")]
    pub item_type: String,
    /// Unit price in cents
    pub price_cents: i64,
}

/// A single row of the `venues` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub venue_id: String,
    pub name: String,
    /// Venue category, e.g. "bar"
    pub category: String,
}

/// A single row of the `users` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    /// Primary customer archetype (archetypes.archetype_id); may be unassigned
    #[serde(default)]
    pub archetype_primary: Option<String>,
}

/// A single row of the `archetypes` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Archetype {
    pub archetype_id: String,
    pub name: String,
    pub description: String,
}

/// One line inside an order: what was bought and how many
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    /// Links back to menu_items.menu_item_id
    pub menu_item_id: String,
    /// Quantity is taken as-is from the source data, no validation
    pub qty: i64,
}

/// An order: one user, one venue, one or more lines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub user_id: String,
    pub venue_id: String,
    pub items: Vec<OrderLine>,
}

/// Ancillary payment record, used only for scalar summary counts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub amount_cents: i64,
}

/// Ancillary receipt record, used only for scalar summary totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub receipt_id: String,
    pub total_cents: i64,
    pub tip_cents: i64,
}

/// The full static dataset, materialized in memory before any aggregation runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub menu_items: Vec<MenuItem>,
    pub venues: Vec<Venue>,
    pub users: Vec<User>,
    pub archetypes: Vec<Archetype>,
    pub orders: Vec<Order>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub receipts: Vec<Receipt>,
}
