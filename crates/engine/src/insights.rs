//! Summary accessors
//!
//! Read-only view over one aggregation run. Each table is computed at most
//! once per `Insights` instance; a new dataset means a new instance, so the
//! memoized tables can never go stale.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use contracts::dataset::Dataset;
use contracts::summaries::{
    ArchetypeSale, ItemSale, QuickSummary, SalesByArchetype, SalesByItem, SalesByVenue, VenueSale,
};

use crate::catalog::Catalogs;
use crate::{reducers, totals};

pub struct Insights {
    dataset: Arc<Dataset>,
    catalogs: Catalogs,
    by_item: OnceCell<SalesByItem>,
    by_venue: OnceCell<SalesByVenue>,
    by_archetype: OnceCell<SalesByArchetype>,
    quick: OnceCell<QuickSummary>,
}

impl Insights {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let catalogs = Catalogs::build(&dataset);
        Self {
            dataset,
            catalogs,
            by_item: OnceCell::new(),
            by_venue: OnceCell::new(),
            by_archetype: OnceCell::new(),
            quick: OnceCell::new(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    /// Full by-item table, computed on first access
    pub fn sales_by_item(&self) -> &SalesByItem {
        self.by_item
            .get_or_init(|| reducers::sales_by_item(&self.dataset.orders, &self.catalogs))
    }

    /// Full by-venue table, computed on first access
    pub fn sales_by_venue(&self) -> &SalesByVenue {
        self.by_venue
            .get_or_init(|| reducers::sales_by_venue(&self.dataset.orders, &self.catalogs))
    }

    /// Full by-archetype table, computed on first access
    pub fn sales_by_archetype(&self) -> &SalesByArchetype {
        self.by_archetype
            .get_or_init(|| reducers::sales_by_archetype(&self.dataset.orders, &self.catalogs))
    }

    pub fn item(&self, menu_item_id: &str) -> Option<&ItemSale> {
        self.sales_by_item().get(menu_item_id)
    }

    pub fn venue(&self, venue_id: &str) -> Option<&VenueSale> {
        self.sales_by_venue().get(venue_id)
    }

    pub fn archetype(&self, archetype_id: &str) -> Option<&ArchetypeSale> {
        self.sales_by_archetype().get(archetype_id)
    }

    /// Archetype display name with the raw id as fallback
    pub fn archetype_name<'a>(&'a self, archetype_id: &'a str) -> &'a str {
        self.catalogs
            .archetype_entry(archetype_id)
            .map(|a| a.name.as_str())
            .unwrap_or(archetype_id)
    }

    pub fn quick_summary(&self) -> &QuickSummary {
        self.quick.get_or_init(|| totals::quick_summary(&self.dataset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::fixtures::single_order_dataset;

    #[test]
    fn test_tables_are_memoized_per_run() {
        let insights = Insights::new(Arc::new(single_order_dataset()));

        let first = insights.sales_by_item() as *const SalesByItem;
        let second = insights.sales_by_item() as *const SalesByItem;

        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_single_key_lookups() {
        let insights = Insights::new(Arc::new(single_order_dataset()));

        assert_eq!(insights.item("m_101_01").unwrap().total_qty, 3);
        assert_eq!(insights.venue("v_101").unwrap().total_revenue_cents, 1500);
        assert_eq!(insights.archetype("a_01").unwrap().archetype_name, "Night Owl");
        assert!(insights.item("m_missing").is_none());
    }

    #[test]
    fn test_archetype_name_falls_back_to_raw_id() {
        let insights = Insights::new(Arc::new(single_order_dataset()));

        assert_eq!(insights.archetype_name("a_01"), "Night Owl");
        assert_eq!(insights.archetype_name("a_nowhere"), "a_nowhere");
    }

    #[test]
    fn test_fresh_instance_recomputes_for_new_dataset() {
        let mut dataset = single_order_dataset();
        let old = Insights::new(Arc::new(dataset.clone()));
        assert_eq!(old.sales_by_item().len(), 1);

        dataset.orders.clear();
        let fresh = Insights::new(Arc::new(dataset));
        assert!(fresh.sales_by_item().is_empty());
    }
}
