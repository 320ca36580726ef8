//! Commutative combine step for sharded reduction.
//!
//! When orders are split across workers, each worker produces a partial
//! table; folding the partials with these functions yields the same result
//! regardless of merge order. Matching keys sum their totals and sub-maps;
//! on a key collision the descriptive fields (name, category) of the entry
//! already present win, which is harmless because both sides resolved them
//! from the same catalogs.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use contracts::summaries::{SaleSlice, SalesByArchetype, SalesByItem, SalesByVenue};

fn merge_slices(into: &mut HashMap<String, SaleSlice>, from: HashMap<String, SaleSlice>) {
    for (key, slice) in from {
        into.entry(key)
            .or_default()
            .add(slice.qty, slice.revenue_cents);
    }
}

pub fn merge_by_item(into: &mut SalesByItem, from: SalesByItem) {
    for (item_id, sale) in from {
        match into.entry(item_id) {
            Entry::Occupied(mut existing) => {
                let existing = existing.get_mut();
                existing.total_qty += sale.total_qty;
                existing.total_revenue_cents += sale.total_revenue_cents;
                merge_slices(&mut existing.per_venue, sale.per_venue);
            }
            Entry::Vacant(vacant) => {
                vacant.insert(sale);
            }
        }
    }
}

pub fn merge_by_venue(into: &mut SalesByVenue, from: SalesByVenue) {
    for (venue_id, sale) in from {
        match into.entry(venue_id) {
            Entry::Occupied(mut existing) => {
                let existing = existing.get_mut();
                existing.total_qty += sale.total_qty;
                existing.total_revenue_cents += sale.total_revenue_cents;
                merge_slices(&mut existing.items_sold, sale.items_sold);
            }
            Entry::Vacant(vacant) => {
                vacant.insert(sale);
            }
        }
    }
}

pub fn merge_by_archetype(into: &mut SalesByArchetype, from: SalesByArchetype) {
    for (archetype_id, sale) in from {
        match into.entry(archetype_id) {
            Entry::Occupied(mut existing) => {
                let existing = existing.get_mut();
                existing.total_qty += sale.total_qty;
                existing.total_revenue_cents += sale.total_revenue_cents;
                merge_slices(&mut existing.items_sold, sale.items_sold);
            }
            Entry::Vacant(vacant) => {
                vacant.insert(sale);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalogs;
    use crate::reducers::fixtures::*;
    use crate::reducers::{sales_by_item, sales_by_venue};

    fn sharded_dataset() -> contracts::dataset::Dataset {
        let mut dataset = single_order_dataset();
        dataset
            .menu_items
            .push(menu_item("m_101_02", "v_101", "Barrel Negroni", 750));
        dataset.orders.push(order(
            "o_002",
            "u_001",
            "v_101",
            vec![line("m_101_01", 1), line("m_101_02", 2)],
        ));
        dataset
    }

    #[test]
    fn test_merged_shards_equal_single_pass() {
        let dataset = sharded_dataset();
        let catalogs = Catalogs::build(&dataset);

        let whole = sales_by_item(&dataset.orders, &catalogs);

        let (left, right) = dataset.orders.split_at(1);
        let mut merged = sales_by_item(left, &catalogs);
        merge_by_item(&mut merged, sales_by_item(right, &catalogs));

        assert_eq!(merged, whole);
    }

    #[test]
    fn test_merge_order_is_irrelevant() {
        let dataset = sharded_dataset();
        let catalogs = Catalogs::build(&dataset);
        let (left, right) = dataset.orders.split_at(1);

        let mut a_then_b = sales_by_venue(left, &catalogs);
        merge_by_venue(&mut a_then_b, sales_by_venue(right, &catalogs));

        let mut b_then_a = sales_by_venue(right, &catalogs);
        merge_by_venue(&mut b_then_a, sales_by_venue(left, &catalogs));

        assert_eq!(a_then_b, b_then_a);
    }

    #[test]
    fn test_merge_by_archetype_sums_matching_keys() {
        use crate::reducers::sales_by_archetype;

        let dataset = sharded_dataset();
        let catalogs = Catalogs::build(&dataset);

        let whole = sales_by_archetype(&dataset.orders, &catalogs);

        let (left, right) = dataset.orders.split_at(1);
        let mut merged = sales_by_archetype(left, &catalogs);
        merge_by_archetype(&mut merged, sales_by_archetype(right, &catalogs));

        assert_eq!(merged, whole);
        assert_eq!(merged.get("a_01").unwrap().total_qty, 6);
    }

    #[test]
    fn test_merge_into_empty_table() {
        let dataset = sharded_dataset();
        let catalogs = Catalogs::build(&dataset);

        let whole = sales_by_item(&dataset.orders, &catalogs);
        let mut merged = SalesByItem::new();
        merge_by_item(&mut merged, whole.clone());

        assert_eq!(merged, whole);
    }
}
