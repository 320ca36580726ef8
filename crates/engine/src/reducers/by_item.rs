use contracts::dataset::Order;
use contracts::summaries::{ItemSale, SalesByItem};

use crate::catalog::Catalogs;

/// Fold every order line into per-menu-item totals with a per-venue
/// breakdown.
///
/// Lines whose menu_item_id is not in the catalog contribute nothing and
/// create no bucket. The venue breakdown keys on the venue the item is
/// catalogued under, not the order's venue_id.
pub fn sales_by_item(orders: &[Order], catalogs: &Catalogs) -> SalesByItem {
    let mut sales = SalesByItem::new();

    for order in orders {
        for line in &order.items {
            let entry = match catalogs.menu_entry(&line.menu_item_id) {
                Some(entry) => entry,
                None => continue,
            };

            let revenue_cents = entry.price_cents * line.qty;

            sales
                .entry(line.menu_item_id.clone())
                .or_insert_with(|| ItemSale::new(&line.menu_item_id, &entry.name, &entry.item_type))
                .record(&entry.venue_id, line.qty, revenue_cents);
        }
    }

    sales
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::fixtures::*;

    #[test]
    fn test_single_order_scenario() {
        let dataset = single_order_dataset();
        let catalogs = Catalogs::build(&dataset);

        let sales = sales_by_item(&dataset.orders, &catalogs);

        assert_eq!(sales.len(), 1);
        let sale = sales.get("m_101_01").unwrap();
        assert_eq!(sale.name, "Smoke & Citrus");
        assert_eq!(sale.item_type, "cocktail");
        assert_eq!(sale.total_qty, 3);
        assert_eq!(sale.total_revenue_cents, 1500);
        assert_eq!(sale.per_venue.len(), 1);
        let slice = sale.per_venue.get("v_101").unwrap();
        assert_eq!(slice.qty, 3);
        assert_eq!(slice.revenue_cents, 1500);
    }

    #[test]
    fn test_unresolvable_menu_item_creates_no_bucket() {
        let mut dataset = single_order_dataset();
        dataset.orders[0].items.push(line("m_missing", 5));

        let catalogs = Catalogs::build(&dataset);
        let sales = sales_by_item(&dataset.orders, &catalogs);

        assert!(sales.get("m_missing").is_none());
        assert_eq!(sales.len(), 1);
        assert_eq!(sales.get("m_101_01").unwrap().total_qty, 3);
    }

    #[test]
    fn test_venue_breakdown_uses_catalogued_venue_not_order_venue() {
        let mut dataset = single_order_dataset();
        // Same item sold through an order placed at a different venue
        dataset.venues.push(venue("v_102", "Juniper Hall", "restaurant"));
        dataset
            .orders
            .push(order("o_002", "u_001", "v_102", vec![line("m_101_01", 2)]));

        let catalogs = Catalogs::build(&dataset);
        let sales = sales_by_item(&dataset.orders, &catalogs);

        let sale = sales.get("m_101_01").unwrap();
        assert_eq!(sale.total_qty, 5);
        // Both orders land under v_101, where the item is catalogued
        assert_eq!(sale.per_venue.len(), 1);
        assert_eq!(sale.per_venue.get("v_101").unwrap().qty, 5);
    }

    #[test]
    fn test_quantity_conservation_over_resolvable_lines() {
        let mut dataset = single_order_dataset();
        dataset
            .menu_items
            .push(menu_item("m_101_02", "v_101", "Barrel Negroni", 750));
        dataset.orders.push(order(
            "o_002",
            "u_001",
            "v_101",
            vec![line("m_101_02", 2), line("m_missing", 9), line("m_101_01", 1)],
        ));

        let catalogs = Catalogs::build(&dataset);
        let sales = sales_by_item(&dataset.orders, &catalogs);

        let resolvable_qty: i64 = dataset
            .orders
            .iter()
            .flat_map(|o| &o.items)
            .filter(|l| catalogs.menu_entry(&l.menu_item_id).is_some())
            .map(|l| l.qty)
            .sum();
        let total_qty: i64 = sales.values().map(|s| s.total_qty).sum();

        assert_eq!(total_qty, resolvable_qty);
        assert_eq!(total_qty, 6);
    }

    #[test]
    fn test_reducer_is_deterministic() {
        let dataset = single_order_dataset();
        let catalogs = Catalogs::build(&dataset);

        let first = sales_by_item(&dataset.orders, &catalogs);
        let second = sales_by_item(&dataset.orders, &catalogs);

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_dataset_yields_empty_table() {
        let dataset = empty_dataset();
        let catalogs = Catalogs::build(&dataset);
        assert!(sales_by_item(&dataset.orders, &catalogs).is_empty());
    }
}
