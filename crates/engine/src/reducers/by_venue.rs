use contracts::dataset::Order;
use contracts::summaries::{SalesByVenue, VenueSale};

use crate::catalog::Catalogs;

/// Fold every order into per-venue totals with a per-item breakdown.
///
/// An order whose venue_id is not in the catalog is excluded entirely.
/// Within a resolvable order, lines with an unknown menu_item_id are
/// skipped individually.
pub fn sales_by_venue(orders: &[Order], catalogs: &Catalogs) -> SalesByVenue {
    let mut sales = SalesByVenue::new();

    for order in orders {
        let venue = match catalogs.venue_entry(&order.venue_id) {
            Some(venue) => venue,
            None => continue,
        };

        let sale = sales
            .entry(order.venue_id.clone())
            .or_insert_with(|| VenueSale::new(&order.venue_id, &venue.name, &venue.category));

        for line in &order.items {
            let entry = match catalogs.menu_entry(&line.menu_item_id) {
                Some(entry) => entry,
                None => continue,
            };

            let revenue_cents = entry.price_cents * line.qty;
            sale.record(&line.menu_item_id, line.qty, revenue_cents);
        }
    }

    sales
}
