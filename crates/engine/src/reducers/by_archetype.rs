use contracts::dataset::Order;
use contracts::summaries::{ArchetypeSale, SalesByArchetype, UNKNOWN_ARCHETYPE};

use crate::catalog::Catalogs;

/// Fold every order into per-customer-archetype totals with a per-item
/// breakdown.
///
/// An order whose user is not in the catalog is excluded entirely. Users
/// without an assigned archetype land under the "unknown" key; an archetype
/// id missing from the catalog keeps the raw id as its display name.
pub fn sales_by_archetype(orders: &[Order], catalogs: &Catalogs) -> SalesByArchetype {
    let mut sales = SalesByArchetype::new();

    for order in orders {
        let user = match catalogs.user_entry(&order.user_id) {
            Some(user) => user,
            None => continue,
        };

        let archetype_id = user
            .archetype_primary
            .as_deref()
            .unwrap_or(UNKNOWN_ARCHETYPE);
        let archetype_name = catalogs
            .archetype_entry(archetype_id)
            .map(|a| a.name.as_str())
            .unwrap_or(archetype_id);

        let sale = sales
            .entry(archetype_id.to_string())
            .or_insert_with(|| ArchetypeSale::new(archetype_id, archetype_name));

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
