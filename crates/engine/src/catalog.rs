//! Reference catalogs
//!
//! Static id -> attribute lookup tables built once from the raw dataset and
//! read-only afterwards. Lookups return `Option`; callers treat a miss as
//! "skip this record".

use std::collections::HashMap;

use contracts::dataset::Dataset;

/// Resolved menu item attributes
#[derive(Debug, Clone)]
pub struct MenuEntry {
    /// Venue the item is catalogued under
    pub venue_id: String,
    pub name: String,
    pub item_type: String,
    pub price_cents: i64,
}

/// Resolved venue attributes
#[derive(Debug, Clone)]
pub struct VenueEntry {
    pub name: String,
    pub category: String,
}

/// Resolved user attributes
#[derive(Debug, Clone)]
pub struct UserEntry {
    pub archetype_primary: Option<String>,
}

/// Resolved archetype attributes
#[derive(Debug, Clone)]
pub struct ArchetypeEntry {
    pub name: String,
    pub description: String,
}

/// The four reference catalogs, built in one linear pass per collection.
///
/// Duplicate ids in a source collection resolve last-write-wins, matching
/// plain table-assignment semantics. Entries are never removed.
#[derive(Debug, Default)]
pub struct Catalogs {
    menu: HashMap<String, MenuEntry>,
    venues: HashMap<String, VenueEntry>,
    users: HashMap<String, UserEntry>,
    archetypes: HashMap<String, ArchetypeEntry>,
}

impl Catalogs {
    pub fn build(dataset: &Dataset) -> Self {
        let mut catalogs = Self::default();

        for mi in &dataset.menu_items {
            catalogs.menu.insert(
                mi.menu_item_id.clone(),
                MenuEntry {
                    venue_id: mi.venue_id.clone(),
                    name: mi.name.clone(),
                    item_type: mi.item_type.clone(),
                    price_cents: mi.price_cents,
                },
            );
        }

        for v in &dataset.venues {
            catalogs.venues.insert(
                v.venue_id.clone(),
                VenueEntry {
                    name: v.name.clone(),
                    category: v.category.clone(),
                },
            );
        }

        for u in &dataset.users {
            catalogs.users.insert(
                u.user_id.clone(),
                UserEntry {
                    archetype_primary: u.archetype_primary.clone(),
                },
            );
        }

        for a in &dataset.archetypes {
            catalogs.archetypes.insert(
                a.archetype_id.clone(),
                ArchetypeEntry {
                    name: a.name.clone(),
                    description: a.description.clone(),
                },
            );
        }

        catalogs
    }

    pub fn menu_entry(&self, menu_item_id: &str) -> Option<&MenuEntry> {
        self.menu.get(menu_item_id)
    }

    pub fn venue_entry(&self, venue_id: &str) -> Option<&VenueEntry> {
        self.venues.get(venue_id)
    }

    pub fn user_entry(&self, user_id: &str) -> Option<&UserEntry> {
        self.users.get(user_id)
    }

    pub fn archetype_entry(&self, archetype_id: &str) -> Option<&ArchetypeEntry> {
        self.archetypes.get(archetype_id)
    }
}
