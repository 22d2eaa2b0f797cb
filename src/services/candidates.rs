use crate::{
    db::CatalogStore,
    models::{Item, UserId},
};

use super::history::seen_items;

/// Catalog items the user has not interacted with yet, in catalog order.
///
/// An empty result means the user has exhausted the catalog; callers turn it
/// into an empty recommendation list.
pub fn generate_candidates(store: &CatalogStore, user_id: UserId) -> Vec<&Item> {
    let seen = seen_items(store, user_id);

    store
        .items()
        .iter()
        .filter(|item| !seen.contains(&item.id))
        .collect()
}
