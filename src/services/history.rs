use std::collections::{HashMap, HashSet};

use crate::{
    db::CatalogStore,
    models::{GenreCount, HistoryEntry, ItemId, UserId},
};

/// Item ids the user has already rated. Empty for new or unknown users.
pub fn seen_items(store: &CatalogStore, user_id: UserId) -> HashSet<ItemId> {
    store
        .interactions_for(user_id)
        .iter()
        .map(|interaction| interaction.item_id)
        .collect()
}

/// Genre frequencies over the user's history, most frequent first.
///
/// Equal counts keep the order in which the genre first appears in the
/// interaction log, so the ranking is deterministic.
pub fn ranked_genres(store: &CatalogStore, user_id: UserId) -> Vec<GenreCount> {
    let mut counts: Vec<GenreCount> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for interaction in store.interactions_for(user_id) {
        let Some(item) = store.item(interaction.item_id) else {
            continue;
        };
        match positions.get(item.genre.as_str()) {
            Some(&position) => counts[position].count += 1,
            None => {
                positions.insert(item.genre.as_str(), counts.len());
                counts.push(GenreCount {
                    genre: item.genre.clone(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable: ties stay in first-encountered order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// The user's most recent ratings joined with item details, newest first
pub fn recent_history(store: &CatalogStore, user_id: UserId, limit: usize) -> Vec<HistoryEntry> {
    let mut entries: Vec<HistoryEntry> = store
        .interactions_for(user_id)
        .iter()
        .filter_map(|interaction| {
            store.item(interaction.item_id).map(|item| HistoryEntry {
                item_id: item.id,
                title: item.title.clone(),
                category: item.category,
                genre: item.genre.clone(),
                rating: interaction.rating,
                timestamp: interaction.timestamp,
            })
        })
        .collect();

    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    entries.truncate(limit);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::catalog::fixtures::*;
    use crate::db::Snapshot;
    use crate::models::Category;

    #[test]
    fn test_seen_items() {
        let store = sample_store();
        assert_eq!(seen_items(&store, 1), HashSet::from([1, 2, 3, 4]));
        assert!(seen_items(&store, 2).is_empty());
        assert!(seen_items(&store, 404).is_empty());
    }

    #[test]
    fn test_ranked_genres_counts_and_orders() {
        let store = sample_store();
        let ranked = ranked_genres(&store, 1);

        assert_eq!(ranked[0], GenreCount { genre: "Action".to_string(), count: 2 });
        // Comedy is seen before History, both once
        assert_eq!(ranked[1].genre, "Comedy");
        assert_eq!(ranked[2].genre, "History");
        assert_eq!(ranked.iter().map(|g| g.count).sum::<usize>(), 4);
    }

    #[test]
    fn test_ranked_genres_tie_uses_first_seen() {
        let store = CatalogStore::new(Snapshot {
            items: vec![
                item(1, Category::Book, "Fiction"),
                item(2, Category::Book, "Business"),
                item(3, Category::Book, "Business"),
                item(4, Category::Book, "Fiction"),
            ],
            users: vec![user(1)],
            interactions: vec![rating(1, 2, 0), rating(1, 1, 1), rating(1, 4, 2), rating(1, 3, 3)],
        })
        .unwrap();

        let ranked = ranked_genres(&store, 1);
        assert_eq!(ranked[0].genre, "Business");
        assert_eq!(ranked[1].genre, "Fiction");
    }

    #[test]
    fn test_recent_history_newest_first_and_limited() {
        let store = sample_store();

        let history = recent_history(&store, 3, 3);
        let ids: Vec<ItemId> = history.iter().map(|h| h.item_id).collect();
        assert_eq!(ids, vec![8, 7, 6]);
        assert_eq!(history[0].title, "Book #8 (History)");

        assert_eq!(recent_history(&store, 3, 10).len(), 8);
        assert!(recent_history(&store, 2, 10).is_empty());
    }
}
