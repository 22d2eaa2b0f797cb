use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::models::{Interaction, Item, ItemId, User, UserId};

/// Errors raised while loading or validating the dataset snapshot
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Dataset file not found: {0}")]
    MissingDataset(String),
    #[error("Failed to read {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: csv::Error,
    },
    #[error("Duplicate item id {0}")]
    DuplicateItem(ItemId),
    #[error("Duplicate user id {0}")]
    DuplicateUser(UserId),
    #[error("Item {0} has a negative or non-numeric price")]
    InvalidPrice(ItemId),
    #[error("User {0} has a non-finite location")]
    InvalidLocation(UserId),
    #[error("Interaction references unknown user {0}")]
    UnknownUser(UserId),
    #[error("Interaction references unknown item {0}")]
    UnknownItem(ItemId),
    #[error("User {user_id} rated item {item_id} more than once")]
    DuplicateInteraction { user_id: UserId, item_id: ItemId },
    #[error("Rating {rating} out of range 1-5 (user {user_id}, item {item_id})")]
    InvalidRating {
        user_id: UserId,
        item_id: ItemId,
        rating: u8,
    },
}

/// Raw tables as supplied by a [`SnapshotLoader`](super::SnapshotLoader)
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub items: Vec<Item>,
    pub users: Vec<User>,
    pub interactions: Vec<Interaction>,
}

/// Read-only, indexed view over a validated snapshot.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it afterwards.
#[derive(Debug)]
pub struct CatalogStore {
    items: Vec<Item>,
    item_index: HashMap<ItemId, usize>,
    users: HashMap<UserId, User>,
    /// Interactions per user, in log order
    history: HashMap<UserId, Vec<Interaction>>,
    interaction_count: usize,
}

impl CatalogStore {
    /// Validates the snapshot and builds lookup indexes
    pub fn new(snapshot: Snapshot) -> Result<Self, CatalogError> {
        let Snapshot {
            items,
            users,
            interactions,
        } = snapshot;

        let mut item_index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if !item.price.is_finite() || item.price < 0.0 {
                return Err(CatalogError::InvalidPrice(item.id));
            }
            if item_index.insert(item.id, position).is_some() {
                return Err(CatalogError::DuplicateItem(item.id));
            }
        }

        let mut user_index = HashMap::with_capacity(users.len());
        for user in users {
            let id = user.id;
            if !user.lat.is_finite() || !user.lon.is_finite() {
                return Err(CatalogError::InvalidLocation(id));
            }
            if user_index.insert(id, user).is_some() {
                return Err(CatalogError::DuplicateUser(id));
            }
        }

        let interaction_count = interactions.len();
        let mut seen_pairs = HashSet::with_capacity(interaction_count);
        let mut history: HashMap<UserId, Vec<Interaction>> = HashMap::new();
        for interaction in interactions {
            if !user_index.contains_key(&interaction.user_id) {
                return Err(CatalogError::UnknownUser(interaction.user_id));
            }
            if !item_index.contains_key(&interaction.item_id) {
                return Err(CatalogError::UnknownItem(interaction.item_id));
            }
            if !(1..=5).contains(&interaction.rating) {
                return Err(CatalogError::InvalidRating {
                    user_id: interaction.user_id,
                    item_id: interaction.item_id,
                    rating: interaction.rating,
                });
            }
            if !seen_pairs.insert((interaction.user_id, interaction.item_id)) {
                return Err(CatalogError::DuplicateInteraction {
                    user_id: interaction.user_id,
                    item_id: interaction.item_id,
                });
            }
            history
                .entry(interaction.user_id)
                .or_default()
                .push(interaction);
        }

        tracing::info!(
            items = items.len(),
            users = user_index.len(),
            interactions = interaction_count,
            "Catalog snapshot loaded"
        );

        Ok(Self {
            items,
            item_index,
            users: user_index,
            history,
            interaction_count,
        })
    }

    /// All items in load order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.item_index.get(&id).map(|&position| &self.items[position])
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Interactions recorded for a user, in log order. Empty for unknown users.
    pub fn interactions_for(&self, user_id: UserId) -> &[Interaction] {
        self.history
            .get(&user_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn interaction_count(&self) -> usize {
        self.interaction_count
    }
}
