use chrono::NaiveDateTime;
use serde::Serialize;

use super::{Category, ItemId, User, UserId};

/// Geolocation stored on the user record
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

/// Public subset of a user record
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserInfo {
    pub user_id: UserId,
    pub age: u32,
    pub gender: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            age: user.age,
            gender: user.gender.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

/// Per-user analytics summary
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProfileSummary {
    pub user: UserInfo,
    /// Most frequent genres, descending by count
    pub top_genres: Vec<GenreCount>,
    pub location: Location,
    pub history_count: usize,
}

/// One row of a user's rating history joined with the item
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HistoryEntry {
    pub item_id: ItemId,
    pub title: String,
    pub category: Category,
    pub genre: String,
    pub rating: u8,
    #[serde(with = "super::timestamp_format")]
    pub timestamp: NaiveDateTime,
}
