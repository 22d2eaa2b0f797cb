use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod profile;
pub mod recommendation;

pub use profile::{GenreCount, HistoryEntry, Location, ProfileSummary, UserInfo};
pub use recommendation::{RecommendationResult, RecommendedItem, Variant};

pub type ItemId = u32;
pub type UserId = u32;

/// Top-level product category of a catalog item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Movie,
    Book,
    Electronics,
    Clothing,
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Movie => "Movie",
            Category::Book => "Book",
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
        };
        write!(f, "{}", name)
    }
}

/// A catalog item, as loaded from `items.csv`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    #[serde(rename = "item_id")]
    pub id: ItemId,
    pub title: String,
    pub category: Category,
    /// Genre label; the vocabulary depends on the category
    pub genre: String,
    pub price: f64,
    /// Informational topic bucket, not used for ranking
    pub topic_id: u8,
}

/// A user record, as loaded from `users.csv`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(rename = "user_id")]
    pub id: UserId,
    pub age: u32,
    pub gender: String,
    pub lat: f64,
    pub lon: f64,
}

impl User {
    pub fn location(&self) -> Location {
        Location {
            lat: self.lat,
            lon: self.lon,
        }
    }
}

/// One rating of an item by a user, as loaded from `interactions.csv`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    pub user_id: UserId,
    pub item_id: ItemId,
    pub rating: u8,
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
}

/// Serde adapter for interaction timestamps.
///
/// Snapshots store `YYYY-MM-DD HH:MM:SS`. On input the ISO `T` separator is
/// accepted too, and a bare `YYYY-MM-DD` reads as midnight.
pub mod timestamp_format {
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";
    const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
    const DATE_FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&timestamp.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let raw = raw.trim();
        NaiveDateTime::parse_from_str(raw, FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(raw, ISO_FORMAT))
            .or_else(|_| {
                NaiveDate::parse_from_str(raw, DATE_FORMAT).map(|date| date.and_time(NaiveTime::MIN))
            })
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Electronics.to_string(), "Electronics");
        assert_eq!(Category::Movie.to_string(), "Movie");
    }

    #[test]
    fn test_item_serializes_with_item_id_key() {
        let item = Item {
            id: 7,
            title: "Book #7 (History)".to_string(),
            category: Category::Book,
            genre: "History".to_string(),
            price: 12.5,
            topic_id: 2,
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["item_id"], 7);
        assert_eq!(json["category"], "Book");
    }

    #[test]
    fn test_interaction_timestamp_accepts_both_separators() {
        let spaced: Interaction = serde_json::from_str(
            r#"{"user_id":1,"item_id":2,"rating":4,"timestamp":"2024-01-01 05:00:00"}"#,
        )
        .unwrap();
        let iso: Interaction = serde_json::from_str(
            r#"{"user_id":1,"item_id":2,"rating":4,"timestamp":"2024-01-01T05:00:00"}"#,
        )
        .unwrap();

        let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(5, 0, 0)
            .unwrap();
        assert_eq!(spaced.timestamp, expected);
        assert_eq!(iso.timestamp, expected);
    }

    #[test]
    fn test_interaction_date_only_timestamp_is_midnight() {
        let daily: Interaction = serde_json::from_str(
            r#"{"user_id":1,"item_id":2,"rating":4,"timestamp":"2024-01-03"}"#,
        )
        .unwrap();

        let expected = NaiveDate::from_ymd_opt(2024, 1, 3)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(daily.timestamp, expected);
    }

    #[test]
    fn test_interaction_timestamp_serializes_spaced() {
        let interaction = Interaction {
            user_id: 1,
            item_id: 2,
            rating: 3,
            timestamp: NaiveDate::from_ymd_opt(2024, 3, 9)
                .unwrap()
                .and_hms_opt(14, 0, 0)
                .unwrap(),
        };

        let json = serde_json::to_value(&interaction).unwrap();
        assert_eq!(json["timestamp"], "2024-03-09 14:00:00");
    }

    #[test]
    fn test_interaction_rejects_garbage_timestamp() {
        let result: Result<Interaction, _> = serde_json::from_str(
            r#"{"user_id":1,"item_id":2,"rating":4,"timestamp":"yesterday"}"#,
        );
        assert!(result.is_err());
    }
}
