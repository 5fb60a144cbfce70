//! Catalog record types shared across the workspace.
//!
//! A [`Website`] is one directory listing; a [`Category`] groups listings
//! under a stable slug. JSON field names follow the camelCase shape the
//! public API exposes; the REST store's flattened column names are mapped
//! separately at the wire boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod seed;

/// One directory listing with its display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Website {
    /// Opaque identifier assigned by the persistence layer.
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    /// Favicon URL or fallback glyph. Resolved by the store layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Slug referencing a [`Category`].
    pub category: String,
    /// Unique, insertion-ordered, capped at 10 by the parser.
    pub tags: Vec<String>,
    pub featured: bool,
    pub popular: bool,
    pub clicks: u32,
    /// Rating in [1, 5].
    pub rating: f32,
    pub date_added: NaiveDate,
    pub last_updated: NaiveDate,
}

/// A [`Website`] candidate before the store has assigned an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWebsite {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub popular: bool,
    pub clicks: u32,
    pub rating: f32,
    pub date_added: NaiveDate,
    pub last_updated: NaiveDate,
}

impl NewWebsite {
    /// Attach a store-assigned id, producing a persisted record.
    pub fn into_website(self, id: String) -> Website {
        Website {
            id,
            title: self.title,
            description: self.description,
            url: self.url,
            icon: self.icon,
            category: self.category,
            tags: self.tags,
            featured: self.featured,
            popular: self.popular,
            clicks: self.clicks,
            rating: self.rating,
            date_added: self.date_added,
            last_updated: self.last_updated,
        }
    }
}

/// Partial update for an existing [`Website`]. `None` fields are untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub popular: Option<bool>,
    pub clicks: Option<u32>,
    pub rating: Option<f32>,
    pub date_added: Option<NaiveDate>,
    pub last_updated: Option<NaiveDate>,
}

/// One category definition.
///
/// `count` is a cached number of listings currently assigned, maintained by
/// the store layer on add/update/delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Stable lowercase-hyphenated key used for storage and classification.
    pub slug: String,
    pub description: String,
    /// Symbolic icon name.
    pub icon: String,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_new() -> NewWebsite {
        NewWebsite {
            title: "MangaDex".into(),
            description: "A fan-driven manga platform.".into(),
            url: "https://mangadex.org".into(),
            icon: None,
            category: "manga-readers".into(),
            tags: vec!["Manga".into(), "Free".into()],
            featured: false,
            popular: false,
            clicks: 0,
            rating: 4.5,
            date_added: NaiveDate::from_ymd_opt(2026, 8, 25).unwrap(),
            last_updated: NaiveDate::from_ymd_opt(2026, 8, 25).unwrap(),
        }
    }

    #[test]
    fn test_into_website_carries_fields() {
        let site = sample_new().into_website("w-1".into());
        assert_eq!(site.id, "w-1");
        assert_eq!(site.title, "MangaDex");
        assert_eq!(site.category, "manga-readers");
        assert_eq!(site.tags, vec!["Manga", "Free"]);
    }

    #[test]
    fn test_website_serializes_camel_case_dates() {
        let site = sample_new().into_website("w-1".into());
        let json = serde_json::to_value(&site).unwrap();
        assert_eq!(json["dateAdded"], "2026-08-25");
        assert_eq!(json["lastUpdated"], "2026-08-25");
        assert!(json.get("icon").is_none());
    }

    #[test]
    fn test_update_default_is_empty() {
        let update = WebsiteUpdate::default();
        assert!(update.title.is_none());
        assert!(update.category.is_none());
        assert!(update.last_updated.is_none());
    }
}
