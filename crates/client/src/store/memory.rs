//! In-memory catalog store.
//!
//! Backs static data mode (remote store unreachable or unconfigured) and
//! doubles as the test fixture for the bulk-import driver. Behaves like the
//! remote store where it matters: unique listing URLs, assigned ids, and
//! cached category counts.

use async_trait::async_trait;
use tokio::sync::Mutex;

use linkdex_core::model::seed::{seed_categories, seed_websites};
use linkdex_core::model::{Category, NewWebsite, Website, WebsiteUpdate};

use crate::favicon::DEFAULT_ICON;
use crate::store::{CatalogStore, StoreError};

#[derive(Debug)]
struct Inner {
    websites: Vec<Website>,
    categories: Vec<Category>,
    next_id: u64,
}

/// Ephemeral catalog store holding the seed dataset.
#[derive(Debug)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Store populated with the seed categories and listings.
    pub fn seeded() -> Self {
        Self::with_data(seed_websites(), seed_categories())
    }

    /// Store with the seed categories but no listings.
    pub fn empty() -> Self {
        Self::with_data(Vec::new(), seed_categories())
    }

    /// Store with explicit contents.
    pub fn with_data(websites: Vec<Website>, categories: Vec<Category>) -> Self {
        let next_id = websites.len() as u64 + 1;
        Self { inner: Mutex::new(Inner { websites, categories, next_id }) }
    }
}

impl Inner {
    fn shift_category_count(&mut self, slug: &str, delta: i64) {
        if let Some(category) = self.categories.iter_mut().find(|c| c.slug == slug) {
            category.count = (category.count + delta).max(0);
        }
    }

    fn validate(website: &NewWebsite) -> Result<(), StoreError> {
        if website.title.trim().len() < 2 {
            return Err(StoreError::Validation("title must be at least 2 characters".into()));
        }
        if url::Url::parse(&website.url).is_err() {
            return Err(StoreError::Validation(format!("invalid url: {}", website.url)));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn list_websites(&self) -> Result<Vec<Website>, StoreError> {
        let inner = self.inner.lock().await;
        let mut websites = inner.websites.clone();
        websites.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
        Ok(websites)
    }

    async fn add_website(&self, website: NewWebsite) -> Result<Website, StoreError> {
        Inner::validate(&website)?;

        let mut inner = self.inner.lock().await;
        if inner.websites.iter().any(|w| w.url == website.url) {
            return Err(StoreError::Duplicate);
        }

        let id = format!("m-{}", inner.next_id);
        inner.next_id += 1;

        let mut created = website.into_website(id);
        if created.icon.is_none() {
            created.icon = Some(DEFAULT_ICON.to_string());
        }

        let slug = created.category.clone();
        inner.websites.push(created.clone());
        inner.shift_category_count(&slug, 1);

        Ok(created)
    }

    async fn update_website(&self, id: &str, update: WebsiteUpdate) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        let index = inner
            .websites
            .iter()
            .position(|w| w.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let previous_category = inner.websites[index].category.clone();

        {
            let site = &mut inner.websites[index];
            if let Some(title) = update.title {
                site.title = title;
            }
            if let Some(description) = update.description {
                site.description = description;
            }
            if let Some(url) = update.url {
                site.url = url;
                site.icon = Some(DEFAULT_ICON.to_string());
            }
            if let Some(category) = update.category {
                site.category = category;
            }
            if let Some(tags) = update.tags {
                site.tags = tags;
            }
            if let Some(featured) = update.featured {
                site.featured = featured;
            }
            if let Some(popular) = update.popular {
                site.popular = popular;
            }
            if let Some(clicks) = update.clicks {
                site.clicks = clicks;
            }
            if let Some(rating) = update.rating {
                site.rating = rating;
            }
            if let Some(date_added) = update.date_added {
                site.date_added = date_added;
            }
            if let Some(last_updated) = update.last_updated {
                site.last_updated = last_updated;
            }
        }

        let new_category = inner.websites[index].category.clone();
        if new_category != previous_category {
            inner.shift_category_count(&previous_category, -1);
            inner.shift_category_count(&new_category, 1);
        }

        Ok(())
    }

    async fn delete_website(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        let index = inner
            .websites
            .iter()
            .position(|w| w.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let removed = inner.websites.remove(index);
        inner.shift_category_count(&removed.category, -1);

        Ok(())
    }

    async fn record_click(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        let site = inner
            .websites
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        site.clicks += 1;
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let inner = self.inner.lock().await;
        let mut categories = inner.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use linkdex_core::import::DEFAULT_RATING;

    fn candidate(title: &str, url: &str, category: &str) -> NewWebsite {
        let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        NewWebsite {
            title: title.into(),
            description: String::new(),
            url: url.into(),
            icon: None,
            category: category.into(),
            tags: vec!["Free".into(), "Reader".into()],
            featured: false,
            popular: false,
            clicks: 0,
            rating: DEFAULT_RATING,
            date_added: today,
            last_updated: today,
        }
    }

    #[tokio::test]
    async fn test_add_assigns_id_and_default_icon() {
        let store = MemoryStore::empty();
        let created = store
            .add_website(candidate("GitHub", "https://github.com", "dev-tools"))
            .await
            .unwrap();
        assert_eq!(created.id, "m-1");
        assert_eq!(created.icon.as_deref(), Some(DEFAULT_ICON));
    }

    #[tokio::test]
    async fn test_add_duplicate_url_conflicts() {
        let store = MemoryStore::empty();
        store
            .add_website(candidate("GitHub", "https://github.com", "dev-tools"))
            .await
            .unwrap();
        let err = store
            .add_website(candidate("GitHub Again", "https://github.com", "dev-tools"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Duplicate));
    }

    #[tokio::test]
    async fn test_add_bumps_category_count() {
        let store = MemoryStore::empty();
        let before = category_count(&store, "dev-tools").await;
        store
            .add_website(candidate("GitHub", "https://github.com", "dev-tools"))
            .await
            .unwrap();
        assert_eq!(category_count(&store, "dev-tools").await, before + 1);
    }

    #[tokio::test]
    async fn test_category_change_moves_counts() {
        let store = MemoryStore::empty();
        let created = store
            .add_website(candidate("GitHub", "https://github.com", "dev-tools"))
            .await
            .unwrap();
        let dev_before = category_count(&store, "dev-tools").await;
        let ai_before = category_count(&store, "ai-tools").await;

        let update = WebsiteUpdate { category: Some("ai-tools".into()), ..Default::default() };
        store.update_website(&created.id, update).await.unwrap();

        assert_eq!(category_count(&store, "dev-tools").await, dev_before - 1);
        assert_eq!(category_count(&store, "ai-tools").await, ai_before + 1);
    }

    #[tokio::test]
    async fn test_delete_decrements_count_and_removes() {
        let store = MemoryStore::empty();
        let before = category_count(&store, "dev-tools").await;
        let created = store
            .add_website(candidate("GitHub", "https://github.com", "dev-tools"))
            .await
            .unwrap();
        store.delete_website(&created.id).await.unwrap();
        assert!(store.list_websites().await.unwrap().is_empty());
        assert_eq!(category_count(&store, "dev-tools").await, before);
    }

    #[tokio::test]
    async fn test_record_click_increments() {
        let store = MemoryStore::seeded();
        store.record_click("s-1").await.unwrap();
        let sites = store.list_websites().await.unwrap();
        let site = sites.iter().find(|s| s.id == "s-1").unwrap();
        assert_eq!(site.clicks, 1241);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let store = MemoryStore::empty();
        assert!(matches!(store.record_click("nope").await, Err(StoreError::NotFound(_))));
        assert!(matches!(store.delete_website("nope").await, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_ordered_by_last_updated_desc() {
        let store = MemoryStore::empty();
        let mut old = candidate("Old", "https://old.example", "dev-tools");
        old.last_updated = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut new = candidate("New", "https://new.example", "dev-tools");
        new.last_updated = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        store.add_website(old).await.unwrap();
        store.add_website(new).await.unwrap();

        let sites = store.list_websites().await.unwrap();
        assert_eq!(sites[0].title, "New");
        assert_eq!(sites[1].title, "Old");
    }

    #[tokio::test]
    async fn test_categories_sorted_by_name() {
        let store = MemoryStore::seeded();
        let categories = store.list_categories().await.unwrap();
        let names: Vec<_> = categories.iter().map(|c| c.name.clone()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[tokio::test]
    async fn test_validation_rejects_short_title() {
        let store = MemoryStore::empty();
        let err = store
            .add_website(candidate("A", "https://a.example", "dev-tools"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    async fn category_count(store: &MemoryStore, slug: &str) -> i64 {
        store
            .list_categories()
            .await
            .unwrap()
            .into_iter()
            .find(|c| c.slug == slug)
            .map(|c| c.count)
            .unwrap_or_default()
    }
}
