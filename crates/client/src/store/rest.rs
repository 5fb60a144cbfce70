//! Remote catalog store client.
//!
//! Talks to a PostgREST-style REST API (two tables, `websites` and
//! `categories`) with API-key authentication.
//!
//! ### Specification
//!
//! - **Endpoints**: `<base>/rest/v1/websites`, `<base>/rest/v1/categories`
//! - **Authentication**: `apikey` header plus `Authorization: Bearer`.
//! - **Inserts**: `Prefer: return=representation` so the created row (with
//!   its assigned id) comes back in the response.
//! - **Error mapping**: unique-constraint violations (HTTP 409 or error code
//!   `23505`) surface as [`StoreError::Duplicate`]; other constraint codes
//!   as [`StoreError::Validation`].

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{StatusCode, header};
use serde::{Deserialize, Serialize};

use linkdex_core::AppConfig;
use linkdex_core::model::{Category, NewWebsite, Website, WebsiteUpdate};

use crate::favicon;
use crate::store::{CatalogStore, StoreError};

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = "linkdex/0.1";

/// Remote store client configuration.
#[derive(Debug, Clone)]
pub struct RestConfig {
    /// Base URL of the store, without the `/rest/v1` suffix.
    pub base_url: String,
    /// API key sent as `apikey` and bearer token.
    pub api_key: String,
    /// Request timeout (default: 10s).
    pub timeout: Duration,
    /// User-agent string.
    pub user_agent: String,
    /// Probe for favicons on add/update.
    pub check_favicons: bool,
    /// Favicon probe timeout.
    pub favicon_timeout: Duration,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            check_favicons: true,
            favicon_timeout: Duration::from_secs(5),
        }
    }
}

impl RestConfig {
    /// Build from the application configuration.
    ///
    /// Returns `StoreError::NotConfigured` when the store settings are absent.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, StoreError> {
        let (base_url, api_key) = config.require_store().map_err(|_| StoreError::NotConfigured)?;
        Ok(Self {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            timeout: config.timeout(),
            user_agent: config.user_agent.clone(),
            check_favicons: config.check_favicons,
            favicon_timeout: config.favicon_timeout(),
        })
    }
}

/// Wire row for the `websites` table. The store flattens the camelCase date
/// fields into lowercase column names.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WebsiteRow {
    id: String,
    title: String,
    description: String,
    url: String,
    icon: Option<String>,
    category: String,
    tags: Vec<String>,
    featured: bool,
    popular: bool,
    clicks: u32,
    rating: f32,
    #[serde(rename = "dateadded")]
    date_added: NaiveDate,
    #[serde(rename = "lastupdated")]
    last_updated: NaiveDate,
}

impl From<WebsiteRow> for Website {
    fn from(row: WebsiteRow) -> Self {
        Website {
            id: row.id,
            title: row.title,
            description: row.description,
            url: row.url,
            icon: row.icon,
            category: row.category,
            tags: row.tags,
            featured: row.featured,
            popular: row.popular,
            clicks: row.clicks,
            rating: row.rating,
            date_added: row.date_added,
            last_updated: row.last_updated,
        }
    }
}

/// Insert payload for the `websites` table (no id; the store assigns it).
#[derive(Debug, Serialize)]
struct NewWebsiteRow<'a> {
    title: &'a str,
    description: &'a str,
    url: &'a str,
    icon: Option<&'a str>,
    category: &'a str,
    tags: &'a [String],
    featured: bool,
    popular: bool,
    clicks: u32,
    rating: f32,
    #[serde(rename = "dateadded")]
    date_added: NaiveDate,
    #[serde(rename = "lastupdated")]
    last_updated: NaiveDate,
}

impl<'a> NewWebsiteRow<'a> {
    fn from_model(site: &'a NewWebsite, icon: Option<&'a str>) -> Self {
        Self {
            title: &site.title,
            description: &site.description,
            url: &site.url,
            icon,
            category: &site.category,
            tags: &site.tags,
            featured: site.featured,
            popular: site.popular,
            clicks: site.clicks,
            rating: site.rating,
            date_added: site.date_added,
            last_updated: site.last_updated,
        }
    }
}

/// Patch payload for the `websites` table; unset fields are left untouched.
#[derive(Debug, Default, Serialize)]
struct WebsiteUpdateRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    popular: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    clicks: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rating: Option<f32>,
    #[serde(rename = "dateadded", skip_serializing_if = "Option::is_none")]
    date_added: Option<NaiveDate>,
    #[serde(rename = "lastupdated", skip_serializing_if = "Option::is_none")]
    last_updated: Option<NaiveDate>,
}

impl WebsiteUpdateRow {
    fn from_model(update: WebsiteUpdate, icon: Option<String>) -> Self {
        Self {
            title: update.title,
            description: update.description,
            url: update.url,
            icon,
            category: update.category,
            tags: update.tags,
            featured: update.featured,
            popular: update.popular,
            clicks: update.clicks,
            rating: update.rating,
            date_added: update.date_added,
            last_updated: update.last_updated,
        }
    }
}

/// Structured error body returned by the store.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// Classify an error response into a structured store error.
fn classify_error(status: StatusCode, body: Option<ApiErrorBody>) -> StoreError {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return StoreError::Auth;
    }

    if let Some(body) = body {
        match body.code.as_deref() {
            // 23505 = unique_violation
            Some("23505") => return StoreError::Duplicate,
            // Other integrity constraint violations (23xxx class)
            Some(code) if code.starts_with("23") => {
                return StoreError::Validation(body.message.unwrap_or_else(|| code.to_string()));
            }
            _ => {}
        }
    }

    if status == StatusCode::CONFLICT {
        return StoreError::Duplicate;
    }

    StoreError::Http { status: status.as_u16() }
}

/// Remote catalog store over HTTP.
#[derive(Debug, Clone)]
pub struct RestStore {
    http: reqwest::Client,
    config: RestConfig,
}

impl RestStore {
    /// Create a new store client with the given configuration.
    pub fn new(config: RestConfig) -> Result<Self, StoreError> {
        if config.base_url.is_empty() || config.api_key.is_empty() {
            return Err(StoreError::NotConfigured);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(StoreError::from)?;

        Ok(Self { http, config })
    }

    /// Create a store client from the application configuration.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, StoreError> {
        Self::new(RestConfig::from_app_config(config)?)
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.config.base_url.trim_end_matches('/'))
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .header(header::ACCEPT, "application/json")
    }

    /// Convert a non-success response into a `StoreError`.
    async fn error_for(response: reqwest::Response) -> StoreError {
        let status = response.status();
        let body = response.json::<ApiErrorBody>().await.ok();
        classify_error(status, body)
    }

    async fn fetch_rows(&self, url: &str) -> Result<Vec<WebsiteRow>, StoreError> {
        let response = self.request(reqwest::Method::GET, url).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }
        response
            .json::<Vec<WebsiteRow>>()
            .await
            .map_err(|e| StoreError::Parse(e.to_string()))
    }

    async fn current_category(&self, id: &str) -> Result<String, StoreError> {
        let url = format!("{}?id=eq.{id}&select=*", self.table_url("websites"));
        let rows = self.fetch_rows(&url).await?;
        rows.into_iter()
            .next()
            .map(|row| row.category)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Shift the cached entry count of a category.
    ///
    /// Count maintenance is best-effort: failures are logged and do not fail
    /// the catalog mutation that triggered them.
    async fn shift_category_count(&self, slug: &str, delta: i64) {
        if let Err(err) = self.try_shift_category_count(slug, delta).await {
            tracing::warn!(%err, slug, delta, "failed to update category count");
        }
    }

    async fn try_shift_category_count(&self, slug: &str, delta: i64) -> Result<(), StoreError> {
        #[derive(Deserialize)]
        struct CountRow {
            count: i64,
        }

        let url = format!("{}?slug=eq.{slug}&select=count", self.table_url("categories"));
        let response = self.request(reqwest::Method::GET, &url).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }
        let rows: Vec<CountRow> = response.json().await.map_err(|e| StoreError::Parse(e.to_string()))?;
        let current = rows
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound(slug.to_string()))?
            .count;

        let updated = (current + delta).max(0);
        let patch_url = format!("{}?slug=eq.{slug}", self.table_url("categories"));
        let response = self
            .request(reqwest::Method::PATCH, &patch_url)
            .json(&serde_json::json!({ "count": updated }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }
        Ok(())
    }

    async fn resolve_icon(&self, site_url: &str) -> Option<String> {
        if !self.config.check_favicons {
            return Some(favicon::DEFAULT_ICON.to_string());
        }
        Some(favicon::resolve_icon(&self.http, site_url, self.config.favicon_timeout).await)
    }
}

#[async_trait]
impl CatalogStore for RestStore {
    async fn list_websites(&self) -> Result<Vec<Website>, StoreError> {
        let url = format!("{}?select=*&order=lastupdated.desc", self.table_url("websites"));
        let rows = self.fetch_rows(&url).await?;
        Ok(rows.into_iter().map(Website::from).collect())
    }

    async fn add_website(&self, website: NewWebsite) -> Result<Website, StoreError> {
        let icon = match &website.icon {
            Some(icon) => Some(icon.clone()),
            None => self.resolve_icon(&website.url).await,
        };

        tracing::debug!(title = %website.title, category = %website.category, "adding listing");

        let row = NewWebsiteRow::from_model(&website, icon.as_deref());
        let response = self
            .request(reqwest::Method::POST, &self.table_url("websites"))
            .header("Prefer", "return=representation")
            .json(&[row])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        let mut rows: Vec<WebsiteRow> = response.json().await.map_err(|e| StoreError::Parse(e.to_string()))?;
        let created = rows
            .pop()
            .ok_or_else(|| StoreError::Parse("empty insert response".into()))?;

        self.shift_category_count(&website.category, 1).await;

        Ok(created.into())
    }

    async fn update_website(&self, id: &str, update: WebsiteUpdate) -> Result<(), StoreError> {
        let previous_category = self.current_category(id).await?;

        // A URL change invalidates the stored icon.
        let icon = match &update.url {
            Some(url) => self.resolve_icon(url).await,
            None => None,
        };

        let new_category = update.category.clone();
        let row = WebsiteUpdateRow::from_model(update, icon);

        let url = format!("{}?id=eq.{id}", self.table_url("websites"));
        let response = self.request(reqwest::Method::PATCH, &url).json(&row).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        if let Some(category) = new_category
            && category != previous_category
        {
            self.shift_category_count(&previous_category, -1).await;
            self.shift_category_count(&category, 1).await;
        }

        Ok(())
    }

    async fn delete_website(&self, id: &str) -> Result<(), StoreError> {
        let category = self.current_category(id).await?;

        let url = format!("{}?id=eq.{id}", self.table_url("websites"));
        let response = self.request(reqwest::Method::DELETE, &url).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        self.shift_category_count(&category, -1).await;

        Ok(())
    }

    async fn record_click(&self, id: &str) -> Result<(), StoreError> {
        let url = format!("{}?id=eq.{id}&select=*", self.table_url("websites"));
        let rows = self.fetch_rows(&url).await?;
        let current = rows.into_iter().next().ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let patch_url = format!("{}?id=eq.{id}", self.table_url("websites"));
        let response = self
            .request(reqwest::Method::PATCH, &patch_url)
            .json(&serde_json::json!({ "clicks": current.clicks + 1 }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let url = format!("{}?select=*&order=name.asc", self.table_url("categories"));
        let response = self.request(reqwest::Method::GET, &url).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }
        response
            .json::<Vec<Category>>()
            .await
            .map_err(|e| StoreError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_new_requires_configuration() {
        let result = RestStore::new(RestConfig::default());
        assert!(matches!(result, Err(StoreError::NotConfigured)));
    }

    #[test]
    fn test_from_app_config_unconfigured() {
        let result = RestStore::from_app_config(&AppConfig::default());
        assert!(matches!(result, Err(StoreError::NotConfigured)));
    }

    #[test]
    fn test_table_url_trims_trailing_slash() {
        let store = RestStore::new(RestConfig {
            base_url: "https://store.example/".into(),
            api_key: "anon".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(store.table_url("websites"), "https://store.example/rest/v1/websites");
    }

    #[test]
    fn test_classify_unique_violation_code() {
        let body = ApiErrorBody {
            code: Some("23505".into()),
            message: Some("duplicate key value violates unique constraint".into()),
        };
        assert!(matches!(classify_error(StatusCode::CONFLICT, Some(body)), StoreError::Duplicate));
    }

    #[test]
    fn test_classify_conflict_without_body() {
        assert!(matches!(classify_error(StatusCode::CONFLICT, None), StoreError::Duplicate));
    }

    #[test]
    fn test_classify_constraint_violation() {
        let body = ApiErrorBody { code: Some("23502".into()), message: Some("null value in column".into()) };
        let err = classify_error(StatusCode::BAD_REQUEST, Some(body));
        assert!(matches!(err, StoreError::Validation(msg) if msg.contains("null value")));
    }

    #[test]
    fn test_classify_auth() {
        assert!(matches!(classify_error(StatusCode::UNAUTHORIZED, None), StoreError::Auth));
        assert!(matches!(classify_error(StatusCode::FORBIDDEN, None), StoreError::Auth));
    }

    #[test]
    fn test_classify_other_http() {
        let err = classify_error(StatusCode::INTERNAL_SERVER_ERROR, None);
        assert!(matches!(err, StoreError::Http { status: 500 }));
    }

    #[test]
    fn test_website_row_wire_names() {
        let row = WebsiteRow {
            id: "w-1".into(),
            title: "GitHub".into(),
            description: "Code hosting.".into(),
            url: "https://github.com".into(),
            icon: None,
            category: "dev-tools".into(),
            tags: vec!["Code".into()],
            featured: false,
            popular: true,
            clicks: 3,
            rating: 4.5,
            date_added: NaiveDate::from_ymd_opt(2026, 8, 25).unwrap(),
            last_updated: NaiveDate::from_ymd_opt(2026, 8, 25).unwrap(),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["dateadded"], "2026-08-25");
        assert_eq!(json["lastupdated"], "2026-08-25");
        assert!(json.get("dateAdded").is_none());
    }

    #[test]
    fn test_update_row_skips_unset_fields() {
        let update = WebsiteUpdate { category: Some("anime".into()), ..Default::default() };
        let row = WebsiteUpdateRow::from_model(update, None);
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json, serde_json::json!({ "category": "anime" }));
    }
}
