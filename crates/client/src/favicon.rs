//! Favicon resolution for catalog listings.
//!
//! Listings get their icon from `<origin>/favicon.ico`, verified with a HEAD
//! probe under a short timeout. Probe failures never abort the add or update
//! that triggered them; the listing falls back to a glyph.

use std::time::Duration;

use url::Url;

/// Icon used when no favicon can be resolved.
pub const DEFAULT_ICON: &str = "🌐";

/// Candidate favicon URL for a site: `<origin>/favicon.ico`.
///
/// `None` when the site URL does not parse or has no usable origin.
pub fn favicon_url(site_url: &str) -> Option<String> {
    let parsed = Url::parse(site_url).ok()?;
    let origin = parsed.origin();
    if !origin.is_tuple() {
        return None;
    }
    Some(format!("{}/favicon.ico", origin.ascii_serialization()))
}

/// Resolve an icon for a site, probing for a favicon.
///
/// Returns the favicon URL when the HEAD probe succeeds, otherwise
/// [`DEFAULT_ICON`].
pub async fn resolve_icon(http: &reqwest::Client, site_url: &str, timeout: Duration) -> String {
    let Some(candidate) = favicon_url(site_url) else {
        return DEFAULT_ICON.to_string();
    };

    match http.head(&candidate).timeout(timeout).send().await {
        Ok(response) if response.status().is_success() => candidate,
        Ok(response) => {
            tracing::debug!(status = %response.status(), url = %candidate, "no favicon at origin");
            DEFAULT_ICON.to_string()
        }
        Err(err) => {
            tracing::debug!(%err, url = %candidate, "favicon probe failed");
            DEFAULT_ICON.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favicon_url_from_origin() {
        assert_eq!(favicon_url("https://example.com/some/page"), Some("https://example.com/favicon.ico".into()));
    }

    #[test]
    fn test_favicon_url_keeps_port() {
        assert_eq!(favicon_url("http://localhost:8080/x"), Some("http://localhost:8080/favicon.ico".into()));
    }

    #[test]
    fn test_favicon_url_invalid_input() {
        assert_eq!(favicon_url("not a url"), None);
    }

    #[test]
    fn test_favicon_url_opaque_origin() {
        assert_eq!(favicon_url("unix:/run/example.sock"), None);
    }
}
