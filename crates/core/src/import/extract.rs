//! Entry extraction stage: title/URL parsing and override capture.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Primary title line shape: `<Title> - <URL>` with the URL running to the
/// end of the line.
static TITLE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(.*?)\s*-\s*(https?://.*)$").unwrap());

/// Fallback scan for an `http(s)://` token anywhere in the line.
static URL_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)https?://\S+").unwrap());

/// `#category:<slug>` override marker embedded in a description line.
static CATEGORY_OVERRIDE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)#category:([a-z0-9-]+)").unwrap());

/// Reason a line pair was dropped during extraction.
///
/// Structural skips are expected control flow, logged and excluded from the
/// candidate list rather than raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    #[error("empty title line")]
    EmptyTitleLine,

    #[error("no URL found")]
    NoUrl,

    #[error("invalid URL")]
    InvalidUrl,

    #[error("invalid title")]
    InvalidTitle,
}

/// Partially-built entry, before category resolution and tag derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedEntry {
    pub title: String,
    pub url: String,
    pub description: String,
    /// Slug captured from a `#category:` marker, passed through verbatim.
    pub category_override: Option<String>,
}

/// Parse one line pair into an entry candidate.
///
/// Guarantees on success: `url` parses as an absolute URL and `title` is at
/// least 2 characters after trimming.
pub fn extract_entry(title_line: &str, description_line: &str) -> Result<ExtractedEntry, SkipReason> {
    let title_line = title_line.trim();
    if title_line.is_empty() {
        return Err(SkipReason::EmptyTitleLine);
    }

    let mut description = description_line.trim().to_string();
    let mut category_override = None;
    if let Some(caps) = CATEGORY_OVERRIDE_RE.captures(&description) {
        category_override = Some(caps[1].to_string());
        description = CATEGORY_OVERRIDE_RE.replace(&description, "").trim().to_string();
    }

    let (mut title, url) = match TITLE_URL_RE.captures(title_line) {
        Some(caps) => (caps[1].trim().to_string(), caps[2].trim().to_string()),
        None => {
            let token = URL_TOKEN_RE.find(title_line).ok_or(SkipReason::NoUrl)?;
            let prefix = &title_line[..token.start()];
            let title = prefix
                .trim_end_matches(|c: char| c == '-' || c.is_whitespace())
                .trim()
                .to_string();
            (title, token.as_str().to_string())
        }
    };

    let parsed = Url::parse(&url).map_err(|_| SkipReason::InvalidUrl)?;

    // An empty title (nothing before the separator or the URL token) falls
    // back to the URL host.
    if title.is_empty() {
        title = title_from_host(&parsed);
    }
    if title.trim().len() < 2 {
        return Err(SkipReason::InvalidTitle);
    }

    Ok(ExtractedEntry { title, url, description, category_override })
}

/// Derive a display title from the URL host: strip a leading `www.` and
/// capitalize the first letter. `"Untitled"` when no host is available.
fn title_from_host(url: &Url) -> String {
    match url.host_str() {
        Some(host) => {
            let host = host.strip_prefix("www.").unwrap_or(host);
            let mut chars = host.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => "Untitled".to_string(),
            }
        }
        None => "Untitled".to_string(),
    }
}
