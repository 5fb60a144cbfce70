//! Tag derivation from entry title and URL.

/// Maximum number of tags kept per entry.
pub const MAX_TAGS: usize = 10;

/// Keyword → tag vocabulary checked against the lowercased title.
///
/// The "novel" row is special-cased in [`derive_tags`] so that "light novel"
/// titles get the Light Novel tag instead of the plain Novel tag.
const TITLE_TAGS: &[(&str, &str)] = &[
    ("manga", "Manga"),
    ("manhwa", "Manhwa"),
    ("manhua", "Manhua"),
    ("webtoon", "Webtoon"),
    ("comic", "Comic"),
    ("novel", "Novel"),
    ("ai", "AI"),
    ("tool", "Tool"),
    ("productivity", "Productivity"),
    ("stream", "Streaming"),
    ("game", "Game"),
    ("social", "Social"),
    ("music", "Music"),
    ("search", "Search"),
    ("database", "Database"),
    ("privacy", "Privacy"),
    ("forum", "Forum"),
    ("stat", "Statistics"),
    ("art", "Art"),
    ("drama", "Drama"),
    ("anime", "Anime"),
];

/// Keyword groups → tag checked against the lowercased URL.
const URL_TAGS: &[(&[&str], &str)] = &[
    (&["raw"], "Raw"),
    (&["scan", "tl"], "Scanlation"),
    (&["fan"], "Fan"),
    (&["free"], "Free"),
    (&["reader"], "Reader"),
    (&["community"], "Community"),
];

/// Tags every entry receives regardless of content.
const BASELINE_TAGS: &[&str] = &["Free", "Reader"];

/// Derive a deduplicated tag list, capped at [`MAX_TAGS`], preserving
/// first-seen order.
pub fn derive_tags(title: &str, url: &str) -> Vec<String> {
    let title = title.to_lowercase();
    let url = url.to_lowercase();

    let mut tags: Vec<&str> = Vec::new();
    for (keyword, tag) in TITLE_TAGS {
        if *keyword == "novel" {
            if title.contains("light novel") {
                tags.push("Light Novel");
            } else if title.contains("novel") {
                tags.push("Novel");
            }
        } else if title.contains(keyword) {
            tags.push(tag);
        }
    }

    for (keywords, tag) in URL_TAGS {
        if keywords.iter().any(|kw| url.contains(kw)) {
            tags.push(tag);
        }
    }

    tags.extend_from_slice(BASELINE_TAGS);

    let mut unique: Vec<&str> = Vec::new();
    for tag in tags {
        if !unique.contains(&tag) {
            unique.push(tag);
        }
    }
    unique.truncate(MAX_TAGS);
    unique.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_tags_always_present() {
        let tags = derive_tags("Example", "https://example.com");
        assert!(tags.contains(&"Free".to_string()));
        assert!(tags.contains(&"Reader".to_string()));
    }

    #[test]
    fn test_title_keywords() {
        let tags = derive_tags("Manga Stream Hub", "https://example.com");
        assert!(tags.contains(&"Manga".to_string()));
        assert!(tags.contains(&"Streaming".to_string()));
    }

    #[test]
    fn test_light_novel_suppresses_plain_novel() {
        let tags = derive_tags("Light Novel World", "https://example.com");
        assert!(tags.contains(&"Light Novel".to_string()));
        assert!(!tags.contains(&"Novel".to_string()));
    }

    #[test]
    fn test_plain_novel() {
        let tags = derive_tags("Novel Updates", "https://example.com");
        assert!(tags.contains(&"Novel".to_string()));
        assert!(!tags.contains(&"Light Novel".to_string()));
    }

    #[test]
    fn test_url_keywords() {
        let tags = derive_tags("Example", "https://fanscans.example/reader");
        assert!(tags.contains(&"Scanlation".to_string()));
        assert!(tags.contains(&"Fan".to_string()));
        assert!(tags.contains(&"Reader".to_string()));
    }

    #[test]
    fn test_no_duplicates() {
        // "Reader" would be pushed by both the URL check and the baseline.
        let tags = derive_tags("Free Manga Reader", "https://freereader.example");
        let mut sorted = tags.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), tags.len());
    }

    #[test]
    fn test_capped_at_max() {
        let tags = derive_tags(
            "Manga Manhwa Manhua Webtoon Comic Novel AI Tool Productivity Stream Game Social Music",
            "https://raw-fan-scan-free-reader-community.example",
        );
        assert_eq!(tags.len(), MAX_TAGS);
    }

    #[test]
    fn test_first_seen_order_preserved() {
        let tags = derive_tags("Manga Game", "https://example.com");
        let manga = tags.iter().position(|t| t == "Manga").unwrap();
        let game = tags.iter().position(|t| t == "Game").unwrap();
        assert!(manga < game);
    }
}
