//! Keyword-based category classification.

/// Ordered classification table: `(slug, keywords)` evaluated first-match-wins
/// over the lowercased url, title, and description.
///
/// Order matters because some keywords overlap ("comic" vs "anime" vs "game").
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("manga-readers", &["manga", "manhwa", "manhua", "comic"]),
    ("anime", &["anime", "animelist"]),
    ("visual-novels", &["novel", "fiction"]),
    ("ai-tools", &["ai", "chatgpt", "openai"]),
    ("dev-tools", &["github", "git"]),
    ("productivity", &["notion", "productivity"]),
    ("streaming", &["netflix", "stream"]),
    ("games", &["game"]),
    ("social", &["discord", "social"]),
    ("music", &["spotify", "music"]),
    ("search-engines", &["search"]),
    ("databases", &["database"]),
    ("privacy-tools", &["privacy", "vpn"]),
    ("forum", &["forum"]),
    ("statistics", &["stat", "analytic"]),
    ("art", &["art", "design"]),
    ("asian-drama", &["drama"]),
];

/// Slug assigned when no keyword group matches.
pub const DEFAULT_CATEGORY: &str = "manga-readers";

/// Assign a category slug from entry content.
///
/// Pure function of (url, title, description); an explicit `#category:`
/// override is handled by the caller and never reaches this table.
pub fn resolve_category(url: &str, title: &str, description: &str) -> &'static str {
    let url = url.to_lowercase();
    let title = title.to_lowercase();
    let description = description.to_lowercase();

    for (slug, keywords) in CATEGORY_KEYWORDS {
        let hit = keywords
            .iter()
            .any(|kw| url.contains(kw) || title.contains(kw) || description.contains(kw));
        if hit {
            return slug;
        }
    }

    DEFAULT_CATEGORY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manga_keyword_in_description() {
        assert_eq!(
            resolve_category("https://mangadex.org", "MangaDex", "A fan-driven manga platform."),
            "manga-readers"
        );
    }

    #[test]
    fn test_keyword_in_url_only() {
        assert_eq!(resolve_category("https://notion.so", "Workspace", "Notes and docs."), "productivity");
    }

    #[test]
    fn test_comic_outranks_anime() {
        // "comic" sits in the manga-readers group, which is evaluated first.
        assert_eq!(resolve_category("https://site.example", "Anime comic hub", ""), "manga-readers");
    }

    #[test]
    fn test_stream_outranks_game() {
        assert_eq!(resolve_category("https://site.example", "Game streams", ""), "streaming");
    }

    #[test]
    fn test_default_when_nothing_matches() {
        assert_eq!(resolve_category("https://zzz.example", "Plain", "Nothing here."), DEFAULT_CATEGORY);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let first = resolve_category("https://vndb.org", "Visual Novel Reader", "Database of visual novels.");
        let second = resolve_category("https://vndb.org", "Visual Novel Reader", "Database of visual novels.");
        assert_eq!(first, second);
        assert_eq!(first, "visual-novels");
    }

    #[test]
    fn test_all_table_slugs_are_distinct() {
        let mut slugs: Vec<_> = CATEGORY_KEYWORDS.iter().map(|(slug, _)| *slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), CATEGORY_KEYWORDS.len());
    }
}
