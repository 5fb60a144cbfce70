//! Static seed dataset.
//!
//! Used to populate the in-memory fallback store when the remote catalog
//! store is unreachable or unconfigured.

use chrono::NaiveDate;

use super::{Category, Website};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn category(id: &str, name: &str, slug: &str, description: &str, icon: &str, count: i64) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        slug: slug.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        count,
    }
}

/// The built-in category definitions.
pub fn seed_categories() -> Vec<Category> {
    vec![
        category("1", "AI Tools", "ai-tools", "Artificial intelligence powered applications", "Brain", 45),
        category("2", "Dev Tools", "dev-tools", "Developer productivity and coding tools", "Code2", 38),
        category("3", "Productivity", "productivity", "Tools to boost your productivity", "Zap", 52),
        category("4", "Streaming", "streaming", "Video and audio streaming platforms", "Play", 23),
        category("5", "Games", "games", "Online gaming and entertainment", "Gamepad2", 31),
        category("6", "Social", "social", "Social networking and communication", "Users", 19),
        category("7", "Music", "music", "Music streaming and audio tools", "Music", 27),
        category("8", "Search Engines", "search-engines", "Alternative search platforms", "Search", 12),
        category("9", "Visual Novels", "visual-novels", "Interactive story games", "BookOpen", 16),
        category("10", "Manga Readers", "manga-readers", "Digital manga reading platforms", "Book", 14),
        category("11", "Databases", "databases", "Data storage and management tools", "Database", 22),
        category("12", "Privacy Tools", "privacy-tools", "Security and privacy applications", "Shield", 18),
        category("13", "Forum", "forum", "Discussion and community platforms", "MessageSquare", 13),
        category("14", "Statistics", "statistics", "Analytics and data visualization", "BarChart3", 15),
        category("15", "Art", "art", "Digital art and creative tools", "Palette", 29),
        category("16", "Asian Drama", "asian-drama", "Asian television and drama streaming", "Tv", 11),
        category("17", "Anime", "anime", "Anime streaming platforms and resources", "Film", 12),
    ]
}

struct SeedSite {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    url: &'static str,
    category: &'static str,
    tags: &'static [&'static str],
    featured: bool,
    popular: bool,
    clicks: u32,
}

const SEED_SITES: &[SeedSite] = &[
    SeedSite {
        id: "s-1",
        title: "ChatGPT",
        description: "Advanced conversational AI assistant for various tasks and creative projects.",
        url: "https://chat.openai.com",
        category: "ai-tools",
        tags: &["AI", "Free"],
        featured: true,
        popular: true,
        clicks: 1240,
    },
    SeedSite {
        id: "s-2",
        title: "GitHub",
        description: "World's leading software development platform and version control system.",
        url: "https://github.com",
        category: "dev-tools",
        tags: &["Code", "Free"],
        featured: true,
        popular: true,
        clicks: 980,
    },
    SeedSite {
        id: "s-3",
        title: "Notion",
        description: "All-in-one workspace for notes, docs, projects and collaboration.",
        url: "https://notion.so",
        category: "productivity",
        tags: &["Productivity", "Free"],
        featured: false,
        popular: true,
        clicks: 610,
    },
    SeedSite {
        id: "s-4",
        title: "MangaDex",
        description: "A fan-driven platform hosting manga scans in multiple languages.",
        url: "https://mangadex.org",
        category: "manga-readers",
        tags: &["Manga", "Fan", "Free", "Reader"],
        featured: true,
        popular: false,
        clicks: 430,
    },
    SeedSite {
        id: "s-5",
        title: "MyAnimeList",
        description: "Anime and manga database and community platform.",
        url: "https://myanimelist.net",
        category: "anime",
        tags: &["Anime", "Community", "Free"],
        featured: false,
        popular: true,
        clicks: 520,
    },
    SeedSite {
        id: "s-6",
        title: "Spotify",
        description: "Music streaming platform with millions of songs and podcasts.",
        url: "https://spotify.com",
        category: "music",
        tags: &["Music", "Streaming"],
        featured: false,
        popular: true,
        clicks: 770,
    },
    SeedSite {
        id: "s-7",
        title: "Discord",
        description: "Voice, video, and text communication platform for communities.",
        url: "https://discord.com",
        category: "social",
        tags: &["Social", "Community", "Free"],
        featured: false,
        popular: false,
        clicks: 350,
    },
    SeedSite {
        id: "s-8",
        title: "ComicK",
        description: "A free manga and manhwa reader with community-uploaded translations.",
        url: "https://comick.app",
        category: "manga-readers",
        tags: &["Manga", "Manhwa", "Free", "Reader"],
        featured: false,
        popular: false,
        clicks: 210,
    },
];

/// A small set of seed listings for static data mode.
pub fn seed_websites() -> Vec<Website> {
    let added = ymd(2025, 11, 3);
    let updated = ymd(2026, 2, 17);
    SEED_SITES
        .iter()
        .map(|s| Website {
            id: s.id.to_string(),
            title: s.title.to_string(),
            description: s.description.to_string(),
            url: s.url.to_string(),
            icon: None,
            category: s.category.to_string(),
            tags: s.tags.iter().map(|t| t.to_string()).collect(),
            featured: s.featured,
            popular: s.popular,
            clicks: s.clicks,
            rating: 4.5,
            date_added: added,
            last_updated: updated,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_category_slugs_unique() {
        let categories = seed_categories();
        assert_eq!(categories.len(), 17);
        let mut slugs: Vec<_> = categories.iter().map(|c| c.slug.as_str()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), 17);
    }

    #[test]
    fn test_seed_websites_reference_seed_categories() {
        let categories = seed_categories();
        for site in seed_websites() {
            assert!(
                categories.iter().any(|c| c.slug == site.category),
                "unknown category {} for {}",
                site.category,
                site.title
            );
        }
    }

    #[test]
    fn test_seed_website_ids_unique() {
        let sites = seed_websites();
        let mut ids: Vec<_> = sites.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), sites.len());
    }
}
