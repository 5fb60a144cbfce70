//! Bulk-import text parser.
//!
//! Converts loosely-formatted pasted text into catalog entry candidates.
//! Each entry is two consecutive non-empty lines:
//!
//! ```text
//! <Title> - <URL>
//! <Description> [#category:<slug>]
//! ```
//!
//! The pipeline runs as a pure, synchronous, single pass: line pairing →
//! entry extraction → category resolution → tag derivation. Malformed pairs
//! are dropped with a logged reason; nothing in here performs I/O.

pub mod category;
pub mod extract;
pub mod pairs;
pub mod tags;

pub use category::{CATEGORY_KEYWORDS, DEFAULT_CATEGORY, resolve_category};
pub use extract::{ExtractedEntry, SkipReason, extract_entry};
pub use pairs::pair_lines;
pub use tags::{MAX_TAGS, derive_tags};

use chrono::Local;

use crate::model::NewWebsite;

/// Rating assigned to every parsed candidate.
pub const DEFAULT_RATING: f32 = 4.5;

/// Parse one bulk-import submission into catalog entry candidates.
///
/// Structural problems (odd trailing line, missing URL, short title, invalid
/// URL) skip the affected entry and never abort the batch. An explicit
/// `#category:` override wins over keyword classification and is passed
/// through without validation against the live category list.
pub fn parse_bulk(input: &str) -> Vec<NewWebsite> {
    let today = Local::now().date_naive();
    let mut candidates = Vec::new();

    for (title_line, description_line) in pair_lines(input) {
        let entry = match extract_entry(&title_line, &description_line) {
            Ok(entry) => entry,
            Err(reason) => {
                tracing::debug!(%reason, line = %title_line, "skipping bulk-import entry");
                continue;
            }
        };

        let category = match entry.category_override {
            Some(slug) => slug,
            None => resolve_category(&entry.url, &entry.title, &entry.description).to_string(),
        };
        let tags = derive_tags(&entry.title, &entry.url);

        candidates.push(NewWebsite {
            title: entry.title,
            description: entry.description,
            url: entry.url,
            icon: None,
            category,
            tags,
            featured: false,
            popular: false,
            clicks: 0,
            rating: DEFAULT_RATING,
            date_added: today,
            last_updated: today,
        });
    }

    candidates
}
