//! Bulk-import batch driver.
//!
//! Runs the parsing pipeline over one pasted submission, then persists the
//! candidates through a [`CatalogStore`] one at a time. A failed add is
//! recorded and the batch moves on; one bad entry never aborts the rest.

use serde::Serialize;

use linkdex_core::import::parse_bulk;

use crate::store::{CatalogStore, StoreError};

/// Number of error messages shown in full; the rest are summarized by count.
pub const MAX_DISPLAYED_ERRORS: usize = 5;

const EMPTY_INPUT_MSG: &str = "Please enter website data to import";

const NO_VALID_WEBSITES_MSG: &str = "No valid websites found in the provided data. Please check the format. \
     Make sure each website is represented by exactly two lines: Title - URL on the first line, \
     and Description on the second line.";

/// Outcome of one bulk-import submission.
///
/// Both counts are always reported, even when nothing succeeded; partial
/// success is an expected, user-visible outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkReport {
    pub success_count: u32,
    pub failed_count: u32,
    pub errors: Vec<String>,
}

impl BulkReport {
    fn batch_failure(message: &str) -> Self {
        Self { success_count: 0, failed_count: 0, errors: vec![message.to_string()] }
    }

    /// Errors to display: at most [`MAX_DISPLAYED_ERRORS`] messages plus the
    /// count of any remainder.
    pub fn display_errors(&self) -> (&[String], usize) {
        let shown = self.errors.len().min(MAX_DISPLAYED_ERRORS);
        (&self.errors[..shown], self.errors.len() - shown)
    }
}

/// Parse a bulk submission and persist every candidate through the store.
///
/// Entries are written sequentially, one in-flight add at a time, which keeps
/// per-entry error attribution unambiguous and bounds load on the store. No
/// retries; a failed add is recorded and the batch continues.
pub async fn bulk_import<S: CatalogStore + ?Sized>(store: &S, input: &str) -> BulkReport {
    if input.trim().is_empty() {
        return BulkReport::batch_failure(EMPTY_INPUT_MSG);
    }

    let candidates = parse_bulk(input);
    if candidates.is_empty() {
        return BulkReport::batch_failure(NO_VALID_WEBSITES_MSG);
    }

    let total = candidates.len();
    let mut report = BulkReport::default();

    for website in candidates {
        let title = website.title.clone();
        match store.add_website(website).await {
            Ok(created) => {
                tracing::info!(title = %created.title, category = %created.category, "imported listing");
                report.success_count += 1;
            }
            Err(StoreError::Duplicate) => {
                report.failed_count += 1;
                report.errors.push(format!("\"{title}\" already exists in the database"));
            }
            Err(err) => {
                report.failed_count += 1;
                report.errors.push(format!("Failed to add \"{title}\": {err}"));
            }
        }
    }

    tracing::info!(
        total,
        success = report.success_count,
        failed = report.failed_count,
        "bulk import finished"
    );
    report
}
