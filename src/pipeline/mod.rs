// src/pipeline/mod.rs
pub mod fetcher;
pub mod types;

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::dataset::TrainingRecord;
use crate::extract;
use crate::pipeline::types::PageSource;

/// Fetch every record's URL and attach extracted page text.
///
/// Transport failures drop the record with a skip notice; non-success
/// statuses drop it silently. Survivors keep their input order. A duplicate
/// URL is warned about but still processed — both occurrences appear in the
/// output when both fetches succeed.
pub async fn process_records(
    records: Vec<TrainingRecord>,
    source: &dyn PageSource,
) -> Vec<TrainingRecord> {
    let mut processed = Vec::with_capacity(records.len());
    let mut seen_urls: HashSet<String> = HashSet::new();

    for mut record in records {
        let url = record.url.trim().to_string();

        if !seen_urls.insert(url.clone()) {
            warn!(%url, "duplicate url");
        }

        let response = match source.fetch(&url).await {
            Ok(r) => r,
            Err(e) => {
                warn!(%url, error = %e, "skipping url which returned an error");
                continue;
            }
        };

        if !response.ok() {
            debug!(%url, status = response.status, "dropping non-success response");
            continue;
        }

        record.text = Some(extract::preprocess_html(&response.body));
        processed.push(record);
    }

    processed
}
