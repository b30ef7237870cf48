// src/report.rs
//! Topic frequency report for the processed training set. Informational
//! only; nothing downstream consumes it.

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::dataset::TrainingRecord;

/// Tally key for records carrying no topic labels.
pub const NO_TOPIC: &str = "notopic";

const TOP_TOPICS: usize = 10;

/// Count topic occurrences; an empty topic list counts once under `notopic`.
pub fn topic_tally(records: &[TrainingRecord]) -> HashMap<String, usize> {
    let mut tally: HashMap<String, usize> = HashMap::new();
    for record in records {
        if record.topics.is_empty() {
            *tally.entry(NO_TOPIC.to_string()).or_insert(0) += 1;
        }
        for topic in &record.topics {
            *tally.entry(topic.clone()).or_insert(0) += 1;
        }
    }
    tally
}

/// Most frequent topics, count-descending; ties break on topic name so the
/// report is stable between runs.
pub fn most_common(tally: &HashMap<String, usize>, n: usize) -> Vec<(String, usize)> {
    let mut items: Vec<(String, usize)> = tally.iter().map(|(k, v)| (k.clone(), *v)).collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    items.truncate(n);
    items
}

/// Render the details block printed after processing.
pub fn render_report(records: &[TrainingRecord]) -> String {
    let tally = topic_tally(records);

    let mut out = String::new();
    out.push_str("Training Set Details\n");
    out.push_str(&"=".repeat(80));
    out.push('\n');
    let _ = writeln!(out, "Total Training Set Items:\t\t{}", records.len());
    for (topic, count) in most_common(&tally, TOP_TOPICS) {
        let _ = writeln!(out, "Training Set Items for '{topic}':\t{count}");
    }
    out
}
