// src/dataset.rs
//! Training-set records and their JSON load/serialize.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One training example: a labeled URL, plus extracted page text once the
/// fetch has succeeded. Identity is the URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrainingRecord {
    pub url: String,
    #[serde(default)]
    pub topics: Vec<String>,
    /// Absent until the pipeline attaches it; never serialized while empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Read a JSON array of records from `path`.
/// A malformed document is a fatal startup failure, not a per-record skip.
pub fn load_records(path: &Path) -> Result<Vec<TrainingRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading training set from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("parsing training set from {}", path.display()))
}

/// Serialize records as indented JSON.
pub fn to_json_pretty(records: &[TrainingRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).context("serializing training set")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topics_default_to_empty() {
        let rec: TrainingRecord = serde_json::from_str(r#"{"url":"http://a"}"#).unwrap();
        assert_eq!(rec.url, "http://a");
        assert!(rec.topics.is_empty());
        assert!(rec.text.is_none());
    }

    #[test]
    fn text_is_skipped_until_attached() {
        let rec = TrainingRecord {
            url: "http://a".into(),
            topics: vec!["x".into()],
            text: None,
        };
        let json = serde_json::to_string(&rec).unwrap();
        assert!(!json.contains("text"));

        let with_text = TrainingRecord {
            text: Some("page body".into()),
            ..rec
        };
        let json = serde_json::to_string(&with_text).unwrap();
        assert!(json.contains(r#""text":"page body""#));
    }
}
