// tests/pipeline_loop.rs
use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use trainset_builder::pipeline::process_records;
use trainset_builder::report;
use trainset_builder::{PageResponse, PageSource, TrainingRecord};

struct MockSource {
    pages: HashMap<String, PageResponse>,
    calls: Mutex<Vec<String>>,
}

impl MockSource {
    fn new(pages: &[(&str, u16, &str)]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|(url, status, body)| {
                    (
                        url.to_string(),
                        PageResponse {
                            status: *status,
                            body: body.to_string(),
                        },
                    )
                })
                .collect(),
            calls: Mutex::new(vec![]),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageSource for MockSource {
    async fn fetch(&self, url: &str) -> Result<PageResponse> {
        self.calls.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow!("connection refused: {url}"))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

fn rec(url: &str, topics: &[&str]) -> TrainingRecord {
    TrainingRecord {
        url: url.into(),
        topics: topics.iter().map(|t| t.to_string()).collect(),
        text: None,
    }
}

#[tokio::test]
async fn failed_fetches_shrink_the_output() {
    let source = MockSource::new(&[
        ("http://a", 200, "<main>a page</main>"),
        ("http://c", 200, "<main>c page</main>"),
    ]);
    let input = vec![
        rec("http://a", &["x"]),
        rec("http://b", &["y"]), // transport failure
        rec("http://c", &[]),
    ];
    let input_len = input.len();

    let out = process_records(input, &source).await;
    assert_eq!(out.len(), input_len - 1);
    assert_eq!(out[0].url, "http://a");
    assert_eq!(out[1].url, "http://c");
}

#[tokio::test]
async fn non_success_status_is_dropped_silently() {
    let source = MockSource::new(&[
        ("http://ok", 200, "<main>fine</main>"),
        ("http://gone", 404, "<main>not here</main>"),
        ("http://err", 500, "<main>broken</main>"),
    ]);
    let input = vec![
        rec("http://ok", &[]),
        rec("http://gone", &[]),
        rec("http://err", &[]),
    ];

    let out = process_records(input, &source).await;
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].text.as_deref(), Some("fine"));
}

#[tokio::test]
async fn duplicates_are_fetched_twice_and_both_survive() {
    // Same URL twice with different labels; both fetches succeed.
    let source = MockSource::new(&[("http://a", 200, "<main>shared page</main>")]);
    let input = vec![rec("http://a", &["x"]), rec("http://a", &["y"])];

    let out = process_records(input, &source).await;
    assert_eq!(out.len(), 2);
    assert_eq!(source.calls(), vec!["http://a", "http://a"]);

    let tally = report::topic_tally(&out);
    assert_eq!(tally.get("x"), Some(&1));
    assert_eq!(tally.get("y"), Some(&1));
}

#[tokio::test]
async fn urls_are_trimmed_before_use() {
    let source = MockSource::new(&[("http://a", 200, "<main>a page</main>")]);
    let input = vec![rec("  http://a \n", &[])];

    let out = process_records(input, &source).await;
    assert_eq!(source.calls(), vec!["http://a"]);
    assert_eq!(out.len(), 1);
    // The record itself keeps whatever the input document said.
    assert_eq!(out[0].url, "  http://a \n");
}

#[tokio::test]
async fn text_is_attached_normalized_and_lowercase() {
    let source = MockSource::new(&[(
        "http://a",
        200,
        "<html><body><nav>Menu</nav><main>Some CONTENT, here!</main></body></html>",
    )]);

    let out = process_records(vec![rec("http://a", &["x"])], &source).await;
    assert_eq!(out[0].text.as_deref(), Some("some content here"));
    assert_eq!(out[0].topics, vec!["x".to_string()]);
}
