// src/pipeline/fetcher.rs
//! Reqwest-backed page source with the persistent response cache in front.

use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use crate::cache::{CachedResponse, UrlCache};
use crate::config::PipelineConfig;
use crate::pipeline::types::{PageResponse, PageSource};

/// HTTP client plus the URL-keyed cache, constructed once per run and passed
/// down explicitly. Completed responses are cached whatever their status;
/// transport failures are not, so they will be retried on the next run.
pub struct CachedPageSource {
    client: reqwest::Client,
    cache: Mutex<UrlCache>,
}

impl CachedPageSource {
    pub fn new(config: &PipelineConfig, cache: UrlCache) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .context("building http client")?;

        Ok(Self {
            client,
            cache: Mutex::new(cache),
        })
    }
}

#[async_trait]
impl PageSource for CachedPageSource {
    async fn fetch(&self, url: &str) -> Result<PageResponse> {
        let hit = self
            .cache
            .lock()
            .expect("cache mutex poisoned")
            .get(url)
            .cloned();
        if let Some(cached) = hit {
            debug!(%url, "response cache hit");
            return Ok(PageResponse {
                status: cached.status,
                body: cached.body,
            });
        }

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("fetching {url}"))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .with_context(|| format!("reading body of {url}"))?;

        let fetched_at = chrono::Utc::now().timestamp().max(0) as u64;
        self.cache.lock().expect("cache mutex poisoned").insert(
            url,
            CachedResponse {
                status,
                body: body.clone(),
                fetched_at,
            },
        );

        Ok(PageResponse { status, body })
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
