// src/pipeline/types.rs
use anyhow::Result;

/// Raw outcome of fetching one URL. Transport failures surface as `Err` from
/// the source; HTTP-level failures are a delivered response with a bad status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResponse {
    pub status: u16,
    pub body: String,
}

impl PageResponse {
    /// Anything below 400 counts as usable; redirects are already resolved
    /// by the client, so 3xx here is a terminal answer.
    pub fn ok(&self) -> bool {
        self.status < 400
    }
}

#[async_trait::async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<PageResponse>;
    fn name(&self) -> &'static str;
}
