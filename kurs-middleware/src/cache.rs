use std::sync::Arc;

use async_trait::async_trait;
use kurs_core::{KursError, PageSource, SourceLayer};
use kurs_types::CacheConfig;
use moka::future::Cache;

/// Page source that remembers successful fetches by URL.
///
/// The URL carries every parameter of a call, so it is the whole cache key.
/// Failures are never stored. The cache lives and dies with this value.
pub struct CachedSource {
    inner: Arc<dyn PageSource>,
    pages: Cache<String, String>,
}

impl CachedSource {
    /// Wrap `inner` with a cache sized and timed by `cfg`.
    pub fn new(inner: Arc<dyn PageSource>, cfg: &CacheConfig) -> Self {
        let pages = Cache::builder()
            .max_capacity(cfg.capacity)
            .time_to_live(cfg.ttl)
            .build();
        Self { inner, pages }
    }

    /// Access the wrapped source.
    pub fn inner(&self) -> &Arc<dyn PageSource> {
        &self.inner
    }

    /// Drop every cached page.
    pub fn clear(&self) {
        self.pages.invalidate_all();
    }
}

#[async_trait]
impl PageSource for CachedSource {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn fetch(&self, url: &str) -> Result<String, KursError> {
        if let Some(hit) = self.pages.get(url).await {
            #[cfg(feature = "tracing")]
            tracing::debug!(url, source = self.inner.name(), "page cache hit");
            return Ok(hit);
        }
        let body = self.inner.fetch(url).await?;
        self.pages.insert(url.to_string(), body.clone()).await;
        Ok(body)
    }
}

pub(crate) struct CacheLayer {
    cfg: CacheConfig,
}

impl CacheLayer {
    pub(crate) const fn new(cfg: CacheConfig) -> Self {
        Self { cfg }
    }
}

impl SourceLayer for CacheLayer {
    fn apply(self: Box<Self>, inner: Arc<dyn PageSource>) -> Arc<dyn PageSource> {
        Arc::new(CachedSource::new(inner, &self.cfg))
    }

    fn name(&self) -> &'static str {
        "CachedSource"
    }
}
