//! Builder for composing a page source with layered wrappers.
//!
//! Layers are stored outermost-first (`layers[0]` sees a request first) and
//! applied in reverse during `build()`:
//!
//! ```text
//! builder.with_cache(..)
//!
//! Storage: [Cache]
//! Result:  Cache(Raw)
//! ```

use std::sync::Arc;

use kurs_core::{PageSource, SourceLayer};
use kurs_types::CacheConfig;

use crate::cache::CacheLayer;

const CACHE: &str = "CachedSource";

/// Composes a raw page source with middleware layers.
pub struct SourceBuilder {
    raw: Arc<dyn PageSource>,
    layers: Vec<Box<dyn SourceLayer>>,
}

impl SourceBuilder {
    /// Start from a raw, unwrapped source.
    #[must_use]
    pub fn new(raw: Arc<dyn PageSource>) -> Self {
        Self {
            raw,
            layers: Vec::new(),
        }
    }

    /// Add or replace the page cache.
    ///
    /// The cache becomes the outermost layer so hits never reach the network.
    /// A disabled configuration (zero TTL or capacity) removes it instead.
    #[must_use]
    pub fn with_cache(mut self, cfg: &CacheConfig) -> Self {
        self.layers.retain(|l| l.name() != CACHE);
        if cfg.is_enabled() {
            self.layers.insert(0, Box::new(CacheLayer::new(cfg.clone())));
        }
        self
    }

    /// Remove the page cache if present.
    #[must_use]
    pub fn without_cache(mut self) -> Self {
        self.layers.retain(|l| l.name() != CACHE);
        self
    }

    /// Add a custom layer at the outermost position.
    #[must_use]
    pub fn with_layer(mut self, layer: Box<dyn SourceLayer>) -> Self {
        self.layers.insert(0, layer);
        self
    }

    /// Layer names, outermost first.
    #[must_use]
    pub fn layer_names(&self) -> Vec<&'static str> {
        self.layers.iter().map(|l| l.name()).collect()
    }

    /// Apply the layers innermost-first and return the composed source.
    #[must_use]
    pub fn build(self) -> Arc<dyn PageSource> {
        self.layers
            .into_iter()
            .rev()
            .fold(self.raw, |inner, layer| layer.apply(inner))
    }
}
