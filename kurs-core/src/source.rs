//! The seam between site clients and whatever produces page text.

use std::sync::Arc;

use async_trait::async_trait;
use kurs_types::KursError;

/// Something that turns a URL into the text of a page.
///
/// The static HTTP client implements this, and so does any renderer the caller
/// supplies for pages that need script execution. Middleware (caching) wraps
/// it without the site clients noticing.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Fetch the page text at `url`.
    ///
    /// # Errors
    /// Returns `FetchFailed` when the page cannot be retrieved.
    async fn fetch(&self, url: &str) -> Result<String, KursError>;
}

impl dyn PageSource {
    /// Build a `PageSource` from a synchronous closure.
    ///
    /// Handy for renderers backed by a pre-rendered snapshot and for tests.
    pub fn from_fn<F>(name: &'static str, f: F) -> Arc<dyn PageSource>
    where
        F: Send + Sync + 'static + Fn(&str) -> Result<String, KursError>,
    {
        struct FnSource<F> {
            name: &'static str,
            f: F,
        }

        #[async_trait]
        impl<F> PageSource for FnSource<F>
        where
            F: Send + Sync + 'static + Fn(&str) -> Result<String, KursError>,
        {
            fn name(&self) -> &'static str {
                self.name
            }

            async fn fetch(&self, url: &str) -> Result<String, KursError> {
                (self.f)(url)
            }
        }

        Arc::new(FnSource { name, f })
    }
}

/// A wrapper that can be layered around a [`PageSource`].
pub trait SourceLayer: Send + Sync {
    /// Wrap `inner` and return the wrapped source.
    fn apply(self: Box<Self>, inner: Arc<dyn PageSource>) -> Arc<dyn PageSource>;

    /// Layer name for introspection and logging.
    fn name(&self) -> &'static str;
}
