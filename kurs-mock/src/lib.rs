//! kurs-mock
//!
//! A [`PageSource`] that answers from static fixture pages instead of the
//! network. Point the site clients at [`MOCK_ROOT`] (see
//! [`Endpoints::all_at`](kurs_core::Endpoints::all_at)) and every request is
//! routed by site and symbol to a fixture.
//!
//! Symbols with special behavior:
//! - `AAPL` (and ISIN `IE00B4L5Y983`): complete fixture pages for every site.
//! - `EMPTY`: pages whose anchors are present but hold no rows.
//! - `BARE`: a blank page, so every anchor is missing.
//! - `FAIL`: the fetch fails with HTTP 500.
//!
//! Anything else is answered with HTTP 404.
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use kurs_core::{KursError, PageSource};

mod fixtures;

pub use fixtures::{BLANK_PAGE, ETF_ISIN, STOCK};

/// Root URL the fixtures are routed under.
pub const MOCK_ROOT: &str = "https://mock.kurs.test";

/// Fixture page for `url`, as [`MockSource`] would serve it.
///
/// Useful for seeding an HTTP-level mock server with realistic bodies.
///
/// # Errors
/// Returns `FetchFailed` (404 or 500) exactly where [`MockSource`] would.
pub fn page(url: &str) -> Result<String, KursError> {
    fixtures::route(url)
}

/// Instruction for how a specific URL should be answered.
#[derive(Clone)]
pub enum MockBehavior {
    /// Serve this page text.
    Page(String),
    /// Fail with this error.
    Fail(KursError),
}

/// Mock page source for CI-safe tests. Answers deterministically from fixtures.
pub struct MockSource {
    name: &'static str,
    overrides: HashMap<String, MockBehavior>,
    calls: AtomicUsize,
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// Source serving the built-in fixtures.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: "kurs-mock",
            overrides: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Same fixtures, reported under another name (e.g. `"renderer"`).
    #[must_use]
    pub fn named(name: &'static str) -> Self {
        Self {
            name,
            ..Self::new()
        }
    }

    /// Answer `url` (matched exactly) with `behavior` instead of the fixtures.
    #[must_use]
    pub fn with_override(mut self, url: impl Into<String>, behavior: MockBehavior) -> Self {
        self.overrides.insert(url.into(), behavior);
        self
    }

    /// Number of fetches served so far, failures included.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageSource for MockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch(&self, url: &str) -> Result<String, KursError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.overrides.get(url) {
            Some(MockBehavior::Page(body)) => Ok(body.clone()),
            Some(MockBehavior::Fail(e)) => Err(e.clone()),
            None => fixtures::route(url),
        }
    }
}
