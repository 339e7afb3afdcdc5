//! HTTP fetch helper with fixed browser headers and 429 retries.

use std::future::Future;

use async_trait::async_trait;
use kurs_types::{HttpConfig, KursError};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, REFERER, USER_AGENT};

use crate::source::PageSource;

/// Status and body of a single HTTP attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl RawResponse {
    /// Convenience constructor.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Run `send` until it yields a 200, retrying only on 429.
///
/// A 429 is retried up to `cfg.max_retries` times with a fixed
/// `cfg.retry_delay` pause. Any other non-200 status fails at once.
///
/// # Errors
/// Returns `FetchFailed` with the last status, or whatever `send` returned for
/// a transport failure.
pub async fn fetch_with_retry<F, Fut>(
    url: &str,
    cfg: &HttpConfig,
    mut send: F,
) -> Result<String, KursError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<RawResponse, KursError>>,
{
    let mut retries = 0u32;
    loop {
        let resp = send().await?;
        match resp.status {
            200 => return Ok(resp.body),
            429 if retries < cfg.max_retries => {
                retries += 1;
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    url,
                    attempt = retries,
                    max_retries = cfg.max_retries,
                    delay_ms = u64::try_from(cfg.retry_delay.as_millis()).unwrap_or(u64::MAX),
                    "rate limited, retrying"
                );
                tokio::time::sleep(cfg.retry_delay).await;
            }
            429 => {
                return Err(KursError::fetch_failed(
                    url,
                    Some(429),
                    format!("still rate limited after {} retries", cfg.max_retries),
                ));
            }
            status => {
                return Err(KursError::fetch_failed(
                    url,
                    Some(status),
                    "failed to load page, check if the symbol exists",
                ));
            }
        }
    }
}

/// Static page source backed by a shared `reqwest::Client`.
///
/// Cloning is cheap; clones share the connection pool and cookie store.
#[derive(Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    cfg: HttpConfig,
}

impl HttpSource {
    /// Build a client sending the configured browser headers.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if a header value is not valid or the
    /// client cannot be constructed.
    pub fn new(cfg: HttpConfig) -> Result<Self, KursError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header_value("user agent", &cfg.user_agent)?);
        headers.insert(ACCEPT, header_value("accept", &cfg.accept)?);
        headers.insert(REFERER, header_value("referer", &cfg.referer)?);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .cookie_store(true)
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| KursError::invalid_config(format!("http client: {e}")))?;
        Ok(Self { client, cfg })
    }

    /// Wrap an existing client. Headers are then whatever that client sends.
    #[must_use]
    pub const fn with_client(client: reqwest::Client, cfg: HttpConfig) -> Self {
        Self { client, cfg }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &HttpConfig {
        &self.cfg
    }

    async fn send_once(&self, url: &str) -> Result<RawResponse, KursError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(url, &e))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| KursError::fetch_failed(url, Some(status), e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

#[async_trait]
impl PageSource for HttpSource {
    fn name(&self) -> &'static str {
        "http"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "kurs_core::http::fetch",
            skip(self),
            fields(timeout_ms = u64::try_from(self.cfg.timeout.as_millis()).unwrap_or(u64::MAX)),
            err,
        )
    )]
    async fn fetch(&self, url: &str) -> Result<String, KursError> {
        fetch_with_retry(url, &self.cfg, || self.send_once(url)).await
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, KursError> {
    HeaderValue::from_str(value)
        .map_err(|e| KursError::invalid_config(format!("invalid {name} header: {e}")))
}

fn transport_error(url: &str, e: &reqwest::Error) -> KursError {
    let reason = if e.is_timeout() {
        format!("request timed out: {e}")
    } else {
        e.to_string()
    };
    KursError::fetch_failed(url, e.status().map(|s| s.as_u16()), reason)
}
