use reqwest::{header, redirect, Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Failure fetching a single URL. Never fatal to a crawl; the page is
/// skipped and the run moves on.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("request failed: {0}")]
    Http(reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),

    #[error("unsupported content type {0:?}")]
    ContentType(String),
}

/// Retrieves the raw page body for a URL. The crawl loop only depends on
/// this trait, so tests can substitute a canned fetcher for the network.
pub trait Fetcher {
    fn fetch(&self, url: &Url) -> impl std::future::Future<Output = Result<String, FetchError>>;
}

/// reqwest-backed [`Fetcher`] with a per-request timeout and bounded
/// redirect following.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(user_agent)
            .redirect(redirect::Policy::limited(5))
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(classify)?;
        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status()));
        }
        if let Some(ct) = resp.headers().get(header::CONTENT_TYPE) {
            if let Ok(value) = ct.to_str() {
                if !value.starts_with("text/html") {
                    return Err(FetchError::ContentType(value.to_string()));
                }
            }
        }
        let bytes = resp.bytes().await.map_err(classify)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn classify(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Http(err)
    }
}
