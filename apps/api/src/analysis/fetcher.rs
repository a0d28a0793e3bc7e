//! Page fetcher: a single outbound GET for a job posting URL.

use std::time::Duration;

use bytes::{Bytes, BytesMut};
use reqwest::{header::CONTENT_TYPE, Client, Url};
use thiserror::Error;
use tracing::{debug, info};

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid job URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("{url} is larger than {limit} bytes")]
    TooLarge { url: String, limit: usize },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Raw page as received. Owned by one analysis call and dropped after extraction.
#[derive(Debug)]
pub struct FetchedPage {
    pub url: String,
    pub body: Bytes,
    /// Charset from the `Content-Type` header, if one was declared.
    pub charset: Option<String>,
}

#[derive(Clone)]
pub struct PageFetcher {
    client: Client,
    max_page_bytes: usize,
}

impl PageFetcher {
    /// Pages whose body exceeds `max_page_bytes` are rejected without being
    /// read to the end.
    pub fn new(max_page_bytes: usize) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            max_page_bytes,
        })
    }

    /// Fetches `url` once. Non-2xx statuses are errors; there is no retry.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let parsed = parse_job_url(url)?;
        info!("Fetching job posting: {parsed}");

        let mut response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let charset = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(charset_from_content_type);

        let too_large = || FetchError::TooLarge {
            url: url.to_string(),
            limit: self.max_page_bytes,
        };
        if response
            .content_length()
            .is_some_and(|length| length > self.max_page_bytes as u64)
        {
            return Err(too_large());
        }

        let mut body = BytesMut::new();
        while let Some(chunk) = response.chunk().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })? {
            if body.len() + chunk.len() > self.max_page_bytes {
                return Err(too_large());
            }
            body.extend_from_slice(&chunk);
        }
        let body = body.freeze();

        debug!("Fetched {} bytes (charset: {:?})", body.len(), charset);

        Ok(FetchedPage {
            url: url.to_string(),
            body,
            charset,
        })
    }
}

fn parse_job_url(raw: &str) -> Result<Url, FetchError> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|e| FetchError::InvalidUrl {
        url: trimmed.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::InvalidUrl {
            url: trimmed.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

fn charset_from_content_type(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        if key.trim().eq_ignore_ascii_case("charset") {
            Some(value.trim().trim_matches('"').to_string())
        } else {
            None
        }
    })
}
