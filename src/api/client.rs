//! Parent API HTTP client.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::{header::HeaderMap, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::headers::build_headers;
use crate::api::retry::RetryPolicy;
use crate::api::types::{MediaDetails, MediaSummary};
use crate::config::Config;
use crate::error::{Error, Result};

/// Listing endpoint, relative to the API base.
const MEDIA_LIST_PATH: &str = "parent/dependent/memories/media";

/// Per-attachment endpoint segments under the API base; the id follows.
const MEDIA_DETAIL_SEGMENTS: [&str; 2] = ["parent", "media"];

/// Longest response excerpt carried in an error message.
const ERROR_BODY_LIMIT: usize = 500;

/// Client for the daycare parent API.
pub struct BrightDayApi {
    client: Client,
    base: Url,
    headers: HeaderMap,
    retry: RetryPolicy,
}

impl BrightDayApi {
    /// Create a new API client.
    pub fn new(token: &str, cookie: &str, api_base: &str, retry: RetryPolicy) -> Result<Self> {
        // Signed media URLs get no custom headers, so the credentials are
        // attached per request rather than as client defaults.
        let client = Client::builder().build().map_err(|e| Error::Api {
            status: 0,
            message: format!("Failed to create HTTP client: {}", e),
        })?;

        let mut base = Url::parse(api_base)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            client,
            base,
            headers: build_headers(token, cookie)?,
            retry,
        })
    }

    /// Create a client from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.account.jwt,
            &config.account.cookie,
            &config.options.api_base,
            RetryPolicy::new(
                config.options.retries,
                Duration::from_millis(config.options.retry_delay_ms),
            ),
        )
    }

    /// The retry policy applied to every request.
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// List the dependent's media between two dates, both inclusive.
    ///
    /// The endpoint returns the whole range in one response.
    pub async fn list_media(
        &self,
        dependent_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<MediaSummary>> {
        let url = self.base.join(MEDIA_LIST_PATH)?;
        let start = start.format("%Y-%m-%d").to_string();
        let end = end.format("%Y-%m-%d").to_string();

        tracing::info!("Fetching media list for {} to {}", start, end);

        let (url, start, end) = (&url, start.as_str(), end.as_str());
        self.retry
            .run("media listing", || async move {
                tracing::debug!("POST {}?start_date={}&end_date={}", url, start, end);
                let response = self
                    .client
                    .post(url.clone())
                    .query(&[("start_date", start), ("end_date", end)])
                    .headers(self.headers.clone())
                    .json(&[dependent_id])
                    .send()
                    .await?;

                decode(response, "media listing").await
            })
            .await
    }

    /// Resolve one attachment's filename, MIME type and signed URL.
    pub async fn get_media_details(&self, attachment_id: &str) -> Result<MediaDetails> {
        let url = self.media_detail_url(attachment_id)?;

        tracing::debug!("Fetching media details for attachment {}", attachment_id);

        let url = &url;
        self.retry
            .run("media details", || async move {
                tracing::debug!("GET {}", url);
                let response = self
                    .client
                    .get(url.clone())
                    .headers(self.headers.clone())
                    .send()
                    .await?;

                decode(response, "media details").await
            })
            .await
    }

    /// Detail URL with the attachment id as a single, percent-encoded segment.
    fn media_detail_url(&self, attachment_id: &str) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("API base {} cannot hold a path", self.base)))?
            .pop_if_empty()
            .extend(MEDIA_DETAIL_SEGMENTS)
            .push(attachment_id);
        Ok(url)
    }

    /// Start downloading a file. No API headers are sent.
    pub async fn download_file(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("Download response status: {}", status);

        if !status.is_success() {
            return Err(Error::DownloadStatus(status.as_u16()));
        }

        Ok(response)
    }
}

/// Map error statuses, then decode the JSON body.
async fn decode<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let status = response.status();
    tracing::debug!("Response status: {}", status);

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(Error::RateLimited);
    }

    let text = response.text().await?;

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        tracing::error!("Auth error response: {}", excerpt(&text));
        return Err(Error::Authentication(format!(
            "HTTP {}: {}",
            status,
            if text.is_empty() {
                "check JWT and COOKIE"
            } else {
                excerpt(&text)
            }
        )));
    }

    if !status.is_success() {
        return Err(Error::Api {
            status: status.as_u16(),
            message: format!("{} request failed: {}", what, excerpt(&text)),
        });
    }

    serde_json::from_str(&text).map_err(|e| Error::Api {
        status: status.as_u16(),
        message: format!(
            "Failed to parse {}: {} - Response: {}",
            what,
            e,
            excerpt(&text)
        ),
    })
}

fn excerpt(text: &str) -> &str {
    match text.char_indices().nth(ERROR_BODY_LIMIT) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_gets_trailing_slash() {
        let api = BrightDayApi::new("t", "c", "http://127.0.0.1:9000/gw", RetryPolicy::none())
            .unwrap();
        assert_eq!(
            api.base.join(MEDIA_LIST_PATH).unwrap().as_str(),
            "http://127.0.0.1:9000/gw/parent/dependent/memories/media"
        );
    }

    #[test]
    fn test_default_base() {
        let api = BrightDayApi::new("t", "c", crate::config::DEFAULT_API_BASE, RetryPolicy::none())
            .unwrap();
        assert_eq!(
            api.media_detail_url("42").unwrap().as_str(),
            "https://mbdgw.brighthorizons.com/parent/media/42"
        );
    }

    #[test]
    fn test_detail_url_keeps_id_in_one_segment() {
        let api = BrightDayApi::new("t", "c", "http://127.0.0.1:9000/gw", RetryPolicy::none())
            .unwrap();
        let url = api.media_detail_url("a/b?c#d").unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:9000/gw/parent/media/a%2Fb%3Fc%23d"
        );
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());
    }

    #[test]
    fn test_excerpt_respects_char_boundaries() {
        let long = "é".repeat(ERROR_BODY_LIMIT + 10);
        assert_eq!(excerpt(&long).chars().count(), ERROR_BODY_LIMIT);
        assert_eq!(excerpt("short"), "short");
    }
}
