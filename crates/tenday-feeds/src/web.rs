//! Ten-day forecast page source over HTTPS.

use std::time::Duration;

use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::{header, Request, StatusCode, Uri};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use tenday_core::config::FetchConfig;

use crate::{page, FeedError, ForecastSource, ZipCode};

type HttpsClient = Client<HttpsConnector<HttpConnector>, Empty<Bytes>>;

const MAX_REDIRECTS: usize = 5;
const ATTEMPTS: usize = 2;

/// Fetches the forecast page for one ZIP code and extracts its summary lines.
#[derive(Debug, Clone)]
pub struct WebSource {
    zip: ZipCode,
    url: String,
    user_agent: String,
    timeout: Duration,
}

impl WebSource {
    pub fn new(zip: ZipCode, fetch: &FetchConfig) -> Self {
        Self {
            url: fetch.url_for(zip.as_str()),
            zip,
            user_agent: fetch.user_agent.clone(),
            timeout: Duration::from_secs(fetch.timeout_secs),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn zip(&self) -> &ZipCode {
        &self.zip
    }

    /// Download the page body, following redirects and retrying once on
    /// connection failures or timeouts.
    pub async fn fetch_page(&self) -> Result<String, FeedError> {
        if let Err(source) = self.url.parse::<Uri>() {
            return Err(FeedError::InvalidUrl {
                url: self.url.clone(),
                source,
            });
        }

        let connector = HttpsConnectorBuilder::new()
            .with_native_roots()
            .map_err(FeedError::Tls)?
            .https_only()
            .enable_http1()
            .enable_http2()
            .build();
        let client: HttpsClient = Client::builder(TokioExecutor::new()).build(connector);

        let mut attempt = 1;
        loop {
            match tokio::time::timeout(self.timeout, self.get(&client)).await {
                Ok(Ok(body)) => return Ok(body),
                Ok(Err(err @ FeedError::Http { .. })) if attempt < ATTEMPTS => {
                    tracing::warn!(url = %self.url, attempt, error = %err, "fetch failed, retrying");
                }
                Ok(Err(err)) => return Err(err),
                Err(_) if attempt < ATTEMPTS => {
                    tracing::warn!(url = %self.url, attempt, "fetch timed out, retrying");
                }
                Err(_) => {
                    return Err(FeedError::Timeout {
                        url: self.url.clone(),
                        secs: self.timeout.as_secs(),
                    })
                }
            }
            attempt += 1;
        }
    }

    async fn get(&self, client: &HttpsClient) -> Result<String, FeedError> {
        let mut url = self.url.clone();

        for _ in 0..=MAX_REDIRECTS {
            let uri: Uri = url.parse().map_err(|source| FeedError::InvalidUrl {
                url: url.clone(),
                source,
            })?;
            let req = Request::get(uri.clone())
                .header(header::USER_AGENT, &self.user_agent)
                .header(header::ACCEPT, "text/html")
                .body(Empty::<Bytes>::new())?;

            tracing::debug!(%url, "requesting forecast page");
            let res = client.request(req).await.map_err(|source| FeedError::Http {
                url: url.clone(),
                source,
            })?;
            let status = res.status();

            if status.is_redirection() {
                if let Some(next) = res
                    .headers()
                    .get(header::LOCATION)
                    .and_then(|v| v.to_str().ok())
                {
                    url = resolve_location(&uri, next);
                    tracing::debug!(%status, to = %url, "following redirect");
                    continue;
                }
            }
            if !status.is_success() {
                return Err(status_error(&url, status));
            }

            let body = res.into_body().collect().await?.to_bytes();
            tracing::debug!(%url, bytes = body.len(), "forecast page downloaded");
            return Ok(String::from_utf8_lossy(&body).into_owned());
        }

        Err(status_error(&url, StatusCode::LOOP_DETECTED))
    }
}

impl ForecastSource for WebSource {
    async fn fetch_lines(&self) -> Result<Vec<String>, FeedError> {
        let html = self.fetch_page().await?;
        page::forecast_texts(&html).ok_or_else(|| FeedError::NoForecast(self.zip.to_string()))
    }

    fn describe(&self) -> String {
        format!("weather.com ten-day forecast for {} ({})", self.zip, self.url)
    }
}

fn status_error(url: &str, status: StatusCode) -> FeedError {
    FeedError::Status {
        url: url.to_string(),
        status: status.as_u16(),
    }
}

/// Absolute URL for a `Location` header value relative to the request URI.
fn resolve_location(base: &Uri, location: &str) -> String {
    if location.contains("://") {
        return location.to_string();
    }
    let scheme = base.scheme_str().unwrap_or("https");
    let authority = base.authority().map_or("", |a| a.as_str());
    if location.starts_with('/') {
        format!("{scheme}://{authority}{location}")
    } else {
        let path = base.path();
        let dir = &path[..path.rfind('/').map_or(0, |i| i + 1)];
        format!("{scheme}://{authority}{dir}{location}")
    }
}
