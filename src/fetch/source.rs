use crate::fetch::endpoint::Endpoint;
use crate::fetch::error::FetchError;
use log::{debug, info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, MutexGuard};

/// Something that can produce the raw JSON body for an [`Endpoint`].
///
/// [`HttpSource`] talks to a live backend; [`FixtureSource`] serves canned bodies.
pub trait PayloadSource: Send + Sync {
    /// Fetches the body of `endpoint`. Exactly one request per call, never retried.
    fn fetch(&self, endpoint: Endpoint) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;

    /// Where `endpoint` is fetched from, for error messages.
    fn location(&self, endpoint: Endpoint) -> String {
        endpoint.to_string()
    }
}

/// Fetches `endpoint` from `source` and decodes the body as `T`.
pub async fn fetch_json<T, S>(source: &S, endpoint: Endpoint) -> Result<T, FetchError>
where
    T: DeserializeOwned,
    S: PayloadSource,
{
    let body = source.fetch(endpoint).await?;
    serde_json::from_slice(&body).map_err(|e| {
        let url = source.location(endpoint);
        warn!("Malformed payload from {}: {}", url, e);
        FetchError::JsonParse { url, source: e }
    })
}

/// Reads payloads from a running backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: Client,
}

impl HttpSource {
    /// Builds a source with its own `reqwest` client identifying itself as `user_agent`.
    pub fn new(base_url: impl Into<String>, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self::with_client(base_url, client))
    }

    /// Uses a pre-configured client (for custom timeouts, proxies or TLS settings).
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl PayloadSource for HttpSource {
    fn fetch(&self, endpoint: Endpoint) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send {
        let url = endpoint.url(&self.base_url);
        let client = self.client.clone();
        async move {
            info!("Fetching {}", url);

            let response = client
                .get(&url)
                .send()
                .await
                .map_err(|e| FetchError::NetworkRequest(url.clone(), e))?;

            let response = match response.error_for_status() {
                Ok(resp) => resp,
                Err(e) => {
                    warn!("HTTP error for {}: {:?}", url, e);
                    return Err(if let Some(status) = e.status() {
                        FetchError::HttpStatus {
                            url,
                            status,
                            source: e,
                        }
                    } else {
                        FetchError::NetworkRequest(url, e)
                    });
                }
            };

            let body = response
                .bytes()
                .await
                .map_err(|e| FetchError::NetworkRequest(url.clone(), e))?;
            debug!("Received {} bytes from {}", body.len(), url);
            Ok(body.to_vec())
        }
    }

    fn location(&self, endpoint: Endpoint) -> String {
        endpoint.url(&self.base_url)
    }
}

#[derive(Debug, Default)]
struct Fixtures {
    bodies: HashMap<Endpoint, Vec<u8>>,
    fetches: HashMap<Endpoint, usize>,
}

/// Serves fixed JSON bodies from memory.
///
/// Endpoints without a registered body fail with [`FetchError::MissingFixture`].
/// Bodies can be swapped between refreshes, and every fetch is counted.
///
/// # Examples
///
/// ```rust
/// use stormberry_dashboard::{Endpoint, FixtureSource};
///
/// let source = FixtureSource::new()
///     .with(Endpoint::PastWeekTrend, r#"{"tempc_trend": 1, "pressure_trend": 0, "dewpoint_trend": -1}"#);
/// assert!(source.has(Endpoint::PastWeekTrend));
/// assert!(!source.has(Endpoint::PastDay));
/// ```
#[derive(Debug, Default)]
pub struct FixtureSource {
    fixtures: Mutex<Fixtures>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Fixtures> {
        self.fixtures
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Registers `body` for `endpoint`, builder style.
    pub fn with(self, endpoint: Endpoint, body: impl Into<Vec<u8>>) -> Self {
        self.set(endpoint, body);
        self
    }

    /// Registers or replaces the body served for `endpoint`.
    pub fn set(&self, endpoint: Endpoint, body: impl Into<Vec<u8>>) {
        self.lock().bodies.insert(endpoint, body.into());
    }

    /// Stops serving `endpoint`; later fetches fail.
    pub fn remove(&self, endpoint: Endpoint) {
        self.lock().bodies.remove(&endpoint);
    }

    pub fn has(&self, endpoint: Endpoint) -> bool {
        self.lock().bodies.contains_key(&endpoint)
    }

    /// How many times `endpoint` has been fetched, successful or not.
    pub fn fetch_count(&self, endpoint: Endpoint) -> usize {
        self.lock().fetches.get(&endpoint).copied().unwrap_or(0)
    }
}

impl PayloadSource for FixtureSource {
    fn fetch(&self, endpoint: Endpoint) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send {
        let result = {
            let mut fixtures = self.lock();
            *fixtures.fetches.entry(endpoint).or_insert(0) += 1;
            fixtures
                .bodies
                .get(&endpoint)
                .cloned()
                .ok_or(FetchError::MissingFixture(endpoint))
        };
        async move { result }
    }
}
