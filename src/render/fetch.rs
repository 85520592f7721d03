use crate::errors::ServerError;
use crate::listings::{Category, ListingStore};
use crate::render::RenderError;
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

/// Retrieves the raw body behind a listing endpoint.
pub trait Fetch {
    fn fetch(&self, endpoint: &str) -> Result<String, RenderError>;
}

/// Fetches endpoints over HTTP, resolved against a base URL the same way a
/// browser resolves a relative `fetch` path.
pub struct HttpFetcher {
    client: Client,
    base: Url,
}

impl HttpFetcher {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RenderError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RenderError::Network(e.to_string()))?;

        Self::with_client(client, base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, RenderError> {
        let base = Url::parse(base_url)
            .map_err(|e| RenderError::BadEndpoint(format!("{base_url}: {e}")))?;

        Ok(Self { client, base })
    }

    pub fn resolve(&self, endpoint: &str) -> Result<Url, RenderError> {
        self.base
            .join(endpoint)
            .map_err(|e| RenderError::BadEndpoint(format!("{endpoint}: {e}")))
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, endpoint: &str) -> Result<String, RenderError> {
        let url = self.resolve(endpoint)?;
        tracing::debug!(%url, "fetching listings");

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| RenderError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RenderError::Status(status.as_u16()));
        }

        resp.text().map_err(|e| RenderError::Network(e.to_string()))
    }
}

/// Serves endpoints straight from the data directory, without a network hop.
#[derive(Debug, Clone)]
pub struct StoreFetcher {
    store: ListingStore,
}

impl StoreFetcher {
    pub fn new(store: ListingStore) -> Self {
        Self { store }
    }
}

impl Fetch for StoreFetcher {
    fn fetch(&self, endpoint: &str) -> Result<String, RenderError> {
        let category = Category::from_endpoint(endpoint).ok_or(RenderError::Status(404))?;

        self.store.load_raw(category).map_err(|e| match e {
            ServerError::NotFound => RenderError::Status(404),
            other => RenderError::Read(other.to_string()),
        })
    }
}
