use crate::listings::ListingItem;
use crate::render::{Container, Fetch, RenderError};
use crate::templates::listing_card;
use serde_json::Value;

/// Fetches a listing endpoint and rebuilds a container from it.
pub struct ListingRenderer<F> {
    fetcher: F,
}

impl<F: Fetch> ListingRenderer<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Replaces the container's cards with one card per listing at `endpoint`.
    ///
    /// Failures are logged and leave the container untouched.
    pub fn render(&self, endpoint: &str, container: &mut Container) {
        if let Err(e) = self.try_render(endpoint, container) {
            tracing::error!(
                endpoint,
                container = container.id(),
                error = %e,
                "Error loading data"
            );
        }
    }

    /// Same as [`render`](Self::render) but hands back the card count or the
    /// error. The container is only cleared once the whole body has parsed.
    pub fn try_render(&self, endpoint: &str, container: &mut Container) -> Result<usize, RenderError> {
        let body = self.fetcher.fetch(endpoint)?;
        let items = parse_listings(&body)?;

        container.clear();
        for item in &items {
            container.append(listing_card(item));
        }

        tracing::info!(
            endpoint,
            container = container.id(),
            cards = items.len(),
            "rendered listings"
        );
        Ok(items.len())
    }
}

/// Parses a response body into normalized listings, preserving array order.
pub fn parse_listings(body: &str) -> Result<Vec<ListingItem>, RenderError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| RenderError::JsonParse(e.to_string()))?;

    let arr = value.as_array().ok_or(RenderError::NotAnArray)?;

    arr.iter()
        .enumerate()
        .map(|(i, v)| ListingItem::from_json(v).ok_or(RenderError::MalformedItem(i)))
        .collect()
}
