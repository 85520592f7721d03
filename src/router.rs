use crate::errors::ServerError;
use crate::listings::{Category, ListingStore};
use crate::render::{page_ready, ListingRenderer, StoreFetcher};
use crate::responses::{html_response, json_response, text_response, ResultResp};
use crate::templates;
use astra::Request;

/// Everything a request handler needs; shared by all astra workers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: ListingStore,
}

impl AppState {
    pub fn new(store: ListingStore) -> Self {
        Self { store }
    }
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => listings_page(state),
        ("GET", "/health") => text_response("ok"),
        ("GET", _) => match Category::from_endpoint(path) {
            Some(category) => json_response(state.store.load_raw(category)?),
            None => Err(ServerError::NotFound),
        },
        (_, "/") => Err(unsupported(method)),
        (_, _) if Category::from_endpoint(path).is_some() => Err(unsupported(method)),
        _ => Err(ServerError::NotFound),
    }
}

fn unsupported(method: &str) -> ServerError {
    ServerError::BadRequest(format!("{method} is not supported here"))
}

fn listings_page(state: &AppState) -> ResultResp {
    let renderer = ListingRenderer::new(StoreFetcher::new(state.store.clone()));
    let containers = page_ready(&renderer);

    html_response(templates::pages::listings_page(&containers))
}
