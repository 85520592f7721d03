mod container;
mod fetch;
mod page;
mod render_error;
mod renderer;

pub use container::Container;
pub use fetch::{Fetch, HttpFetcher, StoreFetcher};
pub use page::{page_ready, render_all};
pub use render_error::RenderError;
pub use renderer::ListingRenderer;
