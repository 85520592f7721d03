use crate::listings::Category;
use crate::render::{Container, Fetch, ListingRenderer};
use std::thread;

/// Runs one render per target concurrently. Each thread owns its container,
/// so completions may land in any order.
pub fn render_all<F>(renderer: &ListingRenderer<F>, targets: Vec<(&str, &mut Container)>)
where
    F: Fetch + Sync,
{
    thread::scope(|s| {
        for (endpoint, container) in targets {
            s.spawn(move || renderer.render(endpoint, container));
        }
    });
}

/// Builds and fills the three category containers, returned in page order.
pub fn page_ready<F>(renderer: &ListingRenderer<F>) -> Vec<(Category, Container)>
where
    F: Fetch + Sync,
{
    let bindings = Category::ALL.map(Category::binding);

    let mut containers: Vec<Container> = bindings
        .iter()
        .map(|b| Container::new(b.container_id))
        .collect();

    let targets = bindings
        .iter()
        .map(|b| b.endpoint)
        .zip(containers.iter_mut())
        .collect();

    render_all(renderer, targets);

    Category::ALL.into_iter().zip(containers).collect()
}
