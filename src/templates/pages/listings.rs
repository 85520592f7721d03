// templates/pages/listings.rs

use crate::listings::Category;
use crate::render::Container;
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Tabbed page with one pane per category. The first tab starts active.
pub fn listings_page(containers: &[(Category, Container)]) -> Markup {
    desktop_layout(
        "Vehicle Listings",
        html! {
            main class="container my-4" {
                ul class="nav nav-tabs" role="tablist" {
                    @for (i, (category, container)) in containers.iter().enumerate() {
                        li class="nav-item" role="presentation" {
                            button
                                class=(if i == 0 { "nav-link active" } else { "nav-link" })
                                data-bs-toggle="tab"
                                data-bs-target=(format!("#{}", tab_id(container)))
                                type="button"
                                role="tab"
                            {
                                (category.label())
                            }
                        }
                    }
                }

                div class="tab-content pt-3" {
                    @for (i, (_, container)) in containers.iter().enumerate() {
                        div
                            class=(if i == 0 { "tab-pane fade show active" } else { "tab-pane fade" })
                            id=(tab_id(container))
                            role="tabpanel"
                        {
                            (container.to_markup())
                        }
                    }
                }
            }
        },
    )
}

fn tab_id(container: &Container) -> String {
    format!("{}-tab", container.id())
}
