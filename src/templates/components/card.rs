use crate::listings::ListingItem;
use maud::{html, Markup};

const PLACEHOLDER: &str = "N/A";

/// Card for one listing. Absent fields show the placeholder.
pub fn listing_card(item: &ListingItem) -> Markup {
    html! {
        div class="col-md-4" {
            div class="card" {
                div class="card-header" { (or_placeholder(&item.title)) }
                div class="card-body" {
                    p { strong { "Price:" } " " (or_placeholder(&item.price)) }
                    p { strong { "Location:" } " " (or_placeholder(&item.location)) }
                    p { strong { "Rating:" } " " (or_placeholder(&item.rating)) }
                    p { strong { "Reviews:" } " " (or_placeholder(&item.reviews_count)) }
                }
            }
        }
    }
}

fn or_placeholder(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or(PLACEHOLDER)
}
