use maud::{html, Markup, DOCTYPE};

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(BOOTSTRAP_CSS);
                script src=(BOOTSTRAP_JS) defer {}
            }
            body {
                header class="d-flex align-items-center justify-content-between px-4 py-3 shadow-sm" {
                    h3 class="m-0" { "PakWheels Listings" }
                    nav {
                        a href="/" { "Home" }
                    }
                }
                (content)
            }
        }
    }
}
