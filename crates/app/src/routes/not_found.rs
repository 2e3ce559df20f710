use dioxus::prelude::*;

use crate::routes::Route;

/// 404 page for any unmatched path.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        div { class: "not-found-page",
            div { class: "not-found-code", "404" }
            h1 { "Page Not Found" }
            p {
                "Nothing lives at "
                code { "{path}" }
                "."
            }
            Link { to: Route::Home {}, "Back to the catalog" }
        }
    }
}
