use dioxus::prelude::*;

/// Inline row for a search field and its submit button.
///
/// Renders a `role="search"` landmark; submission is left to the children.
#[component]
pub fn SearchBar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "catalog-search", role: "search",
            {children}
        }
    }
}
