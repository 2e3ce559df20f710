use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSearch;
use dioxus_free_icons::Icon;
use shared_ui::components::{Autocomplete, Button, ButtonVariant, SearchBar};

use crate::routes::Route;

/// Route for a search term, or none when there is nothing to search for.
pub fn search_target(term: &str) -> Option<Route> {
    if term.is_empty() {
        None
    } else {
        Some(Route::Collections {
            query: term.to_string(),
        })
    }
}

/// The header's search term. Written by the autocomplete, read on submit.
#[derive(Clone, Copy, PartialEq)]
pub struct SearchQuery {
    term: Signal<String>,
}

impl SearchQuery {
    pub fn new(term: Signal<String>) -> Self {
        Self { term }
    }

    pub fn set(&mut self, value: String) {
        self.term.set(value);
    }

    pub fn target(&self) -> Option<Route> {
        search_target(&self.term.read())
    }

    fn current(&self) -> String {
        self.term.read().clone()
    }
}

/// Search field plus submit button for the site header.
///
/// `options` are shown under the field; `on_change` receives each typed
/// value so the owner can refresh them.
#[component]
pub fn HeaderAutocomplete(
    #[props(default)] options: Vec<String>,
    #[props(default)] on_change: EventHandler<String>,
) -> Element {
    let mut query = SearchQuery::new(use_signal(String::new));

    let submit = move |_| {
        if let Some(route) = query.target() {
            navigator().push(route);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./header.css") }
        SearchBar {
            Autocomplete {
                value: query.current(),
                options: options,
                label: "Search specimens",
                placeholder: "Search specimens...",
                on_input: move |value: String| {
                    query.set(value.clone());
                    on_change.call(value);
                },
                on_select: move |value: String| query.set(value),
            }
            Button {
                variant: ButtonVariant::Primary,
                class: "header-search-button",
                aria_label: "Search",
                onclick: submit,
                Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                "Search"
            }
        }
    }
}

/// Header search that fetches its own suggestions.
#[component]
pub fn Header() -> Element {
    let mut options = use_signal(Vec::<String>::new);

    let refresh = move |prefix: String| {
        if prefix.trim().is_empty() {
            options.set(Vec::new());
            return;
        }
        spawn(async move {
            match server::api::search_suggestions(prefix).await {
                Ok(list) => options.set(list),
                Err(e) => {
                    tracing::debug!(error = %e, "Suggestion lookup failed");
                    options.set(Vec::new());
                }
            }
        });
    };

    rsx! {
        HeaderAutocomplete { options: options(), on_change: refresh }
    }
}
