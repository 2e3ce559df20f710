use dioxus::prelude::*;
use shared_types::{AppError, ContributorLists, ModelSummary};
use shared_ui::components::PageHeader;

use crate::components::SubHeader;

/// Collection view for a search term, filtered by contributor.
#[component]
pub fn Collections(query: String) -> Element {
    let mut modeler = use_signal(|| None::<String>);
    let mut annotator = use_signal(|| None::<String>);

    let contributors =
        use_server_future(move || async move { server::api::list_contributors().await })?;

    let models = use_server_future(use_reactive!(|query| {
        let modeler = modeler();
        let annotator = annotator();
        async move { server::api::search_collection(query, modeler, annotator).await }
    }))?;

    let lists = match contributors.read().as_ref() {
        Some(Ok(lists)) => lists.clone(),
        _ => ContributorLists::default(),
    };

    let results = models.read().as_ref().cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./collections.css") }
        PageHeader { title: "Collections", subtitle: "{query}" }
        SubHeader {
            modeled_by: lists.modeled_by,
            annotated_by: lists.annotated_by,
            modeler: modeler(),
            annotator: annotator(),
            handle_modeler_select: move |value| modeler.set(value),
            handle_annotator_select: move |value| annotator.set(value),
        }
        match results {
            Some(Ok(rows)) if rows.is_empty() => rsx! {
                p { class: "collection-empty", "No specimens match {query}." }
            },
            Some(Ok(rows)) => rsx! { ModelTable { rows } },
            Some(Err(e)) => {
                let reason = load_error_text(&e);
                rsx! {
                    p { class: "collection-error", "Could not load the collection: {reason}" }
                }
            }
            None => rsx! {
                p { class: "collection-empty", "Loading..." }
            },
        }
    }
}

/// Message shown when the collection query fails. Server errors carry an
/// embedded `AppError`; anything else gets the generic fallback.
fn load_error_text(error: &ServerFnError) -> String {
    AppError::friendly_message(&error.to_string())
}

/// Annotator column text; unannotated models show a dash.
fn annotator_label(row: &ModelSummary) -> &str {
    row.annotated_by.as_deref().unwrap_or("-")
}

#[component]
fn ModelTable(rows: Vec<ModelSummary>) -> Element {
    rsx! {
        table { class: "collection-table",
            thead {
                tr {
                    th { "Specimen" }
                    th { "Modeled By" }
                    th { "Annotated By" }
                }
            }
            tbody {
                for row in rows {
                    tr { key: "{row.uid}",
                        td { "{row.specimen_name}" }
                        td { "{row.modeled_by}" }
                        td { {annotator_label(&row)} }
                    }
                }
            }
        }
    }
}
