use dioxus::prelude::*;
use shared_types::Selection;
use shared_ui::components::{Button, ButtonVariant, FormSelect};

use crate::routes::Route;

/// Which filter a select change belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSlot {
    Modeler,
    Annotator,
}

impl FilterSlot {
    /// Selects in render order.
    pub const ALL: [FilterSlot; 2] = [FilterSlot::Modeler, FilterSlot::Annotator];

    pub fn label(self) -> &'static str {
        match self {
            FilterSlot::Modeler => "Modeled By",
            FilterSlot::Annotator => "Annotated By",
        }
    }
}

/// Hand a selection to its handler as `Some(value)` or `None`.
pub fn forward_selection(selection: Selection, handler: impl FnOnce(Option<String>)) {
    handler(selection.into_value());
}

/// Route a raw select value to the handler for `slot` only.
pub fn dispatch_filter_change(
    slot: FilterSlot,
    raw: &str,
    on_modeler: impl FnOnce(Option<String>),
    on_annotator: impl FnOnce(Option<String>),
) {
    let selection = Selection::from_form_value(raw);
    match slot {
        FilterSlot::Modeler => forward_selection(selection, on_modeler),
        FilterSlot::Annotator => forward_selection(selection, on_annotator),
    }
}

/// Filter bar above the collection view.
///
/// Holds no state: every change goes straight to the caller's handlers.
#[component]
pub fn SubHeader(
    #[props(default)] modeled_by: Vec<String>,
    #[props(default)] annotated_by: Vec<String>,
    #[props(default)] modeler: Option<String>,
    #[props(default)] annotator: Option<String>,
    handle_modeler_select: EventHandler<Option<String>>,
    handle_annotator_select: EventHandler<Option<String>>,
) -> Element {
    let change = move |slot: FilterSlot, raw: String| {
        dispatch_filter_change(
            slot,
            &raw,
            |v| handle_modeler_select.call(v),
            |v| handle_annotator_select.call(v),
        );
    };

    let mut current = [modeler, annotator].into_iter();
    let mut options = [modeled_by, annotated_by].into_iter();
    let selects: Vec<(FilterSlot, String, Vec<String>)> = FilterSlot::ALL
        .into_iter()
        .map(|slot| {
            (
                slot,
                current.next().flatten().unwrap_or_default(),
                options.next().unwrap_or_default(),
            )
        })
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./sub_header.css") }
        div { class: "sub-header",
            div { class: "sub-header-filters",
                for (slot, value, options) in selects {
                    FormSelect {
                        key: "{slot.label()}",
                        label: slot.label().to_string(),
                        value,
                        options,
                        on_change: move |raw: String| change(slot, raw),
                    }
                }
            }
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| {
                    navigator().push(Route::ModelSubmit {});
                },
                "Contribute a 3D Model"
            }
        }
    }
}
