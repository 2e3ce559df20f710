use dioxus::prelude::*;
use shared_ui::components::PageHeader;

use crate::routes::Route;

/// Contribution notice. Uploads are handled outside this application.
#[component]
pub fn ModelSubmit() -> Element {
    rsx! {
        PageHeader { title: "Contribute a 3D Model" }
        div { class: "notice",
            p {
                "Thank you for helping grow the collection. Model submissions are "
                "reviewed by the herbarium staff before they appear in the catalog; "
                "contact a curator to arrange an upload."
            }
            Link { to: Route::Home {}, "Back to the catalog" }
        }
    }
}
