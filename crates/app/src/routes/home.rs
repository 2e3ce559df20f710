use dioxus::prelude::*;
use shared_ui::components::PageHeader;

#[component]
pub fn Home() -> Element {
    rsx! {
        PageHeader {
            title: "Herbarium Catalog",
            subtitle: "3D models of preserved specimens",
        }
        div { class: "notice",
            p {
                "Search for a specimen by name in the bar above to browse its collection. "
                "Results can be narrowed by who modeled or annotated each specimen."
            }
        }
    }
}
