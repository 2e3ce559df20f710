use dioxus::prelude::*;

/// A native select over a list of plain string options.
///
/// The first entry is a placeholder with an empty value; choosing it
/// reports `""` through `on_change`, which callers treat as "no selection".
#[component]
pub fn FormSelect(
    /// Currently selected option, or empty for none.
    #[props(default)]
    value: String,
    /// Options shown after the placeholder, in display order.
    #[props(default)]
    options: Vec<String>,
    /// Called with the raw value of the chosen option.
    #[props(default)]
    on_change: EventHandler<String>,
    /// Label displayed above the select.
    #[props(default)]
    label: String,
    #[props(default = "All".to_string())]
    placeholder: String,
    #[props(default = false)]
    disabled: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", "{label}" }
            }
            select {
                class: "form-select",
                aria_label: "{label}",
                disabled: disabled,
                onchange: move |evt| on_change.call(evt.value()),
                option { value: "", selected: value.is_empty(), "{placeholder}" }
                for opt in options.iter() {
                    option {
                        key: "{opt}",
                        value: "{opt}",
                        selected: *opt == value,
                        "{opt}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_label_placeholder_and_options() {
        fn app() -> Element {
            rsx! {
                FormSelect {
                    label: "Modeled By",
                    options: vec!["Jane Doe".to_string(), "Luis Ortega".to_string()],
                }
            }
        }
        let html = render(app);
        assert!(html.contains("Modeled By"));
        assert!(html.contains("All"));
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("Luis Ortega"));
    }

    #[test]
    fn custom_placeholder() {
        fn app() -> Element {
            rsx! {
                FormSelect { label: "Annotated By", placeholder: "Anyone" }
            }
        }
        assert!(render(app).contains("Anyone"));
    }
}
