use dioxus::prelude::*;

/// Step the highlighted option up or down, wrapping at either end.
pub fn step_highlight(current: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match (current, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(i), true) => (i + 1) % len,
        (Some(0), false) => len - 1,
        (Some(i), false) => i - 1,
    })
}

/// Free-text input with a suggestion list underneath.
///
/// The component owns only the open/highlight state. Callers own the text:
/// `on_input` receives every keystroke (typically used to refresh `options`),
/// and `on_select` receives an option picked by mouse or Enter.
#[component]
pub fn Autocomplete(
    #[props(default)] value: String,
    #[props(default)] options: Vec<String>,
    #[props(default)] on_input: EventHandler<String>,
    #[props(default)] on_select: EventHandler<String>,
    #[props(default)] placeholder: String,
    /// Accessible name for the input.
    #[props(default)]
    label: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut open = use_signal(|| false);
    let mut highlighted = use_signal(|| None::<usize>);

    let base = vec![
        Attribute::new("class", "autocomplete-input", None, false),
        Attribute::new("role", "combobox", None, false),
        Attribute::new("autocomplete", "off", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    let total = options.len();
    let expanded = open() && total > 0;
    let key_options = options.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "autocomplete",
            input {
                value: value,
                placeholder: placeholder,
                aria_label: "{label}",
                aria_expanded: "{expanded}",
                oninput: move |evt: FormEvent| {
                    open.set(true);
                    highlighted.set(None);
                    on_input.call(evt.value());
                },
                onfocus: move |_| open.set(true),
                onblur: move |_| open.set(false),
                onkeydown: move |e: KeyboardEvent| match e.key() {
                    Key::ArrowDown => {
                        e.prevent_default();
                        open.set(true);
                        highlighted.set(step_highlight(highlighted(), total, true));
                    }
                    Key::ArrowUp => {
                        e.prevent_default();
                        highlighted.set(step_highlight(highlighted(), total, false));
                    }
                    Key::Enter => {
                        if let Some(choice) = highlighted().and_then(|i| key_options.get(i)) {
                            e.prevent_default();
                            on_select.call(choice.clone());
                            open.set(false);
                            highlighted.set(None);
                        }
                    }
                    Key::Escape => {
                        open.set(false);
                        highlighted.set(None);
                    }
                    _ => {}
                },
                ..merged,
            }
            ul {
                class: "autocomplete-list",
                role: "listbox",
                hidden: !expanded,
                for (idx, opt) in options.into_iter().enumerate() {
                    li {
                        key: "{opt}",
                        class: "autocomplete-option",
                        role: "option",
                        "data-active": highlighted() == Some(idx),
                        // mousedown fires before the input loses focus
                        onmousedown: {
                            let opt = opt.clone();
                            move |e: MouseEvent| {
                                e.prevent_default();
                                on_select.call(opt.clone());
                                open.set(false);
                                highlighted.set(None);
                            }
                        },
                        "{opt}"
                    }
                }
            }
        }
    }
}
