use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCheck, FaChevronDown};
use dioxus_free_icons::Icon;

/// A single selectable entry in a [`Combobox`].
#[derive(Debug, Clone, PartialEq)]
pub struct ComboboxOption<T> {
    pub value: T,
    pub label: String,
}

impl<T> ComboboxOption<T> {
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Indices of the options whose label contains `query`, ignoring case.
///
/// A blank query matches everything. Input order is preserved.
pub fn filter_options<T>(options: &[ComboboxOption<T>], query: &str) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    options
        .iter()
        .enumerate()
        .filter(|(_, option)| needle.is_empty() || option.label.to_lowercase().contains(&needle))
        .map(|(index, _)| index)
        .collect()
}

/// Move a highlight position one step through `len` items, wrapping at both ends.
pub fn step_index(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    let current = current.min(len - 1);
    if forward {
        (current + 1) % len
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ComboboxProps<T: Clone + PartialEq + 'static> {
    /// Currently selected value. `None` shows the placeholder.
    #[props(!optional)]
    pub value: Option<T>,
    /// Options in display order.
    pub options: Vec<ComboboxOption<T>>,
    /// Called with the value of the option the user picks.
    pub on_change: EventHandler<T>,
    #[props(default = "Select...".to_string())]
    pub placeholder: String,
    /// Shown in place of the list when no option matches the search.
    #[props(default = "No results".to_string())]
    pub empty_text: String,
    #[props(default = true)]
    pub searchable: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
}

struct VisibleOption<T> {
    index: usize,
    label: String,
    value: T,
    selected: bool,
    active: bool,
}

/// Searchable single-select dropdown.
///
/// Every option stays in the markup; the list container is `hidden` while
/// closed. Keyboard: ArrowDown/ArrowUp move the highlight (wrapping), Enter
/// picks, Escape closes. A click outside the open list closes it.
#[component]
pub fn Combobox<T: Clone + PartialEq + 'static>(props: ComboboxProps<T>) -> Element {
    let mut open = use_signal(|| false);
    let mut query = use_signal(String::new);
    let mut active_index = use_signal(|| 0usize);

    let on_change = props.on_change;
    let is_open = open();
    let active = active_index();

    let selected_label = props
        .value
        .as_ref()
        .and_then(|value| props.options.iter().find(|option| &option.value == value))
        .map(|option| option.label.clone());
    let value_class = if selected_label.is_some() {
        "cyber-combobox-value"
    } else {
        "cyber-combobox-value cyber-combobox-placeholder"
    };
    let display = selected_label.unwrap_or_else(|| props.placeholder.clone());

    let visible: Vec<VisibleOption<T>> = filter_options(&props.options, &query.read())
        .into_iter()
        .enumerate()
        .map(|(position, index)| {
            let option = &props.options[index];
            VisibleOption {
                index,
                label: option.label.clone(),
                value: option.value.clone(),
                selected: props.value.as_ref() == Some(&option.value),
                active: is_open && position == active,
            }
        })
        .collect();
    let visible_count = visible.len();
    let keyboard_targets: Vec<T> = visible.iter().map(|item| item.value.clone()).collect();

    let mut dismiss = move || {
        open.set(false);
        query.set(String::new());
        active_index.set(0);
    };

    // Close and reset the search before reporting the pick.
    let mut commit = move |value: T| {
        dismiss();
        on_change.call(value);
    };

    let base = vec![Attribute::new("class", "cyber-combobox", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes.clone()]);
    let state = if is_open { "open" } else { "closed" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            "data-state": state,
            onkeydown: move |e: KeyboardEvent| {
                match e.key() {
                    Key::Escape => {
                        e.prevent_default();
                        dismiss();
                    }
                    Key::ArrowDown | Key::ArrowUp => {
                        e.prevent_default();
                        let forward = e.key() == Key::ArrowDown;
                        if !open() {
                            open.set(true);
                            active_index.set(0);
                        } else {
                            let current = active_index();
                            active_index.set(step_index(current, visible_count, forward));
                        }
                    }
                    Key::Enter => {
                        if open() {
                            e.prevent_default();
                            if let Some(value) = keyboard_targets.get(active_index()) {
                                commit(value.clone());
                            }
                        }
                    }
                    _ => {}
                }
            },
            ..merged,
            button {
                class: "cyber-combobox-trigger",
                r#type: "button",
                role: "combobox",
                aria_haspopup: "listbox",
                aria_expanded: "{is_open}",
                disabled: props.disabled,
                onclick: move |_| {
                    let next = !open();
                    open.set(next);
                    if !next {
                        query.set(String::new());
                    }
                    active_index.set(0);
                },
                span { class: value_class, "{display}" }
                span { class: "cyber-combobox-chevron",
                    Icon::<FaChevronDown> { icon: FaChevronDown, width: 12, height: 12 }
                }
            }
            if is_open {
                div {
                    class: "cyber-combobox-backdrop",
                    onclick: move |_| dismiss(),
                }
            }
            div {
                class: "cyber-combobox-content",
                hidden: !is_open,
                if props.searchable {
                    input {
                        class: "cyber-combobox-search",
                        r#type: "text",
                        placeholder: "Search...",
                        value: "{query}",
                        oninput: move |e: FormEvent| {
                            query.set(e.value());
                            active_index.set(0);
                        },
                    }
                }
                ul { class: "cyber-combobox-list", role: "listbox",
                    for VisibleOption { index, label, value, selected, active } in visible {
                        li {
                            key: "{index}",
                            class: if active { "cyber-combobox-item active" } else { "cyber-combobox-item" },
                            role: "option",
                            aria_selected: "{selected}",
                            onclick: move |_| commit(value.clone()),
                            span { class: "cyber-combobox-indicator",
                                if selected {
                                    Icon::<FaCheck> { icon: FaCheck, width: 10, height: 10 }
                                }
                            }
                            "{label}"
                        }
                    }
                }
                if visible_count == 0 {
                    div { class: "cyber-combobox-empty", "{props.empty_text}" }
                }
            }
        }
    }
}
