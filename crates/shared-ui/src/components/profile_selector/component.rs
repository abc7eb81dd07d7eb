use dioxus::prelude::*;
use shared_types::{Profile, ProfileId, SelectorConfig};

use super::state::{apply_selection, profile_options, Selection};
use crate::components::combobox::Combobox;

/// Searchable dropdown for picking one profile.
///
/// Keeps its own [`Selection`] and reports each pick to `on_change`, if set.
/// A new `profiles` list does not clear the selection; when the selected id
/// is gone the trigger falls back to the placeholder.
#[component]
pub fn ProfileSelector(
    /// Profiles to offer, in display order.
    profiles: Vec<Profile>,
    /// Called with the chosen profile after each pick.
    #[props(default)]
    on_change: Option<EventHandler<Profile>>,
    /// Placeholder, empty-result text, label, and search toggle.
    #[props(default)]
    config: SelectorConfig,
    #[props(default = false)] disabled: bool,
) -> Element {
    let mut selection = use_signal(Selection::default);

    let options = profile_options(&profiles);
    let current = selection.read().value();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "profile-selector",
            if !config.label.is_empty() {
                label { class: "profile-selector-label", "{config.label}" }
            }
            Combobox::<ProfileId> {
                value: current,
                options: options,
                placeholder: config.placeholder.clone(),
                empty_text: config.empty_text.clone(),
                searchable: config.searchable,
                disabled: disabled,
                on_change: move |value: ProfileId| {
                    let notify = on_change.map(|handler| move |profile: Profile| handler.call(profile));
                    apply_selection(&mut selection.write(), &profiles, value, notify);
                },
            }
        }
    }
}
