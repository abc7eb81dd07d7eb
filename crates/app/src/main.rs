use dioxus::prelude::*;
use shared_types::{parse_profiles, AppConfig, Profile, SelectorConfig};
use shared_ui::ProfileSelector;

mod format_helpers;
use format_helpers::describe_profile;

/// Bundled roster used in place of the `/profiles` endpoint.
const ROSTER_JSON: &str = include_str!("../assets/roster.json");
const CONFIG_TOML: &str = include_str!("../config.toml");

const DEMO_CSS: Asset = asset!("/assets/demo.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

/// Load selector settings, falling back to defaults on a bad config file.
fn load_selector_config() -> SelectorConfig {
    match AppConfig::from_toml_str(CONFIG_TOML) {
        Ok(config) => config.profile_selector,
        Err(err) => {
            tracing::warn!(%err, "using default profile selector config");
            SelectorConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let roster = use_hook(|| parse_profiles(ROSTER_JSON));
    let config = use_hook(load_selector_config);
    let mut chosen = use_signal(|| None::<Profile>);

    rsx! {
        document::Link { rel: "stylesheet", href: DEMO_CSS }
        main { class: "demo-page",
            h1 { "Test results" }
            {
                match roster {
                    Ok(profiles) => rsx! {
                        ProfileSelector {
                            profiles: profiles,
                            config: config,
                            on_change: move |profile: Profile| {
                                tracing::info!(profile_id = profile.id, "demo received selection");
                                chosen.set(Some(profile));
                            },
                        }
                    },
                    Err(err) => rsx! {
                        p { class: "demo-error", {err.friendly_message()} }
                    },
                }
            }
            {chosen.read().as_ref().map(|profile| rsx! {
                div { class: "demo-selection",
                    strong { {profile.full_name()} }
                    div { class: "demo-selection-meta", {describe_profile(profile)} }
                }
            })}
        }
    }
}
