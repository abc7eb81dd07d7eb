use std::cell::RefCell;
use std::rc::Rc;

use dioxus::dioxus_core::ElementId;
use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use shared_types::{Profile, SelectorConfig};
use shared_ui::ProfileSelector;

use crate::common::*;

#[derive(Props, Clone, PartialEq)]
struct SelectorHarness {
    profiles: Vec<Profile>,
    #[props(default)]
    config: SelectorConfig,
    #[props(default = false)]
    with_callback: bool,
}

fn selector_harness(props: SelectorHarness) -> Element {
    if props.with_callback {
        rsx! {
            ProfileSelector {
                profiles: props.profiles.clone(),
                config: props.config.clone(),
                on_change: move |_profile: Profile| {},
            }
        }
    } else {
        rsx! {
            ProfileSelector {
                profiles: props.profiles.clone(),
                config: props.config.clone(),
            }
        }
    }
}

fn render_selector(profiles: Vec<Profile>, config: SelectorConfig) -> String {
    render_with_props(
        selector_harness,
        SelectorHarness {
            profiles,
            config,
            with_callback: false,
        },
    )
}

// ── Initial render ──────────────────────────────────────────────────

#[test]
fn initial_render_shows_placeholder_and_both_pioneers() {
    let html = render_selector(pioneers(), SelectorConfig::default());

    assert!(html.contains("Select Profile"));
    assert_eq!(option_count(&html), 2);
    assert!(html.contains("Ada Lovelace"));
    assert!(html.contains("Alan Turing"));
}

#[test]
fn options_follow_input_order() {
    let reversed: Vec<Profile> = pioneers().into_iter().rev().collect();
    let html = render_selector(reversed, SelectorConfig::default());

    assert!(position_of(&html, "Alan Turing") < position_of(&html, "Ada Lovelace"));
}

#[test]
fn option_count_matches_profile_count() {
    let roster: Vec<Profile> = (1..=7)
        .map(|id| Profile::new(id, format!("Runner{id}"), "Test"))
        .collect();
    let html = render_selector(roster, SelectorConfig::default());

    assert_eq!(option_count(&html), 7);
    assert!(html.contains("Runner7 Test"));
}

#[test]
fn nothing_is_marked_selected_initially() {
    let html = render_selector(pioneers(), SelectorConfig::default());

    assert!(!html.contains(r#"aria-selected="true""#));
    assert_eq!(html.matches(r#"aria-selected="false""#).count(), 2);
}

#[test]
fn list_starts_closed() {
    let html = render_selector(pioneers(), SelectorConfig::default());

    assert!(html.contains(r#"data-state="closed""#));
    assert!(html.contains(r#"aria-expanded="false""#));
}

// ── Edge cases ──────────────────────────────────────────────────────

#[test]
fn empty_roster_renders_no_options() {
    let html = render_selector(Vec::new(), SelectorConfig::default());

    assert_eq!(option_count(&html), 0);
    assert!(html.contains("Select Profile"));
    assert!(html.contains("No profiles found"));
}

#[test]
fn missing_surname_renders_partial_label() {
    let html = render_selector(vec![Profile::new(9, "Cher", "")], SelectorConfig::default());

    assert_eq!(option_count(&html), 1);
    assert!(html.contains("Cher"));
}

#[test]
fn renders_with_callback_registered() {
    let html = render_with_props(
        selector_harness,
        SelectorHarness {
            profiles: pioneers(),
            config: SelectorConfig::default(),
            with_callback: true,
        },
    );

    assert_eq!(option_count(&html), 2);
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn custom_placeholder_and_label() {
    let config = SelectorConfig {
        placeholder: "Choose athlete".into(),
        label: "Athlete".into(),
        ..SelectorConfig::default()
    };
    let html = render_selector(pioneers(), config);

    assert!(html.contains("Choose athlete"));
    assert!(!html.contains("Select Profile"));
    assert!(html.contains("profile-selector-label"));
    assert!(html.contains("Athlete"));
}

#[test]
fn no_label_element_without_label() {
    let html = render_selector(pioneers(), SelectorConfig::default());

    assert!(!html.contains("profile-selector-label"));
}

#[test]
fn search_box_follows_config() {
    let with_search = render_selector(pioneers(), SelectorConfig::default());
    assert!(with_search.contains("cyber-combobox-search"));

    let config = SelectorConfig {
        searchable: false,
        ..SelectorConfig::default()
    };
    let without_search = render_selector(pioneers(), config);
    assert!(!without_search.contains("cyber-combobox-search"));
}

// ── Picking through the widget ──────────────────────────────────────

/// Profiles handed to `on_change`, shared with the test body.
#[derive(Clone, Default)]
struct Picks(Rc<RefCell<Vec<Profile>>>);

impl Picks {
    fn ids(&self) -> Vec<i64> {
        self.0.borrow().iter().map(|p| p.id).collect()
    }
}

impl PartialEq for Picks {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Props, Clone, PartialEq)]
struct RecordingHarness {
    profiles: Vec<Profile>,
    picks: Picks,
}

fn recording_harness(props: RecordingHarness) -> Element {
    let picks = props.picks.clone();
    rsx! {
        ProfileSelector {
            profiles: props.profiles.clone(),
            on_change: move |profile: Profile| picks.0.borrow_mut().push(profile),
        }
    }
}

/// Mount the selector over the pioneers roster and return the dom with the
/// ids of the trigger button and the two options.
fn mount_recording(picks: &Picks) -> (VirtualDom, ElementIds) {
    let mut dom = VirtualDom::new_with_props(
        recording_harness,
        RecordingHarness {
            profiles: pioneers(),
            picks: picks.clone(),
        },
    );
    let edits = dom.rebuild_to_vec();
    let ids = ElementIds {
        trigger: ids_with_attribute(&edits, "aria-expanded")[0],
        options: ids_with_attribute(&edits, "aria-selected"),
    };
    (dom, ids)
}

struct ElementIds {
    trigger: ElementId,
    options: Vec<ElementId>,
}

#[test]
fn clicking_second_option_reports_alan_once() {
    let picks = Picks::default();
    let (mut dom, ids) = mount_recording(&picks);
    assert_eq!(ids.options.len(), 2);

    click(&mut dom, ids.options[1]);
    let html = dioxus_ssr::render(&dom);

    assert_eq!(picks.0.borrow().clone(), vec![Profile::new(2, "Alan", "Turing")]);
    assert!(html.contains(r#"data-state="closed""#));
    assert!(!html.contains("Select Profile"));
    assert_eq!(html.matches(r#"aria-selected="true""#).count(), 1);
    // The trigger renders before the list, so its label comes first.
    assert!(position_of(&html, "Alan Turing") < position_of(&html, "Ada Lovelace"));
}

#[test]
fn opening_then_picking_closes_the_list() {
    let picks = Picks::default();
    let (mut dom, ids) = mount_recording(&picks);

    click(&mut dom, ids.trigger);
    let opened = dioxus_ssr::render(&dom);
    assert!(opened.contains(r#"data-state="open""#));
    assert!(opened.contains(r#"aria-expanded="true""#));
    assert!(opened.contains("cyber-combobox-backdrop"));

    click(&mut dom, ids.options[0]);
    let closed = dioxus_ssr::render(&dom);

    assert_eq!(picks.ids(), vec![1]);
    assert!(closed.contains(r#"data-state="closed""#));
    assert!(!closed.contains("cyber-combobox-backdrop"));
    assert!(position_of(&closed, "Ada Lovelace") < position_of(&closed, "Alan Turing"));
}

#[test]
fn each_pick_replaces_the_previous_one() {
    let picks = Picks::default();
    let (mut dom, ids) = mount_recording(&picks);

    click(&mut dom, ids.options[0]);
    click(&mut dom, ids.options[1]);
    let html = dioxus_ssr::render(&dom);

    assert_eq!(picks.ids(), vec![1, 2]);
    assert_eq!(html.matches(r#"aria-selected="true""#).count(), 1);
    assert!(position_of(&html, "Alan Turing") < position_of(&html, "Ada Lovelace"));
}

#[test]
fn clicking_outside_closes_without_picking() {
    let picks = Picks::default();
    let (mut dom, ids) = mount_recording(&picks);

    let edits = click(&mut dom, ids.trigger);
    let backdrop = *click_listener_ids(&edits)
        .last()
        .expect("open list should mount a backdrop");

    click(&mut dom, backdrop);
    let html = dioxus_ssr::render(&dom);

    assert!(picks.ids().is_empty());
    assert!(html.contains(r#"data-state="closed""#));
    assert!(!html.contains("cyber-combobox-backdrop"));
    assert!(html.contains("Select Profile"));
}
