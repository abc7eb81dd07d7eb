use shared_types::{Profile, ProfileId};

use crate::components::combobox::ComboboxOption;

/// Selection held by a single `ProfileSelector`.
///
/// Starts `Unselected` and only moves on a user pick. Nothing moves it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(ProfileId),
}

impl Selection {
    pub fn value(&self) -> Option<ProfileId> {
        match self {
            Selection::Unselected => None,
            Selection::Selected(id) => Some(*id),
        }
    }
}

/// Project profiles onto combobox options, keeping input order.
pub fn profile_options(profiles: &[Profile]) -> Vec<ComboboxOption<ProfileId>> {
    profiles
        .iter()
        .map(|profile| ComboboxOption::new(profile.id, profile.full_name()))
        .collect()
}

/// Commit a pick reported by the widget.
///
/// Resolves `value` to the first profile carrying that id, stores it in
/// `selection`, then hands the profile to `on_change` once. A value with no
/// matching profile changes nothing and returns `None`.
pub fn apply_selection<F>(
    selection: &mut Selection,
    profiles: &[Profile],
    value: ProfileId,
    on_change: Option<F>,
) -> Option<Profile>
where
    F: FnOnce(Profile),
{
    let Some(profile) = profiles.iter().find(|p| p.id == value).cloned() else {
        tracing::warn!(profile_id = value, "selected value matches no profile");
        return None;
    };

    *selection = Selection::Selected(profile.id);
    tracing::debug!(profile_id = profile.id, "profile selected");

    if let Some(notify) = on_change {
        notify(profile.clone());
    }
    Some(profile)
}
