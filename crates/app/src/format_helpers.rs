//! Display formatting for profile details shown next to the selector.

use shared_types::{Gender, Profile};

/// Human-readable gender label. Unspecified renders as "Not specified".
pub fn gender_label(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "Male",
        Gender::Female => "Female",
        Gender::Unspecified => "Not specified",
    }
}

/// Format the optional body measurements as "36 y · 54 kg · 165 cm".
///
/// Missing measurements are skipped; returns an empty string when none are set.
pub fn format_measurements(profile: &Profile) -> String {
    let parts: Vec<String> = [
        profile.age.map(|v| format!("{v} y")),
        profile.weight.map(|v| format!("{v} kg")),
        profile.height.map(|v| format!("{v} cm")),
    ]
    .into_iter()
    .flatten()
    .collect();
    parts.join(" · ")
}

/// One-line summary of a chosen profile.
pub fn describe_profile(profile: &Profile) -> String {
    let measurements = format_measurements(profile);
    if measurements.is_empty() {
        format!("#{} · {}", profile.id, gender_label(profile.gender))
    } else {
        format!(
            "#{} · {} · {}",
            profile.id,
            gender_label(profile.gender),
            measurements
        )
    }
}
