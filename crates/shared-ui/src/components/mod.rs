// Widgets
pub mod combobox;

// Domain controls, built on the widgets above
pub mod profile_selector;

// Re-exports for convenience
pub use combobox::*;
pub use profile_selector::*;
