//! Theme persistence and application.
//!
//! The preference lives under the `theme` storage key and is applied as a
//! `data-theme` attribute on the document element, where the stylesheet
//! picks it up. Nothing is written until the visitor actually toggles.

use noorverse_types::Theme;

use crate::storage;

const THEME_KEY: &str = "theme";

/// The persisted preference, if any.
pub fn stored() -> Option<Theme> {
    Theme::from_stored(storage::read(THEME_KEY).as_deref())
}

/// Set `data-theme` on the document element.
pub fn apply(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        if root.set_attribute("data-theme", theme.as_str()).is_err() {
            log::warn!("failed to set data-theme attribute");
        }
    }
}

/// Persist the preference.
pub fn persist(theme: Theme) {
    storage::write(THEME_KEY, theme.as_str());
}
