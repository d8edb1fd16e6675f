//! Light/dark theme.

use std::fmt;

/// Page color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Storage and attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored preference. Unknown strings count as no preference.
    pub fn from_stored(raw: Option<&str>) -> Option<Theme> {
        match raw {
            Some("light") => Some(Theme::Light),
            Some("dark") => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The theme the toggle switches to. First press with nothing stored
    /// lands on dark.
    pub fn toggled_from(current: Option<Theme>) -> Theme {
        match current {
            Some(Theme::Dark) => Theme::Light,
            _ => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_storage() {
        assert_eq!(Theme::from_stored(Some("dark")), Some(Theme::Dark));
        assert_eq!(Theme::from_stored(Some("light")), Some(Theme::Light));
        assert_eq!(Theme::from_stored(Some("sepia")), None);
        assert_eq!(Theme::from_stored(None), None);
    }

    #[test]
    fn toggle_defaults_to_dark() {
        assert_eq!(Theme::toggled_from(None), Theme::Dark);
        assert_eq!(Theme::toggled_from(Some(Theme::Light)), Theme::Dark);
        assert_eq!(Theme::toggled_from(Some(Theme::Dark)), Theme::Light);
    }
}
