//! Broken-image fallback.

use leptos::prelude::*;

const PLACEHOLDER: &str = "./assets/images/placeholder.svg";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ImageSource {
    Primary,
    Alternate,
    Placeholder,
}

/// Next source to try after a load error. `None` once the placeholder is
/// up, so it is never re-applied.
fn next_source(current: ImageSource, has_alternate: bool) -> Option<ImageSource> {
    match current {
        ImageSource::Primary if has_alternate => Some(ImageSource::Alternate),
        ImageSource::Primary | ImageSource::Alternate => Some(ImageSource::Placeholder),
        ImageSource::Placeholder => None,
    }
}

/// An `<img>` that degrades gracefully: on a load error it tries the
/// alternate source once (when given), then settles on the placeholder.
#[component]
pub fn FallbackImg(
    /// Preferred source
    #[prop(into)] src: String,
    /// Alternate tried once before the placeholder
    alt_src: Option<String>,
    /// Alt text
    #[prop(into)] alt: String,
    /// Additional CSS class
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let stage = RwSignal::new(ImageSource::Primary);
    let has_alternate = alt_src.is_some();

    let current = {
        let src = src.clone();
        let alt_src = alt_src.clone();
        move || match stage.get() {
            ImageSource::Primary => src.clone(),
            ImageSource::Alternate => alt_src.clone().unwrap_or_else(|| PLACEHOLDER.to_string()),
            ImageSource::Placeholder => PLACEHOLDER.to_string(),
        }
    };

    let on_error = move |_| {
        if let Some(next) = next_source(stage.get_untracked(), has_alternate) {
            match next {
                ImageSource::Alternate => log::warn!("image failed ({src}), trying alt source"),
                ImageSource::Placeholder => log::warn!("image failed ({src}), using placeholder"),
                ImageSource::Primary => {}
            }
            stage.set(next);
        }
    };

    view! { <img class=class src=current alt=alt on:error=on_error /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tries_alternate_before_placeholder() {
        let next = next_source(ImageSource::Primary, true);
        assert_eq!(next, Some(ImageSource::Alternate));
        let next = next_source(ImageSource::Alternate, true);
        assert_eq!(next, Some(ImageSource::Placeholder));
    }

    #[test]
    fn skips_alternate_when_absent() {
        assert_eq!(
            next_source(ImageSource::Primary, false),
            Some(ImageSource::Placeholder)
        );
    }

    #[test]
    fn placeholder_is_terminal() {
        assert_eq!(next_source(ImageSource::Placeholder, true), None);
        assert_eq!(next_source(ImageSource::Placeholder, false), None);
    }
}
