//! Static export
//!
//! Renders the page to plain HTML with `dioxus-ssr`, so the site can be served
//! as a single file without a WASM bundle. The stylesheet travels inline with
//! the page body. Toggles keep their initial state in the exported page.

use crate::app::{Root, RootProps};
use crate::state::PageState;
use crate::view::SITE_TITLE;
use dioxus::dioxus_core::VirtualDom;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Tailwind runtime used by the exported document
pub const TAILWIND_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

/// Export-related errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),
    #[error("Page rendered to an empty document")]
    EmptyRender,
}

/// Render the page body for a state
pub fn render_body(state: &PageState) -> String {
    let mut dom = VirtualDom::new_with_props(Root, RootProps { initial: *state });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render a complete HTML document for a state
pub fn render_document(state: &PageState) -> Result<String, ExportError> {
    let body = render_body(state);
    if body.trim().is_empty() {
        return Err(ExportError::EmptyRender);
    }

    Ok(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"{lang}\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <script src=\"{tailwind}\"></script>\n\
         </head>\n\
         <body>\n\
         <div id=\"main\">{body}</div>\n\
         </body>\n\
         </html>\n",
        lang = state.locale,
        title = SITE_TITLE,
        tailwind = TAILWIND_SCRIPT,
    ))
}

/// Write the document for a state to `path`, creating parent directories
pub fn write_document(path: impl AsRef<Path>, state: &PageState) -> Result<(), ExportError> {
    let path = path.as_ref();
    let html = render_document(state)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, html)?;

    tracing::info!("Exported page to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::state::ControlAction;
    use crate::types::link_card::{GURU_URL, PORTFOLIO_URL, SEARCH_URL};
    use crate::view::{GITHUB_URL, GLOW_BLUR, GLOW_SHADOW, SOFT_BLUR, SOFT_SHADOW};

    /// Rendered body without the inlined stylesheet, for class assertions
    fn markup(state: &PageState) -> String {
        let html = render_body(state);
        match (html.find("<style"), html.find("</style>")) {
            (Some(start), Some(end)) => {
                format!("{}{}", &html[..start], &html[end + "</style>".len()..])
            }
            _ => html,
        }
    }

    #[test]
    fn test_initial_render_contains_page() {
        let html = render_body(&PageState::default());
        let dict = Locale::En.dictionary();

        assert!(html.contains(dict.tagline));
        assert!(html.contains(GITHUB_URL));
        assert!(html.contains("target=\"_blank\""));
        assert_eq!(html.matches("<a ").count(), 4, "three cards and the profile link");

        let portfolio = html.find(dict.portfolio_title).unwrap();
        let search = html.find(dict.search_title).unwrap();
        let guru = html.find(dict.guru_title).unwrap();
        assert!(portfolio < search && search < guru);
    }

    #[test]
    fn test_secondary_locale_render() {
        let mut state = PageState::default();
        state.set_locale(Locale::Ru);
        let html = render_body(&state);
        let dict = Locale::Ru.dictionary();

        assert!(html.contains(dict.tagline));
        assert!(html.contains(dict.portfolio_subtitle));
        assert!(html.contains(dict.visit));
        assert!(!html.contains(Locale::En.dictionary().tagline));
        for href in [PORTFOLIO_URL, SEARCH_URL, GURU_URL] {
            assert!(html.contains(href));
        }
    }

    #[test]
    fn test_locale_round_trip_html_matches() {
        let initial = render_body(&PageState::default());
        let mut state = PageState::default();
        state.set_locale(Locale::Ru);
        state.set_locale(Locale::En);
        assert_eq!(render_body(&state), initial);
    }

    #[test]
    fn test_glow_classes_in_html() {
        let mut state = PageState::default();
        let html = markup(&state);
        assert!(html.contains(GLOW_SHADOW) && html.contains(GLOW_BLUR));
        assert!(!html.contains(SOFT_SHADOW) && !html.contains(SOFT_BLUR));

        state.toggle_glow();
        let html = markup(&state);
        assert!(html.contains(SOFT_SHADOW) && html.contains(SOFT_BLUR));
        assert!(!html.contains(GLOW_BLUR));
    }

    #[test]
    fn test_document_wrapper() {
        let mut state = PageState::default();
        state.set_locale(Locale::Ru);
        let doc = render_document(&state).unwrap();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<html lang=\"ru\">"));
        assert!(doc.contains(TAILWIND_SCRIPT));
        assert!(doc.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_write_document_creates_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dist").join("index.html");
        write_document(&path, &PageState::default()).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_document(&PageState::default()).unwrap());
    }

    #[test]
    fn test_written_document_carries_its_styles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dist").join("index.html");
        write_document(&path, &PageState::default()).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains(".shadow-neon {"));
        assert!(written.contains(".shadow-neonSoft {"));
        assert!(written.contains("--color-neon-purple:"));
        assert_eq!(written.matches("<style").count(), 1);
        assert!(!written.contains("rel=\"stylesheet\""));
    }

    /// `data-action` values of the rendered buttons, in document order
    fn rendered_actions(html: &str) -> Vec<ControlAction> {
        let known = [
            ControlAction::ToggleAnimations,
            ControlAction::ToggleGlow,
            ControlAction::SetLocale(Locale::En),
            ControlAction::SetLocale(Locale::Ru),
        ];
        html.split("data-action=\"")
            .skip(1)
            .map(|rest| {
                let name = &rest[..rest.find('"').unwrap()];
                *known.iter().find(|action| action.as_str() == name).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_buttons_carry_their_actions() {
        let html = render_body(&PageState::default());
        assert_eq!(
            rendered_actions(&html),
            vec![
                ControlAction::ToggleAnimations,
                ControlAction::ToggleGlow,
                ControlAction::SetLocale(Locale::En),
                ControlAction::SetLocale(Locale::Ru),
            ]
        );

        // Each toggle button follows its own caption
        let dict = Locale::En.dictionary();
        let animations = html.find(dict.animations).unwrap();
        let animations_button = html.find("data-action=\"toggle-animations\"").unwrap();
        let glow = html.find(&format!(">{}<", dict.glow)).unwrap();
        let glow_button = html.find("data-action=\"toggle-glow\"").unwrap();
        assert!(animations < animations_button && animations_button < glow);
        assert!(glow < glow_button);
    }

    #[test]
    fn test_pressing_rendered_buttons_updates_page() {
        let mut state = PageState::default();
        let actions = rendered_actions(&render_body(&state));

        // Glow button
        state.apply(actions[1]);
        let html = markup(&state);
        assert!(html.contains(SOFT_BLUR) && !html.contains(GLOW_BLUR));
        assert!(html.contains("animate-[pulse"));

        // Animations button
        state.apply(actions[0]);
        let html = markup(&state);
        assert!(!html.contains("animate-[pulse"));
        assert!(!html.contains("hover:-translate-y-1"));

        // RU button
        state.apply(actions[3]);
        let html = markup(&state);
        assert!(html.contains(Locale::Ru.dictionary().tagline));
        assert!(html.contains(PORTFOLIO_URL));

        // EN button brings back the English page with the toggles still off
        state.apply(actions[2]);
        let html = markup(&state);
        assert!(html.contains(Locale::En.dictionary().tagline));
        assert!(html.contains(SOFT_SHADOW));
    }
}
