//! Page state
//!
//! The in-memory UI state of one page instance and the transitions the control
//! bar can trigger. Nothing here is persisted; a reload starts from `Default`.

use crate::i18n::Locale;
use crate::view::PageModel;

/// Cosmetic display switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayToggles {
    /// Hover lift and backdrop pulse on cards
    pub animations_enabled: bool,
    /// Strong shadow and wide blur on cards
    pub glow_enabled: bool,
}

impl Default for DisplayToggles {
    fn default() -> Self {
        Self {
            animations_enabled: true,
            glow_enabled: true,
        }
    }
}

/// What a control-bar button does when pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    ToggleAnimations,
    ToggleGlow,
    SetLocale(Locale),
}

impl ControlAction {
    /// Value of the button's `data-action` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlAction::ToggleAnimations => "toggle-animations",
            ControlAction::ToggleGlow => "toggle-glow",
            ControlAction::SetLocale(Locale::En) => "set-locale-en",
            ControlAction::SetLocale(Locale::Ru) => "set-locale-ru",
        }
    }
}

/// Full UI state of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageState {
    pub locale: Locale,
    pub toggles: DisplayToggles,
}

impl PageState {
    pub fn set_locale(&mut self, locale: Locale) {
        if self.locale != locale {
            tracing::debug!(from = %self.locale, to = %locale, "Locale changed");
        }
        self.locale = locale;
    }

    pub fn toggle_animations(&mut self) {
        self.toggles.animations_enabled = !self.toggles.animations_enabled;
        tracing::debug!(enabled = self.toggles.animations_enabled, "Animations toggled");
    }

    pub fn toggle_glow(&mut self) {
        self.toggles.glow_enabled = !self.toggles.glow_enabled;
        tracing::debug!(enabled = self.toggles.glow_enabled, "Glow toggled");
    }

    /// Run the transition bound to a control-bar button
    pub fn apply(&mut self, action: ControlAction) {
        match action {
            ControlAction::ToggleAnimations => self.toggle_animations(),
            ControlAction::ToggleGlow => self.toggle_glow(),
            ControlAction::SetLocale(locale) => self.set_locale(locale),
        }
    }

    /// Derive everything the page shows for this state
    pub fn render(&self) -> PageModel {
        PageModel::derive(self)
    }
}
