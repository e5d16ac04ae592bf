//! Derived view data
//!
//! Turns a [`PageState`] into a [`PageModel`]: every string and CSS class the
//! page shows. The Dioxus components only lay this model out, so everything the
//! page displays can be checked without a renderer.

use crate::i18n::Locale;
use crate::state::{ControlAction, DisplayToggles, PageState};
use crate::types::link_card::CARD_COUNT;
use crate::types::{link_cards, Accent, LinkCard};

pub const SITE_TITLE: &str = "Fench's Navigator";
pub const GITHUB_URL: &str = "https://github.com/FenchsApps";
pub const FOOTER_TEXT: &str = "Fench's Navigator · GPL-3.0";
/// Page stylesheet, inlined so every render target carries it
pub const STYLESHEET: &str = include_str!("../assets/styles.css");

/// Card shadow with glow on
pub const GLOW_SHADOW: &str = "shadow-neon";
/// Card shadow with glow off
pub const SOFT_SHADOW: &str = "shadow-neonSoft";
/// Backdrop blur with glow on
pub const GLOW_BLUR: &str = "blur-2xl";
/// Backdrop blur with glow off
pub const SOFT_BLUR: &str = "blur-md";
pub const HOVER_LIFT: &str = "hover:-translate-y-1";
pub const PULSE: &str = "animate-[pulse_4s_ease-in-out_infinite]";

/// Join class parts with single spaces, skipping empty ones
fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn card_class(toggles: DisplayToggles) -> String {
    join_classes(&[
        "group relative rounded-2xl p-5 md:p-6 border",
        "bg-black/30 border-white/10 backdrop-blur",
        "transition-transform duration-300 ease-out",
        if toggles.animations_enabled { HOVER_LIFT } else { "" },
        if toggles.glow_enabled { GLOW_SHADOW } else { SOFT_SHADOW },
    ])
}

/// Gradient layer behind a card
pub fn backdrop_class(accent: Accent, toggles: DisplayToggles) -> String {
    join_classes(&[
        "absolute inset-0 rounded-2xl -z-10 opacity-60",
        "bg-gradient-to-br",
        accent.style().gradient,
        if toggles.glow_enabled { GLOW_BLUR } else { SOFT_BLUR },
        if toggles.animations_enabled { PULSE } else { "" },
    ])
}

/// The "visit" pill in the card corner
pub fn badge_class(accent: Accent) -> String {
    join_classes(&[
        "shrink-0 rounded-full px-2.5 py-1 text-xs font-semibold ring-2",
        accent.style().ring,
    ])
}

pub fn toggle_button_class(pressed: bool) -> String {
    join_classes(&[
        "inline-flex items-center rounded-full px-3 py-1 border border-white/10",
        if pressed { "bg-white/10" } else { "bg-transparent" },
    ])
}

pub fn locale_button_class(active: bool) -> String {
    join_classes(&[
        "px-3 py-1 text-xs",
        if active { "bg-white/10 text-white" } else { "text-white/70" },
    ])
}

/// One on/off switch in the control bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleModel {
    /// Caption next to the button
    pub caption: &'static str,
    /// Button text, the dictionary's on/off label
    pub label: &'static str,
    pub pressed: bool,
    pub class: String,
    pub action: ControlAction,
}

impl ToggleModel {
    fn new(caption: &'static str, pressed: bool, locale: Locale, action: ControlAction) -> Self {
        Self {
            action,
            caption,
            label: locale.dictionary().switch_label(pressed),
            pressed,
            class: toggle_button_class(pressed),
        }
    }
}

/// One entry of the language switch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleOption {
    pub locale: Locale,
    pub label: &'static str,
    pub active: bool,
    pub class: String,
    pub action: ControlAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub href: &'static str,
    pub visit_label: &'static str,
    pub class: String,
    pub backdrop_class: String,
    pub badge_class: String,
}

impl CardModel {
    fn new(card: &LinkCard, visit_label: &'static str, toggles: DisplayToggles) -> Self {
        Self {
            title: card.title,
            subtitle: card.subtitle,
            href: card.href,
            visit_label,
            class: card_class(toggles),
            backdrop_class: backdrop_class(card.accent, toggles),
            badge_class: badge_class(card.accent),
        }
    }
}

/// Everything the page shows for one state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageModel {
    pub locale: Locale,
    pub title: &'static str,
    pub tagline: &'static str,
    pub animations: ToggleModel,
    pub glow: ToggleModel,
    pub language_caption: &'static str,
    pub locales: [LocaleOption; 2],
    pub github_label: &'static str,
    pub github_url: &'static str,
    pub cards: [CardModel; CARD_COUNT],
    pub footer: &'static str,
}

impl PageModel {
    pub fn derive(state: &PageState) -> Self {
        let locale = state.locale;
        let toggles = state.toggles;
        let dict = locale.dictionary();

        let locales = Locale::ALL.map(|option| LocaleOption {
            locale: option,
            label: option.label(),
            active: option == locale,
            class: locale_button_class(option == locale),
            action: ControlAction::SetLocale(option),
        });

        let cards = link_cards(locale).map(|card| CardModel::new(&card, dict.visit, toggles));

        Self {
            locale,
            title: SITE_TITLE,
            tagline: dict.tagline,
            animations: ToggleModel::new(
                dict.animations,
                toggles.animations_enabled,
                locale,
                ControlAction::ToggleAnimations,
            ),
            glow: ToggleModel::new(
                dict.glow,
                toggles.glow_enabled,
                locale,
                ControlAction::ToggleGlow,
            ),
            language_caption: dict.lang,
            locales,
            github_label: dict.github,
            github_url: GITHUB_URL,
            cards,
            footer: FOOTER_TEXT,
        }
    }
}
