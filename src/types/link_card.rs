//! Link card types
//!
//! Defines the project cards shown on the page and their accent colors.

use crate::i18n::Locale;

/// Number of cards on the page
pub const CARD_COUNT: usize = 3;

pub const PORTFOLIO_URL: &str = "https://fenchsapps.github.io";
pub const SEARCH_URL: &str = "https://fenchsapps.github.io/purple-browser";
pub const GURU_URL: &str = "https://fenchsapps.github.io/useflags-guru";

/// Color scheme of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Purple,
    Pink,
    Cyan,
}

/// Style tokens for one accent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentStyle {
    /// Ring color of the visit badge
    pub ring: &'static str,
    /// Two-color gradient of the card backdrop
    pub gradient: &'static str,
}

const PURPLE: AccentStyle = AccentStyle {
    ring: "ring-[color:var(--color-neon-purple)]",
    gradient: "from-[color:var(--color-neon-purple)] to-[color:var(--color-neon-pink)]",
};

const PINK: AccentStyle = AccentStyle {
    ring: "ring-[color:var(--color-neon-pink)]",
    gradient: "from-[color:var(--color-neon-pink)] to-[color:var(--color-neon-yellow)]",
};

const CYAN: AccentStyle = AccentStyle {
    ring: "ring-[color:var(--color-neon-cyan)]",
    gradient: "from-[color:var(--color-neon-cyan)] to-[color:var(--color-neon-purple)]",
};

impl Accent {
    pub fn style(&self) -> &'static AccentStyle {
        match self {
            Accent::Purple => &PURPLE,
            Accent::Pink => &PINK,
            Accent::Cyan => &CYAN,
        }
    }
}

/// A tile linking to one external project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCard {
    pub title: &'static str,
    pub href: &'static str,
    pub subtitle: &'static str,
    pub accent: Accent,
}

/// Build the cards for a locale
///
/// Titles and subtitles come from the locale's dictionary. The hrefs and accents
/// are the same for every locale.
pub fn link_cards(locale: Locale) -> [LinkCard; CARD_COUNT] {
    let dict = locale.dictionary();
    [
        LinkCard {
            title: dict.portfolio_title,
            href: PORTFOLIO_URL,
            subtitle: dict.portfolio_subtitle,
            accent: Accent::Purple,
        },
        LinkCard {
            title: dict.search_title,
            href: SEARCH_URL,
            subtitle: dict.search_subtitle,
            accent: Accent::Pink,
        },
        LinkCard {
            title: dict.guru_title,
            href: GURU_URL,
            subtitle: dict.guru_subtitle,
            accent: Accent::Cyan,
        },
    ]
}
