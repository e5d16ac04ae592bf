//! Localization
//!
//! The two supported locales and their string dictionaries. Each dictionary is a
//! `const` struct literal, so a locale missing a key does not compile.

use std::fmt;

/// Display language of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English, the primary locale
    #[default]
    En,
    /// Russian, the secondary locale
    Ru,
}

impl Locale {
    /// Every locale, in the order the switch shows them
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ru];

    /// Language tag, also used for the document `lang` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }

    /// Text on the locale switch button
    pub fn label(&self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Ru => "RU",
        }
    }

    pub fn dictionary(&self) -> &'static Dictionary {
        match self {
            Locale::En => &EN,
            Locale::Ru => &RU,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All user-facing strings for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dictionary {
    pub tagline: &'static str,
    pub animations: &'static str,
    pub glow: &'static str,
    pub on: &'static str,
    pub off: &'static str,
    pub visit: &'static str,
    pub portfolio_title: &'static str,
    pub portfolio_subtitle: &'static str,
    pub search_title: &'static str,
    pub search_subtitle: &'static str,
    pub guru_title: &'static str,
    pub guru_subtitle: &'static str,
    pub github: &'static str,
    pub lang: &'static str,
}

impl Dictionary {
    /// Label for a toggle in the given position
    pub fn switch_label(&self, enabled: bool) -> &'static str {
        if enabled {
            self.on
        } else {
            self.off
        }
    }

    /// Every entry with its key name, used to check coverage
    pub fn entries(&self) -> [(&'static str, &'static str); 14] {
        [
            ("tagline", self.tagline),
            ("animations", self.animations),
            ("glow", self.glow),
            ("on", self.on),
            ("off", self.off),
            ("visit", self.visit),
            ("portfolio_title", self.portfolio_title),
            ("portfolio_subtitle", self.portfolio_subtitle),
            ("search_title", self.search_title),
            ("search_subtitle", self.search_subtitle),
            ("guru_title", self.guru_title),
            ("guru_subtitle", self.guru_subtitle),
            ("github", self.github),
            ("lang", self.lang),
        ]
    }
}

const EN: Dictionary = Dictionary {
    tagline: "Neon navigator for my GitHub projects.",
    animations: "Animations",
    glow: "Glow",
    on: "On",
    off: "Off",
    visit: "Visit",
    portfolio_title: "My Portfolio",
    portfolio_subtitle: "Projects, contacts, presentations",
    search_title: "My Search Engine",
    search_subtitle: "Purple Browser — fast search",
    guru_title: "Gentoo USE-Flags GURU",
    guru_subtitle: "Navigator of USE flags for Gentoo",
    github: "github.com/FenchsApps",
    lang: "Language",
};

const RU: Dictionary = Dictionary {
    tagline: "Неоновый навигатор по моим проектам на GitHub.",
    animations: "Анимации",
    glow: "Свечение",
    on: "Вкл",
    off: "Выкл",
    visit: "Открыть",
    portfolio_title: "Моё портфолио",
    portfolio_subtitle: "Проекты, контакты, презентации",
    search_title: "Мой поисковик",
    search_subtitle: "Purple Browser — быстрый поиск",
    guru_title: "Gentoo USE-Flags GURU",
    guru_subtitle: "Навигатор флагов USE для Gentoo",
    github: "github.com/FenchsApps",
    lang: "Язык",
};
