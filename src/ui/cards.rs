use crate::types::link_card::CARD_COUNT;
use crate::view::CardModel;
use dioxus::prelude::*;

#[component]
pub fn CardGrid(cards: [CardModel; CARD_COUNT]) -> Element {
    rsx! {
        main {
            class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-5 md:gap-6",

            for card in cards {
                LinkCardView { key: "{card.href}", card: card.clone() }
            }
        }
    }
}

/// A single project card, opened in a new tab
#[component]
fn LinkCardView(card: CardModel) -> Element {
    rsx! {
        a {
            href: "{card.href}",
            target: "_blank",
            rel: "noopener noreferrer",
            class: "{card.class}",

            // Accent glow behind the card
            div { class: "{card.backdrop_class}" }

            div {
                class: "flex items-start justify-between gap-4",
                div {
                    h3 { class: "text-lg md:text-xl font-bold", "{card.title}" }
                    p { class: "mt-1 text-sm text-white/70", "{card.subtitle}" }
                }
                span { class: "{card.badge_class}", "{card.visit_label}" }
            }
        }
    }
}
