//! UI components for Fench's Navigator
//!
//! This module contains all user interface components built with Dioxus.

pub mod cards;
pub mod controls;
pub mod footer;
pub mod header;

use crate::app::AppState;
use crate::ui::cards::CardGrid;
use crate::ui::controls::ControlBar;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::view::STYLESHEET;
use dioxus::prelude::*;

/// Main page layout
#[component]
pub fn Layout() -> Element {
    let app_state = use_context::<AppState>();
    let model = app_state.page.read().render();

    rsx! {
        div {
            lang: "{model.locale}",
            class: "min-h-screen flex flex-col",

            style { "{STYLESHEET}" }

            Header {
                title: model.title.to_string(),
                tagline: model.tagline.to_string(),
            }

            div {
                class: "mx-auto w-full max-w-5xl px-4 md:px-6",

                ControlBar { model: model.clone() }

                CardGrid { cards: model.cards.clone() }
            }

            Footer { text: model.footer.to_string() }
        }
    }
}
