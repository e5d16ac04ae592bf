//! Control bar
//!
//! Display toggles, the language switch and the profile link. Each button
//! applies the [`ControlAction`] its model carries to the shared page signal,
//! so the binding is decided in the view model, not here.

use crate::app::AppState;
use crate::state::ControlAction;
use crate::view::{PageModel, ToggleModel};
use dioxus::prelude::*;

#[component]
pub fn ControlBar(model: PageModel) -> Element {
    rsx! {
        section {
            class: "mb-6 flex items-center justify-between gap-4",

            div {
                class: "flex items-center gap-2 text-xs md:text-sm text-white/70",

                ToggleSwitch { toggle: model.animations.clone(), spaced: false }
                ToggleSwitch { toggle: model.glow.clone(), spaced: true }

                // Language switch
                span { class: "ml-3", "{model.language_caption}" }
                div {
                    class: "inline-flex overflow-hidden rounded-full border border-white/10",
                    for option in model.locales.iter().cloned() {
                        ActionButton {
                            key: "{option.label}",
                            action: option.action,
                            button_class: option.class.clone(),
                            pressed: option.active,
                            label: option.label.to_string(),
                        }
                    }
                }
            }

            a {
                href: "{model.github_url}",
                target: "_blank",
                rel: "noopener noreferrer",
                class: "text-xs md:text-sm text-white/70 hover:text-white transition-colors",
                "{model.github_label}"
            }
        }
    }
}

/// Caption plus on/off button
#[component]
fn ToggleSwitch(toggle: ToggleModel, spaced: bool) -> Element {
    let caption_class = if spaced { "ml-3" } else { "" };

    rsx! {
        span { class: caption_class, "{toggle.caption}" }
        ActionButton {
            action: toggle.action,
            button_class: toggle.class.clone(),
            pressed: toggle.pressed,
            label: toggle.label.to_string(),
        }
    }
}

#[component]
fn ActionButton(
    action: ControlAction,
    button_class: String,
    pressed: bool,
    label: String,
) -> Element {
    let mut page = use_context::<AppState>().page;

    rsx! {
        button {
            class: "{button_class}",
            "aria-pressed": "{pressed}",
            "data-action": action.as_str(),
            onclick: move |_| page.write().apply(action),
            "{label}"
        }
    }
}
