//! Root Dioxus application component
//!
//! This module contains the root components that own the page state and serve as
//! the top of the UI tree.

use crate::state::PageState;
use crate::ui::Layout;
use dioxus::prelude::*;

/// Application state shared across components
#[derive(Clone, Copy)]
pub struct AppState {
    pub page: Signal<PageState>,
}

#[derive(Props, Clone, PartialEq)]
pub struct RootProps {
    /// State the page starts from
    pub initial: PageState,
}

/// Page root for an arbitrary starting state
#[allow(non_snake_case)]
pub fn Root(props: RootProps) -> Element {
    let initial = props.initial;
    let page = use_signal(move || initial);
    use_context_provider(|| {
        tracing::info!(locale = %initial.locale, "AppState initialized");
        AppState { page }
    });

    rsx! {
        Layout {}
    }
}

#[component]
pub fn App() -> Element {
    rsx! {
        Root { initial: PageState::default() }
    }
}
