use dioxus::prelude::*;

#[component]
pub fn Footer(text: String) -> Element {
    rsx! {
        footer {
            class: "mt-auto text-center py-10 text-xs md:text-sm text-white/60",
            "{text}"
        }
    }
}
