use dioxus::prelude::*;

#[component]
pub fn Header(title: String, tagline: String) -> Element {
    rsx! {
        header {
            class: "pt-10 pb-6 text-center",

            h1 {
                class: "text-4xl md:text-5xl font-black tracking-tight",
                span {
                    class: "bg-clip-text text-transparent bg-gradient-to-r from-[color:var(--color-neon-purple)] via-[color:var(--color-neon-pink)] to-[color:var(--color-neon-cyan)]",
                    "{title}"
                }
            }
            p { class: "mt-3 text-white/70 max-w-xl mx-auto", "{tagline}" }
        }
    }
}
