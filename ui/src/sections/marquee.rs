//=============================================================================
// File: src/sections/marquee.rs
//=============================================================================
use crate::content::marquee_loop;
use dioxus::prelude::*;

/// Endless strip of phrases. The list is rendered twice so the CSS
/// animation can wrap at the halfway point.
#[component]
pub fn HeroMarquee() -> Element {
    rsx! {
        section {
            class: "marquee-strip",
            div {
                class: "marquee-inner",
                for (index, phrase) in marquee_loop().enumerate() {
                    span { key: "{index}", "{phrase}" }
                }
            }
        }
    }
}
