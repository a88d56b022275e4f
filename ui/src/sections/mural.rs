//=============================================================================
// File: src/sections/mural.rs
//=============================================================================
use crate::components::layout::PageSection;
use crate::content::{mural_delay, MURAL_CHARACTERS};
use crate::hooks::use_in_view;
use dioxus::prelude::*;

/// Wall of characters that pop in one by one once the grid is seen.
/// Not a navigation target, so it has no anchor.
#[component]
pub fn CharactersMural() -> Element {
    let in_view = use_in_view();
    let marker = in_view.marker();
    let grid_visible = in_view.class_if_visible("mural-grid--visible");

    rsx! {
        PageSection {
            class: "section characters-mural",
            div {
                class: "section-inner",
                onmounted: move |evt| in_view.attach(evt),
                "data-reveal": "{marker}",
                div {
                    class: "mural-header",
                    p { class: "section-label", "Mural Focus Café" }
                    h2 { class: "section-title", "Un muro lleno de personajes" }
                    p {
                        class: "section-description",
                        "Igual que en tu menú físico, este mural digital reúne a todas las versiones de tus personajes. "
                        "Aparecen uno por uno, como si se fueran acomodando en la pared."
                    }
                }

                div {
                    class: "mural-grid {grid_visible}",
                    for (index, character) in MURAL_CHARACTERS.iter().enumerate() {
                        div {
                            key: "{index}",
                            class: "mural-item",
                            style: "animation-delay: {mural_delay(index)};",
                            img { src: character.src, alt: character.alt }
                        }
                    }
                }
            }
        }
    }
}
