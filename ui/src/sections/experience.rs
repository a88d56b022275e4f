//=============================================================================
// File: src/sections/experience.rs
//=============================================================================
use crate::components::layout::{PageSection, SectionHeader};
use crate::content::{ExperienceCard, EXPERIENCE_CARDS};
use crate::hooks::use_in_view;
use crate::section::SectionId;
use dioxus::prelude::*;

#[component]
fn ExperienceTile(card: ExperienceCard) -> Element {
    let class = if card.highlight {
        "experience-card experience-card--highlight"
    } else {
        "experience-card"
    };
    rsx! {
        div {
            class,
            div {
                class: "experience-icon",
                img { src: card.icon, alt: card.icon_alt }
            }
            h3 { "{card.title}" }
            p { "{card.body}" }
        }
    }
}

#[component]
pub fn ExperienceSection() -> Element {
    let in_view = use_in_view();
    let marker = in_view.marker();
    let reveal = in_view.class_if_visible("is-visible");

    rsx! {
        PageSection {
            anchor: SectionId::Experiencia,
            class: "section section-experience",
            div {
                class: "section-inner fade-up {reveal}",
                onmounted: move |evt| in_view.attach(evt),
                "data-reveal": "{marker}",
                SectionHeader {
                    label: "Experiencia Focus Café",
                    title: "Más que una taza de café",
                    description: "El sitio web y el menú físico cuentan la misma historia: personajes amigables, colores reconocibles y un espacio que puedes sentir incluso antes de venir.",
                }
                div {
                    class: "experience-grid",
                    for card in EXPERIENCE_CARDS {
                        ExperienceTile { key: "{card.title}", card }
                    }
                }
            }
        }
    }
}
