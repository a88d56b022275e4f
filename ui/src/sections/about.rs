//=============================================================================
// File: src/sections/about.rs
//=============================================================================
use crate::components::layout::PageSection;
use crate::content::img;
use crate::hooks::use_in_view;
use crate::section::SectionId;
use dioxus::prelude::*;

/// (icon letter, bold lead, rest of the sentence)
const VALUES: [(&str, &str, &str); 3] = [
    (
        "A",
        "Ingredientes seleccionados:",
        "uso de insumos locales y opciones orgánicas siempre que es posible.",
    ),
    (
        "B",
        "Café de especialidad:",
        "granos de Veracruz y Puebla con tostados pensados para el día a día.",
    ),
    (
        "C",
        "Diseño coherente:",
        "del menú a la web, la misma identidad de personajes y colores.",
    ),
];

#[component]
pub fn AboutSection() -> Element {
    let in_view = use_in_view();
    let marker = in_view.marker();
    let reveal = in_view.class_if_visible("is-visible");

    rsx! {
        PageSection {
            anchor: SectionId::QuienesSomos,
            class: "section section-about",
            div {
                class: "section-inner about-grid fade-up {reveal}",
                onmounted: move |evt| in_view.attach(evt),
                "data-reveal": "{marker}",
                div {
                    class: "about-text",
                    p { class: "section-label", "Quiénes somos" }
                    h2 { class: "section-title", "Un café de barrio con alma" }
                    p {
                        class: "section-description",
                        "Focus Café nació con la idea de darle otra forma a las mañanas: café de especialidad, "
                        "desayunos sencillos y un espacio donde se antoje quedarse. Queremos que la gente nos "
                        "reconozca por el sabor y por los detalles."
                    }
                    ul {
                        class: "about-list",
                        for (icon, lead, rest) in VALUES {
                            li {
                                key: "{icon}",
                                span { class: "about-icon", "{icon}" }
                                span {
                                    strong { "{lead}" }
                                    " {rest}"
                                }
                            }
                        }
                    }
                    div { class: "about-tagline", "Hecho en León, con el ambiente de una cafetería de barrio." }
                }

                div {
                    class: "about-card",
                    div { class: "about-label", "Momento Focus" }
                    div {
                        class: "about-photo-placeholder",
                        img {
                            class: "about-photo-img",
                            src: img::INTERIOR,
                            alt: "Interior de Focus Café",
                        }
                    }
                }
            }
        }
    }
}
