//=============================================================================
// File: src/sections/hero.rs
//=============================================================================
use crate::components::layout::{Badge, LinkButton, LinkStyle, PageSection};
use crate::config::SiteConfig;
use crate::content::img;
use crate::hooks::use_in_view;
use crate::section::SectionId;
use dioxus::prelude::*;

#[component]
pub fn HeroSection() -> Element {
    let in_view = use_in_view();
    let marker = in_view.marker();
    let config = use_context::<SiteConfig>();
    let reveal = in_view.class_if_visible("is-visible");

    rsx! {
        PageSection {
            anchor: SectionId::Inicio,
            class: "section hero",
            div {
                class: "section-inner hero-grid",
                onmounted: move |evt| in_view.attach(evt),
                "data-reveal": "{marker}",
                div {
                    class: "hero-text fade-up {reveal}",
                    div { class: "hero-tag", "Otra forma de disfrutar el café" }
                    h1 {
                        class: "hero-title",
                        "{config.brand}"
                        span { class: "hero-highlight", " desayunos y café de especialidad" }
                    }
                    p {
                        class: "hero-subtitle",
                        "Croissants, waffles, sandwiches y café de fincas de Veracruz y Puebla. "
                        "Un espacio pensado para que tu mañana tenga su propio ritual."
                    }
                    div {
                        class: "hero-badges",
                        Badge { "Sabroso" }
                        Badge { "Café de especialidad" }
                        Badge { "Ambiente de barrio" }
                    }
                    div {
                        class: "hero-actions",
                        LinkButton { href: SectionId::Menu.href(), "Ver menú" }
                        LinkButton {
                            href: SectionId::Experiencia.href(),
                            style: LinkStyle::Secondary,
                            "Ver experiencia en el local"
                        }
                    }
                    p { class: "hero-note", "{config.full_address()}" }
                }

                div {
                    class: "hero-visual fade-up {reveal}",
                    div {
                        class: "hero-card hero-card-focus",
                        div {
                            class: "hero-card-header",
                            h2 { "Primera parada del día" }
                            p { "Un café claro, un desayuno sencillo y personajes que recuerdas." }
                        }
                        div {
                            class: "hero-card-body",
                            ul {
                                li { "Café de especialidad de Veracruz y Puebla" }
                                li { "Desayunos completos y pan dulce" }
                                li { "Espacio cómodo para trabajar o estudiar" }
                                li { "Identidad visual presente en todo el lugar" }
                            }
                        }
                        div {
                            class: "hero-character-placeholder hero-character-img",
                            img { src: img::CUP_VERDE, alt: "Personaje taza Focus Café" }
                        }
                    }
                }
            }
        }
    }
}
