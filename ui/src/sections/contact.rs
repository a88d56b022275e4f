//=============================================================================
// File: src/sections/contact.rs
//=============================================================================
use crate::components::layout::{LinkButton, LinkStyle, PageSection};
use crate::config::SiteConfig;
use crate::hooks::use_in_view;
use crate::section::SectionId;
use dioxus::prelude::*;

#[component]
pub fn ContactSection() -> Element {
    let in_view = use_in_view();
    let marker = in_view.marker();
    let config = use_context::<SiteConfig>();
    let reveal = in_view.class_if_visible("is-visible");
    let whatsapp = config.whatsapp_link();

    rsx! {
        PageSection {
            anchor: SectionId::Contacto,
            class: "section section-contact",
            div {
                class: "section-inner contact-grid fade-up {reveal}",
                onmounted: move |evt| in_view.attach(evt),
                "data-reveal": "{marker}",
                div {
                    class: "contact-info",
                    p { class: "section-label", "Visítanos" }
                    h2 { class: "section-title", "Agenda tu siguiente visita" }
                    p {
                        class: "section-description",
                        "Puedes pasar directamente, anticipar tu pedido o reservar una mesa para una reunión pequeña. "
                        "Estos datos se adaptan a la operación real de {config.brand}."
                    }

                    div {
                        class: "contact-block",
                        h3 { class: "contact-heading", "Dirección" }
                        p {
                            "{config.street}"
                            br {}
                            "{config.neighborhood}"
                        }
                    }

                    div {
                        class: "contact-block",
                        h3 { class: "contact-heading", "Anticipa tu pedido" }
                        for (number, phone) in (1..).zip(config.phones) {
                            p { key: "{number}", "Teléfono {number}: {phone}" }
                        }
                        div {
                            class: "contact-actions",
                            LinkButton {
                                href: whatsapp,
                                style: LinkStyle::WhatsApp,
                                external: true,
                                "Pedir por WhatsApp"
                            }
                            button { class: "btn-ghost", r#type: "button", "Guardar contacto" }
                        }
                    }
                }

                div {
                    class: "contact-map",
                    div {
                        class: "map-card",
                        div {
                            class: "map-placeholder",
                            "Aquí puedes insertar el mapa de Google Maps con la ubicación de {config.brand}."
                        }
                        if config.show_map_note {
                            p {
                                class: "map-note",
                                "En producción, este cuadro se reemplaza con el iframe oficial de Google Maps "
                                "para que las personas ubiquen tu cafetería con un clic."
                            }
                        }
                    }
                }
            }
        }
    }
}
