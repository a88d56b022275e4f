//=============================================================================
// File: src/sections/menu_preview.rs
//=============================================================================
use crate::components::layout::{HeaderAlign, PageSection, SectionHeader};
use crate::content::{MenuGroup, MenuItem, MENU_COLUMNS};
use crate::hooks::use_in_view;
use crate::section::SectionId;
use dioxus::prelude::*;

#[component]
fn MenuRow(item: MenuItem) -> Element {
    rsx! {
        div {
            class: "menu-item",
            span { "{item.name}" }
            span { class: "menu-item-price", "{item.price}" }
        }
    }
}

#[component]
fn MenuColumn(groups: &'static [MenuGroup]) -> Element {
    rsx! {
        div {
            class: "menu-column",
            for (index, group) in groups.iter().enumerate() {
                div {
                    key: "{group.title}",
                    class: "menu-group",
                    h3 {
                        class: "menu-column-title",
                        style: if index > 0 { "margin-top: 1rem;" },
                        "{group.title}"
                    }
                    for item in group.items.iter().copied() {
                        MenuRow { key: "{item.name}", item }
                    }
                }
            }
        }
    }
}

#[component]
pub fn MenuPreviewSection() -> Element {
    let in_view = use_in_view();
    let marker = in_view.marker();
    let reveal = in_view.class_if_visible("is-visible");

    rsx! {
        PageSection {
            anchor: SectionId::Menu,
            class: "section section-menu",
            div {
                class: "section-inner fade-up {reveal}",
                onmounted: move |evt| in_view.attach(evt),
                "data-reveal": "{marker}",
                SectionHeader {
                    label: "Carta Focus Café",
                    title: "Café y desayunos de todos los días",
                    description: "Inspirado en tu menú físico, este tablero muestra una selección de bebidas y platillos clave. En la versión final puedes conectar con tu carta completa o plataformas de pedido.",
                    align: HeaderAlign::Center,
                }

                div {
                    class: "menu-grid",
                    for (index, groups) in MENU_COLUMNS.iter().copied().enumerate() {
                        MenuColumn { key: "{index}", groups }
                    }

                    div {
                        class: "menu-highlight-card",
                        div { class: "menu-highlight-tag", "Combo recomendado" }
                        h3 { "Cold brew y croissant de jamón" }
                        p {
                            "Un clásico ligero para arrancar el día con energía. El cold brew resalta "
                            "notas de cacao y caramelo que combinan con el croissant salado."
                        }
                        ul {
                            class: "menu-highlight-list",
                            li { "Ideal para quienes vienen de paso" }
                            li { "Disponible para consumir aquí o para llevar" }
                            li { "Se puede personalizar con leches vegetales" }
                        }
                        span { class: "menu-highlight-pill", "Café de especialidad de Veracruz y Puebla" }
                    }
                }

                p {
                    class: "menu-note",
                    "Todos los productos y precios son de ejemplo. En producción se reemplazan con los de tu carta oficial."
                }
            }
        }
    }
}
