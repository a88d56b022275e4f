//=============================================================================
// File: src/components/navbar.rs
//=============================================================================
use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::config::SiteConfig;
use crate::content::img;
use crate::hooks::use_navigation;
use crate::section::SectionId;

/// Fixed header: brand, mobile menu toggle and section links.
///
/// Switches to `navbar--scrolled` once the page is scrolled past the threshold.
#[component]
pub fn Navbar() -> Element {
    let mut navigation = use_navigation();
    let config = use_context::<SiteConfig>();

    let header_class = if navigation.is_scrolled() {
        "navbar navbar--scrolled"
    } else {
        "navbar"
    };
    let links_class = if navigation.is_mobile_menu_open() {
        "nav-links nav-links--open"
    } else {
        "nav-links"
    };

    rsx! {
        header {
            class: header_class,
            div {
                class: "nav-inner",
                div {
                    class: "brand",
                    style: "cursor: pointer;",
                    onclick: move |_| navigation.navigate_to_section(SectionId::Inicio),
                    div {
                        class: "brand-logo",
                        "aria-hidden": "true",
                        img {
                            class: "brand-logo-img",
                            src: img::LOGO,
                            alt: "Logo {config.brand}",
                        }
                    }
                    div {
                        class: "brand-text",
                        div { class: "brand-title", "{config.brand}" }
                        div { class: "brand-subtitle", "{config.tagline}" }
                    }
                }

                button {
                    class: "nav-toggle",
                    "aria-label": "Abrir menú",
                    "aria-expanded": if navigation.is_mobile_menu_open() { "true" } else { "false" },
                    onclick: move |_| navigation.toggle_mobile_menu(),
                    span { class: "nav-toggle-line" }
                    span { class: "nav-toggle-line" }
                }

                nav {
                    class: links_class,
                    for section in SectionId::iter() {
                        if let Some(label) = section.nav_label() {
                            button {
                                key: "{section}",
                                class: "nav-link",
                                onclick: move |_| navigation.navigate_to_section(section),
                                "{label}"
                            }
                        }
                    }
                    button {
                        class: "nav-cta",
                        onclick: move |_| navigation.navigate_to_section(SectionId::Menu),
                        "Ver menú completo"
                    }
                }
            }
        }
    }
}
