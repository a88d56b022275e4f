//=============================================================================
// File: src/sections/footer.rs
//=============================================================================
use crate::config::SiteConfig;
use chrono::Datelike;
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let config = use_context::<SiteConfig>();
    let year = chrono::Local::now().year();

    rsx! {
        footer {
            class: "footer",
            "© {year} {config.brand}. {config.tagline}."
        }
    }
}
