// The client-side Dioxus application: the Focus Café landing page.

use dioxus::prelude::*;

pub mod compat;
mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod hooks;
pub mod navigation;
pub mod reveal;
pub mod section;
mod sections;

use components::navbar::Navbar;
use config::SiteConfig;
use hooks::use_navigation_controller;
use sections::about::AboutSection;
use sections::contact::ContactSection;
use sections::experience::ExperienceSection;
use sections::footer::Footer;
use sections::hero::HeroSection;
use sections::marquee::HeroMarquee;
use sections::menu_preview::MenuPreviewSection;
use sections::mural::CharactersMural;

//=============================================================================
// MAIN APPLICATION COMPONENT
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let page_css = r#"
    /* --- RESET --- */
    * { box-sizing: border-box; }

    :root {
        --cafe-green: #2f5d50;
        --cafe-cream: #f7f1e8;
        --cafe-ink: #1f1b16;
        --cafe-muted: #6b6259;
        --cafe-accent: #d98c5f;
        --nav-height: 72px;
    }

    html { scroll-behavior: smooth; }

    body {
        margin: 0;
        font-family: "Inter", system-ui, sans-serif;
        color: var(--cafe-ink);
        background-color: var(--cafe-cream);
    }

    img { max-width: 100%; display: block; }

    /* --- NAVBAR --- */
    .navbar {
        position: fixed;
        top: 0; left: 0; right: 0;
        z-index: 100;
        height: var(--nav-height);
        background: transparent;
        transition: background-color 0.3s ease, box-shadow 0.3s ease;
    }

    /* Past the scroll threshold */
    .navbar--scrolled {
        background-color: rgba(247, 241, 232, 0.95);
        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.08);
        backdrop-filter: blur(8px);
    }

    .nav-inner {
        max-width: 1120px;
        height: 100%;
        margin: 0 auto;
        padding: 0 1.5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }

    .brand { display: flex; align-items: center; gap: 0.75rem; }
    .brand-logo-img { width: 44px; height: 44px; border-radius: 50%; }
    .brand-title { font-weight: 700; }
    .brand-subtitle { font-size: 0.8rem; color: var(--cafe-muted); }

    .nav-links { display: flex; align-items: center; gap: 1rem; }
    .nav-link, .nav-cta {
        border: none;
        background: none;
        font: inherit;
        cursor: pointer;
    }
    .nav-cta {
        padding: 0.5rem 1rem;
        border-radius: 999px;
        background-color: var(--cafe-green);
        color: white;
    }

    .nav-toggle { display: none; background: none; border: none; cursor: pointer; }
    .nav-toggle-line { display: block; width: 24px; height: 2px; margin: 5px 0; background: var(--cafe-ink); }

    /* --- SECTIONS --- */
    .section { padding: 5rem 1.5rem; scroll-margin-top: var(--nav-height); }
    .section-inner { max-width: 1120px; margin: 0 auto; }
    .hero { padding-top: calc(var(--nav-height) + 4rem); }
    .hero-grid, .about-grid, .contact-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; }
    .section-header--center { text-align: center; }
    .section-label { text-transform: uppercase; letter-spacing: 0.1em; color: var(--cafe-accent); }
    .section-description { color: var(--cafe-muted); max-width: 60ch; }
    .section-header--center .section-description { margin: 0 auto; }
    .badge { display: inline-block; padding: 0.25rem 0.75rem; margin-right: 0.5rem; border-radius: 999px; background: white; }
    .btn-primary, .btn-secondary, .btn-whatsapp, .btn-ghost {
        display: inline-block;
        padding: 0.75rem 1.25rem;
        border-radius: 999px;
        text-decoration: none;
    }
    .btn-primary { background: var(--cafe-green); color: white; }
    .btn-secondary { border: 1px solid var(--cafe-green); color: var(--cafe-green); }
    .btn-whatsapp { background: #25d366; color: white; }
    .btn-ghost { border: 1px solid var(--cafe-muted); background: none; font: inherit; }

    .menu-grid { display: grid; grid-template-columns: 1fr 1fr 1.2fr; gap: 2rem; margin-top: 2rem; }
    .menu-item { display: flex; justify-content: space-between; padding: 0.35rem 0; border-bottom: 1px dashed #d8cfc3; }
    .menu-item-price { font-weight: 600; }
    .menu-highlight-card { padding: 1.5rem; border-radius: 1rem; background: var(--cafe-green); color: white; }

    .experience-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; margin-top: 2rem; }
    .experience-card { padding: 1.5rem; border-radius: 1rem; background: white; }
    .experience-card--highlight { background: var(--cafe-green); color: white; }
    .experience-icon img { height: 72px; }

    .map-placeholder { padding: 3rem 1.5rem; border: 2px dashed #d8cfc3; border-radius: 1rem; text-align: center; }

    .footer { padding: 2rem; text-align: center; color: var(--cafe-muted); }

    /* --- REVEAL ON SCROLL --- */
    .fade-up {
        opacity: 0;
        transform: translateY(24px);
        transition: opacity 0.7s ease, transform 0.7s ease;
    }
    .fade-up.is-visible { opacity: 1; transform: none; }

    /* --- MARQUEE --- */
    .marquee-strip { overflow: hidden; background: var(--cafe-ink); color: var(--cafe-cream); padding: 0.75rem 0; }
    .marquee-inner { display: flex; width: max-content; gap: 3rem; animation: marquee 30s linear infinite; }
    @keyframes marquee {
        from { transform: translateX(0); }
        to { transform: translateX(-50%); }
    }

    /* --- MURAL --- */
    .mural-grid { display: grid; grid-template-columns: repeat(8, 1fr); gap: 1rem; margin-top: 2rem; }
    .mural-item { opacity: 0; transform: scale(0.6); }
    .mural-grid--visible .mural-item { animation: mural-pop 0.5s ease forwards; }
    @keyframes mural-pop {
        to { opacity: 1; transform: scale(1); }
    }

    /* --- Mobile Styles --- */
    @media (max-width: 820px) {
        .nav-toggle { display: block; }
        .nav-links {
            display: none;
            position: absolute;
            top: var(--nav-height); left: 0; right: 0;
            flex-direction: column;
            padding: 1rem;
            background: var(--cafe-cream);
        }
        .nav-links--open { display: flex; }
        .hero-grid, .about-grid, .contact-grid, .menu-grid, .experience-grid { grid-template-columns: 1fr; }
        .mural-grid { grid-template-columns: repeat(4, 1fr); }
    }

    @media (prefers-reduced-motion: reduce) {
        .fade-up, .mural-item { opacity: 1; transform: none; transition: none; animation: none; }
        .marquee-inner { animation: none; }
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Title { "Focus Café · Cafetería y desayunos" }
        style {
            "{page_css}"
        }
        LandingPage {}
    }
}

/// Owns the page-wide state and lays out every section.
#[component]
fn LandingPage() -> Element {
    use_context_provider(SiteConfig::default);
    use_navigation_controller();

    rsx! {
        div {
            class: "page-root",
            div {
                class: "coffee-beans-bg",
                "aria-hidden": "true",
                for index in 0..4 {
                    div { key: "{index}", class: "bean" }
                }
            }
            Navbar {}
            main {
                HeroSection {}
                HeroMarquee {}
                MenuPreviewSection {}
                ExperienceSection {}
                CharactersMural {}
                AboutSection {}
                ContactSection {}
            }
            Footer {}
        }
    }
}
