//! Reusable building blocks shared by the page sections.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

use crate::section::SectionId;

//=============================================================================
// Layout Components
//=============================================================================

/// A top-level page section. Sections with an `anchor` can be scrolled to.
#[component]
pub fn PageSection(
    #[props(optional)] anchor: Option<SectionId>,
    #[props(into)] class: String,
    children: Element,
) -> Element {
    rsx! {
        section {
            id: anchor.map(|a| a.anchor()),
            class: "{class}",
            {children}
        }
    }
}

#[derive(PartialEq, Clone, Copy, Default)]
pub enum HeaderAlign {
    #[default]
    Left,
    Center,
}

impl HeaderAlign {
    fn to_class(self) -> &'static str {
        match self {
            HeaderAlign::Left => "section-header section-header--left",
            HeaderAlign::Center => "section-header section-header--center",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SectionHeaderProps {
    label: &'static str,
    title: &'static str,
    #[props(optional)]
    description: Option<&'static str>,
    #[props(default)]
    align: HeaderAlign,
}

/// Small label, title and optional description heading a section.
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    rsx! {
        div {
            class: props.align.to_class(),
            p { class: "section-label", "{props.label}" }
            h2 { class: "section-title", "{props.title}" }
            if let Some(description) = props.description {
                p { class: "section-description", "{description}" }
            }
        }
    }
}

//=============================================================================
// Content Components
//=============================================================================

/// A pill-shaped tag.
#[component]
pub fn Badge(children: Element) -> Element {
    rsx! { span { class: "badge", {children} } }
}

#[derive(PartialEq, Clone, Copy, Default)]
pub enum LinkStyle {
    #[default]
    Primary,
    Secondary,
    WhatsApp,
}

impl LinkStyle {
    fn to_class(self) -> &'static str {
        match self {
            LinkStyle::Primary => "btn-primary",
            LinkStyle::Secondary => "btn-secondary",
            LinkStyle::WhatsApp => "btn-whatsapp",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct LinkButtonProps {
    href: String,
    children: Element,
    #[props(default)]
    style: LinkStyle,
    /// Open in a new tab without leaking the referrer.
    #[props(default = false)]
    external: bool,
}

/// An anchor styled as a button.
pub fn LinkButton(props: LinkButtonProps) -> Element {
    rsx! {
        a {
            class: props.style.to_class(),
            href: "{props.href}",
            target: if props.external { "_blank" },
            rel: if props.external { "noreferrer" },
            {props.children}
        }
    }
}
