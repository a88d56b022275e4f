//! The fixed set of page anchors the navbar can scroll to.

/// An addressable section of the landing page.
///
/// The string form is the element id rendered on the section root, so it is
/// also what `href="#..."` links and `navigate_to` use.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
pub enum SectionId {
    #[strum(serialize = "inicio")]
    Inicio,
    #[strum(serialize = "menu")]
    Menu,
    #[strum(serialize = "experiencia")]
    Experiencia,
    #[strum(serialize = "quienes-somos")]
    QuienesSomos,
    #[strum(serialize = "contacto")]
    Contacto,
}

impl SectionId {
    /// The element id of the section root.
    pub fn anchor(&self) -> &'static str {
        self.into()
    }

    /// The in-page link target, e.g. `#menu`.
    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }

    /// Label shown in the navbar, `None` for sections only reachable via the brand.
    pub fn nav_label(&self) -> Option<&'static str> {
        match self {
            SectionId::Inicio => None,
            SectionId::Menu => Some("Menú"),
            SectionId::Experiencia => Some("Experiencia"),
            SectionId::QuienesSomos => Some("Quiénes somos"),
            SectionId::Contacto => Some("Contáctanos"),
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.anchor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn every_anchor_parses_back_to_its_section() {
        for section in SectionId::iter() {
            assert_eq!(SectionId::from_str(section.anchor()), Ok(section));
        }
    }

    #[test]
    fn anchors_match_page_ids() {
        let anchors: Vec<&str> = SectionId::iter().map(|s| s.anchor()).collect();
        assert_eq!(
            anchors,
            ["inicio", "menu", "experiencia", "quienes-somos", "contacto"]
        );
    }

    #[test]
    fn unknown_anchor_is_rejected() {
        assert!(SectionId::from_str("does-not-exist").is_err());
        assert!(SectionId::from_str("Menu").is_err());
    }

    #[test]
    fn href_prefixes_hash() {
        assert_eq!(SectionId::QuienesSomos.href(), "#quienes-somos");
        assert_eq!(SectionId::Contacto.to_string(), "contacto");
    }

    #[test]
    fn only_inicio_lacks_a_nav_label() {
        let unlabeled: Vec<SectionId> = SectionId::iter()
            .filter(|s| s.nav_label().is_none())
            .collect();
        assert_eq!(unlabeled, [SectionId::Inicio]);
    }
}
