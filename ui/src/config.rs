//! Site facts shared by every section, provided once through the Dioxus context.

use std::ops::Deref;
use std::sync::Arc;

/// WhatsApp destination used by "Pedir por WhatsApp", country code included.
const DEFAULT_WHATSAPP: &str = "523317812099";

#[derive(Debug, PartialEq, Eq)]
pub struct SiteConfigData {
    pub brand: &'static str,
    pub tagline: &'static str,
    pub street: &'static str,
    pub neighborhood: &'static str,
    pub phones: [&'static str; 2],
    pub whatsapp_number: String,
    /// Show the "replace with the Google Maps iframe" note under the map placeholder.
    pub show_map_note: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig(Arc<SiteConfigData>);

impl Deref for SiteConfig {
    type Target = SiteConfigData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Default for SiteConfig {
    /// Compiled-in defaults, with build-time overrides:
    /// - `FOCUS_CAFE_WHATSAPP`: destination number for the WhatsApp link.
    /// - `FOCUS_CAFE_SHOW_MAP_NOTE`: "0" or "false" hides the map note.
    fn default() -> Self {
        let show_map_note = !matches!(
            option_env!("FOCUS_CAFE_SHOW_MAP_NOTE"),
            Some(val) if val == "0" || val.eq_ignore_ascii_case("false")
        );
        Self::new(
            option_env!("FOCUS_CAFE_WHATSAPP").unwrap_or(DEFAULT_WHATSAPP),
            show_map_note,
        )
    }
}

impl SiteConfig {
    pub fn new(whatsapp_number: &str, show_map_note: bool) -> Self {
        Self(Arc::new(SiteConfigData {
            brand: "Focus Café",
            tagline: "Cafetería y desayunos",
            street: "Calzada Tepeyac 401 Local A",
            neighborhood: "Colonia León Moderno · León, Guanajuato",
            phones: ["33 1781 2099", "477 567 0088"],
            whatsapp_number: whatsapp_number.to_string(),
            show_map_note,
        }))
    }

    /// `wa.me` link for the configured number. Spaces, dashes and a leading
    /// `+` are dropped since the service only accepts digits.
    pub fn whatsapp_link(&self) -> String {
        let digits: String = self
            .whatsapp_number
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        format!("https://wa.me/{digits}")
    }

    pub fn full_address(&self) -> String {
        format!("{} · {}", self.street, self.neighborhood)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_keeps_only_digits() {
        let config = SiteConfig::new("+52 33-1781-2099", true);
        assert_eq!(config.whatsapp_link(), "https://wa.me/523317812099");
    }

    #[test]
    fn default_number_is_prefilled() {
        let config = SiteConfig::new(DEFAULT_WHATSAPP, true);
        assert_eq!(config.whatsapp_link(), "https://wa.me/523317812099");
    }

    #[test]
    fn address_joins_street_and_neighborhood() {
        let config = SiteConfig::new(DEFAULT_WHATSAPP, false);
        assert_eq!(
            config.full_address(),
            "Calzada Tepeyac 401 Local A · Colonia León Moderno · León, Guanajuato"
        );
        assert!(!config.show_map_note);
    }
}
