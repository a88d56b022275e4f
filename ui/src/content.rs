//! Hard-coded page copy: menu board, experience cards, mural and marquee.
//!
//! Image paths are served as static files next to the bundle.

use std::borrow::Cow;

pub mod img {
    pub const LOGO: &str = "/img/focus_logo.png";
    pub const INTERIOR: &str = "/img/Focus.jpeg";

    pub const CAFE_ANIMADO: &str = "/img/cafe_animado.png";
    pub const CAFE_NEGRA: &str = "/img/cafe_negra.png";
    pub const CAFE_PASTEL: &str = "/img/cafe_pastel.png";
    pub const CAFE_VERDE: &str = "/img/cafe_verde.png";

    pub const CUP_ANIMADO: &str = "/img/cup_animado.png";
    pub const CUP_NEGRA: &str = "/img/cup_negra.png";
    pub const CUP_PASTEL: &str = "/img/cup_pastel.png";
    pub const CUP_VERDE: &str = "/img/cup_verde.png";

    pub const TETERA_ANIMADO: &str = "/img/tetera_animado.png";
    pub const TETERA_NEGRA: &str = "/img/tetera_negra.png";
    pub const TETERA_PASTEL: &str = "/img/tetera_pastel.png";
    pub const TETERA_VERDE: &str = "/img/tetera_verde.png";
}

pub const MARQUEE_PHRASES: [&str; 6] = [
    "CAFÉ Y DESAYUNOS",
    "DE TODOS LOS DÍAS",
    "FOCUS CAFÉ",
    "CAFÉ DE ESPECIALIDAD",
    "AMBIENTE DE BARRIO",
    "DESAYUNOS TODO EL DÍA",
];

/// The marquee phrases twice over, so the CSS loop wraps without a gap.
pub fn marquee_loop() -> impl Iterator<Item = &'static str> {
    MARQUEE_PHRASES.iter().chain(MARQUEE_PHRASES.iter()).copied()
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MenuItem {
    pub name: &'static str,
    pub price: &'static str,
}

const fn item(name: &'static str, price: &'static str) -> MenuItem {
    MenuItem { name, price }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MenuGroup {
    pub title: &'static str,
    pub items: &'static [MenuItem],
}

/// Two columns on the menu board, each a list of titled groups.
pub const MENU_COLUMNS: [&[MenuGroup]; 2] = [
    &[
        MenuGroup {
            title: "Café caliente",
            items: &[
                item("Flat white", "$55"),
                item("Cappuccino", "$60"),
                item("Espresso americano", "$40"),
                item("Mocha", "$65"),
                item("Latte", "$65"),
            ],
        },
        MenuGroup {
            title: "Café frío",
            items: &[
                item("Latte frío", "$75"),
                item("Caramel macchiato", "$75"),
                item("Café vietnamita", "$75"),
                item("Cold brew para llevar", "$45"),
            ],
        },
    ],
    &[
        MenuGroup {
            title: "Desayunos",
            items: &[
                item("Sandwich Focus", "$90"),
                item("Sandwich de atún", "$70"),
                item("Grilled cheese", "$65"),
                item("Croissant de jamón", "$70"),
                item("Waffles con fruta", "$45"),
                item("Açaí de frutos rojos", "$55"),
            ],
        },
        MenuGroup {
            title: "Pan dulce",
            items: &[
                item("Strudel de manzana", "$30"),
                item("Pay de queso", "$30"),
                item("Mini croissant", "$25"),
            ],
        },
    ],
];

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ExperienceCard {
    pub icon: &'static str,
    pub icon_alt: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub highlight: bool,
}

pub const EXPERIENCE_CARDS: [ExperienceCard; 3] = [
    ExperienceCard {
        icon: img::TETERA_VERDE,
        icon_alt: "Tetera Focus Café",
        title: "Para sentarte un rato",
        body: "Mesas cómodas, enchufes disponibles y una barra donde puedes ver cómo se prepara tu bebida.",
        highlight: false,
    },
    ExperienceCard {
        icon: img::CUP_PASTEL,
        icon_alt: "Taza Focus Café",
        title: "Para tu ritual diario",
        body: "Personas que te reconocen, un café preparado a tu gusto y personajes que se repiten en tazas, paredes y en este sitio.",
        highlight: true,
    },
    ExperienceCard {
        icon: img::CAFE_ANIMADO,
        icon_alt: "Vaso cafecito Focus Café",
        title: "Para llevar contigo",
        body: "Opciones para llevar sin perder la experiencia: vasos ilustrados, mensajes breves y la misma calidad de café.",
        highlight: false,
    },
];

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MuralCharacter {
    pub src: &'static str,
    pub alt: &'static str,
}

const fn character(src: &'static str, alt: &'static str) -> MuralCharacter {
    MuralCharacter { src, alt }
}

pub const MURAL_CHARACTERS: [MuralCharacter; 16] = [
    character(img::TETERA_VERDE, "Tetera verde"),
    character(img::CUP_VERDE, "Taza verde"),
    character(img::CAFE_VERDE, "Vaso verde"),
    character(img::TETERA_PASTEL, "Tetera pastel"),
    character(img::CUP_PASTEL, "Taza pastel"),
    character(img::CAFE_PASTEL, "Vaso pastel"),
    character(img::TETERA_NEGRA, "Tetera negra"),
    character(img::CUP_NEGRA, "Taza negra"),
    character(img::CAFE_NEGRA, "Vaso negro"),
    character(img::TETERA_ANIMADO, "Tetera animada"),
    character(img::CUP_ANIMADO, "Taza animada"),
    character(img::CAFE_ANIMADO, "Vaso animado"),
    character(img::CUP_VERDE, "Taza verde"),
    character(img::CAFE_PASTEL, "Vaso pastel"),
    character(img::TETERA_NEGRA, "Tetera negra"),
    character(img::CUP_ANIMADO, "Taza animada"),
];

/// Seconds between consecutive mural characters popping in.
pub const MURAL_STAGGER_SECS: f64 = 0.12;

/// CSS `animation-delay` for the mural item at `index`.
pub fn mural_delay(index: usize) -> Cow<'static, str> {
    if index == 0 {
        return Cow::Borrowed("0s");
    }
    let secs = index as f64 * MURAL_STAGGER_SECS;
    Cow::Owned(format!("{}s", (secs * 100.0).round() / 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marquee_repeats_phrases_back_to_back() {
        let phrases: Vec<&str> = marquee_loop().collect();
        assert_eq!(phrases.len(), MARQUEE_PHRASES.len() * 2);
        assert_eq!(phrases[..6], phrases[6..]);
        assert_eq!(phrases[0], "CAFÉ Y DESAYUNOS");
    }

    #[test]
    fn mural_delays_are_staggered() {
        assert_eq!(mural_delay(0), "0s");
        assert_eq!(mural_delay(1), "0.12s");
        assert_eq!(mural_delay(5), "0.6s");
        assert_eq!(mural_delay(15), "1.8s");
    }

    #[test]
    fn every_menu_group_has_priced_items() {
        for group in MENU_COLUMNS.iter().flat_map(|column| column.iter()) {
            assert!(!group.items.is_empty(), "{} is empty", group.title);
            for item in group.items {
                assert!(item.price.starts_with('$'), "{} has no price", item.name);
            }
        }
    }

    #[test]
    fn one_experience_card_is_highlighted() {
        let highlighted = EXPERIENCE_CARDS.iter().filter(|c| c.highlight).count();
        assert_eq!(highlighted, 1);
    }
}
