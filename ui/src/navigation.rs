//! Navbar state: page scroll position, the mobile menu flag, and section navigation.
//!
//! These types carry no framework or browser handles. The `use_navigation_controller`
//! hook owns one [`NavigationState`] per page and wires it to the platform.

use crate::section::SectionId;

/// Scroll offset in pixels past which the navbar switches to its scrolled style.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 10.0;

/// Platform seam for moving the viewport to a section.
pub trait SectionScroller {
    /// Smooth-scrolls so the element with `id` is aligned to the top of the
    /// viewport. Returns `false` when no such element exists.
    fn scroll_to(&self, id: &str) -> bool;
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct ScrollState {
    scroll_y: f64,
}

impl ScrollState {
    pub fn at(scroll_y: f64) -> Self {
        Self { scroll_y }
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn is_past_threshold(&self) -> bool {
        self.scroll_y > NAVBAR_SCROLL_THRESHOLD
    }

    /// Updates the position and reports whether `is_past_threshold` flipped.
    pub fn record(&mut self, scroll_y: f64) -> bool {
        let was_past = self.is_past_threshold();
        self.scroll_y = scroll_y;
        was_past != self.is_past_threshold()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Single owner of the page-wide scroll and menu state.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct NavigationState {
    pub scroll: ScrollState,
    pub menu: MenuState,
}

impl NavigationState {
    /// Feeds a scroll event. Returns `true` if the navbar style must change.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        self.scroll.record(scroll_y)
    }

    pub fn is_scrolled(&self) -> bool {
        self.scroll.is_past_threshold()
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.menu.toggle();
    }

    /// Scrolls to `id` if it exists, then closes the mobile menu either way.
    ///
    /// A missing section is not an error. Returns whether a scroll was requested.
    pub fn navigate_to(&mut self, scroller: &impl SectionScroller, id: &str) -> bool {
        let found = scroller.scroll_to(id);
        self.menu.close();
        found
    }

    pub fn navigate_to_section(
        &mut self,
        scroller: &impl SectionScroller,
        section: SectionId,
    ) -> bool {
        self.navigate_to(scroller, section.anchor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// A page with a fixed set of element ids that records scroll requests.
    struct FakePage {
        ids: Vec<&'static str>,
        scrolled_to: RefCell<Vec<String>>,
    }

    impl FakePage {
        fn with_sections() -> Self {
            Self {
                ids: vec!["inicio", "menu", "experiencia", "quienes-somos", "contacto"],
                scrolled_to: RefCell::new(Vec::new()),
            }
        }
    }

    impl SectionScroller for FakePage {
        fn scroll_to(&self, id: &str) -> bool {
            if self.ids.iter().any(|known| *known == id) {
                self.scrolled_to.borrow_mut().push(id.to_string());
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn past_threshold_is_strictly_greater_than_ten() {
        assert!(!ScrollState::at(0.0).is_past_threshold());
        assert!(!ScrollState::at(10.0).is_past_threshold());
        assert!(ScrollState::at(10.5).is_past_threshold());
        assert!(ScrollState::at(11.0).is_past_threshold());
        assert!(ScrollState::at(250_000.0).is_past_threshold());
    }

    #[test]
    fn record_reports_only_threshold_crossings() {
        let mut scroll = ScrollState::default();
        assert!(!scroll.record(5.0));
        assert!(!scroll.record(10.0));
        assert!(scroll.record(11.0));
        assert!(!scroll.record(400.0));
        assert_eq!(scroll.scroll_y(), 400.0);
        assert!(scroll.record(0.0));
        assert!(!scroll.is_past_threshold());
    }

    #[test]
    fn navigate_to_existing_section_scrolls_and_closes_menu() {
        let page = FakePage::with_sections();
        for initially_open in [false, true] {
            let mut nav = NavigationState::default();
            if initially_open {
                nav.toggle_mobile_menu();
            }
            assert!(nav.navigate_to(&page, "menu"));
            assert!(!nav.is_mobile_menu_open());
        }
        assert_eq!(*page.scrolled_to.borrow(), ["menu", "menu"]);
    }

    #[test]
    fn navigate_to_missing_section_is_silent_and_still_closes_menu() {
        let page = FakePage::with_sections();
        let mut nav = NavigationState::default();
        nav.on_scroll(120.0);
        nav.toggle_mobile_menu();

        assert!(!nav.navigate_to(&page, "does-not-exist"));
        assert!(!nav.is_mobile_menu_open());
        assert!(page.scrolled_to.borrow().is_empty());
        assert_eq!(nav.scroll.scroll_y(), 120.0);
    }

    #[test]
    fn navigate_by_section_id_uses_anchor() {
        let page = FakePage::with_sections();
        let mut nav = NavigationState::default();
        assert!(nav.navigate_to_section(&page, SectionId::QuienesSomos));
        assert_eq!(*page.scrolled_to.borrow(), ["quienes-somos"]);
    }

    #[test]
    fn toggle_mobile_menu_flips() {
        let mut nav = NavigationState::default();
        nav.toggle_mobile_menu();
        assert!(nav.is_mobile_menu_open());
        nav.toggle_mobile_menu();
        assert!(!nav.is_mobile_menu_open());
    }
}
