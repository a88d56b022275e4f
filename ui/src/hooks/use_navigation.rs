use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::compat;
use crate::compat::PageScroller;
use crate::navigation::NavigationState;
use crate::section::SectionId;

/// Handle to the page's navigation controller.
///
/// The raw scroll offset lives in a plain [`NavigationState`]; only the two
/// flags the navbar renders from are signals, and they are written only when
/// they change.
#[derive(Clone, Copy)]
pub struct Navigation {
    state: CopyValue<NavigationState>,
    scrolled: Signal<bool>,
    menu_open: Signal<bool>,
}

impl Navigation {
    /// Whether the page is scrolled past the navbar threshold.
    /// Call this in a component to subscribe to changes.
    pub fn is_scrolled(&self) -> bool {
        (self.scrolled)()
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        (self.menu_open)()
    }

    pub fn toggle_mobile_menu(&mut self) {
        let open = {
            let mut state = self.state.write();
            state.toggle_mobile_menu();
            state.is_mobile_menu_open()
        };
        self.menu_open.set(open);
    }

    /// Smooth-scrolls to the element with `id` and closes the mobile menu.
    /// An unknown id only closes the menu.
    pub fn navigate_to(&mut self, id: &str) {
        let found = self.state.write().navigate_to(&PageScroller, id);
        if !found {
            tracing::debug!("navigation target #{} not on the page", id);
        }
        if *self.menu_open.peek() {
            self.menu_open.set(false);
        }
    }

    pub fn navigate_to_section(&mut self, section: SectionId) {
        self.navigate_to(section.anchor());
    }

    fn on_scroll(&mut self, scroll_y: f64) {
        let changed = self.state.write().on_scroll(scroll_y);
        if changed {
            let scrolled = self.state.read().is_scrolled();
            self.scrolled.set(scrolled);
        }
    }
}

/// Creates the page's single navigation controller and provides it to
/// descendants. Call once, at the root of the page.
pub fn use_navigation_controller() -> Navigation {
    let scrolled = use_signal(|| false);
    let menu_open = use_signal(|| false);
    let state = use_hook(|| CopyValue::new(NavigationState::default()));
    let navigation = Navigation {
        state,
        scrolled,
        menu_open,
    };

    // Held in the hook list, so the listener is removed when the page unmounts.
    use_hook(move || {
        let mut nav = navigation;
        if let Some(scroll_y) = compat::scroll_y() {
            nav.on_scroll(scroll_y);
        }
        match compat::ScrollListener::new(move |scroll_y| nav.on_scroll(scroll_y)) {
            Ok(listener) => Rc::new(Some(listener)),
            Err(e) => {
                tracing::warn!("navbar scroll tracking disabled: {}", e);
                Rc::new(None)
            }
        }
    });

    use_context_provider(|| navigation)
}

/// Retrieves the controller created by [`use_navigation_controller`].
pub fn use_navigation() -> Navigation {
    use_context::<Navigation>()
}
