//=============================================================================
// File: src/hooks/use_in_view.rs
//=============================================================================

// Same platform split as `use_is_touch_device`: the browser and desktop
// builds watch the region, anything without a page to observe shows it
// straight away.

#[cfg(target_arch = "wasm32")]
pub use self::wasm32::*;

#[cfg(all(feature = "dioxus-desktop", not(target_arch = "wasm32")))]
pub use self::desktop::*;

#[cfg(all(not(target_arch = "wasm32"), not(feature = "dioxus-desktop")))]
pub use self::fallback::*;

#[cfg(any(target_arch = "wasm32", feature = "dioxus-desktop"))]
use std::{cell::RefCell, rc::Rc};

#[cfg(any(target_arch = "wasm32", feature = "dioxus-desktop"))]
use crate::{compat::ObservationHandle, reveal::RevealTracker};

/// A live observer together with the tracker it feeds.
/// Dropping it releases the tracker and disconnects the observer.
#[cfg(any(target_arch = "wasm32", feature = "dioxus-desktop"))]
struct Watch {
    tracker: Rc<RefCell<RevealTracker>>,
    _handle: ObservationHandle,
}

#[cfg(any(target_arch = "wasm32", feature = "dioxus-desktop"))]
impl Drop for Watch {
    fn drop(&mut self) {
        let mut tracker = self.tracker.borrow_mut();
        tracker.release();
        dioxus_logger::tracing::debug!("reveal watch released in phase {:?}", tracker.phase());
    }
}

/// A started tracker, shared between the watch and the observer callback.
#[cfg(any(target_arch = "wasm32", feature = "dioxus-desktop"))]
fn started_tracker() -> Rc<RefCell<RevealTracker>> {
    let mut tracker = RevealTracker::default();
    tracker.start();
    Rc::new(RefCell::new(tracker))
}

/// # WebAssembly (WASM) Implementation
/// Attaches an `IntersectionObserver` to the region once it is mounted and
/// flips `visible` the first time 20% of it is on screen.
#[cfg(target_arch = "wasm32")]
mod wasm32 {
    use std::rc::Rc;

    use dioxus::prelude::*;
    use dioxus_logger::tracing;
    use dioxus_web::WebEventExt;

    use super::{started_tracker, Watch};
    use crate::compat::ObservationHandle;
    use crate::reveal::RevealMarker;

    /// Reveal state of one region. Pass [`InView::attach`] to the region's
    /// `onmounted` and style it with [`InView::is_visible`].
    #[derive(Clone, Copy)]
    pub struct InView {
        visible: Signal<bool>,
        watch: CopyValue<Option<Watch>>,
        marker: RevealMarker,
    }

    impl InView {
        pub fn is_visible(&self) -> bool {
            (self.visible)()
        }

        /// Returns `class` once the region has been seen, otherwise `""`.
        pub fn class_if_visible(&self, class: &'static str) -> &'static str {
            if self.is_visible() {
                class
            } else {
                ""
            }
        }

        /// Value for the region's `data-reveal` attribute.
        pub fn marker(&self) -> RevealMarker {
            self.marker
        }

        pub fn attach(&self, event: MountedEvent) {
            let mut visible = self.visible;
            let mut watch = self.watch;
            if *visible.peek() || watch.read().is_some() {
                return;
            }

            let element = event.as_web_event();
            let tracker = started_tracker();
            let threshold = tracker.borrow().threshold();

            let fed = Rc::clone(&tracker);
            let observed = ObservationHandle::observe(&element, threshold, move |fraction| {
                let mut fed = fed.borrow_mut();
                if fed.record(fraction) {
                    visible.set(true);
                }
                !fed.is_watching()
            });

            match observed {
                Ok(handle) => watch.set(Some(Watch {
                    tracker,
                    _handle: handle,
                })),
                Err(e) => {
                    // Fail open: show the section without the animation.
                    tracing::warn!("reveal animation disabled: {}", e);
                    visible.set(true);
                }
            }
        }
    }

    pub fn use_in_view() -> InView {
        let visible = use_signal(|| false);
        // Owned by this scope, so unmounting the region drops the handle and
        // disconnects the observer even if it never fired.
        let watch = use_hook(|| CopyValue::new(None::<Watch>));
        let marker = use_hook(RevealMarker::next);
        InView {
            visible,
            watch,
            marker,
        }
    }
}

/// # Desktop Implementation
/// The webview has no element handle on the Rust side, so the region is found
/// by its `data-reveal` marker and observed from JavaScript, following the
/// eval pattern of the scroll bridge in `compat`.
#[cfg(all(feature = "dioxus-desktop", not(target_arch = "wasm32")))]
mod desktop {
    use std::rc::Rc;

    use dioxus::prelude::*;
    use dioxus_logger::tracing;

    use super::{started_tracker, Watch};
    use crate::compat::ObservationHandle;
    use crate::reveal::RevealMarker;

    #[derive(Clone, Copy)]
    pub struct InView {
        visible: Signal<bool>,
        watch: CopyValue<Option<Watch>>,
        marker: RevealMarker,
    }

    impl InView {
        pub fn is_visible(&self) -> bool {
            (self.visible)()
        }

        pub fn class_if_visible(&self, class: &'static str) -> &'static str {
            if self.is_visible() {
                class
            } else {
                ""
            }
        }

        pub fn marker(&self) -> RevealMarker {
            self.marker
        }

        /// Starts watching once the region is in the webview's DOM.
        pub fn attach(&self, _event: MountedEvent) {
            let mut visible = self.visible;
            let mut watch = self.watch;
            if *visible.peek() || watch.read().is_some() {
                return;
            }

            let tracker = started_tracker();
            let threshold = tracker.borrow().threshold();

            let fed = Rc::clone(&tracker);
            let handle = ObservationHandle::observe(
                self.marker.selector(),
                threshold,
                move |fraction| {
                    let mut fed = fed.borrow_mut();
                    if fed.record(fraction) {
                        visible.set(true);
                    }
                    !fed.is_watching()
                },
                move |e| {
                    tracing::warn!("reveal animation disabled: {}", e);
                    visible.set(true);
                },
            );

            watch.set(Some(Watch {
                tracker,
                _handle: handle,
            }));
        }
    }

    pub fn use_in_view() -> InView {
        let visible = use_signal(|| false);
        let watch = use_hook(|| CopyValue::new(None::<Watch>));
        let marker = use_hook(RevealMarker::next);
        InView {
            visible,
            watch,
            marker,
        }
    }
}

/// # Fallback Implementation
/// Without a page to observe, regions render already revealed.
#[cfg(all(not(target_arch = "wasm32"), not(feature = "dioxus-desktop")))]
mod fallback {
    use dioxus::prelude::*;

    use crate::reveal::RevealMarker;

    #[derive(Clone, Copy)]
    pub struct InView {
        visible: Signal<bool>,
        marker: RevealMarker,
    }

    impl InView {
        pub fn is_visible(&self) -> bool {
            (self.visible)()
        }

        pub fn class_if_visible(&self, class: &'static str) -> &'static str {
            if self.is_visible() {
                class
            } else {
                ""
            }
        }

        pub fn marker(&self) -> RevealMarker {
            self.marker
        }

        pub fn attach(&self, _event: MountedEvent) {}
    }

    pub fn use_in_view() -> InView {
        let visible = use_signal(|| true);
        let marker = use_hook(RevealMarker::next);
        InView { visible, marker }
    }
}
