// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use dioxus_logger::tracing;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{
        Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
        ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
    };

    use crate::error::DomError;
    use crate::navigation::SectionScroller;

    fn window() -> Result<Window, DomError> {
        web_sys::window().ok_or(DomError::NoWindow)
    }

    fn js_error(value: &JsValue) -> String {
        value.as_string().unwrap_or_else(|| format!("{:?}", value))
    }

    /// Current vertical scroll offset of the page, if there is one.
    pub fn scroll_y() -> Option<f64> {
        web_sys::window()?.scroll_y().ok()
    }

    /// Scrolls the live document.
    pub struct PageScroller;

    impl SectionScroller for PageScroller {
        fn scroll_to(&self, id: &str) -> bool {
            let document = match window().and_then(|w| w.document().ok_or(DomError::NoDocument)) {
                Ok(document) => document,
                Err(e) => {
                    tracing::warn!("cannot scroll to #{}: {}", id, e);
                    return false;
                }
            };
            let Some(element) = document.get_element_by_id(id) else {
                return false;
            };

            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
    }

    /// A `scroll` listener on `window`, removed again when dropped.
    pub struct ScrollListener {
        window: Window,
        callback: Closure<dyn FnMut()>,
    }

    impl ScrollListener {
        pub fn new(mut on_scroll: impl FnMut(f64) + 'static) -> Result<Self, DomError> {
            let window = window()?;
            let source = window.clone();
            let callback = Closure::<dyn FnMut()>::new(move || {
                if let Ok(scroll_y) = source.scroll_y() {
                    on_scroll(scroll_y);
                }
            });
            window
                .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                .map_err(|e| DomError::Listener {
                    event: "scroll",
                    reason: js_error(&e),
                })?;
            Ok(Self { window, callback })
        }
    }

    impl Drop for ScrollListener {
        fn drop(&mut self) {
            let _ = self
                .window
                .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
        }
    }

    /// An `IntersectionObserver` watching one element. Dropping it disconnects
    /// the observer, whether or not it ever fired.
    pub struct ObservationHandle {
        observer: IntersectionObserver,
        _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    }

    impl ObservationHandle {
        /// Starts observing `element`. `on_fraction` receives each reported
        /// visible fraction and returns `true` once it wants no more; the
        /// observer disconnects itself at that point.
        pub fn observe(
            element: &Element,
            threshold: f64,
            mut on_fraction: impl FnMut(f64) -> bool + 'static,
        ) -> Result<Self, DomError> {
            let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        let fraction = if entry.is_intersecting() {
                            entry.intersection_ratio()
                        } else {
                            0.0
                        };
                        if on_fraction(fraction) {
                            observer.disconnect();
                            break;
                        }
                    }
                },
            );

            // The extra steps past `threshold` deliver another notification when
            // the crossing itself is reported a hair below it.
            let thresholds = js_sys::Array::of3(
                &JsValue::from_f64(threshold),
                &JsValue::from_f64((1.0 + threshold) / 2.0),
                &JsValue::from_f64(1.0),
            );
            let options = IntersectionObserverInit::new();
            options.set_threshold(&thresholds);

            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                    .map_err(|e| DomError::ObserverUnavailable(js_error(&e)))?;
            observer.observe(element);

            Ok(Self {
                observer,
                _callback: callback,
            })
        }
    }

    impl Drop for ObservationHandle {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use dioxus::core::Task;
    use dioxus::prelude::*;
    use dioxus_logger::tracing;

    use crate::error::DomError;
    use crate::navigation::SectionScroller;

    /// Reports `window.scrollY` now and on every scroll event.
    const SCROLL_BRIDGE_JS: &str = r#"
        const report = () => dioxus.send(window.scrollY);
        window.addEventListener("scroll", report, { passive: true });
        report();
        await new Promise(() => {});
    "#;

    /// Waits for `{ selector, thresholds }`, then relays each visible fraction
    /// of the matching element until told to stop. `null` means nothing could
    /// be observed.
    #[cfg(feature = "dioxus-desktop")]
    const OBSERVE_BRIDGE_JS: &str = r#"
        const { selector, thresholds } = await dioxus.recv();
        const target = document.querySelector(selector);
        if (!target || typeof IntersectionObserver === "undefined") {
            dioxus.send(null);
            return;
        }
        const observer = new IntersectionObserver((entries) => {
            if (!target.isConnected) {
                observer.disconnect();
                return;
            }
            for (const entry of entries) {
                dioxus.send(entry.isIntersecting ? entry.intersectionRatio : 0);
            }
        }, { threshold: thresholds });
        observer.observe(target);
        await dioxus.recv();
        observer.disconnect();
    "#;

    /// Native targets have no synchronous handle on the page; the webview
    /// bridge in [`ScrollListener`] delivers the initial offset instead.
    pub fn scroll_y() -> Option<f64> {
        None
    }

    /// Scrolls the page inside the desktop webview.
    ///
    /// The lookup happens on the JS side, where a missing id is a no-op, so
    /// a request is always reported as issued.
    pub struct PageScroller;

    impl SectionScroller for PageScroller {
        fn scroll_to(&self, id: &str) -> bool {
            let id = match serde_json::to_string(id) {
                Ok(quoted) => quoted,
                Err(e) => {
                    tracing::warn!("cannot quote section id {}: {}", id, e);
                    return false;
                }
            };
            let _ = document::eval(&format!(
                "document.getElementById({id})?.scrollIntoView({{ behavior: 'smooth', block: 'start' }});"
            ));
            true
        }
    }

    /// Scroll events relayed from the webview. Dropping it stops the relay task.
    pub struct ScrollListener {
        task: Task,
    }

    impl ScrollListener {
        pub fn new(mut on_scroll: impl FnMut(f64) + 'static) -> Result<Self, DomError> {
            let task = spawn(async move {
                let mut bridge = document::eval(SCROLL_BRIDGE_JS);
                while let Ok(scroll_y) = bridge.recv::<f64>().await {
                    on_scroll(scroll_y);
                }
                tracing::debug!("scroll bridge closed");
            });
            Ok(Self { task })
        }
    }

    impl Drop for ScrollListener {
        fn drop(&mut self) {
            self.task.cancel();
        }
    }

    /// An `IntersectionObserver` running inside the desktop webview, fed
    /// through an eval bridge. Dropping it stops the relay task.
    #[cfg(feature = "dioxus-desktop")]
    pub struct ObservationHandle {
        task: Task,
    }

    #[cfg(feature = "dioxus-desktop")]
    impl ObservationHandle {
        /// Starts observing the element matching `selector`. `on_fraction`
        /// behaves as on the web; `on_unavailable` runs instead when the
        /// webview cannot observe the element.
        pub fn observe(
            selector: String,
            threshold: f64,
            mut on_fraction: impl FnMut(f64) -> bool + 'static,
            on_unavailable: impl FnOnce(DomError) + 'static,
        ) -> Self {
            let task = spawn(async move {
                let mut bridge = document::eval(OBSERVE_BRIDGE_JS);
                let setup = serde_json::json!({
                    "selector": &selector,
                    "thresholds": [threshold, (1.0 + threshold) / 2.0, 1.0],
                });
                if let Err(e) = bridge.send(setup) {
                    on_unavailable(DomError::ObserverUnavailable(e.to_string()));
                    return;
                }

                loop {
                    match bridge.recv::<Option<f64>>().await {
                        Ok(Some(fraction)) => {
                            if on_fraction(fraction) {
                                let _ = bridge.send(true);
                                break;
                            }
                        }
                        Ok(None) => {
                            on_unavailable(DomError::ObserverUnavailable(format!(
                                "nothing matches {selector}"
                            )));
                            break;
                        }
                        Err(e) => {
                            on_unavailable(DomError::ObserverUnavailable(e.to_string()));
                            break;
                        }
                    }
                }
            });
            Self { task }
        }
    }

    #[cfg(feature = "dioxus-desktop")]
    impl Drop for ObservationHandle {
        fn drop(&mut self) {
            self.task.cancel();
        }
    }
}
