//! Failures from the browser glue in [`crate::compat`].
//!
//! None of these reach the visitor. Hooks log them and fall back to a
//! degraded but readable page (sections shown, navbar unstyled).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// No global `window`, e.g. running outside a browser context.
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    /// The browser refused to construct an `IntersectionObserver`.
    #[error("intersection observer unavailable: {0}")]
    ObserverUnavailable(String),
    #[error("failed to register `{event}` listener: {reason}")]
    Listener { event: &'static str, reason: String },
}
