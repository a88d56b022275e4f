//! Shared components: the navbar and the layout pieces every section is built from.
pub mod layout;
pub mod navbar;
