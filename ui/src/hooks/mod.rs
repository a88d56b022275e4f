// Custom hooks shared by the page sections.

pub mod use_in_view;
pub mod use_navigation;

pub use use_in_view::use_in_view;
pub use use_in_view::InView;
pub use use_navigation::use_navigation;
pub use use_navigation::use_navigation_controller;
pub use use_navigation::Navigation;
