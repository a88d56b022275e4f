// The page sections, top to bottom.

pub mod about;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod marquee;
pub mod menu_preview;
pub mod mural;
