pub mod click;
pub mod hover;
pub mod pointer;
pub mod scroll;

pub use click::wire_click_effects;
pub use hover::wire_hover_effects;
pub use pointer::{wire_pointer_effects, wire_pointer_source};
pub use scroll::{wire_scroll_effects, wire_scroll_source};
