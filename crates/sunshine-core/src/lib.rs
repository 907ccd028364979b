//! Animation math and page-lifetime state for the sunshine-fx page effects.
//!
//! Nothing here touches the DOM. The WASM front-end samples the browser
//! (scroll offset, pointer position, element rectangles, visibility) and
//! feeds those samples through the types in this crate, then writes the
//! results back as inline styles.

pub mod config;
pub mod constants;
pub mod counter;
pub mod easing;
pub mod error;
pub mod events;
pub mod particles;
pub mod pointer;
pub mod reveal;
pub mod scramble;
pub mod scroll;
pub mod task;
pub mod transient;

pub use config::*;
pub use counter::*;
pub use easing::*;
pub use error::{ConfigError, FxError};
pub use events::*;
pub use particles::*;
pub use pointer::*;
pub use reveal::*;
pub use scramble::*;
pub use scroll::*;
pub use task::*;
pub use transient::*;
