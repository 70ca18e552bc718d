//! Navigation model: link tables, icons, class selection and UI state.
//!
//! Everything here is independent of the DOM so it can be unit tested
//! natively; the browser wiring lives in `components::nav_bar` and
//! `sections`.

pub mod classes;
mod icons;
mod links;
mod state;

pub use classes::Variant;
pub use icons::NavIcon;
pub use links::{LinkKind, NavContext, NavEntry};
pub use state::{is_compact_offset, NavState};
