//! Core data model for the terminal widget

pub mod route;
pub mod scrollback;

pub use route::Route;
pub use scrollback::{LineKind, Scrollback, ScrollbackLine};
