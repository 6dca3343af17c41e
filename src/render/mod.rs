//! Fixed-width listing renderer

pub mod column;
pub mod listing;
pub mod style;

pub use column::{fit, Align, Field, NumberFormat};
pub use listing::{render_coin, render_message, Listing, Severity, Widths};
pub use style::Style;
