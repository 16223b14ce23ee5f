//! Page layout: styles, word wrapping, the vertical cursor and the layout pass.

mod cursor;
mod engine;
mod style;
mod wrap;

pub use cursor::{Cursor, PageGeometry};
pub use engine::LayoutEngine;
pub use style::{Font, FontFamily, FontVariant, Style, StyleSheet, BLANK_LINE_SIZE};
pub use wrap::{wrap, WordWrap, WrappedLines};
