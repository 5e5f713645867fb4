//! SVG markup handling

mod recolor;

pub use recolor::recolor;
