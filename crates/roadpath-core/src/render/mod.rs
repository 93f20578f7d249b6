//! Map rendering
//!
//! Only SVG output is supported.

pub mod svg;

pub use svg::{render_svg, SvgStyle};
