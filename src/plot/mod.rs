//! Chart rendering: ASCII for the terminal, SVG files via Plotters.

pub mod ascii;
pub mod svg;

pub use ascii::*;
pub use svg::write_charts;
