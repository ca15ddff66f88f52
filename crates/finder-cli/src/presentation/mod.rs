//! Presentation layer for CLI output.

pub mod filter_display;
pub mod tables;

pub use filter_display::filter_summary;
pub use tables::render_results;
