//! Report rendering: block construction and delta formatting.

pub mod blocks;
pub mod renderer;

pub use blocks::{Block, TextRun};
pub use renderer::{build_page_blocks, page_title, render_and_publish};
