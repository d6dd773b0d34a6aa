//! Text layout for the scroll viewport
//!
//! Hard-wraps the input to the viewport width so the scroll core can measure
//! the content as `line_count * line_height`.

mod text_layout;

pub use text_layout::TextLayout;
