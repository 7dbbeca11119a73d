//! Text layout in plane pixel space
//!
//! Word wrapping and bounding-box queries. Glyph rasterization itself is
//! the rendering collaborator's job; this module only decides where each
//! word sits, in the exact pixel space the picking math maps hits into.

pub mod layout;

pub use layout::{LayoutEngine, MonospaceLayout, TextLayout, WordBox};
