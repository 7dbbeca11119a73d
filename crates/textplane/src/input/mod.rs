//! Input state for picking
//!
//! Converts device-pixel pointer positions into the normalized device
//! coordinates the camera ray builder consumes.

pub mod pointer;

pub use pointer::PointerState;
