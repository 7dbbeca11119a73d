//! Word-level picking: ray casting, hit resolution, highlight updates
//!
//! The pipeline per pointer-move: device pixels → NDC → world-space ray →
//! per-plane quad intersection → word-box lookup in texture space →
//! nearest-hit disambiguation → highlight and redraw signals.

mod coordinator;
mod ray;

pub use coordinator::{PickError, PickingCoordinator, WordHit};
pub use ray::{PlaneHit, Ray};
