//! Pointer state and screen-to-NDC conversion

/// Pointer position over the render surface, in device pixels
///
/// Coordinates are relative to the surface's top-left corner. The surface
/// size is tracked alongside the position so resize events keep NDC
/// conversion accurate.
#[derive(Debug, Clone)]
pub struct PointerState {
    /// Current X position in pixels from the left edge
    pub x: f64,
    /// Current Y position in pixels from the top edge
    pub y: f64,
    /// Render surface width in pixels
    pub surface_width: u32,
    /// Render surface height in pixels
    pub surface_height: u32,
}

impl PointerState {
    /// Create a pointer state resting at the surface's top-left corner
    pub fn new(surface_width: u32, surface_height: u32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            surface_width,
            surface_height,
        }
    }

    /// Update the pointer position from a pointer-move event
    pub fn update_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Update the surface size after a resize event
    pub fn update_surface_size(&mut self, width: u32, height: u32) {
        self.surface_width = width;
        self.surface_height = height;
    }

    /// Convert the current position to normalized device coordinates
    ///
    /// NDC x runs -1 (left) to +1 (right); NDC y runs -1 (bottom) to +1
    /// (top). Screen y grows downward, so the y axis is flipped here:
    /// `ndc_y = -((y / height) * 2 - 1)`.
    pub fn to_ndc(&self) -> (f32, f32) {
        let ndc_x = (self.x / f64::from(self.surface_width)) as f32 * 2.0 - 1.0;
        let ndc_y = -((self.y / f64::from(self.surface_height)) as f32 * 2.0 - 1.0);
        (ndc_x, ndc_y)
    }
}
