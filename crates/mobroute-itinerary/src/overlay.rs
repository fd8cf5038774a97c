use mobroute_core::Point;
use mobroute_paths::MinimapInfo;
use serde::{Deserialize, Serialize};

/// Position of a portal marker on a minimap, as fractions of the image
/// (`0.0..=1.0` when the portal lies inside the map's visible bounds).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    pub x: f64,
    pub y: f64,
}

impl Overlay {
    /// Project world point `p` onto `minimap`.
    ///
    /// `None` when there is no minimap, no bounds, or the bounds are
    /// degenerate.
    pub fn project(minimap: Option<&MinimapInfo>, p: Point) -> Option<Self> {
        let bounds = minimap?.bounds?;
        let (x, y) = bounds.normalize(p)?;
        Some(Self { x, y })
    }

    /// Pixel position on a minimap displayed at `width × height`.
    pub fn scaled(&self, width: f64, height: f64) -> (f64, f64) {
        (self.x * width, self.y * height)
    }
}
