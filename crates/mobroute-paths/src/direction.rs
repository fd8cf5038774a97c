//! Human-readable portal positions ("top left", "bottom at x:400", ...).
//!
//! The label is cosmetic only. It never influences which route is chosen.

/// Reference map size used when a map's real extent is not considered.
pub const REFERENCE_WIDTH: i32 = 800;
pub const REFERENCE_HEIGHT: i32 = 600;

/// Edges of the outer bands, as fractions of the map size.
const LOW_BAND: f64 = 0.3;
const HIGH_BAND: f64 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Band {
    Low,
    Mid,
    High,
}

fn band(v: i32, size: i32) -> Band {
    let v = v as f64;
    let size = size as f64;
    if v <= size * LOW_BAND {
        Band::Low
    } else if v >= size * HIGH_BAND {
        Band::High
    } else {
        Band::Mid
    }
}

/// Describe where a portal at world `(x, y)` sits on a `width × height` map.
///
/// Each axis is split at 30% and 70%. A point in the middle band of both
/// axes is reported by its coordinates; otherwise the outer bands become
/// `left`/`right`/`top`/`bottom` and a middle-band axis is reported as a
/// coordinate on that axis alone.
pub fn portal_direction(x: i32, y: i32, width: i32, height: i32) -> String {
    let xs = match band(x, width) {
        Band::Low => Some("left"),
        Band::High => Some("right"),
        Band::Mid => None,
    };
    let ys = match band(y, height) {
        Band::Low => Some("top"),
        Band::High => Some("bottom"),
        Band::Mid => None,
    };
    match (xs, ys) {
        (None, None) => format!("at ({x}, {y})"),
        (None, Some(ys)) => format!("{ys} at x:{x}"),
        (Some(xs), None) => format!("{xs} at y:{y}"),
        (Some(xs), Some(ys)) => format!("{ys} {xs}"),
    }
}
