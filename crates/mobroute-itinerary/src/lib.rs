//! Turn routes into something a player can follow.
//!
//! [`consolidate`] folds the steps of one or more [`Path`]s into a single
//! [`Stop`] per map, with merged mob tallies, the targets found there and
//! the portals to take next. Exits carry an [`Overlay`] position when the
//! map's minimap bounds are known. [`format_path`] and [`format_itinerary`]
//! render text, and [`marker_color`] picks stable colours for markers.
//!
//! [`Path`]: mobroute_paths::Path

mod consolidate;
mod format;
mod overlay;
mod palette;

#[cfg(test)]
mod testing;

pub use consolidate::{Exit, Stop, TallyPolicy, consolidate};
pub use format::{format_itinerary, format_path};
pub use overlay::Overlay;
pub use palette::{MARKER_PALETTE, Rgb, marker_color};
