//! Engine-wide constants derived from the host map's web conventions.
//! Keeping them in a single place makes it easier to tweak magic numbers.

/// Default square tile size in pixels, used by cluster grid math.
pub const TILE_SIZE: u32 = 256;

/// Zoom level the view opens at.
pub const DEFAULT_ZOOM: f64 = 2.0;

/// Initial view center (lat, lng).
pub const DEFAULT_CENTER: (f64, f64) = (20.0, 0.0);

/// Lowest zoom the marker size policy interpolates from.
pub const MIN_ZOOM: f64 = 2.0;

/// Highest zoom supported by the basemap.
pub const MAX_ZOOM: f64 = 18.0;

/// Flat marker diameter at `MIN_ZOOM`.
pub const MIN_MARKER_SIZE: u32 = 6;

/// Flat marker diameter at `MAX_ZOOM`.
pub const MAX_MARKER_SIZE: u32 = 14;

/// Flat markers at or below this diameter get the thin 1px border.
pub const THIN_BORDER_THRESHOLD: u32 = 8;

/// Fixed diameter for markers in a clustering-aware collection.
pub const CLUSTER_MARKER_SIZE: u32 = 25;

/// Border width for markers in a clustering-aware collection.
pub const CLUSTER_MARKER_BORDER: u32 = 3;
