//! # instmap
//!
//! A marker-layer engine for rendering geolocated institutional records
//! on an interactive world map, grouped by category.
//!
//! The engine owns the mapping from category to marker collection,
//! switches between clustered and individually-sized rendering without
//! data loss, recomputes marker sizes from the live zoom level, and
//! keeps the attached layer set consistent with user-toggled filters.
//! The map viewport itself belongs to the host and is driven through
//! the narrow [`MapSurface`] interface.

pub mod core;
pub mod data;
pub mod layers;
pub mod prelude;
pub mod spatial;
pub mod traits;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    category::Category,
    geo::{LatLng, LatLngBounds, Point},
    map::{MapEvent, MarkerMap},
};

pub use data::locations::{parse_locations, DatasetStats, LocationRecord};

pub use layers::{
    group::{ClusterGroup, LayerGroup, LayerId, RenderMode},
    marker::{border_width, marker_size, Marker, MarkerIcon},
    store::{LayerGroupStore, MarkerEntry},
    visibility::{ClusterMode, FilterSet, VisibilityController},
};

pub use spatial::{clustering::Clustering, index::SpatialIndex};

pub use traits::MapSurface;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),
}

/// Error type alias for convenience
pub type Error = MapError;
