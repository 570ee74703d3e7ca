//! Marker-layer management: the factory, the per-category collections,
//! and the visibility reconciliation that drives the map surface.

pub mod group;
pub mod marker;
pub mod store;
pub mod visibility;

pub use group::{ClusterGroup, LayerGroup, LayerId, RenderMode};
pub use marker::{border_width, marker_size, popup_html, Marker, MarkerIcon};
pub use store::{LayerGroupStore, MarkerEntry};
pub use visibility::{ClusterMode, FilterSet, VisibilityController};
