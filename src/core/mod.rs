//! Core types: coordinates, categories, constants, and the map facade.

pub mod category;
pub mod constants;
pub mod geo;
pub mod map;

pub use category::Category;
pub use geo::{LatLng, LatLngBounds, Point};
pub use map::{MapEvent, MarkerMap};
