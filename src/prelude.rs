//! Prelude module for common instmap types and traits
//!
//! Re-exports the most commonly used types and functions for easy
//! importing with `use instmap::prelude::*;`

pub use crate::core::{
    category::Category,
    constants,
    geo::{LatLng, LatLngBounds, Point},
    map::{MapEvent, MarkerMap},
};

pub use crate::data::{
    fetch::LocationClient,
    locations::{parse_locations, DatasetStats, LocationRecord, RawLocation},
};

pub use crate::layers::{
    group::{ClusterGroup, LayerGroup, LayerId, RenderMode},
    marker::{border_width, marker_size, popup_html, Marker, MarkerIcon},
    store::{LayerGroupStore, MarkerEntry},
    visibility::{ClusterMode, FilterSet, VisibilityController},
};

pub use crate::spatial::{
    clustering::{Cluster, Clustering, ClusteringConfig},
    index::{SpatialIndex, SpatialItem},
};

pub use crate::traits::MapSurface;

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
