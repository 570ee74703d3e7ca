use crate::core::category::Category;
use crate::core::geo::LatLngBounds;
use crate::layers::marker::Marker;
use crate::spatial::clustering::{Cluster, Clustering, ClusteringConfig};
use std::fmt;

/// Which render strategy a collection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    Clustered,
    Flat,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Clustered => write!(f, "clustered"),
            RenderMode::Flat => write!(f, "flat"),
        }
    }
}

/// Identifies one attachable collection on the map surface. Each
/// category owns exactly two: its clustered and its flat collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId {
    pub category: Category,
    pub mode: RenderMode,
}

impl LayerId {
    pub fn new(category: Category, mode: RenderMode) -> Self {
        Self { category, mode }
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category.slug(), self.mode)
    }
}

/// Flat marker collection. Markers render individually at the
/// zoom-derived size, no aggregation.
pub struct LayerGroup {
    id: LayerId,
    markers: Vec<Marker>,
}

impl LayerGroup {
    pub fn new(category: Category) -> Self {
        Self {
            id: LayerId::new(category, RenderMode::Flat),
            markers: Vec::new(),
        }
    }

    pub fn id(&self) -> LayerId {
        self.id
    }

    pub fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn clear(&mut self) {
        self.markers.clear();
    }
}

/// Clustering-aware marker collection. Markers carry the fixed cluster
/// icon; aggregation into cluster bubbles happens at render time via
/// [`ClusterGroup::clusters`].
pub struct ClusterGroup {
    id: LayerId,
    clustering: Clustering<Marker>,
}

impl ClusterGroup {
    pub fn new(category: Category) -> Self {
        Self::with_config(category, ClusteringConfig::default())
    }

    pub fn with_config(category: Category, config: ClusteringConfig) -> Self {
        Self {
            id: LayerId::new(category, RenderMode::Clustered),
            clustering: Clustering::new(config),
        }
    }

    pub fn id(&self) -> LayerId {
        self.id
    }

    pub fn add_marker(&mut self, marker: Marker) {
        self.clustering.insert(marker.position(), marker);
    }

    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.clustering.items()
    }

    /// Cluster bubbles for the given viewport and zoom
    pub fn clusters(&self, viewport: &LatLngBounds, zoom: f64) -> Vec<Cluster<Marker>> {
        self.clustering.clusters(viewport, zoom)
    }

    /// Bounds covering every marker in the collection, if any
    pub fn bounds(&self) -> Option<LatLngBounds> {
        self.clustering.bounds()
    }

    pub fn len(&self) -> usize {
        self.clustering.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clustering.is_empty()
    }

    pub fn clear(&mut self) {
        self.clustering.clear();
    }
}
