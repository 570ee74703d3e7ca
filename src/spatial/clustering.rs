use crate::core::geo::{resolution, LatLng, LatLngBounds};
use crate::prelude::HashMap;
use crate::spatial::index::{SpatialIndex, SpatialItem};

/// Configuration for clustering
#[derive(Debug, Clone)]
pub struct ClusteringConfig {
    /// Grid cell size for clustering, in pixels
    pub grid_size: f64,
    /// Zoom level at and above which clustering is disabled
    pub disable_at_zoom: f64,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            grid_size: 60.0,
            disable_at_zoom: 15.0,
        }
    }
}

/// A cluster of items rendered as one aggregate marker
#[derive(Debug, Clone)]
pub struct Cluster<T> {
    /// Mean position of the member items
    pub center: LatLng,
    /// Items in this cluster
    pub items: Vec<T>,
}

impl<T> Cluster<T> {
    fn from_members(members: Vec<&SpatialItem<T>>) -> Self
    where
        T: Clone,
    {
        let n = members.len() as f64;
        let (lat, lng) = members.iter().fold((0.0, 0.0), |(lat, lng), item| {
            (lat + item.position.lat, lng + item.position.lng)
        });
        Self {
            center: LatLng::new(lat / n, lng / n),
            items: members.into_iter().map(|item| item.data.clone()).collect(),
        }
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// A single-item cluster renders as a plain marker
    pub fn is_single(&self) -> bool {
        self.items.len() == 1
    }
}

/// Grid-based cluster computation over an R-tree point index.
///
/// Items are binned into square Web Mercator cells sized `grid_size`
/// pixels at the given zoom, so clusters tighten as the view zooms in.
pub struct Clustering<T> {
    config: ClusteringConfig,
    index: SpatialIndex<T>,
}

impl<T: Clone> Clustering<T> {
    pub fn new(config: ClusteringConfig) -> Self {
        Self {
            config,
            index: SpatialIndex::new(),
        }
    }

    pub fn insert(&mut self, position: LatLng, data: T) {
        self.index.insert(SpatialItem::new(position, data));
    }

    pub fn clear(&mut self) {
        self.index.clear();
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.index.all_items().map(|item| &item.data)
    }

    /// Bounds covering every inserted item, if any
    pub fn bounds(&self) -> Option<LatLngBounds> {
        self.index.bounds()
    }

    pub fn config(&self) -> &ClusteringConfig {
        &self.config
    }

    /// Clusters for the given viewport and zoom level.
    ///
    /// At or above `disable_at_zoom` every visible item becomes its own
    /// single cluster.
    pub fn clusters(&self, viewport: &LatLngBounds, zoom: f64) -> Vec<Cluster<T>> {
        let visible = self.index.query(viewport);

        if zoom >= self.config.disable_at_zoom {
            return visible
                .into_iter()
                .map(|item| Cluster::from_members(vec![item]))
                .collect();
        }

        let cell_size = self.config.grid_size * resolution(zoom);
        let mut grid: HashMap<(i64, i64), Vec<&SpatialItem<T>>> = HashMap::default();
        for item in visible {
            let projected = item.position.to_mercator();
            let cell = (
                (projected.x / cell_size).floor() as i64,
                (projected.y / cell_size).floor() as i64,
            );
            grid.entry(cell).or_default().push(item);
        }

        grid.into_values().map(Cluster::from_members).collect()
    }
}

impl<T: Clone> Default for Clustering<T> {
    fn default() -> Self {
        Self::new(ClusteringConfig::default())
    }
}
