use crate::core::geo::{LatLng, LatLngBounds};

use rstar::{RTree, RTreeObject, AABB};

/// A point item that can be indexed via an R-tree
#[derive(Debug, Clone)]
pub struct SpatialItem<T> {
    pub position: LatLng,
    pub data: T,
}

impl<T> SpatialItem<T> {
    pub fn new(position: LatLng, data: T) -> Self {
        Self { position, data }
    }
}

impl<T> RTreeObject for SpatialItem<T> {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.position.lng, self.position.lat])
    }
}

/// R-tree based point index over geographic coordinates
pub struct SpatialIndex<T> {
    rtree: RTree<SpatialItem<T>>,
    bounds: Option<LatLngBounds>,
}

impl<T> SpatialIndex<T> {
    pub fn new() -> Self {
        Self {
            rtree: RTree::new(),
            bounds: None,
        }
    }

    pub fn insert(&mut self, item: SpatialItem<T>) {
        match self.bounds.as_mut() {
            Some(bounds) => bounds.extend(&item.position),
            None => self.bounds = Some(LatLngBounds::new(item.position, item.position)),
        }
        self.rtree.insert(item);
    }

    /// Items whose position falls inside the given bounds
    pub fn query(&self, bounds: &LatLngBounds) -> Vec<&SpatialItem<T>> {
        let envelope = AABB::from_corners(
            [bounds.south_west.lng, bounds.south_west.lat],
            [bounds.north_east.lng, bounds.north_east.lat],
        );
        self.rtree.locate_in_envelope(&envelope).collect()
    }

    pub fn all_items(&self) -> impl Iterator<Item = &SpatialItem<T>> {
        self.rtree.iter()
    }

    /// Bounds covering every indexed item, if any
    pub fn bounds(&self) -> Option<LatLngBounds> {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.rtree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.rtree.size() == 0
    }

    pub fn clear(&mut self) {
        self.rtree = RTree::new();
        self.bounds = None;
    }
}

impl<T> Default for SpatialIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}
