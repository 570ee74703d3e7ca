//! Spatial indexing and cluster computation for marker collections.

pub mod clustering;
pub mod index;

pub use clustering::{Cluster, Clustering, ClusteringConfig};
pub use index::{SpatialIndex, SpatialItem};
