//! Clustering algorithms, identity hashing, validation and export.
//!
//! Everything here is a pure function of its arguments. [`crate::Clusterer`]
//! bundles them behind an immutable configuration.

pub mod algorithms;
pub mod cluster;
pub mod diff;
#[cfg(feature = "geojson")]
pub mod geojson;
pub mod identity;
pub mod radius;
pub mod validation;
pub mod zoom;

pub use algorithms::{centroid, distance_between};
pub use cluster::{cluster, group_by_seed};
pub use diff::ClusterDiff;
pub use identity::stable_id;
pub use radius::cluster_radius_meters;
pub use zoom::zoom_level;
