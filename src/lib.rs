//! Viewport-adaptive clustering of map markers with stable cluster identities.
//!
//! On every viewport change the map hands over its candidate items and the
//! visible region; the engine decides which items are drawn on their own and
//! which are merged into groups. Group identifiers are derived from the
//! member set, so an unchanged group keeps its identity between frames.
//!
//! ```rust
//! use stonemap::prelude::*;
//!
//! let clusterer = ClustererBuilder::new().build()?;
//! let items = prepare_candidates(vec![
//!     Marker::at(55.9533, -3.1883),
//!     Marker::at(55.9536, -3.1890),
//!     Marker::at(51.5074, -0.1278),
//! ]);
//!
//! let uk = Viewport::new(Point::new(-2.0, 54.0), Span::square(8.0));
//! let output = clusterer.cluster(&items, &uk);
//! assert_eq!(output.len(), 2); // Edinburgh pair + London
//! # Ok::<(), stonemap::StonemapError>(())
//! ```

pub mod builder;
pub mod clusterer;
pub mod compute;
pub mod config;
pub mod error;

pub use builder::ClustererBuilder;
pub use clusterer::Clusterer;
pub use config::ClusterConfig;
pub use error::{Result, StonemapError};

pub use stonemap_types::cluster::{ClusterGroup, ClusterItem};
pub use stonemap_types::geo::{DistanceMetric, Point};
pub use stonemap_types::item::{GeoItem, Marker};
pub use stonemap_types::viewport::{Span, Viewport};

pub use compute::ClusterDiff;
pub use compute::validation;

#[cfg(feature = "geojson")]
pub use compute::geojson;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Clusterer, ClustererBuilder, Result, StonemapError};

    pub use crate::{ClusterConfig, DistanceMetric};

    pub use crate::{ClusterDiff, ClusterGroup, ClusterItem, GeoItem, Marker};

    pub use crate::{Point, Span, Viewport};

    pub use crate::validation::prepare_candidates;
}
