//! # stonemap-types
//!
//! Core data types shared between the stonemap clustering engine and the
//! map layer that feeds and draws it.
//!
//! - **Geometry**: `Point`, `DistanceMetric`
//! - **Viewport**: `Span`, `Viewport`
//! - **Input**: the `GeoItem` trait and the concrete `Marker`
//! - **Output**: `ClusterItem`, `ClusterGroup`
//!
//! All types are serializable with Serde and built on top of the `geo` crate's
//! geometric primitives.
//!
//! ## Examples
//!
//! ```rust
//! use stonemap_types::geo::Point;
//! use stonemap_types::item::Marker;
//! use stonemap_types::viewport::{Span, Viewport};
//!
//! let marker = Marker::at(55.9533, -3.1883); // Edinburgh
//! let viewport = Viewport::new(Point::new(-3.19, 55.95), Span::square(0.05));
//! assert!(viewport.contains_point(&marker.location));
//! ```

pub mod cluster;
pub mod geo;
pub mod item;
pub mod viewport;
