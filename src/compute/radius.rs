//! Clustering radius derived from how much of the world is visible.

use crate::config::ClusterConfig;
use stonemap_types::viewport::Viewport;

/// Clustering distance in meters for the given viewport.
///
/// The radius is a fixed fraction of the visible region's largest dimension,
/// with the longitude extent shrunk by `cos(latitude)`, clamped to the
/// configured bounds. Marker density therefore looks the same at every zoom.
///
/// # Examples
///
/// ```
/// use stonemap::ClusterConfig;
/// use stonemap::compute::radius::cluster_radius_meters;
/// use stonemap_types::geo::Point;
/// use stonemap_types::viewport::{Span, Viewport};
///
/// let config = ClusterConfig::default();
/// let viewport = Viewport::new(Point::new(0.0, 0.0), Span::square(1.0));
/// assert!((cluster_radius_meters(&viewport, &config) - 5_550.0).abs() < 1e-6);
/// ```
pub fn cluster_radius_meters(viewport: &Viewport, config: &ClusterConfig) -> f64 {
    let lat_meters = viewport.span.lat_delta * config.meters_per_degree;
    let lon_meters = viewport.span.lon_delta
        * config.meters_per_degree
        * viewport.center.lat().to_radians().cos();
    let region_meters = lat_meters.max(lon_meters);

    (region_meters * config.radius_fraction)
        .clamp(config.min_radius_meters, config.max_radius_meters)
}
