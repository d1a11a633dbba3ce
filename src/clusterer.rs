//! The clustering engine behind an immutable configuration.

use crate::compute::cluster::cluster;
use crate::compute::radius::cluster_radius_meters;
use crate::compute::zoom::zoom_level;
use crate::config::ClusterConfig;
use crate::error::Result;
use stonemap_types::cluster::ClusterItem;
use stonemap_types::item::GeoItem;
use stonemap_types::viewport::Viewport;

/// Decides which markers and groups to draw for a viewport.
///
/// Holds no state besides its configuration, so one instance can serve every
/// viewport change and be shared across threads by reference.
///
/// ```rust
/// use stonemap::Clusterer;
/// use stonemap_types::geo::Point;
/// use stonemap_types::item::Marker;
/// use stonemap_types::viewport::{Span, Viewport};
///
/// let clusterer = Clusterer::default();
/// let items = vec![Marker::at(0.0, 0.0), Marker::at(0.0, 0.001), Marker::at(0.0, 0.002)];
/// let world = Viewport::new(Point::new(0.0, 0.0), Span::square(40.0));
///
/// let output = clusterer.cluster(&items, &world);
/// assert_eq!(output.len(), 1);
/// assert_eq!(output[0].count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Clusterer {
    config: ClusterConfig,
}

impl Clusterer {
    /// Create a clusterer after validating `config`.
    pub fn new(config: ClusterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }

    /// Partition `items` into individual markers and groups for `viewport`.
    ///
    /// Items must have unique identifiers and valid coordinates; see
    /// [`crate::compute::validation::prepare_candidates`].
    pub fn cluster<T>(&self, items: &[T], viewport: &Viewport) -> Vec<ClusterItem<T>>
    where
        T: GeoItem + Clone,
    {
        cluster(items, viewport, &self.config)
    }

    /// Zoom level the clusterer assigns to `viewport`.
    pub fn zoom_level(&self, viewport: &Viewport) -> f64 {
        zoom_level(&viewport.span, self.config.meters_per_degree)
    }

    /// Radius in meters that would be used for `viewport`.
    pub fn radius_meters(&self, viewport: &Viewport) -> f64 {
        cluster_radius_meters(viewport, &self.config)
    }

    /// Whether `viewport` is zoomed in far enough to show every pin.
    pub fn shows_individual_pins(&self, viewport: &Viewport) -> bool {
        self.zoom_level(viewport) >= self.config.individual_pin_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::INDIVIDUAL_PIN_THRESHOLD;
    use stonemap_types::geo::Point;
    use stonemap_types::viewport::Span;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_clusterer_is_send_sync() {
        assert_send_sync::<Clusterer>();
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = ClusterConfig::default().with_radius_fraction(0.0);
        assert!(Clusterer::new(config).is_err());
    }

    #[test]
    fn test_viewport_queries() {
        let clusterer = Clusterer::default();
        let world = Viewport::new(Point::new(0.0, 0.0), Span::square(40.0));
        let street = Viewport::new(Point::new(0.0, 0.0), Span::square(0.0001));

        assert_eq!(clusterer.zoom_level(&world), 0.0);
        assert!(!clusterer.shows_individual_pins(&world));
        assert!(clusterer.zoom_level(&street) >= INDIVIDUAL_PIN_THRESHOLD);
        assert!(clusterer.shows_individual_pins(&street));
        assert_eq!(clusterer.radius_meters(&street), 100.0);
    }
}
