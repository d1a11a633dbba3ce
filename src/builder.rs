//! Clusterer builder for flexible configuration

use crate::clusterer::Clusterer;
use crate::config::ClusterConfig;
use crate::error::Result;
use stonemap_types::geo::DistanceMetric;

/// Builder for a [`Clusterer`], validated on [`build`](Self::build).
#[derive(Debug, Default)]
pub struct ClustererBuilder {
    config: ClusterConfig,
}

impl ClustererBuilder {
    /// Create a new builder with the production defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ClusterConfig) -> Self {
        self.config = config;
        self
    }

    /// Zoom level at and above which every item is drawn on its own.
    pub fn individual_pin_threshold(mut self, zoom: f64) -> Self {
        self.config = self.config.with_individual_pin_threshold(zoom);
        self
    }

    pub fn radius_bounds(mut self, min_meters: f64, max_meters: f64) -> Self {
        self.config = self.config.with_radius_bounds(min_meters, max_meters);
        self
    }

    pub fn radius_fraction(mut self, fraction: f64) -> Self {
        self.config = self.config.with_radius_fraction(fraction);
        self
    }

    pub fn distance_metric(mut self, metric: DistanceMetric) -> Self {
        self.config = self.config.with_distance_metric(metric);
        self
    }

    /// Build the clusterer. Fails if the configuration is inconsistent.
    pub fn build(self) -> Result<Clusterer> {
        Clusterer::new(self.config)
    }
}
