//! Clustering configuration
//!
//! Every constant the engine depends on lives here with its production
//! default. A `ClusterConfig` is immutable once handed to a `Clusterer`.
use crate::error::{Result, StonemapError};
use serde::{Deserialize, Serialize};
use stonemap_types::geo::DistanceMetric;

/// Zoom level at and above which every item is drawn as its own pin.
pub const INDIVIDUAL_PIN_THRESHOLD: f64 = 15.0;
/// Smallest clustering radius, in meters.
pub const MIN_CLUSTER_RADIUS_METERS: f64 = 100.0;
/// Largest clustering radius, in meters.
pub const MAX_CLUSTER_RADIUS_METERS: f64 = 500_000.0;
/// Share of the visible region's largest dimension used as the radius.
pub const RADIUS_FRACTION: f64 = 0.05;
/// Flat approximation of one degree of arc on the Earth's surface.
pub const METERS_PER_DEGREE: f64 = 111_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClusterConfig {
    #[serde(default = "ClusterConfig::default_individual_pin_threshold")]
    pub individual_pin_threshold: f64,

    #[serde(default = "ClusterConfig::default_min_radius_meters")]
    pub min_radius_meters: f64,

    #[serde(default = "ClusterConfig::default_max_radius_meters")]
    pub max_radius_meters: f64,

    #[serde(default = "ClusterConfig::default_radius_fraction")]
    pub radius_fraction: f64,

    #[serde(default = "ClusterConfig::default_meters_per_degree")]
    pub meters_per_degree: f64,

    /// Metric used to compare an item against its seed
    #[serde(default)]
    pub distance_metric: DistanceMetric,
}

impl ClusterConfig {
    const fn default_individual_pin_threshold() -> f64 {
        INDIVIDUAL_PIN_THRESHOLD
    }

    const fn default_min_radius_meters() -> f64 {
        MIN_CLUSTER_RADIUS_METERS
    }

    const fn default_max_radius_meters() -> f64 {
        MAX_CLUSTER_RADIUS_METERS
    }

    const fn default_radius_fraction() -> f64 {
        RADIUS_FRACTION
    }

    const fn default_meters_per_degree() -> f64 {
        METERS_PER_DEGREE
    }

    pub fn with_individual_pin_threshold(mut self, zoom: f64) -> Self {
        self.individual_pin_threshold = zoom;
        self
    }

    pub fn with_radius_bounds(mut self, min_meters: f64, max_meters: f64) -> Self {
        self.min_radius_meters = min_meters;
        self.max_radius_meters = max_meters;
        self
    }

    pub fn with_radius_fraction(mut self, fraction: f64) -> Self {
        self.radius_fraction = fraction;
        self
    }

    pub fn with_meters_per_degree(mut self, meters: f64) -> Self {
        self.meters_per_degree = meters;
        self
    }

    pub fn with_distance_metric(mut self, metric: DistanceMetric) -> Self {
        self.distance_metric = metric;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.individual_pin_threshold.is_finite() {
            return Err(StonemapError::InvalidConfig(format!(
                "Individual pin threshold must be finite, got: {}",
                self.individual_pin_threshold
            )));
        }

        if !self.min_radius_meters.is_finite() || self.min_radius_meters <= 0.0 {
            return Err(StonemapError::InvalidConfig(format!(
                "Minimum radius must be positive, got: {}",
                self.min_radius_meters
            )));
        }

        if !self.max_radius_meters.is_finite() || self.max_radius_meters < self.min_radius_meters {
            return Err(StonemapError::InvalidConfig(format!(
                "Maximum radius ({}) must be finite and >= minimum radius ({})",
                self.max_radius_meters, self.min_radius_meters
            )));
        }

        if !self.radius_fraction.is_finite() || self.radius_fraction <= 0.0 {
            return Err(StonemapError::InvalidConfig(format!(
                "Radius fraction must be positive, got: {}",
                self.radius_fraction
            )));
        }

        if !self.meters_per_degree.is_finite() || self.meters_per_degree <= 0.0 {
            return Err(StonemapError::InvalidConfig(format!(
                "Meters per degree must be positive, got: {}",
                self.meters_per_degree
            )));
        }

        if self.radius_fraction > 1.0 {
            log::warn!(
                "Radius fraction of {} exceeds the visible region; every pass will collapse \
                into very few clusters",
                self.radius_fraction
            );
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: ClusterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: ClusterConfig =
            toml::from_str(toml_str).map_err(|e| StonemapError::Toml(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| StonemapError::Toml(e.to_string()))
    }
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            individual_pin_threshold: Self::default_individual_pin_threshold(),
            min_radius_meters: Self::default_min_radius_meters(),
            max_radius_meters: Self::default_max_radius_meters(),
            radius_fraction: Self::default_radius_fraction(),
            meters_per_degree: Self::default_meters_per_degree(),
            distance_metric: DistanceMetric::default(),
        }
    }
}
