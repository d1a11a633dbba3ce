//! Wrapped geometric types from the `geo` crate.
//!
//! The clustering engine only needs points, so this module wraps `geo::Point`
//! with latitude/longitude accessors and the great-circle distances used to
//! decide whether two markers belong together.

use serde::{Deserialize, Serialize};

/// Distance metric for spatial calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    #[default]
    Haversine,
    Geodesic,
}

/// A geographic point with longitude/latitude coordinates.
///
/// # Examples
///
/// ```
/// use stonemap_types::geo::Point;
///
/// let stone = Point::new(-3.1883, 55.9533);
/// assert_eq!(stone.lon(), -3.1883);
/// assert_eq!(stone.lat(), 55.9533);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    inner: geo::Point<f64>,
}

impl Point {
    /// Create a new point from x (longitude) and y (latitude) coordinates.
    ///
    /// # Arguments
    ///
    /// * `x` - Longitude in degrees (typically -180 to 180)
    /// * `y` - Latitude in degrees (typically -90 to 90)
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            inner: geo::Point::new(x, y),
        }
    }

    /// Create a point from latitude first, the order map components report.
    #[inline]
    pub fn from_lat_lon(lat: f64, lon: f64) -> Self {
        Self::new(lon, lat)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.inner.x()
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.inner.y()
    }

    /// Get the longitude (alias for x).
    #[inline]
    pub fn lon(&self) -> f64 {
        self.x()
    }

    /// Get the latitude (alias for y).
    #[inline]
    pub fn lat(&self) -> f64 {
        self.y()
    }

    /// Access the inner `geo::Point`.
    #[inline]
    pub fn inner(&self) -> &geo::Point<f64> {
        &self.inner
    }

    /// Whether both coordinates are finite and inside the ±180/±90 range.
    pub fn is_valid_coordinate(&self) -> bool {
        self.lon().is_finite()
            && self.lat().is_finite()
            && (-180.0..=180.0).contains(&self.lon())
            && (-90.0..=90.0).contains(&self.lat())
    }

    /// Calculate haversine distance to another point in meters.
    ///
    /// # Examples
    ///
    /// ```
    /// use stonemap_types::geo::Point;
    ///
    /// let a = Point::new(0.0, 0.0);
    /// let b = Point::new(0.001, 0.0);
    /// let d = a.haversine_distance(&b);
    /// assert!((d - 111.2).abs() < 1.0);
    /// ```
    #[inline]
    pub fn haversine_distance(&self, other: &Point) -> f64 {
        use geo::Distance;
        geo::Haversine.distance(self.inner, other.inner)
    }

    /// Calculate geodesic (ellipsoidal) distance to another point in meters.
    #[inline]
    pub fn geodesic_distance(&self, other: &Point) -> f64 {
        use geo::Distance;
        geo::Geodesic.distance(self.inner, other.inner)
    }

    /// Distance in meters under the given metric.
    #[inline]
    pub fn distance(&self, other: &Point, metric: DistanceMetric) -> f64 {
        match metric {
            DistanceMetric::Haversine => self.haversine_distance(other),
            DistanceMetric::Geodesic => self.geodesic_distance(other),
        }
    }
}

impl From<geo::Point<f64>> for Point {
    fn from(point: geo::Point<f64>) -> Self {
        Self { inner: point }
    }
}

impl From<Point> for geo::Point<f64> {
    fn from(point: Point) -> Self {
        point.inner
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x(), point.y())
    }
}
