//! Spatial helpers shared by the clustering pass.

use geo::Centroid;
use stonemap_types::geo::{DistanceMetric, Point};

/// Distance between two points in meters.
#[inline]
pub fn distance_between(point1: &Point, point2: &Point, metric: DistanceMetric) -> f64 {
    point1.distance(point2, metric)
}

/// Arithmetic mean of latitudes and of longitudes.
///
/// Returns `None` for an empty input. The mean is taken in degree space, so
/// groups straddling the antimeridian average toward longitude 0; at the
/// radii used for clustering this only matters for world-scale viewports.
///
/// # Examples
///
/// ```
/// use stonemap::compute::algorithms::centroid;
/// use stonemap_types::geo::Point;
///
/// let c = centroid([Point::new(0.0, 0.0), Point::new(2.0, 4.0)]).unwrap();
/// assert_eq!(c, Point::new(1.0, 2.0));
/// ```
pub fn centroid<I>(points: I) -> Option<Point>
where
    I: IntoIterator<Item = Point>,
{
    let geo_points: Vec<geo::Point> = points.into_iter().map(Into::into).collect();
    let multi_point = geo::MultiPoint::new(geo_points);
    multi_point.centroid().map(Into::into)
}
