use crate::geo::Point;
use geo::Rect;
use serde::{Deserialize, Serialize};

/// Angular extent of the visible map region, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// Visible height in degrees of latitude
    pub lat_delta: f64,
    /// Visible width in degrees of longitude
    pub lon_delta: f64,
}

impl Span {
    pub fn new(lat_delta: f64, lon_delta: f64) -> Self {
        Self {
            lat_delta,
            lon_delta,
        }
    }

    /// A square span covering `degrees` in both directions.
    pub fn square(degrees: f64) -> Self {
        Self::new(degrees, degrees)
    }

    /// The larger of the two deltas.
    pub fn max_delta(&self) -> f64 {
        self.lat_delta.max(self.lon_delta)
    }
}

/// The currently visible map region: a center coordinate plus an angular span.
///
/// # Examples
///
/// ```
/// use stonemap_types::geo::Point;
/// use stonemap_types::viewport::{Span, Viewport};
///
/// let world = Viewport::new(Point::new(0.0, 0.0), Span::square(40.0));
/// assert_eq!(world.span.max_delta(), 40.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: Point,
    pub span: Span,
}

impl Viewport {
    pub fn new(center: Point, span: Span) -> Self {
        Self { center, span }
    }

    /// Build a viewport from the visible rectangle reported by a map component.
    ///
    /// Corners may be given in any order; the span is always non-negative.
    pub fn from_bounds(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self::from_rect(Rect::new(
            geo::coord! { x: min_lon, y: min_lat },
            geo::coord! { x: max_lon, y: max_lat },
        ))
    }

    /// Build a viewport from a `geo::Rect` in lon/lat degrees.
    pub fn from_rect(rect: Rect) -> Self {
        let center = rect.center();
        Self {
            center: Point::new(center.x, center.y),
            span: Span::new(rect.height(), rect.width()),
        }
    }

    /// The visible rectangle this viewport describes.
    pub fn bounds(&self) -> Rect {
        let half_lon = self.span.lon_delta / 2.0;
        let half_lat = self.span.lat_delta / 2.0;
        Rect::new(
            geo::coord! { x: self.center.lon() - half_lon, y: self.center.lat() - half_lat },
            geo::coord! { x: self.center.lon() + half_lon, y: self.center.lat() + half_lat },
        )
    }

    /// Check if a point is inside the visible rectangle.
    pub fn contains_point(&self, point: &Point) -> bool {
        let bounds = self.bounds();
        point.lon() >= bounds.min().x
            && point.lon() <= bounds.max().x
            && point.lat() >= bounds.min().y
            && point.lat() <= bounds.max().y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bounds_round_trip() {
        let viewport = Viewport::from_bounds(-74.0, 40.7, -73.9, 40.8);
        assert!((viewport.center.lon() - -73.95).abs() < 1e-9);
        assert!((viewport.center.lat() - 40.75).abs() < 1e-9);
        assert!((viewport.span.lon_delta - 0.1).abs() < 1e-9);
        assert!((viewport.span.lat_delta - 0.1).abs() < 1e-9);

        let bounds = viewport.bounds();
        assert!((bounds.min().x - -74.0).abs() < 1e-9);
        assert!((bounds.max().y - 40.8).abs() < 1e-9);
    }

    #[test]
    fn test_from_bounds_swapped_corners() {
        let viewport = Viewport::from_bounds(10.0, 5.0, 0.0, -5.0);
        assert!(viewport.span.lat_delta > 0.0);
        assert!(viewport.span.lon_delta > 0.0);
        assert_eq!(viewport.center, Point::new(5.0, 0.0));
    }

    #[test]
    fn test_contains_point() {
        let viewport = Viewport::new(Point::new(0.0, 0.0), Span::square(2.0));
        assert!(viewport.contains_point(&Point::new(0.5, -0.5)));
        assert!(!viewport.contains_point(&Point::new(1.5, 0.0)));
    }

    #[test]
    fn test_span_max_delta() {
        assert_eq!(Span::new(0.5, 2.0).max_delta(), 2.0);
        assert_eq!(Span::new(3.0, 2.0).max_delta(), 3.0);
    }
}
