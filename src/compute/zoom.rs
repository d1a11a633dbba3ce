//! Viewport span to zoom level.

use stonemap_types::viewport::Span;

/// Most zoomed-in level reported.
pub const MAX_ZOOM: f64 = 20.0;

/// Unitless zoom level for a visible span: higher means more zoomed in.
///
/// `zoom = max(0, 20 - log2(max_delta * meters_per_degree))`, capped at
/// [`MAX_ZOOM`] so a degenerate zero span saturates instead of going infinite.
///
/// # Examples
///
/// ```
/// use stonemap::compute::zoom::zoom_level;
/// use stonemap_types::viewport::Span;
///
/// let world = zoom_level(&Span::square(40.0), 111_000.0);
/// assert_eq!(world, 0.0);
///
/// let street = zoom_level(&Span::square(0.0001), 111_000.0);
/// assert!(street > 15.0);
/// ```
pub fn zoom_level(span: &Span, meters_per_degree: f64) -> f64 {
    let span_meters = span.max_delta() * meters_per_degree;
    (MAX_ZOOM - span_meters.log2()).max(0.0).min(MAX_ZOOM)
}
