use crate::geo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A geolocated record that can be placed on the map.
///
/// Identifiers must be unique within one clustering call and stable across
/// calls; the location must already be a valid coordinate.
pub trait GeoItem {
    fn id(&self) -> Uuid;

    fn location(&self) -> Point;
}

impl<T: GeoItem + ?Sized> GeoItem for &T {
    fn id(&self) -> Uuid {
        (**self).id()
    }

    fn location(&self) -> Point {
        (**self).location()
    }
}

/// Minimal map marker: an identifier and where it sits.
///
/// # Examples
///
/// ```
/// use stonemap_types::geo::Point;
/// use stonemap_types::item::{GeoItem, Marker};
/// use uuid::Uuid;
///
/// let marker = Marker::new(Uuid::nil(), Point::new(-3.19, 55.95));
/// assert_eq!(marker.location().lat(), 55.95);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: Uuid,
    pub location: Point,
}

impl Marker {
    pub fn new(id: Uuid, location: Point) -> Self {
        Self { id, location }
    }

    /// Marker at `(lat, lon)` with a freshly generated identifier.
    pub fn at(lat: f64, lon: f64) -> Self {
        Self::new(Uuid::new_v4(), Point::from_lat_lon(lat, lon))
    }
}

impl GeoItem for Marker {
    fn id(&self) -> Uuid {
        self.id
    }

    fn location(&self) -> Point {
        self.location
    }
}
