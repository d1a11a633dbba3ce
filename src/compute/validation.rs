//! Validation of clustering candidates.
//!
//! The clusterer trusts its input. These helpers enforce that contract on the
//! caller's side: every coordinate in range and every identifier unique.

use crate::error::{Result, StonemapError};
use rustc_hash::FxHashSet;
use stonemap_types::geo::Point;
use stonemap_types::item::GeoItem;

/// Validates a point has valid longitude and latitude.
///
/// Longitude: [-180.0, 180.0], Latitude: [-90.0, 90.0]
///
/// # Examples
///
/// ```
/// use stonemap::compute::validation::validate_geographic_point;
/// use stonemap_types::geo::Point;
///
/// assert!(validate_geographic_point(&Point::new(-3.19, 55.95)).is_ok());
/// assert!(validate_geographic_point(&Point::new(200.0, 40.0)).is_err());
/// assert!(validate_geographic_point(&Point::new(-74.0, 95.0)).is_err());
/// ```
pub fn validate_geographic_point(point: &Point) -> Result<()> {
    let (x, y) = (point.lon(), point.lat());

    if !x.is_finite() {
        return Err(StonemapError::InvalidInput(format!(
            "Longitude must be finite, got: {}",
            x
        )));
    }

    if !y.is_finite() {
        return Err(StonemapError::InvalidInput(format!(
            "Latitude must be finite, got: {}",
            y
        )));
    }

    if !(-180.0..=180.0).contains(&x) {
        return Err(StonemapError::InvalidInput(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            x
        )));
    }

    if !(-90.0..=90.0).contains(&y) {
        return Err(StonemapError::InvalidInput(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            y
        )));
    }

    Ok(())
}

/// Checks the clusterer's input contract, reporting the first violation.
pub fn validate_items<T: GeoItem>(items: &[T]) -> Result<()> {
    let mut seen = FxHashSet::default();
    for (idx, item) in items.iter().enumerate() {
        validate_geographic_point(&item.location())
            .map_err(|e| StonemapError::InvalidInput(format!("Item at index {}: {}", idx, e)))?;

        if !seen.insert(item.id()) {
            return Err(StonemapError::DuplicateId(item.id()));
        }
    }
    Ok(())
}

/// Turns merged source lists into a valid clusterer input.
///
/// Items with an invalid coordinate are dropped, and so is every repeat of an
/// identifier already seen (the first occurrence wins). Order is otherwise
/// preserved, which matters because grouping is seed-order dependent.
///
/// # Examples
///
/// ```
/// use stonemap::compute::validation::prepare_candidates;
/// use stonemap_types::item::Marker;
///
/// let mine = Marker::at(55.95, -3.19);
/// let broken = Marker::at(123.0, 0.0);
/// let public = vec![mine, Marker::at(55.96, -3.18)];
///
/// let candidates = prepare_candidates([mine, broken].into_iter().chain(public));
/// assert_eq!(candidates.len(), 2);
/// ```
pub fn prepare_candidates<T, I>(items: I) -> Vec<T>
where
    T: GeoItem,
    I: IntoIterator<Item = T>,
{
    let mut seen = FxHashSet::default();
    let mut invalid = 0usize;
    let mut duplicates = 0usize;

    let candidates: Vec<T> = items
        .into_iter()
        .filter(|item| {
            if !item.location().is_valid_coordinate() {
                invalid += 1;
                return false;
            }
            if !seen.insert(item.id()) {
                duplicates += 1;
                return false;
            }
            true
        })
        .collect();

    if invalid > 0 || duplicates > 0 {
        log::debug!(
            "Dropped {} items with invalid coordinates and {} duplicates, {} candidates remain",
            invalid,
            duplicates,
            candidates.len()
        );
    }

    candidates
}
