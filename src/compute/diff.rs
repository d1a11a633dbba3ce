//! Frame-to-frame comparison of clustering output.
//!
//! Renderers animate annotations by identifier: an identifier present in both
//! frames is moved, one only in the new frame fades in, one only in the old
//! frame fades out. Group identifiers are content-derived, so a group whose
//! members are unchanged is reported as retained.

use rustc_hash::FxHashSet;
use stonemap_types::cluster::ClusterItem;
use stonemap_types::item::GeoItem;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterDiff {
    /// In `next` but not `previous`, in `next` order
    pub inserted: Vec<Uuid>,
    /// In `previous` but not `next`, in `previous` order
    pub removed: Vec<Uuid>,
    /// In both, in `next` order
    pub retained: Vec<Uuid>,
}

impl ClusterDiff {
    pub fn between<T: GeoItem>(previous: &[ClusterItem<T>], next: &[ClusterItem<T>]) -> Self {
        let before: FxHashSet<Uuid> = previous.iter().map(ClusterItem::id).collect();
        let after: FxHashSet<Uuid> = next.iter().map(ClusterItem::id).collect();

        let (retained, inserted) = next
            .iter()
            .map(ClusterItem::id)
            .partition(|id| before.contains(id));
        let removed = previous
            .iter()
            .map(ClusterItem::id)
            .filter(|id| !after.contains(id))
            .collect();

        Self {
            inserted,
            removed,
            retained,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.inserted.is_empty() && self.removed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::cluster::group_by_seed;
    use stonemap_types::geo::{DistanceMetric, Point};
    use stonemap_types::item::Marker;

    fn marker(n: u128, lon: f64) -> Marker {
        Marker::new(Uuid::from_u128(n), Point::new(lon, 0.0))
    }

    #[test]
    fn test_identical_frames() {
        let items = [marker(1, 0.0), marker(2, 0.001), marker(3, 1.0)];
        let frame = group_by_seed(&items, 500.0, DistanceMetric::Haversine);
        let diff = ClusterDiff::between(&frame, &frame);
        assert!(diff.is_empty());
        assert_eq!(diff.retained.len(), 2);
    }

    #[test]
    fn test_group_splits_into_individuals() {
        let items = [marker(1, 0.0), marker(2, 0.001)];
        let grouped = group_by_seed(&items, 500.0, DistanceMetric::Haversine);
        let split = group_by_seed(&items, 50.0, DistanceMetric::Haversine);

        let diff = ClusterDiff::between(&grouped, &split);
        assert_eq!(diff.removed, vec![grouped[0].id()]);
        assert_eq!(diff.inserted, vec![items[0].id, items[1].id]);
        assert!(diff.retained.is_empty());
    }

    #[test]
    fn test_same_members_in_new_order_are_retained() {
        let a = marker(1, 0.0);
        let b = marker(2, 0.001);
        let first = group_by_seed(&[a, b], 500.0, DistanceMetric::Haversine);
        let second = group_by_seed(&[b, a], 500.0, DistanceMetric::Haversine);

        let diff = ClusterDiff::between(&first, &second);
        assert!(diff.is_empty());
        assert_eq!(diff.retained, vec![first[0].id()]);
    }
}
