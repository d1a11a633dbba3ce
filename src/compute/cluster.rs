//! Seed-centered proximity clustering.
//!
//! Items are visited in input order. The first unprocessed item becomes a
//! seed and claims every other unprocessed item within the radius of *the
//! seed*. Grouping is not transitive: an item near a claimed member but out
//! of the seed's reach waits for a later seed, so results depend on input
//! order.
//!
//! Each pass is O(n^2) in the number of items.

use crate::compute::algorithms::{centroid, distance_between};
use crate::compute::identity::stable_id;
use crate::compute::radius::cluster_radius_meters;
use crate::compute::validation::validate_items;
use crate::compute::zoom::zoom_level;
use crate::config::ClusterConfig;
use rustc_hash::FxHashSet;
use stonemap_types::cluster::{ClusterGroup, ClusterItem};
use stonemap_types::geo::DistanceMetric;
use stonemap_types::item::GeoItem;
use stonemap_types::viewport::Viewport;

/// Partition `items` into individual markers and groups for `viewport`.
///
/// Returns one `Individual` per item when the viewport is zoomed in past the
/// configured threshold or when there is at most one item. Otherwise groups
/// items with [`group_by_seed`] using the viewport's clustering radius.
///
/// Items must have unique identifiers and valid coordinates; debug builds
/// assert this.
pub fn cluster<T>(items: &[T], viewport: &Viewport, config: &ClusterConfig) -> Vec<ClusterItem<T>>
where
    T: GeoItem + Clone,
{
    debug_assert!(
        validate_items(items).is_ok(),
        "cluster input violates its contract: {:?}",
        validate_items(items).err()
    );

    let zoom = zoom_level(&viewport.span, config.meters_per_degree);
    if zoom >= config.individual_pin_threshold || items.len() <= 1 {
        log::trace!(
            "Skipping clustering for {} items at zoom {:.2}",
            items.len(),
            zoom
        );
        return individuals(items);
    }

    let radius = cluster_radius_meters(viewport, config);
    let output = group_by_seed(items, radius, config.distance_metric);

    log::debug!(
        "Clustered {} items into {} annotations (zoom {:.2}, radius {:.0} m)",
        items.len(),
        output.len(),
        zoom,
        radius
    );

    output
}

/// Every item wrapped as an `Individual`, in input order.
pub fn individuals<T: Clone>(items: &[T]) -> Vec<ClusterItem<T>> {
    items.iter().cloned().map(ClusterItem::Individual).collect()
}

/// Greedy seed-centered grouping with a fixed radius in meters.
///
/// Output order follows the order in which seeds are first encountered.
/// Group members are listed in input order, seed first.
///
/// # Examples
///
/// ```
/// use stonemap::compute::cluster::group_by_seed;
/// use stonemap_types::geo::DistanceMetric;
/// use stonemap_types::item::Marker;
///
/// let a = Marker::at(0.0, 0.0);
/// let b = Marker::at(0.0, 0.01); // ~1,112 m east of a
/// let c = Marker::at(0.0, 0.02); // ~1,112 m east of b
///
/// let output = group_by_seed(&[a, b, c], 1_200.0, DistanceMetric::Haversine);
/// assert_eq!(output.len(), 2);
/// assert_eq!(output[0].count(), 2); // {a, b}
/// assert_eq!(output[1].count(), 1); // c is out of a's reach
/// ```
pub fn group_by_seed<T>(items: &[T], radius: f64, metric: DistanceMetric) -> Vec<ClusterItem<T>>
where
    T: GeoItem + Clone,
{
    let mut processed = FxHashSet::default();
    let mut output = Vec::new();

    for (seed_idx, seed) in items.iter().enumerate() {
        let seed_id = seed.id();
        if processed.contains(&seed_id) {
            continue;
        }

        let seed_location = seed.location();
        let mut members = vec![seed];
        for (idx, other) in items.iter().enumerate() {
            if idx == seed_idx || processed.contains(&other.id()) {
                continue;
            }
            if distance_between(&seed_location, &other.location(), metric) <= radius {
                members.push(other);
            }
        }

        if members.len() > 1 {
            processed.extend(members.iter().map(|member| member.id()));
            output.push(ClusterItem::Group(make_group(seed, &members)));
        } else {
            processed.insert(seed_id);
            output.push(ClusterItem::Individual(seed.clone()));
        }
    }

    output
}

/// Callers pass the seed plus at least one claimed member.
fn make_group<T: GeoItem + Clone>(seed: &T, members: &[&T]) -> ClusterGroup<T> {
    let centroid = centroid(members.iter().map(|member| member.location()))
        .unwrap_or_else(|| seed.location());

    ClusterGroup {
        id: stable_id(members.iter().map(|member| member.id())),
        centroid,
        members: members.iter().map(|&member| member.clone()).collect(),
    }
}
