use proptest::prelude::*;
use stonemap::compute::identity::stable_id;
use stonemap::prelude::*;
use uuid::Uuid;

fn markers(coords: &[(f64, f64)]) -> Vec<Marker> {
    coords
        .iter()
        .enumerate()
        .map(|(i, &(lat, lon))| {
            Marker::new(Uuid::from_u128(i as u128 + 1), Point::from_lat_lon(lat, lon))
        })
        .collect()
}

fn coords() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-85.0f64..85.0, -180.0f64..180.0), 0..60)
}

/// Coordinates packed into a small area so that groups actually form.
fn dense_coords() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((40.0f64..40.05, -74.05f64..-74.0), 0..60)
}

fn viewports() -> impl Strategy<Value = Viewport> {
    (-80.0f64..80.0, -180.0f64..180.0, 0.00001f64..90.0).prop_map(|(lat, lon, degrees)| {
        Viewport::new(Point::from_lat_lon(lat, lon), Span::square(degrees))
    })
}

fn sorted_ids(items: &[Marker]) -> Vec<Uuid> {
    let mut ids: Vec<Uuid> = items.iter().map(|m| m.id).collect();
    ids.sort();
    ids
}

proptest! {
    /// Property: every input item appears in exactly one output entry.
    #[test]
    fn prop_output_partitions_input(coords in coords(), viewport in viewports()) {
        let items = markers(&coords);
        let output = Clusterer::default().cluster(&items, &viewport);

        let flattened: Vec<Marker> =
            output.into_iter().flat_map(ClusterItem::into_members).collect();
        prop_assert_eq!(flattened.len(), items.len());
        prop_assert_eq!(sorted_ids(&flattened), sorted_ids(&items));
    }

    /// Property: same partition guarantee when groups are plentiful.
    #[test]
    fn prop_dense_output_partitions_input(coords in dense_coords(), degrees in 0.01f64..2.0) {
        let items = markers(&coords);
        let viewport = Viewport::new(Point::from_lat_lon(40.025, -74.025), Span::square(degrees));
        let output = Clusterer::default().cluster(&items, &viewport);

        let flattened: Vec<Marker> =
            output.iter().flat_map(|item| item.members().to_vec()).collect();
        prop_assert_eq!(sorted_ids(&flattened), sorted_ids(&items));
    }

    /// Property: groups have at least two members, a mean centroid and a
    /// content-derived identifier; every member is within reach of the seed.
    #[test]
    fn prop_groups_are_well_formed(coords in dense_coords(), degrees in 0.01f64..2.0) {
        let clusterer = Clusterer::default();
        let items = markers(&coords);
        let viewport = Viewport::new(Point::from_lat_lon(40.025, -74.025), Span::square(degrees));
        let radius = clusterer.radius_meters(&viewport);

        for item in clusterer.cluster(&items, &viewport) {
            if let ClusterItem::Group(group) = item {
                prop_assert!(group.count() >= 2);

                let n = group.count() as f64;
                let mean_lat = group.members.iter().map(|m| m.location.lat()).sum::<f64>() / n;
                let mean_lon = group.members.iter().map(|m| m.location.lon()).sum::<f64>() / n;
                prop_assert!((group.centroid.lat() - mean_lat).abs() < 1e-9);
                prop_assert!((group.centroid.lon() - mean_lon).abs() < 1e-9);

                prop_assert_eq!(group.id, stable_id(group.members.iter().map(|m| m.id)));

                let seed = group.members[0].location;
                for member in &group.members[1..] {
                    prop_assert!(seed.haversine_distance(&member.location) <= radius);
                }
            }
        }
    }

    /// Property: two individual pins are never within reach of each other,
    /// because the earlier one would have claimed the later one as a seed.
    #[test]
    fn prop_individuals_are_out_of_reach(coords in dense_coords(), degrees in 0.01f64..2.0) {
        let clusterer = Clusterer::default();
        let items = markers(&coords);
        let viewport = Viewport::new(Point::from_lat_lon(40.025, -74.025), Span::square(degrees));
        let radius = clusterer.radius_meters(&viewport);

        let singles: Vec<Marker> = clusterer
            .cluster(&items, &viewport)
            .into_iter()
            .filter(|item| !item.is_group())
            .flat_map(ClusterItem::into_members)
            .collect();

        for (i, earlier) in singles.iter().enumerate() {
            for later in &singles[i + 1..] {
                prop_assert!(earlier.location.haversine_distance(&later.location) > radius);
            }
        }
    }

    /// Property: at zoom >= 15 every item is its own pin, however close.
    #[test]
    fn prop_individuals_when_zoomed_in(coords in dense_coords(), degrees in 0.000001f64..0.00025) {
        let items = markers(&coords);
        let viewport = Viewport::new(Point::from_lat_lon(40.025, -74.025), Span::square(degrees));
        let clusterer = Clusterer::default();
        prop_assert!(clusterer.zoom_level(&viewport) >= 15.0);

        let output = clusterer.cluster(&items, &viewport);
        let expected: Vec<ClusterItem<Marker>> =
            items.into_iter().map(ClusterItem::Individual).collect();
        prop_assert_eq!(output, expected);
    }

    /// Property: identical arguments give identical output, identifiers included.
    #[test]
    fn prop_deterministic(coords in dense_coords(), degrees in 0.01f64..2.0) {
        let items = markers(&coords);
        let viewport = Viewport::new(Point::from_lat_lon(40.025, -74.025), Span::square(degrees));
        let clusterer = Clusterer::default();
        prop_assert_eq!(clusterer.cluster(&items, &viewport), clusterer.cluster(&items, &viewport));
    }

    /// Property: the effective radius always lies within the configured bounds.
    #[test]
    fn prop_radius_within_bounds(viewport in viewports()) {
        let radius = Clusterer::default().radius_meters(&viewport);
        prop_assert!((100.0..=500_000.0).contains(&radius));
    }
}
