//! GeoJSON export of clustering output.

use crate::error::Result;
use geojson::feature::Id;
use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde_json::Map;
use stonemap_types::cluster::ClusterItem;
use stonemap_types::item::GeoItem;

/// Converts one annotation to a Point feature with `id`, `kind` and `count`.
pub fn cluster_item_to_feature<T: GeoItem>(item: &ClusterItem<T>) -> Feature {
    let location = item.location();
    let geom = Geometry::new(Value::Point(vec![location.lon(), location.lat()]));

    let kind = if item.is_group() { "group" } else { "individual" };
    let mut props = Map::new();
    props.insert("id".to_string(), item.id().to_string().into());
    props.insert("kind".to_string(), kind.into());
    props.insert("count".to_string(), item.count().into());

    Feature {
        bbox: None,
        geometry: Some(geom),
        id: Some(Id::String(item.id().to_string())),
        properties: Some(props),
        foreign_members: None,
    }
}

/// Converts a full clustering pass to a FeatureCollection, preserving order.
pub fn to_feature_collection<T: GeoItem>(items: &[ClusterItem<T>]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: items.iter().map(cluster_item_to_feature).collect(),
        foreign_members: None,
    }
}

/// Serialized form of [`to_feature_collection`].
pub fn to_geojson_string<T: GeoItem>(items: &[ClusterItem<T>]) -> Result<String> {
    Ok(serde_json::to_string(&to_feature_collection(items))?)
}
