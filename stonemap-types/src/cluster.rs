use crate::geo::Point;
use crate::item::GeoItem;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Two or more items drawn as a single annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterGroup<T> {
    /// Content-derived identifier, identical for identical member sets
    pub id: Uuid,
    /// Arithmetic mean of member latitudes and longitudes
    pub centroid: Point,
    /// Members in input order, seed first
    pub members: Vec<T>,
}

impl<T> ClusterGroup<T> {
    pub fn count(&self) -> usize {
        self.members.len()
    }
}

/// One entry of the clustering output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClusterItem<T> {
    Individual(T),
    Group(ClusterGroup<T>),
}

impl<T: GeoItem> ClusterItem<T> {
    /// Identity used by renderers to diff consecutive frames.
    pub fn id(&self) -> Uuid {
        match self {
            Self::Individual(item) => item.id(),
            Self::Group(group) => group.id,
        }
    }

    /// Where the annotation is drawn.
    pub fn location(&self) -> Point {
        match self {
            Self::Individual(item) => item.location(),
            Self::Group(group) => group.centroid,
        }
    }
}

impl<T> ClusterItem<T> {
    pub fn count(&self) -> usize {
        match self {
            Self::Individual(_) => 1,
            Self::Group(group) => group.count(),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }

    pub fn as_group(&self) -> Option<&ClusterGroup<T>> {
        match self {
            Self::Group(group) => Some(group),
            Self::Individual(_) => None,
        }
    }

    /// Items represented by this entry, in member order.
    pub fn members(&self) -> &[T] {
        match self {
            Self::Individual(item) => std::slice::from_ref(item),
            Self::Group(group) => &group.members,
        }
    }

    pub fn into_members(self) -> Vec<T> {
        match self {
            Self::Individual(item) => vec![item],
            Self::Group(group) => group.members,
        }
    }
}
