//! Campus map points - buildings and path intersections

use geo::{Distance, Euclidean, Point};

/// A single location on the campus map.
///
/// Carries the map-file id, the display name (empty for unnamed path
/// intersections) and pixel coordinates. Immutable after loading.
#[derive(Debug, Clone, PartialEq)]
pub struct CampusPoint {
    /// Unique id from the node data file
    pub id: String,
    /// Building name; empty for intersections
    pub name: String,
    /// Pixel coordinates, y grows southward
    pub geometry: Point<f64>,
}

impl CampusPoint {
    pub fn new(name: impl Into<String>, id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            geometry: Point::new(x, y),
        }
    }

    /// Straight-line distance to `other` in pixel units.
    pub fn distance(&self, other: &Self) -> f64 {
        Euclidean.distance(self.geometry, other.geometry)
    }

    /// Angle of the segment `from -> to` relative to the positive x-axis,
    /// in degrees within (-180, 180].
    pub fn heading(from: &Self, to: &Self) -> f64 {
        let dx = to.geometry.x() - from.geometry.x();
        let dy = to.geometry.y() - from.geometry.y();
        dy.atan2(dx).to_degrees()
    }

    /// Name shown to the user: the building name, or `Intersection <id>`
    /// for unnamed points.
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            format!("Intersection {}", self.id)
        } else {
            self.name.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = CampusPoint::new("A", "1", 0.0, 0.0);
        let b = CampusPoint::new("B", "2", 3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
    }

    #[test]
    fn heading_follows_screen_convention() {
        let a = CampusPoint::new("A", "1", 0.0, 0.0);
        let east = CampusPoint::new("E", "2", 10.0, 0.0);
        let south = CampusPoint::new("S", "3", 0.0, 10.0);
        assert_eq!(CampusPoint::heading(&a, &east), 0.0);
        // y grows downward on the map, so "down" is +90 degrees
        assert_eq!(CampusPoint::heading(&a, &south), 90.0);
    }

    #[test]
    fn intersections_get_synthetic_names() {
        let named = CampusPoint::new("Library", "42", 1.0, 2.0);
        let unnamed = CampusPoint::new("", "17", 3.0, 4.0);
        assert_eq!(named.display_name(), "Library");
        assert_eq!(unnamed.display_name(), "Intersection 17");
    }
}
