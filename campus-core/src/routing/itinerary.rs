//! Route reconstruction and turn-by-turn rendering

use std::fmt;

use hashbrown::HashMap;

use crate::model::CampusPoint;
use crate::routing::dijkstra::SearchResult;

/// One of eight 45-degree compass sectors.
///
/// Map coordinates have y growing southward, so a hop with increasing y
/// is labeled South. The sector boundaries follow the map convention and
/// are not standard compass geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompassDirection {
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    North,
    NorthEast,
}

impl CompassDirection {
    /// Buckets an angle in degrees, range (-180, 180], into its sector.
    /// East is centered on 0 and each sector spans 45 degrees; West wraps
    /// across the +-180 seam.
    pub fn from_degrees(angle: f64) -> Self {
        if (-22.5..22.5).contains(&angle) {
            Self::East
        } else if (22.5..67.5).contains(&angle) {
            Self::SouthEast
        } else if (67.5..112.5).contains(&angle) {
            Self::South
        } else if (112.5..157.5).contains(&angle) {
            Self::SouthWest
        } else if angle >= 157.5 || angle < -157.5 {
            Self::West
        } else if (-157.5..-112.5).contains(&angle) {
            Self::NorthWest
        } else if (-112.5..-67.5).contains(&angle) {
            Self::North
        } else {
            Self::NorthEast
        }
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::East => "East",
            Self::SouthEast => "SouthEast",
            Self::South => "South",
            Self::SouthWest => "SouthWest",
            Self::West => "West",
            Self::NorthWest => "NorthWest",
            Self::North => "North",
            Self::NorthEast => "NorthEast",
        };
        f.write_str(name)
    }
}

/// One hop of an itinerary: the travel direction and the display name of
/// the hop's destination.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStep {
    pub direction: CompassDirection,
    pub destination: String,
}

/// Outcome of a path query, rendered to text at the interface edge.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteResult {
    /// Endpoint strings that did not resolve to any building
    UnknownBuildings(Vec<String>),
    /// Both endpoints exist but lie in different components
    NoPath { from: String, to: String },
    /// A walkable route in source-to-target order
    Itinerary {
        from: String,
        to: String,
        steps: Vec<RouteStep>,
        total_distance: f64,
    },
}

impl fmt::Display for RouteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBuildings(queries) => {
                for (i, query) in queries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "Unknown building: [{query}]")?;
                }
                Ok(())
            }
            Self::NoPath { from, to } => {
                write!(f, "There is no path from {from} to {to}.")
            }
            Self::Itinerary {
                from,
                to,
                steps,
                total_distance,
            } => {
                writeln!(f, "Path from {from} to {to}:")?;
                for step in steps {
                    writeln!(f, "\tWalk {} to ({})", step.direction, step.destination)?;
                }
                write!(f, "Total distance: {total_distance:.3} pixel units.")
            }
        }
    }
}

fn display_name(points: &HashMap<String, CampusPoint>, id: &str) -> String {
    points
        .get(id)
        .map_or_else(|| id.to_owned(), CampusPoint::display_name)
}

/// Walks the predecessor chain backward from `target` to `source` and
/// assembles the itinerary in forward order. An infinite target distance
/// renders as a no-path result.
pub fn render_route(
    source: &str,
    target: &str,
    search: &SearchResult,
    points: &HashMap<String, CampusPoint>,
) -> RouteResult {
    let from = display_name(points, source);
    let to = display_name(points, target);

    let total_distance = search.distance_to(target);
    if total_distance.is_infinite() {
        return RouteResult::NoPath { from, to };
    }

    let mut steps = Vec::new();
    let mut current = target;
    while current != source {
        let Some((parent, _)) = search.predecessor.get(current) else {
            break;
        };
        let (Some(parent_point), Some(child_point)) = (points.get(parent), points.get(current))
        else {
            break;
        };
        let angle = CampusPoint::heading(parent_point, child_point);
        steps.push(RouteStep {
            direction: CompassDirection::from_degrees(angle),
            destination: child_point.display_name(),
        });
        current = parent;
    }
    steps.reverse();

    RouteResult::Itinerary {
        from,
        to,
        steps,
        total_distance,
    }
}
