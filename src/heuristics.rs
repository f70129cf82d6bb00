//! Remaining-cost estimates for A*
//!
//! A* only returns an optimal route when the estimate never overestimates the
//! true remaining cost. Euclidean distance is admissible when every edge is at
//! least as long as the straight line between its endpoints, Manhattan distance
//! when every edge is at least as long as the grid distance. The search does not
//! check this; with an inadmissible heuristic it may quietly return a longer route.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseError;
use crate::geometry::Point;
use crate::graph::Graph;


/// Estimate of the cost still to travel from `node` to `goal`
pub trait Heuristic {

    /// Distance between two known positions
    fn distance(&self, from: &Point, to: &Point) -> f64;

    /// Estimate using the graph's position table
    /// Nodes without coordinates estimate to 0, which is always admissible
    fn estimate(&self, node: &str, goal: &str, positions: &Graph) -> f64 {
        match (positions.position(node), positions.position(goal)) {
            (Some(from), Some(to)) => self.distance(&from, &to),
            _ => 0.0,
        }
    }
}

/// Built-in heuristics, selectable by name
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeuristicKind {
    #[default]
    Euclidean,
    Manhattan,
}

impl Heuristic for HeuristicKind {
    fn distance(&self, from: &Point, to: &Point) -> f64 {
        match self {
            HeuristicKind::Euclidean => from.euclidean_to(to),
            HeuristicKind::Manhattan => from.manhattan_to(to),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeuristicKind::Euclidean => f.write_str("euclidean"),
            HeuristicKind::Manhattan => f.write_str("manhattan"),
        }
    }
}

impl FromStr for HeuristicKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euclidean" => Ok(HeuristicKind::Euclidean),
            "manhattan" => Ok(HeuristicKind::Manhattan),
            other => Err(ParseError::UnknownHeuristic(other.to_string())),
        }
    }
}
