//! Human facing summary of a found route
//!
//! Everything here is derived from a search result after the fact; distances
//! are reported in the graph's own units, which the bundled data treats as metres.

use std::fmt;

use serde::Serialize;

use crate::graph::Graph;
use crate::graph_algos::SearchResult;


/// One stop along the route
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteStep {
    pub id: String,
    pub name: String,
    pub leg_distance: f64, // distance from the previous stop, 0 for the first
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteReport {
    pub algorithm: String,
    pub total_distance: f64,
    pub stops: usize,
    pub nodes_explored: usize,
    pub estimated_minutes: f64,
    pub steps: Vec<RouteStep>,
}

impl RouteReport {

    /// Summarize a successful search; None if the goal was not reached
    /// `walking_speed` is in distance units per second
    pub fn from_result(
        graph: &Graph,
        result: &SearchResult<&str>,
        algorithm: impl Into<String>,
        walking_speed: f64,
    ) -> Option<Self> {
        if !result.success() {
            return None;
        }

        let path = result.path();
        let steps = path
            .iter()
            .enumerate()
            .map(|(i, &id)| RouteStep {
                id: id.to_string(),
                name: graph.display_name(id).to_string(),
                leg_distance: match i {
                    0 => 0.0,
                    _ => graph.edge_cost(path[i - 1], id).unwrap_or(f64::NAN),
                },
            })
            .collect();

        Some(Self {
            algorithm: algorithm.into(),
            total_distance: result.cost(),
            stops: path.len(),
            nodes_explored: result.nodes_explored(),
            estimated_minutes: result.cost() / walking_speed / 60.0,
            steps,
        })
    }
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm:       {}", self.algorithm)?;
        writeln!(f, "Total distance:  {:.1} m", self.total_distance)?;
        writeln!(f, "Nodes explored:  {}", self.nodes_explored)?;
        writeln!(f, "Path length:     {} locations", self.stops)?;
        writeln!(f, "Estimated time:  {:.1} min", self.estimated_minutes)?;
        writeln!(f)?;
        for (i, step) in self.steps.iter().enumerate() {
            let marker = if i == 0 {
                "start"
            } else if i + 1 == self.steps.len() {
                "goal "
            } else {
                "  -> "
            };
            if i == 0 {
                writeln!(f, "{marker} {:>3}. {}", i + 1, step.name)?;
            } else {
                writeln!(f, "{marker} {:>3}. {} (+{:.1} m)", i + 1, step.name, step.leg_distance)?;
            }
        }
        Ok(())
    }
}
