//! Route queries against one graph
//!
//! The navigator owns the caller-level policy the search engine leaves open:
//! endpoint validation, whether a route may start at its own goal, and which
//! algorithm runs when none is named.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::NavigatorConfig;
use crate::errors::{Endpoint, ParseError, SearchError};
use crate::graph::Graph;
use crate::graph_algos::a_star::AStar;
use crate::graph_algos::dijkstra::dijkstra_route;
use crate::graph_algos::SearchResult;
use crate::heuristics::HeuristicKind;


/// Search algorithm selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Algorithm {
    Dijkstra,
    AStar(HeuristicKind),
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::AStar(HeuristicKind::Euclidean)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dijkstra => f.write_str("dijkstra"),
            Algorithm::AStar(heuristic) => write!(f, "astar-{heuristic}"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::default()),
            _ => name
                .strip_prefix("astar-")
                .or_else(|| name.strip_prefix("a*-"))
                .and_then(|heuristic| heuristic.parse().ok())
                .map(Algorithm::AStar)
                .ok_or_else(|| ParseError::UnknownAlgorithm(name.clone())),
        }
    }
}

impl TryFrom<String> for Algorithm {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Algorithm> for String {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.to_string()
    }
}


/// Runs route queries over a borrowed graph
/// The graph is only read, so several navigators may share it across threads
pub struct Navigator<'g> {
    graph: &'g Graph,
    config: NavigatorConfig,
}

impl<'g> Navigator<'g> {

    pub fn new(graph: &'g Graph, config: NavigatorConfig) -> Self {
        Self { graph, config }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Route with the configured default algorithm
    pub fn route_default(&self, start: &str, goal: &str) -> Result<SearchResult<&'g str>, SearchError> {
        self.route(start, goal, self.config.default_algorithm)
    }

    /// Find the cheapest route from `start` to `goal`
    /// Unknown ids fail with `InvalidNode`; `start == goal` fails with
    /// `SameEndpoints` unless the config allows it, in which case the route is
    /// the start alone at zero cost
    pub fn route(&self, start: &str, goal: &str, algorithm: Algorithm) -> Result<SearchResult<&'g str>, SearchError> {
        let span = tracing::debug_span!("route", start, goal, %algorithm);
        let _guard = span.enter();

        self.graph.resolve(start, Endpoint::Start)?;
        self.graph.resolve(goal, Endpoint::Goal)?;
        if start == goal && !self.config.allow_same_endpoints {
            tracing::debug!("rejected, start is the goal");
            return Err(SearchError::SameEndpoints(start.to_string()));
        }

        let result = match algorithm {
            Algorithm::Dijkstra => dijkstra_route(self.graph, start, goal)?,
            Algorithm::AStar(heuristic) => AStar{}.route(self.graph, start, goal, &heuristic)?,
        };

        if result.success() {
            tracing::info!(
                cost = result.cost(),
                stops = result.path().len(),
                explored = result.nodes_explored(),
                "route found"
            );
        } else {
            tracing::info!(explored = result.nodes_explored(), "no route");
        }

        Ok(result)
    }
}
