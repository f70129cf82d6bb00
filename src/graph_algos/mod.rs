
pub mod dijkstra;
pub mod a_star;
mod best_first;
mod shortest_path;

use best_first::best_first;
use shortest_path::shortest_path;

use crate::collections::FxIndexMap;

use num_traits::Float;
use serde::Serialize;

/// Type alias for the node map used in path planning algorithms
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map, usize::MAX for the start
/// - cost is the best known cost to reach this node from the start
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;


/// Frontier counters for one search, diagnostic only
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub pops: usize,       // every entry taken off the frontier
    pub stale_pops: usize, // entries superseded by a cheaper push for the same node
    pub pushes: usize,
}


/// Outcome of a search
/// An unreachable goal is a normal outcome: `success` is false, the path is
/// empty and the cost is infinite. The exploration trace is always filled in.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchResult<N, C = f64> {
    path: Vec<N>,
    cost: C,
    nodes_explored: usize,
    exploration_trace: Vec<N>,
    success: bool,
    stats: SearchStats,
}

impl<N, C: Float> SearchResult<N, C> {

    pub(crate) fn found(path: Vec<N>, cost: C, exploration_trace: Vec<N>, stats: SearchStats) -> Self {
        Self {
            path,
            cost,
            nodes_explored: exploration_trace.len(),
            exploration_trace,
            success: true,
            stats,
        }
    }

    pub(crate) fn exhausted(exploration_trace: Vec<N>, stats: SearchStats) -> Self {
        Self {
            path: Vec::new(),
            cost: C::infinity(),
            nodes_explored: exploration_trace.len(),
            exploration_trace,
            success: false,
            stats,
        }
    }
}

impl<N, C: Copy> SearchResult<N, C> {

    /// Nodes from start to goal, empty if the goal was not reached
    pub fn path(&self) -> &[N] {
        &self.path
    }

    /// Total cost of the path, infinite if the goal was not reached
    pub fn cost(&self) -> C {
        self.cost
    }

    /// Number of distinct nodes taken off the frontier
    pub fn nodes_explored(&self) -> usize {
        self.nodes_explored
    }

    /// Nodes in the order they were first taken off the frontier
    pub fn exploration_trace(&self) -> &[N] {
        &self.exploration_trace
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn into_path(self) -> Vec<N> {
        self.path
    }
}
