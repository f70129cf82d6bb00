use crate::errors::{Endpoint, SearchError};
use crate::graph::Graph;
use crate::heuristics::Heuristic;
use super::{best_first, SearchResult};

use std::{
    hash::Hash,
    fmt::Debug,
};
use num_traits::Float;


/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
pub struct AStar {}

impl AStar {

    /// From start Node, traverse through graph until node meets goal criteria
    /// Nodes are expanded by cost from the start plus the heuristic estimate.
    /// The returned path is only guaranteed optimal when the heuristic is
    /// admissible (never overestimates the true cost to reach the goal)
    pub fn plan<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> Result<SearchResult<N, C>, SearchError>
    where
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
        H: Fn(&N) -> C, // heuristic function
        IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
        C: Float + Debug,
        G: Fn(&N) -> bool, // node qualifier for goal
        {

        best_first(start, neighbors, |node, cost| cost + heuristic_fn(node), goal_fn)
    }

    /// A* between two named nodes of a graph, estimating with `heuristic`
    /// Fails with `InvalidNode` if either id is missing; an unreachable goal is a
    /// result with `success() == false`
    pub fn route<'g, H>(&self, graph: &'g Graph, start: &str, goal: &str, heuristic: &H) -> Result<SearchResult<&'g str>, SearchError>
    where
        H: Heuristic + ?Sized,
    {
        let start = graph.resolve(start, Endpoint::Start)?;
        let goal = graph.resolve(goal, Endpoint::Goal)?;

        tracing::debug!(start, goal, "a*");

        self.plan(
            start,
            move |node: &&'g str| graph.neighbors(node),
            move |node: &&'g str| heuristic.estimate(node, goal, graph),
            move |node: &&'g str| *node == goal,
        )
    }
}
