use crate::errors::{Endpoint, SearchError};
use crate::graph::Graph;
use super::{best_first, SearchResult};

use std::{hash::Hash, fmt::Debug};
use num_traits::Float;


/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start Node, traverse through graph until node meets goal criteria
/// Nodes are expanded purely by their cost from the start
pub fn dijkstra<N, C, IT, NN, G>(start: N, neighbors: NN, goal: G) -> Result<SearchResult<N, C>, SearchError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Float + Debug,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    best_first(start, neighbors, |_, cost| cost, goal)
}


/// Dijkstra between two named nodes of a graph
/// Fails with `InvalidNode` if either id is missing; an unreachable goal is a
/// result with `success() == false`
pub fn dijkstra_route<'g>(graph: &'g Graph, start: &str, goal: &str) -> Result<SearchResult<&'g str>, SearchError> {
    let start = graph.resolve(start, Endpoint::Start)?;
    let goal = graph.resolve(goal, Endpoint::Goal)?;

    tracing::debug!(start, goal, "dijkstra");

    dijkstra(
        start,
        move |node: &&'g str| graph.neighbors(node),
        move |node: &&'g str| *node == goal,
    )
}
