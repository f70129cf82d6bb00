use crate::errors::SearchError;
use crate::collections::{FxIndexMap, FxIndexSet};
use super::{shortest_path, GraphNodeMap, SearchResult, SearchStats};

use std::{
    collections::BinaryHeap,
    hash::Hash,
    fmt::Debug,
    cmp::Ordering
};
use num_traits::Float;
use indexmap::map::Entry::{Occupied, Vacant};


/// Entry on the frontier
/// A node may have several entries; all but the cheapest are stale
#[derive(Debug)]
struct FrontierEntry<C> {
    index: usize, // index in the node map - maps to the Id of the node
    cost: C, // Cost from start at the time of the push
    priority: C, // cost (Dijkstra) or cost + h(n) (A*)
    sequence: usize, // push order, breaks priority ties
}

impl<C: PartialOrd> Ord for FrontierEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the largest, so both keys are reversed
        other.priority.partial_cmp(&self.priority).unwrap_or(Ordering::Equal)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}
impl<C: PartialOrd> PartialOrd for FrontierEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: PartialOrd> PartialEq for FrontierEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<C: PartialOrd> Eq for FrontierEntry<C> {}


/// Best-first search shared by Dijkstra and A*
/// The two differ only in `priority_fn`, which maps a node and its cost from
/// the start to the frontier key.
/// Expands the lowest (priority, push order) entry until `goal_fn` accepts a
/// popped node or the frontier runs dry.
pub(crate) fn best_first<N, C, IT, NN, P, G>(start: N, neighbors: NN, priority_fn: P, goal_fn: G) -> Result<SearchResult<N, C>, SearchError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Float + Debug,
    P: Fn(&N, C) -> C, // frontier key from node + cost from start
    G: Fn(&N) -> bool, // node qualifier for goal
{
    let mut stats = SearchStats::default();
    let mut sequence: usize = 0;

    // Nodes that need to be evaluated, min-heap on (priority, sequence)
    let mut frontier: BinaryHeap<FrontierEntry<C>> = BinaryHeap::new();

    // Best known cost + predecessor for every discovered node
    // for the start node, parent_index is set to usize::MAX to indicate it has no parent
    let mut node_map: GraphNodeMap<N, C> = FxIndexMap::default();

    // Indices of nodes in the order they were first popped
    let mut explored: FxIndexSet<usize> = FxIndexSet::default();

    let start_priority = priority_fn(&start, C::zero());
    let start_index = node_map.insert_full(start, (usize::MAX, C::zero())).0;
    frontier.push(FrontierEntry {
        index: start_index,
        cost: C::zero(),
        priority: start_priority,
        sequence,
    });
    sequence += 1;
    stats.pushes += 1;

    while let Some(FrontierEntry { index, cost, .. }) = frontier.pop() {
        stats.pops += 1;

        // fetch current best cost for node
        let Some((node, &(_, best))) = node_map.get_index(index) else {
            return Err(SearchError::BrokenPath);
        };

        // recorded once, on the first pop
        explored.insert(index);

        // Superseded by a cheaper entry, still expanded below from the current best.
        // The cheaper entry can tie on priority after rounding and pop later
        if cost > best {
            stats.stale_pops += 1;
        }

        // Check if we've reached the goal
        if goal_fn(node) {
            let path = shortest_path(&node_map, index)?;
            tracing::debug!(cost = ?best, hops = path.len() - 1, explored = explored.len(), ?stats, "goal reached");
            return Ok(SearchResult::found(path, best, trace(&node_map, &explored), stats));
        }

        tracing::trace!(?node, cost = ?best, "expanding");

        // loop over neighbors
        for (neighbor, edge_cost) in neighbors(node) {

            // new cost to reach this node = edge cost + node cost
            let new_cost = best + edge_cost;

            let (neighbor_index, priority) = match node_map.entry(neighbor) {
                Vacant(e) => {
                    // This is the first time we're seeing this neighbor
                    let priority = priority_fn(e.key(), new_cost);
                    let neighbor_index = e.index();
                    e.insert((index, new_cost));
                    (neighbor_index, priority)
                }
                Occupied(mut e) => {
                    // Strictly cheaper only, an equal cost route keeps its first predecessor
                    if new_cost < e.get().1 {
                        let priority = priority_fn(e.key(), new_cost);
                        e.insert((index, new_cost));
                        (e.index(), priority)
                    } else {
                        continue;
                    }
                }
            };

            // Only add to the queue if we've found a better path
            frontier.push(FrontierEntry {
                index: neighbor_index,
                cost: new_cost,
                priority,
                sequence,
            });
            sequence += 1;
            stats.pushes += 1;
        }
    }

    tracing::debug!(explored = explored.len(), ?stats, "frontier exhausted");
    Ok(SearchResult::exhausted(trace(&node_map, &explored), stats))
}

/// Explored indices back to nodes, in pop order
fn trace<N: Clone, C>(node_map: &GraphNodeMap<N, C>, explored: &FxIndexSet<usize>) -> Vec<N> {
    explored
        .iter()
        .filter_map(|&index| node_map.get_index(index).map(|(node, _)| node.clone()))
        .collect()
}
