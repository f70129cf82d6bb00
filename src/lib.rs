//! Shortest routes over small static campus graphs
//!
//! One best-first search engine drives both Dijkstra (priority = cost so far)
//! and A* (priority = cost so far + heuristic estimate). Searches return the
//! path, its cost and the order nodes were explored in, whether or not the
//! goal was reached.
//!
//! ```
//! use campus_nav::{Algorithm, Graph, Navigator, NavigatorConfig, Node};
//!
//! let graph = Graph::new()
//!     .with_node("A", Node::at(0.0, 0.0))
//!     .with_node("B", Node::at(3.0, 0.0))
//!     .with_node("C", Node::at(3.0, 4.0))
//!     .with_edge("A", "B", 3.0)
//!     .with_edge("B", "C", 4.0)
//!     .with_edge("A", "C", 6.0);
//!
//! let navigator = Navigator::new(&graph, NavigatorConfig::default());
//! let route = navigator.route("A", "C", Algorithm::Dijkstra).unwrap();
//! assert_eq!(route.path(), ["A", "C"]);
//! assert_eq!(route.cost(), 6.0);
//! ```

mod collections;

pub mod config;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod heuristics;
pub mod logging;
pub mod navigator;
pub mod report;

pub use config::NavigatorConfig;
pub use errors::{Endpoint, Error, SearchError};
pub use graph::{Edge, Graph, Node, NodeId};
pub use graph_algos::{a_star::AStar, dijkstra::{dijkstra, dijkstra_route}, SearchResult, SearchStats};
pub use heuristics::{Heuristic, HeuristicKind};
pub use navigator::{Algorithm, Navigator};
pub use report::RouteReport;
