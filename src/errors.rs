use std::fmt;
use thiserror::Error;


/// Which end of a route a node id was supplied for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::Goal => f.write_str("goal"),
        }
    }
}

/// Failures surfaced by a route search.
/// An unreachable goal is not an error, it is a result with `success == false`.
#[derive(Debug, Error, PartialEq)]
pub enum SearchError {
    #[error("{role} node `{id}` is not in the graph")]
    InvalidNode { role: Endpoint, id: String },
    #[error("start and goal are the same node `{0}`")]
    SameEndpoints(String),
    #[error("predecessor chain is broken, graph is malformed")]
    BrokenPath,
}

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("failed to read graph file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid graph JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("node #{0} in the node list has no name")]
    UnnamedNode(usize),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid config value for `{key}`: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

/// Bad selector strings for heuristics and algorithms
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("unknown heuristic `{0}` (expected euclidean or manhattan)")]
    UnknownHeuristic(String),
    #[error("unknown algorithm `{0}` (expected astar-euclidean, astar-manhattan or dijkstra)")]
    UnknownAlgorithm(String),
}

/// Top level error for callers that drive the whole pipeline
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}
