use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{Edge, Graph, Node};
use crate::collections::FxIndexMap;
use crate::errors::GraphError;


/// On-disk shape of a graph
/// `nodes` is either an object keyed by id or a list of nodes keyed by `name`
#[derive(Deserialize)]
struct RawGraph {
    nodes: RawNodes,
    #[serde(default)]
    edges: Vec<Edge>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNodes {
    Keyed(FxIndexMap<String, Node>),
    Listed(Vec<Node>),
}

impl RawGraph {

    fn into_graph(self) -> Result<Graph, GraphError> {
        let mut graph = Graph::new();

        match self.nodes {
            RawNodes::Keyed(nodes) => {
                for (id, node) in nodes {
                    graph.add_node(id, node);
                }
            }
            RawNodes::Listed(nodes) => {
                for (position, node) in nodes.into_iter().enumerate() {
                    let id = node.name.clone().ok_or(GraphError::UnnamedNode(position))?;
                    graph.add_node(id, node);
                }
            }
        }

        for edge in self.edges {
            graph.add_edge(edge);
        }

        Ok(graph)
    }
}

impl Graph {

    /// Parse a graph from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, GraphError> {
        let raw: RawGraph = serde_json::from_str(json)?;
        let graph = raw.into_graph()?;
        tracing::debug!(nodes = graph.node_count(), edges = graph.edge_count(), "graph loaded");
        Ok(graph)
    }

    /// Read and parse a JSON graph file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, GraphError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading graph");
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
