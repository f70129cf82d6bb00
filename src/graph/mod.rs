mod load;

use crate::collections::FxIndexMap;
use crate::errors::{Endpoint, SearchError};
use crate::geometry::Point;

use serde::{Deserialize, Serialize};


/// Node identifier - the key a node is stored under
pub type NodeId = String;

/// Location on the graph
/// Coordinates are optional and only read by heuristics
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

impl Node {

    /// Node placed at (x, y)
    pub fn at(x: f64, y: f64) -> Self {
        Self { name: None, x: Some(x), y: Some(y) }
    }

    /// Attach a display name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Position, if both coordinates are known
    pub fn position(&self) -> Option<Point> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some(Point::new(x, y)),
            _ => None,
        }
    }
}


/// Undirected weighted edge
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    /// Traversal cost, must be non-negative
    /// Not checked: a negative edge lets relaxation improve costs without
    /// bound and a search over it may never finish
    pub distance: f64,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>, // carried along, never read by the search
}

impl Edge {

    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, distance: f64) -> Self {
        Self { from: from.into(), to: to.into(), distance, kind: None }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// The endpoint across from `id`, None if the edge does not touch `id`
    /// A self-loop returns `id` itself
    pub fn opposite(&self, id: &str) -> Option<&str> {
        if self.from == id {
            Some(&self.to)
        } else if self.to == id {
            Some(&self.from)
        } else {
            None
        }
    }

    /// True if the edge joins `a` and `b` in either direction
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}


/// Static weighted undirected graph
/// Nodes keep their insertion order, neighbors are enumerated in edge insertion order
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: FxIndexMap<NodeId, Node>,
    edges: Vec<Edge>,
    // indices into `edges` for every node an edge touches
    incidence: FxIndexMap<NodeId, Vec<usize>>,
}

impl Graph {

    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, replacing any node already stored under `id`
    pub fn add_node(&mut self, id: impl Into<NodeId>, node: Node) -> &mut Self {
        self.nodes.insert(id.into(), node);
        self
    }

    /// Insert an edge
    /// Endpoints are not checked against the node collection
    pub fn add_edge(&mut self, edge: Edge) -> &mut Self {
        let index = self.edges.len();
        self.incidence.entry(edge.from.clone()).or_default().push(index);
        if edge.to != edge.from {
            self.incidence.entry(edge.to.clone()).or_default().push(index);
        }
        self.edges.push(edge);
        self
    }

    pub fn with_node(mut self, id: impl Into<NodeId>, node: Node) -> Self {
        self.add_node(id, node);
        self
    }

    pub fn with_edge(mut self, from: impl Into<NodeId>, to: impl Into<NodeId>, distance: f64) -> Self {
        self.add_edge(Edge::new(from, to, distance));
        self
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.nodes.iter().map(|(id, node)| (id.as_str(), node))
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Position lookup used by heuristics
    pub fn position(&self, id: &str) -> Option<Point> {
        self.nodes.get(id).and_then(Node::position)
    }

    /// Display name of a node, falling back to its id
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.nodes
            .get(id)
            .and_then(|node| node.name.as_deref())
            .unwrap_or(id)
    }

    /// Every (neighbor, edge cost) pair one edge away from `id`
    /// Unknown ids and isolated nodes yield nothing
    pub fn neighbors(&self, id: &str) -> Neighbors<'_> {
        match self.incidence.get_key_value(id) {
            Some((key, incident)) => Neighbors {
                node: key,
                edges: &self.edges,
                incident: incident.iter(),
            },
            None => Neighbors {
                node: "",
                edges: &self.edges,
                incident: Default::default(),
            },
        }
    }

    /// Cheapest edge cost directly between `a` and `b`
    pub fn edge_cost(&self, a: &str, b: &str) -> Option<f64> {
        self.incidence
            .get(a)?
            .iter()
            .map(|&i| &self.edges[i])
            .filter(|edge| edge.connects(a, b))
            .map(|edge| edge.distance)
            .reduce(f64::min)
    }

    /// Look up an endpoint, returning the id as stored in the graph
    pub fn resolve(&self, id: &str, role: Endpoint) -> Result<&str, SearchError> {
        self.nodes
            .get_key_value(id)
            .map(|(key, _)| key.as_str())
            .ok_or_else(|| SearchError::InvalidNode { role, id: id.to_string() })
    }
}


/// Iterator over the neighbors of one node, see [`Graph::neighbors`]
#[derive(Clone, Debug)]
pub struct Neighbors<'a> {
    node: &'a str,
    edges: &'a [Edge],
    incident: std::slice::Iter<'a, usize>,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = (&'a str, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let edges = self.edges;
        let edge = &edges[*self.incident.next()?];
        let other = edge.opposite(self.node)?;
        Some((other, edge.distance))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.incident.size_hint()
    }
}
