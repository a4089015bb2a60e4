use std::collections::{BTreeSet, HashMap};

use eframe::egui::Vec2;

use crate::record::Category;

mod build;

pub use build::build_graph;

/// Fewer distinct themes than this are not worth drawing as a map.
pub const MIN_RENDERABLE_NODES: usize = 2;

const EDGE_ID_SEPARATOR: char = '\u{1f}';

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
    pub id: String,
    pub position: Vec2,
    pub velocity: Vec2,
    pub record_count: usize,
    pub dominant_category: Category,
    pub tags: BTreeSet<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphEdge {
    pub id: String,
    pub from: String,
    pub to: String,
    pub shared_tags: BTreeSet<String>,
}

impl GraphEdge {
    pub fn weight(&self) -> f32 {
        self.shared_tags.len() as f32
    }

    pub fn other(&self, id: &str) -> Option<&str> {
        if self.from == id {
            Some(self.to.as_str())
        } else if self.to == id {
            Some(self.from.as_str())
        } else {
            None
        }
    }
}

/// Identifier for the unordered pair `(a, b)`.
pub fn edge_id(a: &str, b: &str) -> String {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    let mut id = String::with_capacity(first.len() + second.len() + 1);
    id.push_str(first);
    id.push(EDGE_ID_SEPARATOR);
    id.push_str(second);
    id
}

/// Nodes and edges of one world map, plus the indexes the simulation walks.
#[derive(Clone, Debug, Default)]
pub struct WorldGraph {
    pub(crate) nodes: Vec<GraphNode>,
    pub(crate) edges: Vec<GraphEdge>,
    index_by_id: HashMap<String, usize>,
    /// `(neighbor node index, edge index)` per node.
    incident: Vec<Vec<(usize, usize)>>,
}

impl WorldGraph {
    pub(crate) fn from_parts(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Self {
        let mut index_by_id = HashMap::with_capacity(nodes.len());
        for (index, node) in nodes.iter().enumerate() {
            index_by_id.insert(node.id.clone(), index);
        }

        let mut incident = vec![Vec::new(); nodes.len()];
        for (edge_index, edge) in edges.iter().enumerate() {
            let (Some(&from), Some(&to)) = (index_by_id.get(&edge.from), index_by_id.get(&edge.to))
            else {
                continue;
            };
            if from == to {
                continue;
            }
            incident[from].push((to, edge_index));
            incident[to].push((from, edge_index));
        }

        Self {
            nodes,
            edges,
            index_by_id,
            incident,
        }
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn is_renderable(&self) -> bool {
        self.nodes.len() >= MIN_RENDERABLE_NODES
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.index_of(id).map(|index| &self.nodes[index])
    }

    pub(crate) fn incident(&self, index: usize) -> &[(usize, usize)] {
        self.incident.get(index).map(Vec::as_slice).unwrap_or(&[])
    }
}
