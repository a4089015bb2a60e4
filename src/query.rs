use eframe::egui::{Vec2, vec2};

use crate::graph::{GraphEdge, GraphNode, WorldGraph};

/// How far edge curves bow upward from the straight line between two nodes.
pub const EDGE_CURVE_LIFT: f32 = 20.0;

/// Rendered radius of a node: grows with the number of dreams in the world.
pub fn default_node_radius(node: &GraphNode) -> f32 {
    16.0 + (node.record_count as f32) * 8.0
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgePath<'a> {
    pub edge_id: &'a str,
    pub from: Vec2,
    pub to: Vec2,
    /// Quadratic curve control point.
    pub control: Vec2,
    pub weight: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// Read-only view of the current layout, for drawing and tap handling.
#[derive(Clone, Copy)]
pub struct LayoutView<'a> {
    graph: &'a WorldGraph,
}

impl WorldGraph {
    pub fn layout(&self) -> LayoutView<'_> {
        LayoutView { graph: self }
    }
}

impl<'a> LayoutView<'a> {
    pub fn current_nodes(&self) -> &'a [GraphNode] {
        self.graph.nodes()
    }

    pub fn current_edges(&self) -> &'a [GraphEdge] {
        self.graph.edges()
    }

    pub fn node(&self, id: &str) -> Option<&'a GraphNode> {
        self.graph.node(id)
    }

    pub fn neighbors(&self, id: &str) -> Vec<&'a GraphNode> {
        let Some(index) = self.graph.index_of(id) else {
            return Vec::new();
        };
        self.graph
            .incident(index)
            .iter()
            .map(|&(neighbor, _)| &self.graph.nodes()[neighbor])
            .collect()
    }

    pub fn edge_paths(&self) -> impl Iterator<Item = EdgePath<'a>> + 'a {
        let graph = self.graph;
        graph.edges().iter().filter_map(move |edge| {
            let from = graph.node(&edge.from)?.position;
            let to = graph.node(&edge.to)?.position;
            let control = (from + to) * 0.5 - vec2(0.0, EDGE_CURVE_LIFT);
            Some(EdgePath {
                edge_id: edge.id.as_str(),
                from,
                to,
                control,
                weight: edge.weight(),
            })
        })
    }

    /// First node, in graph order, whose rendered circle strictly contains `point`.
    pub fn hit_test<F>(&self, point: Vec2, radius_of: F) -> Option<&'a GraphNode>
    where
        F: Fn(&GraphNode) -> f32,
    {
        self.graph
            .nodes()
            .iter()
            .find(|node| (node.position - point).length() < radius_of(node))
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let mut nodes = self.graph.nodes().iter();
        let first = nodes.next()?.position;
        let mut bounds = Bounds {
            min: first,
            max: first,
        };
        for node in nodes {
            bounds.min = bounds.min.min(node.position);
            bounds.max = bounds.max.max(node.position);
        }
        Some(bounds)
    }
}
