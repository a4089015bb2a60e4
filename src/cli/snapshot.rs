use dream_world_graph::{Clock, GraphNode, Simulation, default_node_radius, vec2};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LayoutSnapshot {
    renderable: bool,
    phase: Option<&'static str>,
    tick_count: u64,
    nodes: Vec<NodeSnapshot>,
    edges: Vec<EdgeSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hit: Option<HitSnapshot>,
}

#[derive(Debug, Serialize)]
struct NodeSnapshot {
    id: String,
    x: f32,
    y: f32,
    radius: f32,
    record_count: usize,
    dominant_category: &'static str,
    tags: Vec<String>,
}

#[derive(Debug, Serialize)]
struct EdgeSnapshot {
    id: String,
    from: String,
    to: String,
    shared_tags: Vec<String>,
    weight: f32,
}

#[derive(Debug, Serialize)]
struct HitSnapshot {
    x: f32,
    y: f32,
    node: Option<String>,
}

fn node_snapshot(node: &GraphNode) -> NodeSnapshot {
    NodeSnapshot {
        id: node.id.clone(),
        x: node.position.x,
        y: node.position.y,
        radius: default_node_radius(node),
        record_count: node.record_count,
        dominant_category: node.dominant_category.label(),
        tags: node.tags.iter().cloned().collect(),
    }
}

impl LayoutSnapshot {
    pub fn capture<C: Clock>(simulation: &Simulation<C>, hit: Option<(f32, f32)>) -> Self {
        let layout = simulation.layout();
        let hit = hit.map(|(x, y)| HitSnapshot {
            x,
            y,
            node: layout
                .hit_test(vec2(x, y), default_node_radius)
                .map(|node| node.id.clone()),
        });

        Self {
            renderable: simulation.graph().is_renderable(),
            phase: simulation.phase().map(|phase| phase.label()),
            tick_count: simulation.tick_count(),
            nodes: layout.current_nodes().iter().map(node_snapshot).collect(),
            edges: layout
                .current_edges()
                .iter()
                .map(|edge| EdgeSnapshot {
                    id: edge.id.clone(),
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    shared_tags: edge.shared_tags.iter().cloned().collect(),
                    weight: edge.weight(),
                })
                .collect(),
            hit,
        }
    }
}
