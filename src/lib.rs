//! Force-directed layout for dream world maps.
//!
//! Journal entries sharing a theme become one world node; worlds sharing a
//! symbolic tag are linked. A [`Simulation`] relaxes the map with repulsion,
//! springs, centering and damping, ticking fast while it settles and slowly
//! afterwards.

pub mod config;
pub mod graph;
pub mod physics;
pub mod query;
pub mod record;
pub mod schedule;
pub mod simulation;

pub use config::{LayoutConfig, PhysicsConfig, ScheduleConfig, SeedConfig};
pub use graph::{
    GraphEdge, GraphNode, MIN_RENDERABLE_NODES, WorldGraph, build_graph, edge_id,
};
pub use query::{Bounds, EdgePath, LayoutView, default_node_radius};
pub use record::{Category, TaggedRecord};
pub use schedule::{Clock, ManualClock, Phase, Scheduler, SystemClock};
pub use simulation::Simulation;

pub use eframe::egui::{Vec2, vec2};
