mod forces;

use eframe::egui::Vec2;

use crate::config::PhysicsConfig;
use crate::graph::WorldGraph;

use forces::{centering, repulsion_between, spring_toward};

fn is_finite(value: Vec2) -> bool {
    value.x.is_finite() && value.y.is_finite()
}

/// Advances the layout by one tick.
///
/// Forces are accumulated from the positions at the start of the tick, then
/// every node is integrated with damped explicit Euler. Graphs with fewer than
/// two nodes are left untouched.
pub fn step(graph: &mut WorldGraph, config: &PhysicsConfig, center: Vec2) {
    let node_count = graph.nodes.len();
    if node_count < 2 {
        return;
    }

    let positions = graph
        .nodes
        .iter()
        .map(|node| node.position)
        .collect::<Vec<_>>();
    let mut forces = vec![Vec2::ZERO; node_count];

    for (index, force) in forces.iter_mut().enumerate() {
        let point = positions[index];

        for (other_index, &other) in positions.iter().enumerate() {
            if other_index == index {
                continue;
            }
            let push =
                repulsion_between(point, other, index, other_index, config.repulsion_constant);
            if is_finite(push) {
                *force += push;
            }
        }

        for &(neighbor, edge_index) in graph.incident(index) {
            let weight = graph.edges[edge_index].weight();
            let pull = spring_toward(
                point,
                positions[neighbor],
                config.spring_constant,
                weight,
                config.rest_length,
            );
            if is_finite(pull) {
                *force += pull;
            }
        }

        let pull = centering(point, center, config.centering_constant);
        if is_finite(pull) {
            *force += pull;
        }
    }

    let friction = config.friction();
    let max_speed = config.max_speed();
    for (node, force) in graph.nodes.iter_mut().zip(forces) {
        let mut velocity = (node.velocity + force) * friction;
        if let Some(max_speed) = max_speed {
            let speed = velocity.length();
            if speed > max_speed {
                velocity *= max_speed / speed;
            }
        }
        if !is_finite(velocity) {
            velocity = Vec2::ZERO;
        }

        node.velocity = velocity;
        node.position += velocity;
    }
}
