use eframe::egui::{Vec2, vec2};

const COINCIDENT_DISTANCE: f32 = 0.0001;
const MIN_REPULSION_DISTANCE: f32 = 1.0;

/// Unit vector from `point_b` to `point_a`, or a stable per-pair direction when
/// the two points coincide.
fn separation_direction(delta: Vec2, distance: f32, index_a: usize, index_b: usize) -> Vec2 {
    if distance > COINCIDENT_DISTANCE {
        return delta / distance;
    }

    let (low, high) = (index_a.min(index_b), index_a.max(index_b));
    let angle = ((low as f32) * 0.618_034 + (high as f32) * 0.414_214 + 0.11)
        * std::f32::consts::TAU;
    let direction = vec2(angle.cos(), angle.sin());
    if index_a < index_b {
        direction
    } else {
        -direction
    }
}

/// Coulomb-style push on `a` away from `b`.
pub(super) fn repulsion_between(
    point_a: Vec2,
    point_b: Vec2,
    index_a: usize,
    index_b: usize,
    repulsion_constant: f32,
) -> Vec2 {
    let delta = point_a - point_b;
    let distance = delta.length();
    let direction = separation_direction(delta, distance, index_a, index_b);
    let floored = distance.max(MIN_REPULSION_DISTANCE);
    direction * (repulsion_constant / (floored * floored))
}

/// Hookean pull on `point` toward `neighbor`, pushing instead inside the rest length.
pub(super) fn spring_toward(
    point: Vec2,
    neighbor: Vec2,
    spring_constant: f32,
    weight: f32,
    rest_length: f32,
) -> Vec2 {
    let delta = neighbor - point;
    let distance = delta.length();
    if distance <= COINCIDENT_DISTANCE {
        return Vec2::ZERO;
    }
    let displacement = distance - rest_length;
    (delta / distance) * (displacement * spring_constant * weight)
}

pub(super) fn centering(point: Vec2, center: Vec2, centering_constant: f32) -> Vec2 {
    (center - point) * centering_constant
}
