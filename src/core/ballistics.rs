//! Closed-form flat-ground estimates for the readout. They ignore drag, wind and
//! bouncing; the simulation is the source of truth.

use crate::core::aim::AimState;

/// Below this drag coefficient the ideal range is a fair estimate.
pub const DRAG_NEGLIGIBLE: f64 = 0.0001;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RangeEstimate {
    Ideal(f64),
    DragActive,
}

pub fn velocity_components(angle_deg: f64, speed_mps: f64) -> (f64, f64) {
    let theta = angle_deg.to_radians();
    (speed_mps * theta.cos(), speed_mps * theta.sin())
}

/// `v^2 * sin(2a) / g`. Near 0 or 90 degrees this tends to zero.
pub fn ideal_range(angle_deg: f64, speed_mps: f64, gravity_mps2: f64) -> f64 {
    let theta = angle_deg.to_radians();
    speed_mps * speed_mps * (2.0 * theta).sin() / gravity_mps2
}

/// `2 * v * sin(a) / g`.
pub fn ideal_flight_time(angle_deg: f64, speed_mps: f64, gravity_mps2: f64) -> f64 {
    let (_, vy) = velocity_components(angle_deg, speed_mps);
    2.0 * vy / gravity_mps2
}

/// `(v * sin(a))^2 / (2g)`.
pub fn ideal_apex_height(angle_deg: f64, speed_mps: f64, gravity_mps2: f64) -> f64 {
    let (_, vy) = velocity_components(angle_deg, speed_mps);
    vy * vy / (2.0 * gravity_mps2)
}

pub fn range_estimate(aim: &AimState, gravity_mps2: f64) -> RangeEstimate {
    if aim.drag_coef < DRAG_NEGLIGIBLE {
        RangeEstimate::Ideal(ideal_range(aim.angle_deg, aim.speed_mps, gravity_mps2))
    } else {
        RangeEstimate::DragActive
    }
}

/// Evenly time-spaced points of the drag-free arc as (distance, height) pairs
/// relative to the launch point.
pub fn sample_ideal_arc(
    angle_deg: f64,
    speed_mps: f64,
    gravity_mps2: f64,
    samples: usize,
) -> Vec<(f64, f64)> {
    let sample_count = samples.max(2);
    let flight_time = ideal_flight_time(angle_deg, speed_mps, gravity_mps2);
    let (vx, vy) = velocity_components(angle_deg, speed_mps);
    (0..=sample_count)
        .map(|i| {
            let t = (i as f64 * flight_time) / sample_count as f64;
            (vx * t, vy * t - 0.5 * gravity_mps2 * t * t)
        })
        .collect()
}
