use crate::core::aim::AimState;
use crate::core::motion::{CullReason, MotionTuning, Playfield, Projectile};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightSample {
    pub elapsed_s: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlightOutcome {
    Culled(CullReason),
    StepLimit,
}

/// One shot followed from launch until the model would drop it.
#[derive(Clone, Debug)]
pub struct FlightRecord {
    pub samples: Vec<FlightSample>,
    pub first_contact: Option<FlightSample>,
    pub ground_contacts: u32,
    pub final_state: Projectile,
    pub outcome: FlightOutcome,
}

impl FlightRecord {
    /// Highest point above ground reached by the shot.
    pub fn peak_height(&self, ground_y: f64) -> f64 {
        self.samples
            .iter()
            .fold(0.0f64, |acc, s| acc.max(ground_y - s.y))
    }

    /// Points as (distance from launcher, height above ground).
    pub fn plot_points(&self, playfield: &Playfield) -> Vec<(f64, f64)> {
        self.samples
            .iter()
            .map(|s| (s.x - playfield.launch_origin.0, playfield.ground_y - s.y))
            .collect()
    }
}

/// Runs a lone shot through the same rules as `ProjectileField::step`, keeping
/// every intermediate position.
pub fn record_flight(
    aim: &AimState,
    playfield: &Playfield,
    tuning: &MotionTuning,
    dt: f64,
    max_steps: usize,
) -> Result<FlightRecord, String> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(format!("Time step must be a positive number, got {dt}."));
    }

    let mut projectile = Projectile::launch(
        aim.angle_deg,
        aim.speed_mps,
        aim.wind_mps,
        playfield.launch_origin,
    );
    let mut samples = vec![FlightSample {
        elapsed_s: 0.0,
        x: projectile.x,
        y: projectile.y,
    }];
    let mut first_contact = None;
    let mut ground_contacts = 0u32;
    let mut outcome = FlightOutcome::StepLimit;

    for _ in 0..max_steps {
        projectile.integrate(dt, tuning.gravity_mps2, aim.drag_coef);
        let contact = projectile.apply_ground_contact(playfield.ground_y, tuning);
        let sample = FlightSample {
            elapsed_s: projectile.elapsed_s,
            x: projectile.x,
            y: projectile.y,
        };
        samples.push(sample);

        if contact {
            ground_contacts += 1;
            first_contact.get_or_insert(sample);
        }

        if let Some(reason) = playfield.cull_reason(&projectile, tuning) {
            outcome = FlightOutcome::Culled(reason);
            break;
        }
    }

    Ok(FlightRecord {
        samples,
        first_contact,
        ground_contacts,
        final_state: projectile,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::{FlightOutcome, record_flight};
    use crate::core::aim::AimState;
    use crate::core::motion::{CullReason, MotionTuning, Playfield};

    #[test]
    fn default_shot_bounces_and_settles() {
        let playfield = Playfield::default();
        let record = record_flight(
            &AimState::default(),
            &playfield,
            &MotionTuning::default(),
            1.0 / 60.0,
            10_000,
        )
        .expect("recording should succeed");

        assert_eq!(record.outcome, FlightOutcome::Culled(CullReason::Settled));
        assert!(record.ground_contacts >= 1);
        assert_eq!(record.final_state.y, playfield.ground_y);
        assert!(record.peak_height(playfield.ground_y) > 10.0);
    }

    #[test]
    fn strong_headwind_leaves_playfield_to_the_left() {
        let aim = AimState {
            angle_deg: 80.0,
            speed_mps: 60.0,
            wind_mps: -200.0,
            drag_coef: 0.0,
        };
        let record = record_flight(
            &aim,
            &Playfield::default(),
            &MotionTuning::default(),
            0.05,
            10_000,
        )
        .expect("recording should succeed");

        assert_eq!(record.outcome, FlightOutcome::Culled(CullReason::OffScreen));
        assert!(record.final_state.x < -100.0);
    }

    #[test]
    fn step_cap_stops_recording() {
        let record = record_flight(
            &AimState::default(),
            &Playfield::default(),
            &MotionTuning::default(),
            0.01,
            3,
        )
        .expect("recording should succeed");

        assert_eq!(record.outcome, FlightOutcome::StepLimit);
        assert_eq!(record.samples.len(), 4);
    }

    #[test]
    fn rejects_non_positive_step() {
        let err = record_flight(
            &AimState::default(),
            &Playfield::default(),
            &MotionTuning::default(),
            0.0,
            10,
        )
        .expect_err("zero dt should fail");

        assert!(err.contains("positive"));
    }
}
