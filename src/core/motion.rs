//! Point-mass projectile model: spawn, integrate, bounce off the ground, cull.
//!
//! Coordinates are screen-like: one unit is one pixel and one metre, x grows to
//! the right and y grows downward, so "up" is negative y.

use tracing::debug;

use crate::core::aim::AimState;

pub const EARTH_GRAVITY_MPS2: f64 = 9.81;

/// Thresholds of the lifecycle rules.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionTuning {
    /// Downward acceleration in m/s^2.
    pub gravity_mps2: f64,
    /// Horizontal velocity factor applied on each ground contact.
    pub bounce_friction: f64,
    /// Vertical velocity is reversed and scaled by this on each ground contact.
    pub bounce_restitution: f64,
    /// Both velocity components below this at ground level count as settled.
    pub settle_speed_mps: f64,
    /// Extra room left and right of the playfield before a shot is culled.
    pub offscreen_margin: f64,
    /// Hard lifetime cap in seconds.
    pub max_lifetime_s: f64,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            gravity_mps2: EARTH_GRAVITY_MPS2,
            bounce_friction: 0.25,
            bounce_restitution: 0.2,
            settle_speed_mps: 0.5,
            offscreen_margin: 100.0,
            max_lifetime_s: 30.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playfield {
    pub width: f64,
    pub height: f64,
    pub ground_y: f64,
    pub launch_origin: (f64, f64),
}

impl Default for Playfield {
    fn default() -> Self {
        let width = 1000.0;
        let height = 600.0;
        let ground_y = height - 50.0;
        Self {
            width,
            height,
            ground_y,
            launch_origin: (50.0, ground_y),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projectile {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub elapsed_s: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CullReason {
    Settled,
    OffScreen,
    TimedOut,
}

impl Projectile {
    pub fn launch(angle_deg: f64, speed_mps: f64, wind_mps: f64, origin: (f64, f64)) -> Self {
        let theta = angle_deg.to_radians();
        Self {
            x: origin.0,
            y: origin.1,
            vx: speed_mps * theta.cos() + wind_mps,
            vy: -speed_mps * theta.sin(),
            elapsed_s: 0.0,
        }
    }

    /// One semi-implicit Euler step: velocity first, then position from the new
    /// velocity.
    ///
    /// Linear drag acts on each axis, and on the vertical axis it is folded
    /// together with gravity as `g - k*vy`. That is an intentional non-physical
    /// simplification: drag eases the effective downward pull while climbing and
    /// adds to it while falling.
    pub fn integrate(&mut self, dt: f64, gravity_mps2: f64, drag_coef: f64) {
        let ax = -drag_coef * self.vx;
        let ay = gravity_mps2 - drag_coef * self.vy;

        self.vx += ax * dt;
        self.vy += ay * dt;
        self.x += self.vx * dt;
        self.y += self.vy * dt;
        self.elapsed_s += dt;
    }

    /// Clamps to the ground and damps velocity. Stateless: a shot resting on the
    /// ground is damped again every frame until it settles. Returns whether
    /// contact happened.
    pub fn apply_ground_contact(&mut self, ground_y: f64, tuning: &MotionTuning) -> bool {
        if self.y < ground_y {
            return false;
        }
        self.y = ground_y;
        self.vx *= tuning.bounce_friction;
        self.vy *= -tuning.bounce_restitution;
        true
    }
}

impl Playfield {
    pub fn cull_reason(&self, projectile: &Projectile, tuning: &MotionTuning) -> Option<CullReason> {
        let at_ground = projectile.y >= self.ground_y;
        if at_ground
            && projectile.vx.abs() < tuning.settle_speed_mps
            && projectile.vy.abs() < tuning.settle_speed_mps
        {
            return Some(CullReason::Settled);
        }
        if projectile.x < -tuning.offscreen_margin
            || projectile.x > self.width + tuning.offscreen_margin
        {
            return Some(CullReason::OffScreen);
        }
        if projectile.elapsed_s > tuning.max_lifetime_s {
            return Some(CullReason::TimedOut);
        }
        None
    }
}

/// Removals made by one `step`, by reason.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CullTally {
    pub settled: usize,
    pub off_screen: usize,
    pub timed_out: usize,
}

impl CullTally {
    pub fn total(&self) -> usize {
        self.settled + self.off_screen + self.timed_out
    }

    fn record(&mut self, reason: CullReason) {
        match reason {
            CullReason::Settled => self.settled += 1,
            CullReason::OffScreen => self.off_screen += 1,
            CullReason::TimedOut => self.timed_out += 1,
        }
    }
}

/// The live set of projectiles plus the rules that move them.
pub struct ProjectileField {
    playfield: Playfield,
    tuning: MotionTuning,
    projectiles: Vec<Projectile>,
}

impl ProjectileField {
    pub fn new(playfield: Playfield, tuning: MotionTuning) -> Self {
        Self {
            playfield,
            tuning,
            projectiles: Vec::new(),
        }
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn tuning(&self) -> &MotionTuning {
        &self.tuning
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }

    /// Fires one shot from the launch origin with the current aim.
    pub fn spawn(&mut self, aim: &AimState) -> Projectile {
        let projectile = Projectile::launch(
            aim.angle_deg,
            aim.speed_mps,
            aim.wind_mps,
            self.playfield.launch_origin,
        );
        self.projectiles.push(projectile);
        projectile
    }

    /// Inserts a projectile in an arbitrary state.
    pub fn insert(&mut self, projectile: Projectile) {
        self.projectiles.push(projectile);
    }

    pub fn reset(&mut self) {
        self.projectiles = Vec::new();
    }

    /// Advances every live projectile by `dt` seconds and drops the ones that
    /// settled, left the playfield or timed out. A non-positive `dt` leaves the
    /// set untouched.
    pub fn step(&mut self, dt: f64, drag_coef: f64) -> CullTally {
        let mut tally = CullTally::default();
        if dt <= 0.0 {
            return tally;
        }

        let playfield = self.playfield;
        let tuning = self.tuning;
        let mut doomed = vec![false; self.projectiles.len()];
        for (idx, projectile) in self.projectiles.iter_mut().enumerate() {
            projectile.integrate(dt, tuning.gravity_mps2, drag_coef);
            projectile.apply_ground_contact(playfield.ground_y, &tuning);

            if let Some(reason) = playfield.cull_reason(projectile, &tuning) {
                debug!(
                    ?reason,
                    x = projectile.x,
                    elapsed_s = projectile.elapsed_s,
                    "projectile culled"
                );
                tally.record(reason);
                doomed[idx] = true;
            }
        }

        let mut marks = doomed.into_iter();
        self.projectiles.retain(|_| !marks.next().unwrap_or(false));
        tally
    }
}

impl Default for ProjectileField {
    fn default() -> Self {
        Self::new(Playfield::default(), MotionTuning::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{CullReason, MotionTuning, Playfield, Projectile, ProjectileField};
    use crate::core::aim::AimState;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    fn airborne(vx: f64, vy: f64) -> Projectile {
        Projectile {
            x: 500.0,
            y: 100.0,
            vx,
            vy,
            elapsed_s: 1.0,
        }
    }

    #[test]
    fn default_playfield_leaves_ground_band_below_ground_level() {
        let field = Playfield::default();

        assert_eq!(field.height - field.ground_y, 50.0);
        assert_eq!(field.launch_origin, (50.0, field.ground_y));
    }

    #[test]
    fn launch_splits_speed_and_adds_wind_horizontally() {
        let p = Projectile::launch(30.0, 20.0, 3.0, (50.0, 550.0));
        let theta = 30.0f64.to_radians();

        assert_eq!(p.vx, 20.0 * theta.cos() + 3.0);
        assert_eq!(p.vy, -20.0 * theta.sin());
        assert_eq!((p.x, p.y), (50.0, 550.0));
        assert_eq!(p.elapsed_s, 0.0);
    }

    #[test]
    fn integrate_updates_velocity_before_position() {
        let mut p = airborne(10.0, -20.0);
        p.integrate(0.5, 9.81, 0.0);

        assert_close(p.vy, -20.0 + 9.81 * 0.5, 1e-12);
        // Position uses the already-updated velocity.
        assert_close(p.y, 100.0 + (-20.0 + 9.81 * 0.5) * 0.5, 1e-12);
        assert_close(p.x, 505.0, 1e-12);
        assert_close(p.elapsed_s, 1.5, 1e-12);
    }

    #[test]
    fn drag_couples_with_gravity_on_vertical_axis() {
        let mut climbing = airborne(0.0, -10.0);
        climbing.integrate(0.1, 9.81, 0.5);
        // ay = g - k*vy = 9.81 + 5.0 while climbing.
        assert_close(climbing.vy, -10.0 + (9.81 + 5.0) * 0.1, 1e-12);

        let mut falling = airborne(0.0, 10.0);
        falling.integrate(0.1, 9.81, 0.5);
        assert_close(falling.vy, 10.0 + (9.81 - 5.0) * 0.1, 1e-12);
    }

    #[test]
    fn drag_slows_horizontal_motion() {
        let mut p = airborne(20.0, 0.0);
        p.integrate(0.1, 9.81, 0.5);

        assert_close(p.vx, 20.0 - 0.5 * 20.0 * 0.1, 1e-12);
    }

    #[test]
    fn ground_contact_clamps_and_damps() {
        let tuning = MotionTuning::default();
        let mut p = Projectile {
            x: 300.0,
            y: 556.0,
            vx: 8.0,
            vy: 12.0,
            elapsed_s: 3.0,
        };

        assert!(p.apply_ground_contact(550.0, &tuning));
        assert_eq!(p.y, 550.0);
        assert_close(p.vx, 2.0, 1e-12);
        assert_close(p.vy, -2.4, 1e-12);
    }

    #[test]
    fn ground_contact_ignores_airborne_projectile() {
        let tuning = MotionTuning::default();
        let mut p = airborne(8.0, 12.0);
        let before = p;

        assert!(!p.apply_ground_contact(550.0, &tuning));
        assert_eq!(p, before);
    }

    #[test]
    fn cull_reason_prefers_settled() {
        let field = Playfield::default();
        let tuning = MotionTuning::default();
        let p = Projectile {
            x: -500.0,
            y: 550.0,
            vx: 0.1,
            vy: 0.1,
            elapsed_s: 40.0,
        };

        assert_eq!(field.cull_reason(&p, &tuning), Some(CullReason::Settled));
    }

    #[test]
    fn margin_edges_are_still_on_screen() {
        let field = Playfield::default();
        let tuning = MotionTuning::default();
        let mut p = airborne(5.0, 0.0);

        p.x = -100.0;
        assert_eq!(field.cull_reason(&p, &tuning), None);
        p.x = 1100.0;
        assert_eq!(field.cull_reason(&p, &tuning), None);
        p.x = 1100.5;
        assert_eq!(field.cull_reason(&p, &tuning), Some(CullReason::OffScreen));
    }

    #[test]
    fn lifetime_of_exactly_thirty_seconds_survives() {
        let field = Playfield::default();
        let tuning = MotionTuning::default();
        let mut p = airborne(5.0, 0.0);

        p.elapsed_s = 30.0;
        assert_eq!(field.cull_reason(&p, &tuning), None);
        p.elapsed_s = 30.01;
        assert_eq!(field.cull_reason(&p, &tuning), Some(CullReason::TimedOut));
    }

    #[test]
    fn step_removes_only_marked_projectiles_and_keeps_order() {
        let mut field = ProjectileField::default();
        field.insert(airborne(1.0, 0.0));
        field.insert(Projectile {
            x: 5000.0,
            ..airborne(1.0, 0.0)
        });
        field.insert(airborne(2.0, 0.0));

        let tally = field.step(0.01, 0.0);

        assert_eq!(tally.off_screen, 1);
        assert_eq!(tally.total(), 1);
        assert_eq!(field.len(), 2);
        assert_close(field.projectiles()[0].vx, 1.0, 1e-12);
        assert_close(field.projectiles()[1].vx, 2.0, 1e-12);
    }

    #[test]
    fn identical_spawns_are_independent() {
        let mut field = ProjectileField::default();
        let aim = AimState::default();
        field.spawn(&aim);
        field.spawn(&aim);

        assert_eq!(field.len(), 2);
        assert_eq!(field.projectiles()[0], field.projectiles()[1]);
    }

    #[test]
    fn non_positive_dt_is_a_no_op() {
        let mut field = ProjectileField::default();
        field.spawn(&AimState::default());
        let before = field.projectiles().to_vec();

        let tally = field.step(0.0, 0.3);

        assert_eq!(tally.total(), 0);
        assert_eq!(field.projectiles(), before.as_slice());
    }
}
