pub const MIN_ANGLE_DEG: f64 = 1.0;
pub const MAX_ANGLE_DEG: f64 = 89.0;
pub const MIN_SPEED_MPS: f64 = 1.0;
pub const MAX_SPEED_MPS: f64 = 300.0;
pub const MIN_DRAG: f64 = 0.0;
pub const MAX_DRAG: f64 = 1.0;

pub const ANGLE_RATE_DEG_PER_S: f64 = 30.0;
pub const SPEED_RATE_MPS_PER_S: f64 = 30.0;
pub const WIND_RATE_MPS_PER_S: f64 = 10.0;
pub const DRAG_RATE_PER_S: f64 = 0.02;

/// Launch parameters read by every new shot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AimState {
    pub angle_deg: f64,
    pub speed_mps: f64,
    /// Positive blows to the right. Only the horizontal launch velocity sees it.
    pub wind_mps: f64,
    pub drag_coef: f64,
}

impl Default for AimState {
    fn default() -> Self {
        Self {
            angle_deg: 45.0,
            speed_mps: 40.0,
            wind_mps: 0.0,
            drag_coef: 0.05,
        }
    }
}

/// Held-key snapshot for one frame.
#[derive(Default, Clone, Copy, Debug)]
pub struct AimInput {
    pub angle_down: bool,
    pub angle_up: bool,
    pub speed_up: bool,
    pub speed_down: bool,
    pub wind_left: bool,
    pub wind_right: bool,
    pub drag_down: bool,
    pub drag_up: bool,
}

impl AimState {
    pub fn set_angle(&mut self, angle_deg: f64) {
        self.angle_deg = angle_deg.clamp(MIN_ANGLE_DEG, MAX_ANGLE_DEG);
    }

    pub fn set_speed(&mut self, speed_mps: f64) {
        self.speed_mps = speed_mps.clamp(MIN_SPEED_MPS, MAX_SPEED_MPS);
    }

    pub fn set_wind(&mut self, wind_mps: f64) {
        self.wind_mps = wind_mps;
    }

    pub fn set_drag(&mut self, drag_coef: f64) {
        self.drag_coef = drag_coef.clamp(MIN_DRAG, MAX_DRAG);
    }

    /// Applies rate-based adjustments for the keys held during `dt` seconds.
    pub fn adjust(&mut self, input: AimInput, dt: f64) {
        if input.angle_down {
            self.set_angle(self.angle_deg - ANGLE_RATE_DEG_PER_S * dt);
        }
        if input.angle_up {
            self.set_angle(self.angle_deg + ANGLE_RATE_DEG_PER_S * dt);
        }
        if input.speed_up {
            self.set_speed(self.speed_mps + SPEED_RATE_MPS_PER_S * dt);
        }
        if input.speed_down {
            self.set_speed(self.speed_mps - SPEED_RATE_MPS_PER_S * dt);
        }
        if input.wind_left {
            self.set_wind(self.wind_mps - WIND_RATE_MPS_PER_S * dt);
        }
        if input.wind_right {
            self.set_wind(self.wind_mps + WIND_RATE_MPS_PER_S * dt);
        }
        if input.drag_down {
            self.set_drag(self.drag_coef - DRAG_RATE_PER_S * dt);
        }
        if input.drag_up {
            self.set_drag(self.drag_coef + DRAG_RATE_PER_S * dt);
        }
    }

    /// Rejects values the setters would otherwise clamp. Used by callers that take
    /// aim parameters from outside the frame loop.
    pub fn validated(self) -> Result<Self, String> {
        if !self.angle_deg.is_finite()
            || !self.speed_mps.is_finite()
            || !self.wind_mps.is_finite()
            || !self.drag_coef.is_finite()
        {
            return Err("Aim parameters must be finite numbers.".to_string());
        }
        if !(MIN_ANGLE_DEG..=MAX_ANGLE_DEG).contains(&self.angle_deg) {
            return Err(format!(
                "Angle {} deg is outside [{MIN_ANGLE_DEG}, {MAX_ANGLE_DEG}].",
                self.angle_deg
            ));
        }
        if !(MIN_SPEED_MPS..=MAX_SPEED_MPS).contains(&self.speed_mps) {
            return Err(format!(
                "Speed {} m/s is outside [{MIN_SPEED_MPS}, {MAX_SPEED_MPS}].",
                self.speed_mps
            ));
        }
        if !(MIN_DRAG..=MAX_DRAG).contains(&self.drag_coef) {
            return Err(format!(
                "Drag coefficient {} is outside [{MIN_DRAG}, {MAX_DRAG}].",
                self.drag_coef
            ));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{AimInput, AimState};

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn adjust_moves_at_key_rates() {
        let mut aim = AimState::default();
        aim.adjust(
            AimInput {
                angle_up: true,
                speed_down: true,
                wind_right: true,
                drag_up: true,
                ..Default::default()
            },
            0.5,
        );

        assert_close(aim.angle_deg, 60.0, 1e-9);
        assert_close(aim.speed_mps, 25.0, 1e-9);
        assert_close(aim.wind_mps, 5.0, 1e-9);
        assert_close(aim.drag_coef, 0.06, 1e-9);
    }

    #[test]
    fn adjust_clamps_to_bounds() {
        let mut aim = AimState::default();
        let input = AimInput {
            angle_down: true,
            speed_up: true,
            drag_down: true,
            ..Default::default()
        };
        for _ in 0..100 {
            aim.adjust(input, 1.0);
        }

        assert_eq!(aim.angle_deg, 1.0);
        assert_eq!(aim.speed_mps, 300.0);
        assert_eq!(aim.drag_coef, 0.0);
    }

    #[test]
    fn wind_is_unbounded() {
        let mut aim = AimState::default();
        let input = AimInput {
            wind_left: true,
            ..Default::default()
        };
        for _ in 0..100 {
            aim.adjust(input, 1.0);
        }

        assert_close(aim.wind_mps, -1000.0, 1e-9);
    }

    #[test]
    fn validated_rejects_out_of_range_angle() {
        let err = AimState {
            angle_deg: 90.0,
            ..Default::default()
        }
        .validated()
        .expect_err("angle above bound should fail");

        assert!(err.contains("Angle"));
    }

    #[test]
    fn validated_rejects_nan() {
        let err = AimState {
            wind_mps: f64::NAN,
            ..Default::default()
        }
        .validated()
        .expect_err("NaN should fail");

        assert!(err.contains("finite"));
    }
}
