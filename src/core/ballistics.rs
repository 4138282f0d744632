//! Kinematics of a single cannonball under constant gravity.
//!
//! A [`ProjectileState`] can be advanced frame by frame with [`ProjectileState::step`]
//! for animation, while flight time, range and apex height come from closed-form
//! queries. The stepping path snaps onto the analytic landing point, so both views
//! agree once the flight is over.

use crate::core::error::InputError;

pub const EARTH_GRAVITY_MPS2: f64 = 9.8;

/// Slack allowed between the stepped clock and the analytic landing time.
pub const LANDING_TOLERANCE_S: f64 = 1e-9;

const EPSILON: f64 = 1e-12;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchInputs {
    pub angle_deg: f64,
    pub speed_mps: f64,
    pub height_m: f64,
    pub gravity_mps2: f64,
}

impl LaunchInputs {
    pub fn new(angle_deg: f64, speed_mps: f64, height_m: f64) -> Self {
        Self {
            angle_deg,
            speed_mps,
            height_m,
            gravity_mps2: EARTH_GRAVITY_MPS2,
        }
    }

    pub fn with_gravity(self, gravity_mps2: f64) -> Self {
        Self {
            gravity_mps2,
            ..self
        }
    }

    /// Checks the inputs against the domain the engine accepts for a launch.
    pub fn validate(&self) -> Result<(), InputError> {
        for (field, value) in [
            ("angle", self.angle_deg),
            ("speed", self.speed_mps),
            ("height", self.height_m),
            ("gravity", self.gravity_mps2),
        ] {
            if !value.is_finite() {
                return Err(InputError::NonFinite { field });
            }
        }
        if !(-90.0..=90.0).contains(&self.angle_deg) {
            return Err(InputError::AngleOutOfRange {
                value: self.angle_deg,
            });
        }
        if self.speed_mps < 0.0 {
            return Err(InputError::Negative {
                field: "speed",
                value: self.speed_mps,
            });
        }
        if self.height_m < 0.0 {
            return Err(InputError::Negative {
                field: "height",
                value: self.height_m,
            });
        }
        if self.gravity_mps2 <= 0.0 {
            return Err(InputError::NonPositiveGravity {
                value: self.gravity_mps2,
            });
        }
        Ok(())
    }
}

impl Default for LaunchInputs {
    fn default() -> Self {
        Self::new(45.0, 20.0, 0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlightPhase {
    Flying,
    Landed,
}

/// One projectile from launch to landing.
///
/// Launch parameters and the velocity components are fixed at construction.
/// Only [`step`](Self::step) mutates the state, and it stops doing so once the
/// projectile has landed.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectileState {
    speed_mps: f64,
    angle_rad: f64,
    gravity_mps2: f64,
    height_m: f64,
    vx: f64,
    vy0: f64,
    elapsed_s: f64,
    position: (f64, f64),
    phase: FlightPhase,
}

impl ProjectileState {
    pub fn new(speed_mps: f64, angle_deg: f64, gravity_mps2: f64, height_m: f64) -> Self {
        let angle_rad = angle_deg.to_radians();
        let (sin, cos) = angle_rad.sin_cos();
        Self {
            speed_mps,
            angle_rad,
            gravity_mps2,
            height_m,
            vx: speed_mps * cos,
            vy0: speed_mps * sin,
            elapsed_s: 0.0,
            position: (0.0, height_m),
            phase: FlightPhase::Flying,
        }
    }

    pub fn from_inputs(inputs: LaunchInputs) -> Self {
        Self::new(
            inputs.speed_mps,
            inputs.angle_deg,
            inputs.gravity_mps2,
            inputs.height_m,
        )
    }

    /// Advances the flight clock by `dt` seconds.
    ///
    /// A step that crosses the ground plane lands the projectile exactly on the
    /// analytic landing point instead of the overshooting sample. Landed states,
    /// and `dt` values that are not finite and positive, leave the state untouched.
    pub fn step(&mut self, dt: f64) {
        if self.is_landed() || !dt.is_finite() || dt <= 0.0 {
            return;
        }

        let mut t = self.elapsed_s + dt;
        let (mut x, mut y) = self.raw_position(t);

        if y <= 0.0 {
            let landing_s = self.flight_time();
            if landing_s <= t + LANDING_TOLERANCE_S {
                // A landing time a rounding error below the last clock value must not
                // move the clock backwards.
                t = landing_s.max(self.elapsed_s);
                x = self.vx * landing_s;
                y = 0.0;
                self.phase = FlightPhase::Landed;
            } else {
                y = y.max(0.0);
                if y == 0.0 {
                    self.phase = FlightPhase::Landed;
                }
            }
        }

        self.elapsed_s = t;
        self.position = (x, y);

        if self.is_landed() {
            log::debug!(
                "projectile landed at x={:.4} m after {:.4} s",
                self.position.0,
                self.elapsed_s
            );
        }
    }

    /// Time from launch until the projectile reaches `y = 0` on its way down.
    ///
    /// Independent of stepping history. Degenerate parameters yield `0.0` rather
    /// than a non-finite value.
    pub fn flight_time(&self) -> f64 {
        let g = self.gravity_mps2;
        if g.abs() < EPSILON {
            if self.vy0.abs() < EPSILON {
                return 0.0;
            }
            let t = -self.height_m / self.vy0;
            return if t > 0.0 { t } else { 0.0 };
        }

        let discriminant = self.vy0 * self.vy0 + 2.0 * g * self.height_m;
        if discriminant < 0.0 {
            return 0.0;
        }

        // The other root is at or before launch whenever the launch height is non-negative.
        let t = (self.vy0 + discriminant.sqrt()) / g;
        if t > 0.0 { t } else { 0.0 }
    }

    pub fn range(&self) -> f64 {
        self.vx * self.flight_time()
    }

    /// Apex height above ground. A level or downward launch peaks at the muzzle.
    pub fn max_height(&self) -> f64 {
        if self.vy0 <= 0.0 || self.gravity_mps2 <= EPSILON {
            return self.height_m;
        }
        self.height_m + (self.vy0 * self.vy0) / (2.0 * self.gravity_mps2)
    }

    pub fn velocity_at(&self, time_s: f64) -> (f64, f64) {
        (self.vx, self.vy0 - self.gravity_mps2 * time_s)
    }

    /// Current velocity vector; zero once the ball has come to rest.
    pub fn instantaneous_velocity(&self) -> (f64, f64) {
        if self.is_landed() {
            return (0.0, 0.0);
        }
        self.velocity_at(self.elapsed_s)
    }

    pub fn speed(&self) -> f64 {
        let (vx, vy) = self.instantaneous_velocity();
        vx.hypot(vy)
    }

    pub fn impact_speed(&self) -> f64 {
        let (vx, vy) = self.velocity_at(self.flight_time());
        vx.hypot(vy)
    }

    /// Direction of travel in degrees above the horizontal, from `atan2(vy, vx)`.
    pub fn heading_deg(&self) -> f64 {
        let (vx, vy) = self.velocity_at(self.elapsed_s);
        vy.atan2(vx).to_degrees()
    }

    /// Closed-form position at `time_s`, clamped to the flight interval.
    pub fn position_at(&self, time_s: f64) -> (f64, f64) {
        let t = time_s.clamp(0.0, self.flight_time());
        let (x, y) = self.raw_position(t);
        (x, y.max(0.0))
    }

    pub fn sample_path(&self, samples: usize) -> Vec<(f64, f64)> {
        let sample_count = samples.max(2);
        let flight_time = self.flight_time();
        (0..=sample_count)
            .map(|i| self.position_at((i as f64 * flight_time) / sample_count as f64))
            .collect()
    }

    fn raw_position(&self, t: f64) -> (f64, f64) {
        let x = self.vx * t;
        let y = self.height_m + (self.vy0 * t) - (0.5 * self.gravity_mps2 * t * t);
        (x, y)
    }

    pub fn position(&self) -> (f64, f64) {
        self.position
    }

    pub fn elapsed_s(&self) -> f64 {
        self.elapsed_s
    }

    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    pub fn is_landed(&self) -> bool {
        self.phase == FlightPhase::Landed
    }

    pub fn launch_speed(&self) -> f64 {
        self.speed_mps
    }

    pub fn angle_rad(&self) -> f64 {
        self.angle_rad
    }

    pub fn gravity(&self) -> f64 {
        self.gravity_mps2
    }

    pub fn launch_height(&self) -> f64 {
        self.height_m
    }

    pub fn vx(&self) -> f64 {
        self.vx
    }

    pub fn vy0(&self) -> f64 {
        self.vy0
    }
}
