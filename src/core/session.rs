//! Driver-side state for a run of the cannon simulator.
//!
//! Holds the live flight, the paths of earlier flights, the movable target and
//! the short list of recent launches.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

use crate::core::ballistics::{LaunchInputs, ProjectileState};
use crate::core::error::InputError;

pub const MAX_RECENT_LAUNCHES: usize = 5;
pub const DEFAULT_FIXED_STEP_S: f64 = 1.0 / 240.0;
pub const DEFAULT_MAX_FRAME_S: f64 = 0.10;
pub const DEFAULT_PROJECTILE_RADIUS_M: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    pub distance_m: f64,
    pub radius_m: f64,
}

impl Default for Target {
    fn default() -> Self {
        Self {
            distance_m: 35.0,
            radius_m: 1.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionConfig {
    pub fixed_step_s: f64,
    pub max_frame_s: f64,
    pub time_scale: f64,
    pub projectile_radius_m: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fixed_step_s: DEFAULT_FIXED_STEP_S,
            max_frame_s: DEFAULT_MAX_FRAME_S,
            time_scale: 1.0,
            projectile_radius_m: DEFAULT_PROJECTILE_RADIUS_M,
        }
    }
}

/// Reported statistics of a finished flight, taken from the closed-form queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightSummary {
    pub flight_time_s: f64,
    pub range_m: f64,
    pub max_height_m: f64,
    pub impact_speed_mps: f64,
}

impl FlightSummary {
    pub fn of(projectile: &ProjectileState) -> Self {
        Self {
            flight_time_s: projectile.flight_time(),
            range_m: projectile.range(),
            max_height_m: projectile.max_height(),
            impact_speed_mps: projectile.impact_speed(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightOutcome {
    pub summary: FlightSummary,
    pub hit: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LaunchRecord {
    pub inputs: LaunchInputs,
    pub summary: FlightSummary,
    pub hit: bool,
    pub launched_at: DateTime<Local>,
}

pub struct SimulationSession {
    config: SessionConfig,
    target: Target,
    projectile: Option<ProjectileState>,
    inputs: Option<LaunchInputs>,
    launched_at: Option<DateTime<Local>>,
    trace: Vec<(f64, f64)>,
    history: Vec<Vec<(f64, f64)>>,
    recent: VecDeque<LaunchRecord>,
    last_outcome: Option<FlightOutcome>,
}

impl SimulationSession {
    pub fn new(target: Target, config: SessionConfig) -> Self {
        Self {
            config,
            target,
            projectile: None,
            inputs: None,
            launched_at: None,
            trace: Vec::new(),
            history: Vec::new(),
            recent: VecDeque::with_capacity(MAX_RECENT_LAUNCHES + 1),
            last_outcome: None,
        }
    }

    /// Replaces the live flight with a fresh one.
    ///
    /// The previous path is kept for drawing; invalid inputs leave the session as it was.
    pub fn launch(&mut self, inputs: LaunchInputs) -> Result<(), InputError> {
        if let Err(err) = inputs.validate() {
            log::warn!("launch rejected: {err}");
            return Err(err);
        }

        self.archive_trace();
        let projectile = ProjectileState::from_inputs(inputs);
        self.trace.push(projectile.position());
        self.projectile = Some(projectile);
        self.inputs = Some(inputs);
        self.launched_at = Some(Local::now());
        self.last_outcome = None;

        log::info!(
            "launch: v0={:.2} m/s angle={:.2} deg h0={:.2} m g={:.2} m/s^2",
            inputs.speed_mps,
            inputs.angle_deg,
            inputs.height_m,
            inputs.gravity_mps2
        );
        Ok(())
    }

    /// Advances the live flight by one frame of wall-clock time.
    ///
    /// Returns the outcome on the frame the projectile lands, `None` otherwise.
    pub fn advance(&mut self, frame_dt: f64) -> Option<FlightOutcome> {
        let projectile = self.projectile.as_mut()?;
        if projectile.is_landed() || !frame_dt.is_finite() || frame_dt <= 0.0 {
            return None;
        }

        let step_s = self.config.fixed_step_s.max(1e-6);
        let mut remaining = (frame_dt * self.config.time_scale).min(self.config.max_frame_s);
        while remaining > 0.0 && !projectile.is_landed() {
            let dt = remaining.min(step_s);
            remaining -= dt;
            projectile.step(dt);
            self.trace.push(projectile.position());
        }

        if !projectile.is_landed() {
            return None;
        }

        let summary = FlightSummary::of(projectile);
        let outcome = FlightOutcome {
            summary,
            hit: self.is_hit(summary.range_m),
        };
        self.last_outcome = Some(outcome);

        if let Some(inputs) = self.inputs {
            self.recent.push_front(LaunchRecord {
                inputs,
                summary,
                hit: outcome.hit,
                launched_at: self.launched_at.unwrap_or_else(Local::now),
            });
            self.recent.truncate(MAX_RECENT_LAUNCHES);
        }

        log::info!(
            "landed: t={:.3} s range={:.3} m apex={:.3} m -> {}",
            summary.flight_time_s,
            summary.range_m,
            summary.max_height_m,
            if outcome.hit { "hit" } else { "miss" }
        );
        Some(outcome)
    }

    /// Clears flights, paths and records. Target and config survive.
    pub fn reset(&mut self) {
        self.projectile = None;
        self.inputs = None;
        self.launched_at = None;
        self.trace.clear();
        self.history.clear();
        self.recent.clear();
        self.last_outcome = None;
        log::info!("session reset");
    }

    pub fn is_hit(&self, range_m: f64) -> bool {
        (range_m - self.target.distance_m).abs()
            <= self.target.radius_m + self.config.projectile_radius_m
    }

    pub fn move_target(&mut self, distance_m: f64) {
        if distance_m.is_finite() {
            self.target.distance_m = distance_m.max(0.0);
        }
    }

    pub fn set_time_scale(&mut self, time_scale: f64) {
        if time_scale.is_finite() && time_scale > 0.0 {
            self.config.time_scale = time_scale;
        }
    }

    fn archive_trace(&mut self) {
        let trace = std::mem::take(&mut self.trace);
        if trace.len() > 1 {
            self.history.push(trace);
        }
    }

    pub fn projectile(&self) -> Option<&ProjectileState> {
        self.projectile.as_ref()
    }

    pub fn is_flying(&self) -> bool {
        self.projectile.as_ref().is_some_and(|p| !p.is_landed())
    }

    pub fn trace(&self) -> &[(f64, f64)] {
        &self.trace
    }

    pub fn history(&self) -> &[Vec<(f64, f64)>] {
        &self.history
    }

    pub fn recent_launches(&self) -> impl Iterator<Item = &LaunchRecord> {
        self.recent.iter()
    }

    pub fn last_outcome(&self) -> Option<FlightOutcome> {
        self.last_outcome
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }
}

impl Default for SimulationSession {
    fn default() -> Self {
        Self::new(Target::default(), SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{MAX_RECENT_LAUNCHES, SessionConfig, SimulationSession, Target};
    use crate::core::ballistics::LaunchInputs;
    use crate::core::error::InputError;

    fn fly_until_landed(session: &mut SimulationSession) -> super::FlightOutcome {
        for _ in 0..100_000 {
            if let Some(outcome) = session.advance(1.0 / 60.0) {
                return outcome;
            }
        }
        panic!("flight never landed");
    }

    #[test]
    fn advance_without_launch_is_noop() {
        let mut session = SimulationSession::default();
        assert_eq!(session.advance(0.016), None);
        assert!(session.trace().is_empty());
    }

    #[test]
    fn flight_reports_analytic_summary() {
        let mut session = SimulationSession::default();
        session
            .launch(LaunchInputs::new(45.0, 20.0, 0.0))
            .expect("valid launch");
        let outcome = fly_until_landed(&mut session);

        assert_abs_diff_eq!(outcome.summary.flight_time_s, 2.886, epsilon = 1e-3);
        assert_abs_diff_eq!(outcome.summary.range_m, 40.816, epsilon = 1e-3);
        assert_abs_diff_eq!(outcome.summary.max_height_m, 10.204, epsilon = 1e-3);
        assert_abs_diff_eq!(outcome.summary.impact_speed_mps, 20.0, epsilon = 1e-9);

        let projectile = session.projectile().expect("live projectile");
        assert_eq!(
            session.trace().last().copied(),
            Some((projectile.range(), 0.0))
        );
        assert_eq!(session.last_outcome(), Some(outcome));
        assert!(!session.is_flying());
    }

    #[test]
    fn landing_is_reported_once() {
        let mut session = SimulationSession::default();
        session
            .launch(LaunchInputs::new(60.0, 5.0, 0.0))
            .expect("valid launch");
        fly_until_landed(&mut session);

        let trace_len = session.trace().len();
        assert_eq!(session.advance(1.0), None);
        assert_eq!(session.trace().len(), trace_len);
        assert_eq!(session.recent_launches().count(), 1);
    }

    #[test]
    fn hit_test_uses_combined_radii() {
        let config = SessionConfig {
            projectile_radius_m: 0.5,
            ..SessionConfig::default()
        };
        let session = SimulationSession::new(
            Target {
                distance_m: 40.0,
                radius_m: 1.0,
            },
            config,
        );

        assert!(session.is_hit(40.0));
        assert!(session.is_hit(41.5));
        assert!(session.is_hit(38.5));
        assert!(!session.is_hit(41.6));
        assert!(!session.is_hit(38.0));
    }

    #[test]
    fn launch_at_target_scores_hit() {
        let mut session = SimulationSession::new(
            Target {
                distance_m: 40.8,
                radius_m: 1.0,
            },
            SessionConfig::default(),
        );
        session
            .launch(LaunchInputs::new(45.0, 20.0, 0.0))
            .expect("valid launch");
        assert!(fly_until_landed(&mut session).hit);

        session.move_target(10.0);
        session
            .launch(LaunchInputs::new(45.0, 20.0, 0.0))
            .expect("valid launch");
        assert!(!fly_until_landed(&mut session).hit);
    }

    #[test]
    fn recent_launches_are_bounded_and_newest_first() {
        let mut session = SimulationSession::default();
        for speed in 1..=7 {
            session
                .launch(LaunchInputs::new(45.0, speed as f64, 0.0))
                .expect("valid launch");
            fly_until_landed(&mut session);
        }

        let speeds: Vec<f64> = session
            .recent_launches()
            .map(|record| record.inputs.speed_mps)
            .collect();
        assert_eq!(speeds.len(), MAX_RECENT_LAUNCHES);
        assert_eq!(speeds, vec![7.0, 6.0, 5.0, 4.0, 3.0]);
    }

    #[test]
    fn relaunch_keeps_previous_paths() {
        let mut session = SimulationSession::default();
        session
            .launch(LaunchInputs::new(45.0, 20.0, 0.0))
            .expect("valid launch");
        fly_until_landed(&mut session);
        session
            .launch(LaunchInputs::new(30.0, 15.0, 2.0))
            .expect("valid launch");

        assert_eq!(session.history().len(), 1);
        assert_eq!(session.trace(), &[(0.0, 2.0)]);
        assert!(session.is_flying());
        assert_eq!(session.last_outcome(), None);
    }

    #[test]
    fn rejected_launch_keeps_current_flight() {
        let mut session = SimulationSession::default();
        session
            .launch(LaunchInputs::new(45.0, 20.0, 0.0))
            .expect("valid launch");
        session.advance(0.05);
        let trace_len = session.trace().len();

        let err = session
            .launch(LaunchInputs::new(45.0, -3.0, 0.0))
            .expect_err("negative speed");
        assert!(matches!(err, InputError::Negative { field: "speed", .. }));
        assert!(session.is_flying());
        assert_eq!(session.trace().len(), trace_len);
        assert!(session.history().is_empty());
    }

    #[test]
    fn reset_clears_everything_but_target() {
        let mut session = SimulationSession::default();
        session.move_target(12.0);
        session
            .launch(LaunchInputs::new(45.0, 20.0, 0.0))
            .expect("valid launch");
        fly_until_landed(&mut session);
        session
            .launch(LaunchInputs::new(45.0, 10.0, 0.0))
            .expect("valid launch");

        session.reset();
        assert!(session.projectile().is_none());
        assert!(session.trace().is_empty());
        assert!(session.history().is_empty());
        assert_eq!(session.recent_launches().count(), 0);
        assert_eq!(session.last_outcome(), None);
        assert_eq!(session.target().distance_m, 12.0);
    }

    #[test]
    fn frame_time_is_capped_and_scaled() {
        let mut session = SimulationSession::default();
        session
            .launch(LaunchInputs::new(80.0, 50.0, 0.0))
            .expect("valid launch");
        session.advance(5.0);
        let elapsed = session.projectile().map_or(0.0, |p| p.elapsed_s());
        assert_abs_diff_eq!(elapsed, 0.10, epsilon = 1e-9);

        session.set_time_scale(0.5);
        session.advance(0.1);
        let elapsed = session.projectile().map_or(0.0, |p| p.elapsed_s());
        assert_abs_diff_eq!(elapsed, 0.15, epsilon = 1e-9);
    }

    #[test]
    fn target_cannot_move_behind_cannon() {
        let mut session = SimulationSession::default();
        session.move_target(-5.0);
        assert_eq!(session.target().distance_m, 0.0);
        session.move_target(f64::NAN);
        assert_eq!(session.target().distance_m, 0.0);
    }
}
