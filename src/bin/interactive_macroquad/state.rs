use cannonball_sim::core::ballistics::LaunchInputs;
use cannonball_sim::core::error::{InputError, parse_field};
use cannonball_sim::core::session::{SessionConfig, SimulationSession, Target};

use crate::constants::{
    DEFAULT_ANGLE_TEXT, DEFAULT_HEIGHT_TEXT, DEFAULT_SPEED_TEXT, DEFAULT_TARGET_DISTANCE_M,
    FALLBACK_ANGLE_DEG, TARGET_RADIUS_M,
};

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum AppScene {
    Title,
    Simulator,
}

pub(crate) struct AppRuntime {
    pub(crate) session: SimulationSession,
    pub(crate) speed_text: String,
    pub(crate) angle_text: String,
    pub(crate) height_text: String,
    pub(crate) target_distance_m: f32,
    pub(crate) sim_speed: f32,
    pub(crate) paused: bool,
    pub(crate) scene: AppScene,
    pub(crate) status_line: String,
}

impl AppRuntime {
    pub(crate) fn new() -> Self {
        let target = Target {
            distance_m: f64::from(DEFAULT_TARGET_DISTANCE_M),
            radius_m: TARGET_RADIUS_M,
        };
        Self {
            session: SimulationSession::new(target, SessionConfig::default()),
            speed_text: DEFAULT_SPEED_TEXT.to_string(),
            angle_text: DEFAULT_ANGLE_TEXT.to_string(),
            height_text: DEFAULT_HEIGHT_TEXT.to_string(),
            target_distance_m: DEFAULT_TARGET_DISTANCE_M,
            sim_speed: 1.0,
            paused: false,
            scene: AppScene::Title,
            status_line: "Ready".to_string(),
        }
    }

    pub(crate) fn launch_inputs(&self) -> Result<LaunchInputs, InputError> {
        Ok(LaunchInputs::new(
            parse_field("angle", &self.angle_text)?,
            parse_field("speed", &self.speed_text)?,
            parse_field("height", &self.height_text)?,
        ))
    }

    /// Barrel angle to draw; a half-typed angle field keeps the barrel at its default.
    pub(crate) fn barrel_angle_deg(&self) -> f64 {
        match self.session.projectile() {
            Some(projectile) if self.session.is_flying() => projectile.angle_rad().to_degrees(),
            _ => parse_field("angle", &self.angle_text).unwrap_or(FALLBACK_ANGLE_DEG),
        }
    }

    pub(crate) fn launch_height_m(&self) -> f64 {
        match self.session.projectile() {
            Some(projectile) => projectile.launch_height(),
            None => parse_field("height", &self.height_text)
                .unwrap_or(0.0)
                .max(0.0),
        }
    }
}
