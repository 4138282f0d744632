use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::TARGET_DISTANCE_MAX_M;
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) launch: bool,
    pub(crate) reset: bool,
    pub(crate) pause: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            launch: self.launch || other.launch,
            reset: self.reset || other.reset,
            pause: self.pause || other.pause,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        launch: is_key_pressed(KeyCode::Space),
        reset: is_key_pressed(KeyCode::R),
        pause: is_key_pressed(KeyCode::P),
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let gravity = state
        .session
        .projectile()
        .map_or(cannonball_sim::core::ballistics::EARTH_GRAVITY_MPS2, |p| {
            p.gravity()
        });
    let launches = state.session.recent_launches().count();

    let mut actions = FrameActions::default();
    widgets::Window::new(hash!(), vec2(18.0, 130.0), vec2(370.0, 330.0))
        .label("Launch Controls")
        .ui(&mut *root_ui(), |ui| {
            ui.label(None, &format!("g = {gravity:.2} m/s^2"));
            ui.separator();
            ui.input_text(hash!(), "Speed (m/s)", &mut state.speed_text);
            ui.input_text(hash!(), "Angle (deg)", &mut state.angle_text);
            ui.input_text(hash!(), "Height (m)", &mut state.height_text);
            ui.separator();
            ui.slider(
                hash!(),
                "Target (m)",
                0.0..TARGET_DISTANCE_MAX_M,
                &mut state.target_distance_m,
            );
            ui.slider(hash!(), "Simulation Speed", 0.25..4.0, &mut state.sim_speed);
            ui.separator();
            if ui.button(None, "Launch (Space)") {
                actions.launch = true;
            }
            if ui.button(None, "Reset (R)") {
                actions.reset = true;
            }
            if ui.button(None, "Pause (P)") {
                actions.pause = true;
            }
            ui.label(None, &format!("Recorded launches: {launches}"));
        });

    actions
}

pub(crate) fn phase_text(state: &AppRuntime) -> &'static str {
    match state.session.projectile() {
        None => "Aiming",
        Some(_) if state.session.is_flying() && state.paused => "Paused",
        Some(_) if state.session.is_flying() => "Flying",
        Some(_) => "Landed",
    }
}
