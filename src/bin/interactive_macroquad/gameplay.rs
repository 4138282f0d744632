use crate::controls::FrameActions;
use crate::state::AppRuntime;

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if actions.launch {
        match state
            .launch_inputs()
            .and_then(|inputs| state.session.launch(inputs))
        {
            Ok(()) => {
                state.paused = false;
                state.status_line = "Shot launched".to_string();
            }
            Err(err) => state.status_line = format!("Invalid input: {err}"),
        }
    }

    if actions.reset {
        state.session.reset();
        state.paused = false;
        state.status_line = "Reset".to_string();
    }

    if actions.pause && state.session.is_flying() {
        state.paused = !state.paused;
        state.status_line = if state.paused {
            "Paused".to_string()
        } else {
            "Resumed".to_string()
        };
    }
}

pub(crate) fn step_active_flight(state: &mut AppRuntime, frame_dt: f32) {
    state
        .session
        .move_target(f64::from(state.target_distance_m));
    state.session.set_time_scale(f64::from(state.sim_speed));

    if state.paused {
        return;
    }

    if let Some(outcome) = state.session.advance(f64::from(frame_dt)) {
        let target = state.session.target();
        state.status_line = if outcome.hit {
            format!(
                "Target hit! Landed {:.2} m from center",
                outcome.summary.range_m - target.distance_m
            )
        } else {
            format!(
                "Missed target by {:.2} m",
                (outcome.summary.range_m - target.distance_m).abs()
            )
        };
    }
}
