use cannonball_sim::core::session::MAX_RECENT_LAUNCHES;
use cannonball_sim::core::window::{PlotRect, ViewWindow};
use macroquad::prelude::*;

use crate::constants::{CONTROLS_Y, TITLE_Y};
use crate::controls::phase_text;
use crate::render::{draw_ui_text, to_screen};
use crate::state::AppRuntime;

pub(crate) fn draw_hud(
    state: &AppRuntime,
    rect: &PlotRect,
    window: ViewWindow,
    screen_h: f32,
    font: Option<&Font>,
) {
    draw_header_block(rect, font);
    draw_flight_readout(state, rect.left as f32, screen_h, font);
    draw_summary_block(state, rect, window, font);
    draw_recent_launches(state, 24.0, 500.0, font);
}

fn draw_header_block(rect: &PlotRect, font: Option<&Font>) {
    let header_color = Color::from_rgba(30, 30, 35, 255);
    let left = rect.left as f32;
    draw_ui_text(
        "Projectile Motion Simulator",
        left,
        TITLE_Y,
        30,
        header_color,
        font,
    );
    draw_ui_text(
        "Controls: type speed/angle/height | Space launch | P pause | R reset | slider moves target",
        left,
        CONTROLS_Y,
        20,
        DARKGRAY,
        font,
    );
}

fn draw_flight_readout(state: &AppRuntime, left: f32, screen_h: f32, font: Option<&Font>) {
    let (elapsed, (x, y), speed, heading) = state.session.projectile().map_or(
        (0.0, (0.0, 0.0), 0.0, 0.0),
        |p| (p.elapsed_s(), p.position(), p.speed(), p.heading_deg()),
    );

    draw_ui_text(
        &format!(
            "t = {elapsed:.2} s | x = {x:.2} m | y = {y:.2} m | speed = {speed:.2} m/s | heading = {heading:.1} deg | Sim x{:.2} | {}",
            state.sim_speed,
            phase_text(state)
        ),
        left,
        screen_h - 44.0,
        20,
        BLUE,
        font,
    );
    draw_ui_text(&state.status_line, left, screen_h - 16.0, 20, DARKGRAY, font);
}

fn draw_summary_block(state: &AppRuntime, rect: &PlotRect, window: ViewWindow, font: Option<&Font>) {
    let Some(outcome) = state.session.last_outcome() else {
        return;
    };
    let summary = outcome.summary;
    let right = rect.right as f32;
    let top = rect.top as f32;

    let lines = [
        format!("Total Time: {:.2} s", summary.flight_time_s),
        format!("Total Range: {:.2} m", summary.range_m),
        format!("Max Height: {:.2} m", summary.max_height_m),
        format!("Impact Speed: {:.2} m/s", summary.impact_speed_mps),
    ];
    for (i, line) in lines.iter().enumerate() {
        draw_ui_text(line, right - 260.0, top + 24.0 + i as f32 * 26.0, 22, BLACK, font);
    }

    let (verdict, color) = if outcome.hit {
        ("HIT", DARKGREEN)
    } else {
        ("MISS", MAROON)
    };
    draw_ui_text(verdict, right - 260.0, top + 134.0, 34, color, font);

    let landing = to_screen(rect, window, (summary.range_m, 0.0));
    let label = format!("{:.2} m", summary.range_m);
    let size = measure_text(&label, font, 18, 1.0);
    draw_ui_text(
        &label,
        (landing.x - size.width * 0.5).clamp(rect.left as f32 + 4.0, right - size.width - 4.0),
        landing.y - 14.0,
        18,
        DARKGRAY,
        font,
    );
}

fn draw_recent_launches(state: &AppRuntime, x: f32, y: f32, font: Option<&Font>) {
    let mut records = state.session.recent_launches().peekable();
    if records.peek().is_none() {
        return;
    }

    draw_ui_text("Recent Launches:", x, y, 22, BLACK, font);
    for (i, record) in records.take(MAX_RECENT_LAUNCHES).enumerate() {
        let line = format!(
            "{}. {} v0={:.1} m/s, {:.1} deg, t={:.2}s, R={:.2}m, H={:.2}m {}",
            i + 1,
            record.launched_at.format("%H:%M:%S"),
            record.inputs.speed_mps,
            record.inputs.angle_deg,
            record.summary.flight_time_s,
            record.summary.range_m,
            record.summary.max_height_m,
            if record.hit { "*" } else { "" }
        );
        draw_ui_text(&line, x, y + 28.0 + i as f32 * 24.0, 16, DARKGRAY, font);
    }
}
