use cannonball_sim::core::window::{PlotRect, ViewWindow};
use macroquad::prelude::*;
use simple_logger::SimpleLogger;

use crate::constants::{
    BOTTOM_MARGIN, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, LEFT_MARGIN, MSAA_SAMPLES,
    MUZZLE_FLASH_S, RIGHT_MARGIN, TOP_MARGIN, UI_FONT_PATH,
};
use crate::controls::{draw_control_panel, hotkey_actions};
use crate::gameplay::{apply_actions, step_active_flight};
use crate::hud::draw_hud;
use crate::render::{
    draw_axis_tick_labels, draw_ball, draw_cannon, draw_grid, draw_path, draw_target,
    draw_title_screen, to_screen,
};
use crate::state::{AppRuntime, AppScene};

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Cannonball Simulator".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run() {
    if let Err(err) = SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
    {
        eprintln!("Logger unavailable: {err}");
    }

    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            log::warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new();

    loop {
        let frame_dt = get_frame_time();
        let screen_w = screen_width();
        let screen_h = screen_height();

        if state.scene == AppScene::Title {
            if draw_title_screen(screen_w, screen_h, ui_font.as_ref()) {
                state.scene = AppScene::Simulator;
            }
            next_frame().await;
            continue;
        }

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        apply_actions(&mut state, actions);
        step_active_flight(&mut state, frame_dt);

        let rect = PlotRect {
            left: f64::from(LEFT_MARGIN),
            right: f64::from(screen_w - RIGHT_MARGIN),
            top: f64::from(TOP_MARGIN),
            bottom: f64::from(screen_h - BOTTOM_MARGIN),
        };
        let session_window = ViewWindow::for_session(&state.session);
        let window = ViewWindow::fit(
            session_window.max_x,
            session_window.max_y.max(state.launch_height_m()),
        );

        clear_background(Color::from_rgba(250, 251, 253, 255));
        draw_grid(&rect, Color::from_rgba(227, 231, 236, 255));
        draw_axis_tick_labels(&rect, window, ui_font.as_ref());
        draw_target(state.session.target(), &rect, window);

        for path in state.session.history() {
            draw_path(path, &rect, window, 2.0, Color::from_rgba(150, 160, 175, 200));
        }
        draw_path(
            state.session.trace(),
            &rect,
            window,
            3.0,
            Color::from_rgba(220, 38, 38, 255),
        );

        let fired = state
            .session
            .projectile()
            .is_some_and(|p| !p.is_landed() && p.elapsed_s() < MUZZLE_FLASH_S);
        draw_cannon(
            to_screen(&rect, window, (0.0, state.launch_height_m())),
            state.barrel_angle_deg(),
            fired,
        );

        if let Some(projectile) = state.session.projectile() {
            draw_ball(to_screen(&rect, window, projectile.position()));
        }

        draw_hud(&state, &rect, window, screen_h, ui_font.as_ref());

        next_frame().await;
    }
}
