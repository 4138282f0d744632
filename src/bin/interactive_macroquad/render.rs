use cannonball_sim::core::session::Target;
use cannonball_sim::core::window::{PlotRect, ViewWindow};
use macroquad::prelude::*;

use crate::constants::{
    BALL_RADIUS_PX, BARREL_LENGTH_PX, BARREL_WIDTH_PX, START_BUTTON_COLOR, START_BUTTON_TEXT,
    TITLE_SCREEN_BG, WHEEL_RADIUS_PX, X_GRID_LINES, Y_GRID_LINES,
};

fn format_axis_value(value: f64, axis_max: f64) -> String {
    if axis_max >= 1000.0 {
        format!("{value:.0}")
    } else if axis_max >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn to_screen(rect: &PlotRect, window: ViewWindow, world: (f64, f64)) -> Vec2 {
    let (x, y) = rect.world_to_screen(window, world);
    vec2(x as f32, y as f32)
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_grid(rect: &PlotRect, color: Color) {
    let (left, right) = (rect.left as f32, rect.right as f32);
    let (top, bottom) = (rect.top as f32, rect.bottom as f32);
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = left + t * (right - left);
        draw_line(x, top, x, bottom, 1.0, color);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = bottom - t * (bottom - top);
        draw_line(left, y, right, y, 1.0, color);
    }
    draw_line(left, bottom, right, bottom, 2.0, DARKGRAY);
    draw_line(left, top, left, bottom, 2.0, DARKGRAY);
}

pub(crate) fn draw_axis_tick_labels(rect: &PlotRect, window: ViewWindow, font: Option<&Font>) {
    let label_color = Color::from_rgba(105, 113, 124, 255);
    let tick_font_size: u16 = 16;
    let (left, right) = (rect.left as f32, rect.right as f32);
    let (top, bottom) = (rect.top as f32, rect.bottom as f32);

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let label = format_axis_value(f64::from(t) * window.max_x, window.max_x);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            left + t * (right - left) - (size.width * 0.5),
            bottom + 22.0,
            tick_font_size,
            label_color,
            font,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let label = format_axis_value(f64::from(t) * window.max_y, window.max_y);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (left - 8.0) - size.width,
            bottom - t * (bottom - top) + (size.height * 0.35),
            tick_font_size,
            label_color,
            font,
        );
    }

    draw_ui_text(
        "Distance (m)",
        right - 130.0,
        bottom + 48.0,
        18,
        label_color,
        font,
    );
    draw_ui_text("Height (m)", left + 10.0, top - 8.0, 18, label_color, font);
}

pub(crate) fn draw_path(
    points: &[(f64, f64)],
    rect: &PlotRect,
    window: ViewWindow,
    thickness: f32,
    color: Color,
) {
    let mut screen = points.iter().map(|&p| to_screen(rect, window, p));
    let Some(mut prev) = screen.next() else {
        return;
    };
    for cur in screen {
        draw_line(prev.x, prev.y, cur.x, cur.y, thickness, color);
        prev = cur;
    }
}

pub(crate) fn draw_target(target: Target, rect: &PlotRect, window: ViewWindow) {
    let center = to_screen(rect, window, (target.distance_m, 0.0));
    let half_w = ((target.radius_m * rect.scale(window)) as f32).max(6.0);
    draw_rectangle(
        center.x - half_w,
        center.y - 8.0,
        half_w * 2.0,
        8.0,
        Color::from_rgba(81, 201, 122, 220),
    );
    draw_line(center.x, center.y, center.x, center.y - 42.0, 2.0, DARKGREEN);
    draw_triangle(
        vec2(center.x, center.y - 42.0),
        vec2(center.x + 18.0, center.y - 35.0),
        vec2(center.x, center.y - 28.0),
        Color::from_rgba(220, 38, 38, 255),
    );
}

pub(crate) fn draw_cannon(base: Vec2, angle_deg: f64, fired: bool) {
    let body = Color::from_rgba(70, 70, 80, 255);
    let highlight = Color::from_rgba(140, 140, 150, 255);
    let wheel = Color::from_rgba(30, 30, 30, 255);

    let theta = angle_deg.to_radians() as f32;
    let dir = vec2(theta.cos(), -theta.sin());
    let muzzle = base + dir * BARREL_LENGTH_PX;

    draw_line(base.x, base.y, muzzle.x, muzzle.y, BARREL_WIDTH_PX, body);
    draw_line(
        base.x,
        base.y,
        muzzle.x,
        muzzle.y,
        BARREL_WIDTH_PX * 0.35,
        highlight,
    );
    draw_circle(muzzle.x, muzzle.y, BARREL_WIDTH_PX * 0.3, Color::from_rgba(20, 20, 20, 255));

    draw_circle(base.x, base.y, BARREL_WIDTH_PX * 0.9, body);
    for offset in [-0.9, 0.9] {
        let hub = vec2(base.x + offset * BARREL_WIDTH_PX * 1.4, base.y + WHEEL_RADIUS_PX);
        draw_circle(hub.x, hub.y, WHEEL_RADIUS_PX, wheel);
        draw_circle(hub.x, hub.y, WHEEL_RADIUS_PX * 0.5, GRAY);
    }

    if fired {
        for (i, alpha) in [180u8, 120, 80].into_iter().enumerate() {
            let radius = 10.0 + i as f32 * 7.0;
            let center = muzzle + dir * 6.0;
            draw_circle(
                center.x,
                center.y,
                radius,
                Color::from_rgba(255, 200, 50, alpha),
            );
        }
    }
}

pub(crate) fn draw_ball(position: Vec2) {
    draw_circle(position.x, position.y, BALL_RADIUS_PX, RED);
    draw_circle_lines(position.x, position.y, BALL_RADIUS_PX, 2.0, MAROON);
}

pub(crate) fn draw_title_screen(screen_w: f32, screen_h: f32, font: Option<&Font>) -> bool {
    clear_background(TITLE_SCREEN_BG);

    let title = "Cannonball Simulator";
    let title_size: u16 = 96;
    let title_measure = measure_text(title, font, title_size, 1.0);
    let title_x = (screen_w - title_measure.width) * 0.5;
    let title_y = (screen_h * 0.40).max(180.0);
    draw_ui_text(title, title_x, title_y, title_size, BLACK, font);

    let button_w = 360.0;
    let button_h = 90.0;
    let button_rect = Rect::new((screen_w - button_w) * 0.5, title_y + 70.0, button_w, button_h);
    draw_rectangle(
        button_rect.x,
        button_rect.y,
        button_rect.w,
        button_rect.h,
        START_BUTTON_COLOR,
    );
    draw_rectangle_lines(
        button_rect.x,
        button_rect.y,
        button_rect.w,
        button_rect.h,
        3.0,
        WHITE,
    );

    let button_text_size: u16 = 42;
    let button_text_measure = measure_text(START_BUTTON_TEXT, font, button_text_size, 1.0);
    draw_ui_text(
        START_BUTTON_TEXT,
        button_rect.x + (button_rect.w - button_text_measure.width) * 0.5,
        button_rect.y + (button_rect.h + button_text_measure.height) * 0.5 - 8.0,
        button_text_size,
        WHITE,
        font,
    );

    let hint = "Click button or press Enter";
    let hint_size: u16 = 22;
    let hint_measure = measure_text(hint, font, hint_size, 1.0);
    draw_ui_text(
        hint,
        (screen_w - hint_measure.width) * 0.5,
        button_rect.y + button_rect.h + 38.0,
        hint_size,
        DARKGRAY,
        font,
    );

    let mouse = mouse_position();
    let clicked_start = is_mouse_button_pressed(MouseButton::Left)
        && button_rect.contains(vec2(mouse.0, mouse.1));

    clicked_start || is_key_pressed(KeyCode::Enter)
}
