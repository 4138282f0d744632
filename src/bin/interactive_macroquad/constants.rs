use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1600;
pub const INITIAL_WINDOW_HEIGHT: i32 = 900;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const LEFT_MARGIN: f32 = 420.0;
pub const RIGHT_MARGIN: f32 = 40.0;
pub const TOP_MARGIN: f32 = 150.0;
pub const BOTTOM_MARGIN: f32 = 110.0;

pub const TITLE_Y: f32 = 46.0;
pub const CONTROLS_Y: f32 = 92.0;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 5;
pub const TITLE_SCREEN_BG: Color = Color::new(0.92, 0.93, 0.95, 1.0);
pub const START_BUTTON_COLOR: Color = Color::new(0.14, 0.45, 0.95, 1.0);
pub const START_BUTTON_TEXT: &str = "Start Simulator";

pub const DEFAULT_SPEED_TEXT: &str = "20";
pub const DEFAULT_ANGLE_TEXT: &str = "45";
pub const DEFAULT_HEIGHT_TEXT: &str = "0";
pub const FALLBACK_ANGLE_DEG: f64 = 45.0;
pub const DEFAULT_TARGET_DISTANCE_M: f32 = 35.0;
pub const TARGET_DISTANCE_MAX_M: f32 = 200.0;
pub const TARGET_RADIUS_M: f64 = 1.5;

pub const BALL_RADIUS_PX: f32 = 8.0;
pub const BARREL_LENGTH_PX: f32 = 56.0;
pub const BARREL_WIDTH_PX: f32 = 16.0;
pub const WHEEL_RADIUS_PX: f32 = 10.0;
pub const MUZZLE_FLASH_S: f64 = 0.12;
