use crate::core::session::SimulationSession;

pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;
const MIN_SPAN_M: f64 = 1.0;

/// Visible world extent in meters, anchored at the cannon (origin).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewWindow {
    pub max_x: f64,
    pub max_y: f64,
}

impl ViewWindow {
    pub fn fit(raw_max_x: f64, raw_max_y: f64) -> Self {
        let raw_x = raw_max_x.max(0.0);
        let raw_y = raw_max_y.max(0.0);
        let mut max_x = (raw_x + raw_x.max(MIN_SPAN_M) * X_PADDING_RATIO).max(MIN_SPAN_M);
        let mut max_y = (raw_y + raw_y.max(MIN_SPAN_M) * Y_PADDING_RATIO).max(MIN_SPAN_M);

        if max_x / max_y < DISTANCE_TO_HEIGHT_RATIO {
            max_x = max_y * DISTANCE_TO_HEIGHT_RATIO;
        } else {
            max_y = max_x / DISTANCE_TO_HEIGHT_RATIO;
        }

        Self { max_x, max_y }
    }

    /// Fits every path, the live ball and its apex, and the target.
    pub fn for_session(session: &SimulationSession) -> Self {
        let target = session.target();
        let mut raw_x = target.distance_m + target.radius_m;
        let mut raw_y = target.radius_m * 2.0;

        let paths = session
            .history()
            .iter()
            .flat_map(|path| path.iter())
            .chain(session.trace().iter());
        for &(x, y) in paths {
            raw_x = raw_x.max(x);
            raw_y = raw_y.max(y);
        }

        if let Some(projectile) = session.projectile() {
            raw_x = raw_x.max(projectile.range());
            raw_y = raw_y.max(projectile.max_height());
        }

        Self::fit(raw_x, raw_y)
    }
}

/// Screen-space rectangle the world window is drawn into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl PlotRect {
    fn width(&self) -> f64 {
        (self.right - self.left).max(1.0)
    }

    fn height(&self) -> f64 {
        (self.bottom - self.top).max(1.0)
    }

    pub fn world_to_screen(&self, window: ViewWindow, world: (f64, f64)) -> (f64, f64) {
        let x = self.left + (world.0 / window.max_x.max(MIN_SPAN_M)) * self.width();
        let y = self.bottom - (world.1 / window.max_y.max(MIN_SPAN_M)) * self.height();
        (x, y)
    }

    pub fn screen_to_world(&self, window: ViewWindow, screen: (f64, f64)) -> (f64, f64) {
        let x = ((screen.0 - self.left) / self.width()) * window.max_x.max(MIN_SPAN_M);
        let y = ((self.bottom - screen.1) / self.height()) * window.max_y.max(MIN_SPAN_M);
        (x.max(0.0), y.max(0.0))
    }

    /// Pixels per meter, using the tighter of the two axes.
    pub fn scale(&self, window: ViewWindow) -> f64 {
        let px_x = self.width() / window.max_x.max(MIN_SPAN_M);
        let px_y = self.height() / window.max_y.max(MIN_SPAN_M);
        px_x.min(px_y)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{DISTANCE_TO_HEIGHT_RATIO, PlotRect, ViewWindow};
    use crate::core::ballistics::LaunchInputs;
    use crate::core::session::{SessionConfig, SimulationSession, Target};

    #[test]
    fn fit_keeps_aspect_ratio() {
        for (x, y) in [(40.0, 10.0), (5.0, 30.0), (0.0, 0.0), (1000.0, 1.0)] {
            let window = ViewWindow::fit(x, y);
            assert_abs_diff_eq!(
                window.max_x / window.max_y,
                DISTANCE_TO_HEIGHT_RATIO,
                epsilon = 1e-12
            );
            assert!(window.max_x >= x && window.max_y >= y);
        }
    }

    #[test]
    fn fit_pads_the_dominant_axis() {
        let window = ViewWindow::fit(100.0, 10.0);
        assert_abs_diff_eq!(window.max_x, 106.0, epsilon = 1e-9);
        assert_abs_diff_eq!(window.max_y, 53.0, epsilon = 1e-9);
    }

    #[test]
    fn empty_world_gets_minimum_span() {
        let window = ViewWindow::fit(-4.0, 0.0);
        assert_eq!(window, ViewWindow { max_x: 2.0, max_y: 1.0 });
    }

    #[test]
    fn session_window_covers_flight_and_target() {
        let mut session = SimulationSession::new(
            Target {
                distance_m: 90.0,
                radius_m: 2.0,
            },
            SessionConfig::default(),
        );
        session
            .launch(LaunchInputs::new(70.0, 30.0, 5.0))
            .expect("valid launch");

        let projectile = session.projectile().expect("live projectile");
        let window = ViewWindow::for_session(&session);
        assert!(window.max_x >= 92.0);
        assert!(window.max_x >= projectile.range());
        assert!(window.max_y >= projectile.max_height());
    }

    #[test]
    fn screen_mapping_round_trips() {
        let rect = PlotRect {
            left: 120.0,
            right: 1120.0,
            top: 100.0,
            bottom: 600.0,
        };
        let window = ViewWindow::fit(100.0, 10.0);

        assert_eq!(rect.world_to_screen(window, (0.0, 0.0)), (120.0, 600.0));
        let corner = rect.world_to_screen(window, (window.max_x, window.max_y));
        assert_abs_diff_eq!(corner.0, 1120.0, epsilon = 1e-9);
        assert_abs_diff_eq!(corner.1, 100.0, epsilon = 1e-9);

        let world = rect.screen_to_world(window, rect.world_to_screen(window, (25.0, 7.5)));
        assert_abs_diff_eq!(world.0, 25.0, epsilon = 1e-9);
        assert_abs_diff_eq!(world.1, 7.5, epsilon = 1e-9);
        assert_eq!(rect.screen_to_world(window, (0.0, 900.0)), (0.0, 0.0));
    }
}
