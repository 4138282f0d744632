//! PNG export of trajectories using the plotters bitmap backend.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;

use crate::core::ballistics::{LaunchInputs, ProjectileState};
use crate::core::session::{SimulationSession, Target};
use crate::core::window::ViewWindow;

pub const PLOT_SIZE_PX: (u32, u32) = (1280, 720);

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("nothing to plot")]
    Empty,
    #[error("failed to draw trajectory chart: {0}")]
    Draw(String),
}

fn draw_err<E>(err: DrawingAreaErrorKind<E>) -> PlotError
where
    E: std::error::Error + Send + Sync,
{
    PlotError::Draw(err.to_string())
}

/// Everything that ends up on one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotScene {
    pub title: String,
    pub history: Vec<Vec<(f64, f64)>>,
    pub live: Vec<(f64, f64)>,
    pub landings_m: Vec<f64>,
    pub target: Option<Target>,
    pub window: ViewWindow,
}

impl PlotScene {
    pub fn from_session(session: &SimulationSession) -> Self {
        let history = session.history().to_vec();
        let landings_m = history
            .iter()
            .map(Vec::as_slice)
            .chain(std::iter::once(session.trace()))
            .filter_map(|path| path.last())
            .filter(|point| point.1 == 0.0)
            .map(|point| point.0)
            .collect();

        Self {
            title: "Cannonball trajectories".to_string(),
            history,
            live: session.trace().to_vec(),
            landings_m,
            target: Some(session.target()),
            window: ViewWindow::for_session(session),
        }
    }

    pub fn analytic(inputs: LaunchInputs, samples: usize, target: Option<Target>) -> Self {
        let projectile = ProjectileState::from_inputs(inputs);
        let mut raw_x = projectile.range();
        let mut raw_y = projectile.max_height();
        if let Some(target) = target {
            raw_x = raw_x.max(target.distance_m + target.radius_m);
            raw_y = raw_y.max(target.radius_m * 2.0);
        }

        Self {
            title: format!(
                "v0 = {:.1} m/s, angle = {:.1} deg, h0 = {:.1} m",
                inputs.speed_mps, inputs.angle_deg, inputs.height_m
            ),
            history: Vec::new(),
            live: projectile.sample_path(samples),
            landings_m: vec![projectile.range()],
            target,
            window: ViewWindow::fit(raw_x, raw_y),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.live.len() < 2 && self.history.iter().all(|path| path.len() < 2)
    }
}

pub fn export_trajectory_png(path: &Path, scene: &PlotScene) -> Result<(), PlotError> {
    if scene.is_empty() {
        return Err(PlotError::Empty);
    }

    let root = BitMapBackend::new(path, PLOT_SIZE_PX).into_drawing_area();
    draw_scene(&root, scene)?;
    root.present().map_err(draw_err)?;
    log::info!("trajectory chart written to {}", path.display());
    Ok(())
}

fn draw_scene<DB>(root: &DrawingArea<DB, Shift>, scene: &PlotScene) -> Result<(), PlotError>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(draw_err)?;

    let mut chart = ChartBuilder::on(root)
        .caption(&scene.title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(44)
        .y_label_area_size(56)
        .build_cartesian_2d(0.0..scene.window.max_x, 0.0..scene.window.max_y)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc("Distance (m)")
        .y_desc("Height (m)")
        .light_line_style(RGBColor(235, 238, 242))
        .draw()
        .map_err(draw_err)?;

    if let Some(target) = scene.target {
        let marker_h = (scene.window.max_y * 0.03).max(target.radius_m);
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [
                    (target.distance_m - target.radius_m, 0.0),
                    (target.distance_m + target.radius_m, marker_h),
                ],
                RGBColor(81, 201, 122).mix(0.8).filled(),
            )))
            .map_err(draw_err)?;
    }

    for path in &scene.history {
        chart
            .draw_series(LineSeries::new(
                path.iter().copied(),
                RGBColor(150, 160, 175).stroke_width(2),
            ))
            .map_err(draw_err)?;
    }

    chart
        .draw_series(LineSeries::new(
            scene.live.iter().copied(),
            RGBColor(220, 38, 38).stroke_width(3),
        ))
        .map_err(draw_err)?;

    chart
        .draw_series(
            scene
                .landings_m
                .iter()
                .map(|&x| Circle::new((x, 0.0), 5, RGBColor(121, 28, 28).filled())),
        )
        .map_err(draw_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::PlotScene;
    use crate::core::ballistics::LaunchInputs;
    use crate::core::session::{SimulationSession, Target};

    #[test]
    fn analytic_scene_covers_flight_and_target() {
        let target = Target {
            distance_m: 80.0,
            radius_m: 2.0,
        };
        let scene = PlotScene::analytic(LaunchInputs::new(45.0, 20.0, 0.0), 64, Some(target));

        assert_eq!(scene.live.len(), 65);
        assert_eq!(scene.landings_m.len(), 1);
        assert!(scene.window.max_x >= 82.0);
        assert!(scene.window.max_y >= 10.2);
        assert!(!scene.is_empty());
    }

    #[test]
    fn session_scene_collects_every_path() {
        let mut session = SimulationSession::default();
        assert!(PlotScene::from_session(&session).is_empty());

        for speed in [10.0, 15.0] {
            session
                .launch(LaunchInputs::new(45.0, speed, 0.0))
                .expect("valid launch");
            while session.advance(1.0 / 60.0).is_none() {}
        }

        let scene = PlotScene::from_session(&session);
        assert_eq!(scene.history.len(), 1);
        assert_eq!(scene.live, session.trace());
        assert_eq!(scene.landings_m.len(), 2);
        assert_eq!(scene.target, Some(session.target()));
    }
}
