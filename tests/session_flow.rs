use approx::assert_abs_diff_eq;
use cannonball_sim::core::ballistics::LaunchInputs;
use cannonball_sim::core::session::{SessionConfig, SimulationSession, Target};
use cannonball_sim::core::window::ViewWindow;
use cannonball_sim::plot::PlotScene;

const FRAME_S: f64 = 1.0 / 60.0;

fn fly(session: &mut SimulationSession, inputs: LaunchInputs) -> bool {
    session.launch(inputs).expect("valid launch");
    loop {
        if let Some(outcome) = session.advance(FRAME_S) {
            return outcome.hit;
        }
    }
}

#[test]
fn walking_shots_onto_a_moved_target() {
    let mut session = SimulationSession::new(
        Target {
            distance_m: 30.31,
            radius_m: 1.0,
        },
        SessionConfig::default(),
    );

    assert!(!fly(&mut session, LaunchInputs::new(0.0, 10.0, 20.0)));
    assert!(fly(&mut session, LaunchInputs::new(0.0, 15.0, 20.0)));

    let outcome = session.last_outcome().expect("landed flight");
    assert_abs_diff_eq!(outcome.summary.flight_time_s, 2.020, epsilon = 1e-3);
    assert_abs_diff_eq!(outcome.summary.range_m, 30.305, epsilon = 1e-3);
    assert_eq!(outcome.summary.max_height_m, 20.0);

    session.move_target(60.0);
    assert!(!fly(&mut session, LaunchInputs::new(0.0, 15.0, 20.0)));

    let hits: Vec<bool> = session.recent_launches().map(|r| r.hit).collect();
    assert_eq!(hits, vec![false, true, false]);
    assert_eq!(session.history().len(), 2);

    let window = ViewWindow::for_session(&session);
    assert!(window.max_x >= 61.0 && window.max_y >= 20.0);

    let scene = PlotScene::from_session(&session);
    assert_eq!(scene.landings_m.len(), 3);

    session.reset();
    assert!(PlotScene::from_session(&session).is_empty());
}
