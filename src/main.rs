use std::io::{self, Write};
use std::path::PathBuf;

use cannonball_sim::core::ballistics::{EARTH_GRAVITY_MPS2, LaunchInputs, ProjectileState};
use cannonball_sim::core::error::{InputError, parse_field};
use cannonball_sim::core::session::{
    DEFAULT_PROJECTILE_RADIUS_M, SessionConfig, SimulationSession, Target,
};
use cannonball_sim::plot::{PlotError, PlotScene, export_trajectory_png};
use clap::{ArgAction, Parser};
use simple_logger::SimpleLogger;
use thiserror::Error;

const PLOT_SAMPLES: usize = 256;
const MAX_FRAMES: usize = 10_000_000;

#[derive(Parser, Debug)]
#[command(name = "cannonball_sim", version)]
#[command(about = "Flight time, range and apex of a cannonball under constant gravity")]
struct Cli {
    /// Launch angle above the horizontal (degrees); prompted for when omitted
    #[arg(short, long, allow_negative_numbers = true)]
    angle: Option<f64>,

    /// Launch speed (m/s); prompted for when omitted
    #[arg(short, long)]
    speed: Option<f64>,

    /// Launch height above ground (m); prompted for when omitted
    #[arg(short = 'H', long)]
    height: Option<f64>,

    /// Gravitational acceleration (m/s^2)
    #[arg(short, long, default_value_t = EARTH_GRAVITY_MPS2)]
    gravity: f64,

    /// Frame time used for the stepped replay (s)
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,

    /// Distance to a target on the ground (m)
    #[arg(short, long)]
    target: Option<f64>,

    /// Target radius (m)
    #[arg(long, default_value_t = 1.5)]
    target_radius: f64,

    /// Cannonball radius used for the hit test (m)
    #[arg(long, default_value_t = DEFAULT_PROJECTILE_RADIUS_M)]
    ball_radius: f64,

    /// Write a PNG chart; defaults to a timestamped file name
    #[arg(long, num_args = 0..=1, value_name = "PATH")]
    plot: Option<Option<PathBuf>>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Plot(#[from] PlotError),
    #[error("Could not read input: {0}")]
    Io(#[from] io::Error),
    #[error("Input ended unexpectedly (EOF).")]
    InputEnded,
    #[error("Frame time must be a positive number of seconds ({0}).")]
    InvalidStep(f64),
}

fn read_f64(prompt: &str, field: &'static str) -> Result<f64, CliError> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Err(CliError::InputEnded);
        }

        match parse_field(field, &line) {
            Ok(v) => return Ok(v),
            Err(err) => eprintln!("{err} Please enter a value like 45 or 12.5."),
        }
    }
}

fn value_or_prompt(
    value: Option<f64>,
    prompt: &str,
    field: &'static str,
) -> Result<f64, CliError> {
    match value {
        Some(v) => Ok(v),
        None => read_f64(prompt, field),
    }
}

fn replay_frames(mut projectile: ProjectileState, dt: f64) -> (usize, ProjectileState) {
    let mut frames = 0;
    while !projectile.is_landed() && frames < MAX_FRAMES {
        projectile.step(dt);
        frames += 1;
    }
    (frames, projectile)
}

fn default_plot_path() -> PathBuf {
    PathBuf::from(format!(
        "trajectory-{}.png",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ))
}

fn run(cli: Cli) -> Result<(), CliError> {
    if !cli.dt.is_finite() || cli.dt <= 0.0 {
        return Err(CliError::InvalidStep(cli.dt));
    }

    let inputs = LaunchInputs::new(
        value_or_prompt(cli.angle, "Angle (degrees): ", "angle")?,
        value_or_prompt(cli.speed, "Velocity (m/s): ", "speed")?,
        value_or_prompt(cli.height, "Height (m): ", "height")?,
    )
    .with_gravity(cli.gravity);
    inputs.validate()?;

    let projectile = ProjectileState::from_inputs(inputs);
    println!("\nTime of flight: {:.4} s", projectile.flight_time());
    println!("Horizontal distance: {:.4} m", projectile.range());
    println!("Maximum height: {:.4} m", projectile.max_height());
    println!("Impact speed: {:.4} m/s", projectile.impact_speed());

    let (frames, landed) = replay_frames(projectile.clone(), cli.dt);
    println!(
        "Stepped replay: {frames} frames at {:.4} s, landed at x = {:.4} m (analytic difference {:.2e} m)",
        cli.dt,
        landed.position().0,
        (landed.position().0 - projectile.range()).abs()
    );

    let target = cli.target.map(|distance_m| Target {
        distance_m,
        radius_m: cli.target_radius.max(0.0),
    });
    if let Some(target) = target {
        let session = SimulationSession::new(
            target,
            SessionConfig {
                projectile_radius_m: cli.ball_radius.max(0.0),
                ..SessionConfig::default()
            },
        );
        let verdict = if session.is_hit(projectile.range()) {
            "HIT"
        } else {
            "MISS"
        };
        println!(
            "Target at {:.2} m: {verdict} (landed {:+.2} m from center)",
            target.distance_m,
            projectile.range() - target.distance_m
        );
    }

    if let Some(plot) = cli.plot {
        let path = plot.unwrap_or_else(default_plot_path);
        export_trajectory_png(&path, &PlotScene::analytic(inputs, PLOT_SAMPLES, target))?;
        println!("Chart written to {}", path.display());
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    if let Err(err) = SimpleLogger::new().with_level(level).init() {
        eprintln!("Logger unavailable: {err}");
    }

    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
