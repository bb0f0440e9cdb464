use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use clap::Parser;
use plotters::prelude::*;
use tracing::info;

use projectile_sim::core::aim::AimState;
use projectile_sim::core::ballistics::{
    ideal_apex_height, ideal_flight_time, ideal_range, sample_ideal_arc,
};
use projectile_sim::core::flight::{FlightOutcome, FlightRecord, record_flight};
use projectile_sim::core::motion::{MotionTuning, Playfield};
use projectile_sim::core::window::ChartWindow;
use projectile_sim::logging::init_tracing;

const MAX_STEPS: usize = 200_000;
const PLOT_SIZE: (u32, u32) = (1200, 700);
const IDEAL_ARC_SAMPLES: usize = 240;

/// Fires a single shot headlessly and reports how it flew.
#[derive(Parser, Debug)]
#[command(name = "projectile_sim")]
#[command(about = "Headless projectile shot report and trajectory plot", long_about = None)]
struct Cli {
    /// Launch angle (degrees, 1..=89)
    #[arg(short = 'a', long, default_value_t = 45.0)]
    angle: f64,

    /// Launch speed (m/s, 1..=300)
    #[arg(short = 's', long, default_value_t = 40.0)]
    speed: f64,

    /// Wind added to the horizontal launch velocity (m/s, positive = right)
    #[arg(short = 'w', long, default_value_t = 0.0, allow_negative_numbers = true)]
    wind: f64,

    /// Linear drag coefficient (0..=1)
    #[arg(short = 'd', long, default_value_t = 0.05)]
    drag: f64,

    /// Integration step (s)
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,

    /// Write a PNG of the trajectory into this directory
    #[arg(long, num_args = 0..=1, default_missing_value = ".")]
    plot: Option<PathBuf>,
}

fn outcome_text(outcome: FlightOutcome) -> String {
    match outcome {
        FlightOutcome::Culled(reason) => format!("{reason:?}"),
        FlightOutcome::StepLimit => format!("still live after {MAX_STEPS} steps"),
    }
}

fn print_report(aim: &AimState, record: &FlightRecord, playfield: &Playfield, gravity: f64) {
    println!(
        "\nAim: angle {:.1} deg | speed {:.1} m/s | wind {:.1} m/s | drag {:.3}",
        aim.angle_deg, aim.speed_mps, aim.wind_mps, aim.drag_coef
    );

    match record.first_contact {
        Some(contact) => {
            println!("Time to first ground contact: {:.4} s", contact.elapsed_s);
            println!(
                "Distance at first contact: {:.4} m",
                contact.x - playfield.launch_origin.0
            );
        }
        None => println!("No ground contact before the shot was dropped."),
    }
    println!(
        "Peak height: {:.4} m",
        record.peak_height(playfield.ground_y)
    );
    println!("Ground contacts: {}", record.ground_contacts);
    println!(
        "Final: x={:.2} y={:.2} vx={:.3} vy={:.3} after {:.2} s ({})",
        record.final_state.x,
        record.final_state.y,
        record.final_state.vx,
        record.final_state.vy,
        record.final_state.elapsed_s,
        outcome_text(record.outcome)
    );

    println!(
        "Ideal (no drag, no wind): range {:.4} m, flight {:.4} s, apex {:.4} m",
        ideal_range(aim.angle_deg, aim.speed_mps, gravity),
        ideal_flight_time(aim.angle_deg, aim.speed_mps, gravity),
        ideal_apex_height(aim.angle_deg, aim.speed_mps, gravity)
    );
}

// Millisecond stamp so back-to-back runs don't overwrite each other.
fn plot_file_name(stamp: NaiveDateTime) -> String {
    format!("trajectory_{}.png", stamp.format("%Y%m%d_%H%M%S_%3f"))
}

fn plot_trajectory(
    dir: &Path,
    aim: &AimState,
    record: &FlightRecord,
    playfield: &Playfield,
    gravity: f64,
) -> Result<PathBuf, String> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("Could not create '{}': {e}", dir.display()))?;
    let path = dir.join(plot_file_name(Local::now().naive_local()));

    let simulated = record.plot_points(playfield);
    let ideal = sample_ideal_arc(aim.angle_deg, aim.speed_mps, gravity, IDEAL_ARC_SAMPLES);
    draw_chart(&path, aim, simulated, ideal)?;
    Ok(path)
}

fn draw_chart(
    path: &Path,
    aim: &AimState,
    simulated: Vec<(f64, f64)>,
    ideal: Vec<(f64, f64)>,
) -> Result<(), String> {
    let mut all_points = simulated.clone();
    all_points.extend(ideal.iter().copied());
    let window = ChartWindow::fit(&all_points);

    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| format!("Could not clear plot: {e}"))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!(
                "angle {:.1} deg, speed {:.1} m/s, wind {:.1} m/s, drag {:.3}",
                aim.angle_deg, aim.speed_mps, aim.wind_mps, aim.drag_coef
            ),
            ("sans-serif", 26),
        )
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(window.x_min..window.x_max, 0.0..window.y_max)
        .map_err(|e| format!("Could not build chart: {e}"))?;

    chart
        .configure_mesh()
        .x_desc("Distance (m)")
        .y_desc("Height (m)")
        .draw()
        .map_err(|e| format!("Could not draw axes: {e}"))?;

    chart
        .draw_series(LineSeries::new(ideal, BLUE.mix(0.5)))
        .map_err(|e| format!("Could not draw ideal arc: {e}"))?
        .label("ideal (no drag)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.mix(0.5)));

    chart
        .draw_series(LineSeries::new(simulated, RED.stroke_width(2)))
        .map_err(|e| format!("Could not draw trajectory: {e}"))?
        .label("simulated")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| format!("Could not draw legend: {e}"))?;

    root.present()
        .map_err(|e| format!("Could not write '{}': {e}", path.display()))
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let aim = AimState {
        angle_deg: cli.angle,
        speed_mps: cli.speed,
        wind_mps: cli.wind,
        drag_coef: cli.drag,
    }
    .validated()?;

    let playfield = Playfield::default();
    let tuning = MotionTuning::default();
    let record = record_flight(&aim, &playfield, &tuning, cli.dt, MAX_STEPS)?;
    info!(
        samples = record.samples.len(),
        outcome = ?record.outcome,
        "shot recorded"
    );

    print_report(&aim, &record, &playfield, tuning.gravity_mps2);

    if let Some(dir) = cli.plot.as_deref() {
        let path = plot_trajectory(dir, &aim, &record, &playfield, tuning.gravity_mps2)?;
        println!("Plot written to {}", path.display());
    }

    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
