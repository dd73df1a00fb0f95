//! Flag Runner headless entry point
//!
//! Plays one seeded run with the autopilot at a fixed frame rate and prints
//! the run summary as JSON.
//!
//! Usage: `flag-runner [seed] [tuning.json]`

use flag_runner::sim::{LogSink, Simulation, TickInput};
use flag_runner::{Tuning, TuningError};

/// Frame step for the headless loop (60 Hz)
const FRAME_DT: f32 = 1.0 / 60.0;
/// Give up after this many seconds of play
const MAX_RUN_SECS: f32 = 30.0 * 60.0;

fn load_tuning(path: Option<&str>) -> Result<Tuning, TuningError> {
    let Some(path) = path else {
        return Ok(Tuning::default());
    };
    let tuning = Tuning::load(path)?;
    log::info!("Loaded tuning from {}", path);
    Ok(tuning)
}

fn main() {
    env_logger::init();
    log::info!("Flag Runner (headless) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let seed = match args.first().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(err)) => {
            log::error!("Invalid seed {:?}: {}", args[0], err);
            std::process::exit(2);
        }
        None => 12345,
    };

    let tuning = match load_tuning(args.get(1).map(String::as_str)) {
        Ok(tuning) => tuning,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };

    let mut sim = Simulation::with_tuning(seed, tuning);
    sim.start_run();

    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };
    let mut sink = LogSink;
    let mut frames: u64 = 0;
    while !sim.is_over() && sim.state().elapsed < MAX_RUN_SECS {
        sim.tick_with_input(&input, FRAME_DT, &mut sink);
        frames += 1;
    }
    log::info!("Simulated {} frames", frames);

    match serde_json::to_string_pretty(&sim.summary()) {
        Ok(json) => println!("{}", json),
        Err(err) => log::error!("Failed to encode run summary: {}", err),
    }
}
