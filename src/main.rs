/*
 * Fish Boids
 *
 * A school of fish-like boids swimming around the window. Each fish is a
 * chain of body discs that bends as it follows its head, with a flowing
 * tail, fins and blinking eyes. Fish wander on their own and turn away
 * from the window edges; they do not interact with each other.
 *
 * Run with `--headless <ticks>` to simulate without opening a window.
 */

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use fishboids::{headless, School, SchoolConfig, Viewport};

#[derive(Parser, Debug)]
#[command(name = "fishboids", about = "A school of procedurally animated fish")]
struct Args {
    /// RON file describing the population and boid parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible runs
    #[arg(long, env = "FISHBOIDS_SEED")]
    seed: Option<u64>,

    /// Show the FPS / tick overlay
    #[arg(long)]
    debug: bool,

    /// Simulate this many ticks without a window and exit
    #[arg(long, value_name = "TICKS")]
    headless: Option<u64>,

    /// Viewport width for headless runs
    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    /// Viewport height for headless runs
    #[arg(long, default_value_t = 720.0)]
    height: f32,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SchoolConfig::load(path)
            .with_context(|| format!("could not load population from {}", path.display()))?,
        None => SchoolConfig::default(),
    };
    config.validate().context("invalid population")?;

    if let Some(ticks) = args.headless {
        let rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let viewport = Viewport::new(args.width, args.height);
        let mut school = School::from_config(&config, viewport, rng)?;
        headless::run(&mut school, ticks);
        return Ok(());
    }

    run_window(args, config)
}

#[cfg(feature = "gui")]
fn run_window(args: Args, config: SchoolConfig) -> anyhow::Result<()> {
    fishboids::app::run(fishboids::app::Launch {
        config,
        seed: args.seed,
        show_debug: args.debug,
    });
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn run_window(_args: Args, _config: SchoolConfig) -> anyhow::Result<()> {
    anyhow::bail!("built without the `gui` feature; use --headless <TICKS>")
}
