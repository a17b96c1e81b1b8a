//! Brick Bounce entry point
//!
//! Runs the game loop against the headless scripted platform. A windowed
//! shell implements `brick_bounce::platform::Platform` and calls the same
//! `platform::run`.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use brick_bounce::Settings;
use brick_bounce::platform::{self, ScriptedPlatform};
use brick_bounce::sim::World;

#[derive(Parser, Debug)]
#[command(name = "brick-bounce", about = "Balls, bricks and a paddle")]
struct Args {
    /// JSON settings file (window, tuning, level layout)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// RNG seed (overrides the settings file; default is the clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Key script, e.g. "S*5,.*100,L*10,E"
    #[arg(long, default_value = "S*3,.*600")]
    script: String,

    /// Idle frames appended after the script
    #[arg(long, default_value_t = 0)]
    frames: usize,
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut settings = match &args.settings {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    if args.seed.is_some() {
        settings.seed = args.seed;
    }

    let mut script = format!("{},", args.script);
    if args.frames > 0 {
        script.push_str(&format!(".*{}", args.frames));
    }
    let mut platform =
        ScriptedPlatform::from_source(&settings.window, &script).context("opening window")?;

    let mut world = World::from_settings(&settings, settings.resolve_seed());
    log::info!("World initialized with seed: {}", world.seed);

    let summary = platform::run(&mut platform, &mut world);
    println!(
        "seed={} frames={} balls={} hits={} bricks_destroyed={} live_bricks={}",
        world.seed,
        summary.frames,
        summary.balls,
        summary.hits,
        summary.bricks_destroyed,
        world.live_bricks().count()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Brick Bounce starting...");

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
