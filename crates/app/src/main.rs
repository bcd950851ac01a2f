use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use heartviz_core::{EngineConfig, HeartEngine, PixelSurface, StopHandle};
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

/// Interval between simulated paint callbacks (~60 per second).
const PAINT_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> heartviz_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            config,
            width,
            height,
            seed,
            beats,
        } => run_play(config.as_deref(), width, height, seed, beats),
        Commands::Export {
            config,
            seed,
            frame,
            output,
        } => run_export(config.as_deref(), seed, frame, &output),
    }
}

fn run_play(
    config: Option<&std::path::Path>,
    width: Option<u32>,
    height: Option<u32>,
    seed: Option<u64>,
    beats: u32,
) -> heartviz_core::Result<()> {
    let config = load_config(config, width, height)?;
    let mut rng = rng_for(seed);

    let build_start = Instant::now();
    let mut engine = HeartEngine::new(config.clone(), &mut rng)?;
    tracing::info!(
        frames = engine.cycle().len(),
        build_ms = build_start.elapsed().as_millis() as u64,
        "animation cycle ready"
    );

    let mut surface = PixelSurface::new(config.surface_width, config.surface_height);
    let stop = StopHandle::new();
    let deadline = Instant::now() + Duration::from_millis(config.beat_interval_ms * beats as u64);

    let mut callbacks = 0u64;
    while !stop.is_stopped() && Instant::now() < deadline {
        let index = engine.render_tick(&mut surface, Instant::now());
        callbacks += 1;
        if callbacks % 60 == 0 {
            tracing::debug!(index, callbacks, "render tick");
        }
        std::thread::sleep(PAINT_INTERVAL);
    }

    tracing::info!(callbacks, "playback finished");
    Ok(())
}

fn run_export(
    config: Option<&std::path::Path>,
    seed: Option<u64>,
    frame: Option<usize>,
    output: &PathBuf,
) -> heartviz_core::Result<()> {
    let config = load_config(config, None, None)?;
    let mut rng = rng_for(seed);
    let engine = HeartEngine::new(config, &mut rng)?;

    let payload = match frame {
        Some(index) => serde_json::to_string(engine.frame(index))?,
        None => serde_json::to_string(engine.cycle())?,
    };
    std::fs::write(output, payload)?;

    tracing::info!(?output, ?frame, "export written");
    Ok(())
}

fn load_config(
    path: Option<&std::path::Path>,
    width: Option<u32>,
    height: Option<u32>,
) -> heartviz_core::Result<EngineConfig> {
    let mut config = match path {
        Some(path) => EngineConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => EngineConfig::default(),
    };
    if let Some(width) = width {
        config.surface_width = width;
    }
    if let Some(height) = height {
        config.surface_height = height;
    }
    config.validate()?;
    Ok(config)
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Pulsing heart particle visualiser", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Precompute the animation and play it against an in-memory surface.
    Play {
        /// Optional JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Surface width override in pixels.
        #[arg(long)]
        width: Option<u32>,
        /// Surface height override in pixels.
        #[arg(long)]
        height: Option<u32>,
        /// Seed for the random source; omit for entropy-based seeding.
        #[arg(short, long)]
        seed: Option<u64>,
        /// How many beat intervals to play before exiting.
        #[arg(short, long, default_value_t = 50)]
        beats: u32,
    },
    /// Precompute the animation and write frames to a JSON file.
    Export {
        /// Optional JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Seed for the random source; omit for entropy-based seeding.
        #[arg(short, long)]
        seed: Option<u64>,
        /// Export only this frame index instead of the whole cycle.
        #[arg(short, long)]
        frame: Option<usize>,
        /// Output path for the generated JSON.
        output: PathBuf,
    },
}
