use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use plato_core::render::RecordingGateway;
use plato_core::world::{WindowStreamer, WorldGenConfig, WorldGenerator, WorldParams};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

mod config;
mod driver;
mod text;

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// World seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Full world generation config in RON; its world section wins over plato.ron
    #[arg(long)]
    config: Option<PathBuf>,

    /// Built-in preset: default, meadow, forest, dry
    #[arg(long)]
    preset: Option<String>,

    /// Moves to replay: w a s d slide the window, x clicks the center cell
    #[arg(long, default_value = "")]
    moves: String,

    /// Only log warnings and errors
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let app = AppConfig::load()?;
    let gen_config = load_worldgen_config(&args, &app)?;

    let seed = args
        .seed
        .or(app.generation.seed)
        .unwrap_or_else(rand::random);
    log::info!("Starting Plato ({}, seed {})", gen_config.name, seed);

    let generator = WorldGenerator::from_config(gen_config).context("Invalid world config")?;
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    let world = generator.generate(&mut rng);

    let mut streamer = WindowStreamer::new(world, &generator.config().world, RecordingGateway::new())
        .context("Failed to set up the render window")?;
    streamer.populate();

    let steps = driver::parse_script(&args.moves)?;
    let print_every_step = app.display.print_every_step;
    let report = driver::run_script(&mut streamer, &steps, |streamer| {
        if print_every_step {
            print_window(streamer);
            println!();
        }
    })?;

    print_window(&streamer);
    let center = streamer.window().center;
    println!(
        "center ({}, {})  moves {}  blocked {}  edits {}  rejected {}",
        center.x, center.y, report.moves, report.blocked, report.edits, report.rejected
    );
    Ok(())
}

/// Pick the generation config: `--config` file, else a preset sized by the app config
fn load_worldgen_config(args: &Args, app: &AppConfig) -> Result<WorldGenConfig> {
    if let Some(path) = &args.config {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        return WorldGenConfig::from_ron(&source)
            .with_context(|| format!("Failed to parse {}", path.display()));
    }

    let name = args.preset.as_deref().unwrap_or(&app.generation.preset);
    let mut config =
        WorldGenConfig::preset(name).ok_or_else(|| anyhow!("Unknown preset '{}'", name))?;
    config.world = WorldParams::from(&app.world);
    Ok(config)
}

fn print_window(streamer: &WindowStreamer<RecordingGateway>) {
    println!(
        "{}",
        text::render_frame(streamer.gateway(), streamer.mapper(), streamer.window())
    );
}
