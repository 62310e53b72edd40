//! Terminal client: play a timed Pong match against the AI.
//!
//! Usage:
//!   cargo run -p client_term -- --difficulty medium
//!   RUST_LOG=debug cargo run -p client_term -- --log-file pong.log
//!
//! Controls: W/S or arrow keys move, Enter restarts after time is up, Esc/Q quits.

mod assets;
mod audio;
mod input;
mod terminal;

use anyhow::Context;
use assets::FileAssets;
use audio::BellAudio;
use clap::Parser;
use game_core::{
    AssetProvider, AudioSink, Config, Difficulty, FixedRateLimiter, GameRng, PlaceholderAssets,
    Session, SilentAudio,
};
use input::KeyboardInput;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use terminal::{TerminalGuard, TerminalRenderer};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pong_term")]
#[command(about = "Timed Pong against a heuristic AI, in the terminal")]
struct Args {
    /// AI difficulty: easy, medium or hard
    #[arg(long, default_value_t = Difficulty::Hard)]
    difficulty: Difficulty,

    /// Seed for ball spawns and AI aim error (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Frames per second; speeds and the match clock are per frame
    #[arg(long, default_value_t = game_core::Params::FPS)]
    fps: u32,

    /// Directory with player.txt, ai.txt, ball.txt, background.txt, game_over.txt
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Log file (the terminal itself is the game screen)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Disable the terminal bell
    #[arg(long)]
    mute: bool,
}

fn init_logging(path: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    let path = path.unwrap_or_else(|| std::env::temp_dir().join("pong_term.log"));
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(path)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let log_path = init_logging(args.log_file)?;

    let config = Config::new()
        .with_difficulty(args.difficulty)
        .with_fps(args.fps);
    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };

    let assets: Box<dyn AssetProvider> = match &args.assets {
        Some(dir) => Box::new(FileAssets::load(dir)),
        None => Box::new(PlaceholderAssets),
    };
    let mut audio: Box<dyn AudioSink> = if args.mute {
        Box::new(SilentAudio)
    } else {
        Box::new(BellAudio::new())
    };

    let mut session = Session::new(config, rng, assets.as_ref());
    let summary = {
        let guard = TerminalGuard::enter().context("failed to set up the terminal")?;
        let mut input = KeyboardInput::new(guard.releases_reported());
        let mut renderer = TerminalRenderer::new();
        let mut clock = FixedRateLimiter::new(session.config.fps);
        session.run(&mut input, &mut renderer, audio.as_mut(), &mut clock)
    };

    println!(
        "Final score: Player {} - AI {} ({} matches finished, {} frames)",
        summary.final_score.left,
        summary.final_score.right,
        summary.matches_finished,
        summary.frames
    );
    println!("Log written to {}", log_path.display());
    Ok(())
}
