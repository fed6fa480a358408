use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use shiftago::ai::{AlphaBetaEngine, Engine, SkillLevel};
use shiftago::config::{AppConfig, CONFIG_FILE};
use shiftago::game::{Colour, Game};

/// Shiftago Express self-play driver: two AI engines play one game.
#[derive(Parser)]
#[command(name = "shiftago", about = "Shiftago Express AI self-play")]
struct Cli {
    /// Skill level for Blue (rookie, advanced, expert, grandmaster);
    /// defaults to the configured level
    #[arg(long)]
    blue: Option<String>,

    /// Skill level for Orange; defaults to the configured level
    #[arg(long)]
    orange: Option<String>,

    /// RNG seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Path to TOML configuration file
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Print the board after every move
    #[arg(long)]
    verbose: bool,
}

fn parse_skill(value: &str) -> Result<SkillLevel> {
    match value {
        "rookie" => Ok(SkillLevel::Rookie),
        "advanced" => Ok(SkillLevel::Advanced),
        "expert" => Ok(SkillLevel::Expert),
        "grandmaster" => Ok(SkillLevel::Grandmaster),
        other => bail!(
            "unknown skill level '{}' (expected 'rookie', 'advanced', 'expert', or 'grandmaster')",
            other
        ),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .with_context(|| format!("invalid log filter '{}'", config.log_filter))?,
        )
        .init();

    let blue_skill = match &cli.blue {
        Some(value) => parse_skill(value)?,
        None => config.skill_level,
    };
    let orange_skill = match &cli.orange {
        Some(value) => parse_skill(value)?,
        None => config.skill_level,
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut blue = match cli.seed {
        Some(seed) => AlphaBetaEngine::with_seed(blue_skill, seed),
        None => AlphaBetaEngine::new(blue_skill),
    };
    let mut orange = match cli.seed {
        Some(seed) => AlphaBetaEngine::with_seed(orange_skill, seed.wrapping_add(1)),
        None => AlphaBetaEngine::new(orange_skill),
    };

    let mut game = Game::new(&mut rng);
    println!(
        "Blue: {blue_skill}, Orange: {orange_skill}. {} starts.",
        game.current_colour().expect("fresh game has a mover")
    );

    // Engines can shuffle marbles indefinitely, so cap the demo game.
    const MAX_MOVES: u32 = 500;

    while let Some(colour) = game.current_colour() {
        if game.move_count() >= MAX_MOVES {
            println!("{}\nNo result after {MAX_MOVES} moves, stopping.", game.board());
            return Ok(());
        }
        let engine = match colour {
            Colour::Blue => &mut blue,
            Colour::Orange => &mut orange,
        };
        let mv = engine
            .select_move(&game)
            .with_context(|| format!("selecting a move for {colour}"))?;
        game.apply_move(mv)
            .with_context(|| format!("applying {mv} for {colour}"))?;
        if cli.verbose {
            println!("{}. {colour}: {mv}\n{}\n", game.move_count(), game.board());
        }
    }

    let outcome = game.outcome().expect("finished game has an outcome");
    println!("{}\nAfter {} moves: {outcome}.", game.board(), game.move_count());
    Ok(())
}
