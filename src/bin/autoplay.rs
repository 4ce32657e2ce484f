use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use snakes_ladders::board::TransitionTable;
use snakes_ladders::core::{EngineConfig, OvershootPolicy};
use snakes_ladders::engine::{MoveEngine, TickEvent};

/// Play one automatic game of Snakes and Ladders.
#[derive(Parser)]
#[command(name = "autoplay", about = "Play an automatic game of Snakes and Ladders")]
struct Cli {
    /// Seed for the die
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Require landing exactly on 100; overshooting rolls lose the turn
    #[arg(long)]
    exact_landing: bool,

    /// Give up after this many turns
    #[arg(long, default_value_t = 1000)]
    max_turns: u32,

    /// JSON file with "snakes" and "ladders" (defaults to the classic board)
    #[arg(long)]
    table: Option<PathBuf>,

    /// Print only turn summaries instead of every tick
    #[arg(long)]
    quiet: bool,
}

fn load_table(path: &Path) -> Result<TransitionTable> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read table file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("invalid transition table in {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let table = match &cli.table {
        Some(path) => load_table(path)?,
        None => TransitionTable::classic(),
    };
    let overshoot = if cli.exact_landing {
        OvershootPolicy::ExactLanding
    } else {
        OvershootPolicy::Cap
    };
    let config = EngineConfig::new(cli.seed).with_overshoot(overshoot);

    println!(
        "Board: {} snakes, {} ladders, overshoot: {}",
        table.snake_count(),
        table.ladder_count(),
        overshoot
    );

    let mut engine = MoveEngine::new(table, config);

    if cli.quiet {
        while engine.turn_count() < cli.max_turns {
            let Some(record) = engine.play_turn() else { break };
            println!("Turn {}: rolled {}, {} -> {}", record.turn, record.roll, record.start, record.end());
        }
    } else {
        while engine.turn_count() < cli.max_turns {
            let event = engine.tick();
            if event == TickEvent::Finished {
                break;
            }
            match event {
                TickEvent::Landed(landing) if landing.kind.is_some() => {
                    let label = engine.table().snake_label(landing.from.into());
                    match label {
                        Some(label) => println!("{landing} ({label})"),
                        None => println!("{landing}"),
                    }
                }
                _ => println!("{event}"),
            }
        }
    }

    if engine.is_finished() {
        println!("{} after {} turns.", TickEvent::Finished, engine.turn_count());
    } else {
        println!(
            "Stopped after {} turns at square {}.",
            engine.turn_count(),
            engine.position()
        );
    }
    Ok(())
}
