//! Terminal demo frontend: two random movers play each other through the
//! engine's public contract, printing the board, the status line, and a
//! transcript at the end.
//!
//! Usage: cargo run --release -- --seed 42 --max-moves 60 --delay-ms 250

use std::thread;
use std::time::Duration;

use chrono::prelude::*;
use clap::Parser;
use color_eyre::eyre::Result;

use chess_rules::bot::RandomBot;
use chess_rules::game::GameState;
use chess_rules::types::Color;

#[derive(Parser, Debug)]
#[command(name = "chess_rules")]
#[command(about = "Watch two random movers exercise the chess rules engine")]
struct Args {
    /// Maximum number of full moves before the demo stops
    #[arg(short, long, default_value_t = 60)]
    max_moves: u32,

    /// RNG seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between plies, purely for watchability
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Only print the final position and transcript
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    println!(
        "chess_rules demo game, started {}",
        Local::now().format("%Y.%m.%d %H:%M:%S")
    );

    let mut game = GameState::new();
    let mut bot = RandomBot::new(args.seed);

    for _ in 0..args.max_moves * 2 {
        if game.is_over() || !bot.play_turn(&mut game)? {
            break;
        }
        if !args.quiet {
            game.board().draw_to_terminal();
            println!("{}", game.status_line());
        }
        if args.delay_ms > 0 {
            thread::sleep(Duration::from_millis(args.delay_ms));
        }
    }

    game.board().draw_to_terminal();
    println!("{}", game.status_line());

    let captured_by = |color: Color| {
        game.captured(color)
            .iter()
            .map(|p| p.to_symbol())
            .collect::<Vec<_>>()
            .join(" ")
    };
    println!("Captured by White: {}", captured_by(Color::White));
    println!("Captured by Black: {}", captured_by(Color::Black));

    println!("\nTranscript:");
    for (i, record) in game.history().iter().enumerate() {
        println!("{:3}. {}", i + 1, record.to_human());
    }
    Ok(())
}
