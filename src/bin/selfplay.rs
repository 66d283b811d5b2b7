//! Headless computer-vs-computer runner.
//!
//! Plays full games with the heuristic opponent on both colors and reports
//! win/draw tallies. Uses the same `Session::attempt_move()` path as a real game.
//!
//! Usage:
//!   cargo run --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --games N   Games to play (default: 10)
//!   --seed N    RNG seed for the first game (default: 42)
//!   --json      Print the summary as JSON
//!   --quiet     Only the final summary

use gomoku::ai::choose_move;
use gomoku::{GameMode, MoveError, MoveOutcome, Player, Session};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::str::FromStr;

// ── CLI Configuration ────────────────────────────────────────────────

struct SimConfig {
    games: u32,
    seed: u64,
    json: bool,
    quiet: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            games: 10,
            seed: 42,
            json: false,
            quiet: false,
        }
    }
}

fn parse_args() -> SimConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                config.games = parse_value(&args, i, "--games");
            }
            "--seed" => {
                i += 1;
                config.seed = parse_value(&args, i, "--seed");
            }
            "--json" => config.json = true,
            "--quiet" => config.quiet = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }
    config
}

fn parse_value<T: FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i).map(|s| s.parse()) {
        Some(Ok(value)) => value,
        _ => {
            eprintln!("{flag} requires a number");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "Gomoku self-play runner\n\
         \n\
         Usage: selfplay [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --games N   Games to play (default: 10)\n\
         \x20 --seed N    RNG seed for the first game (default: 42)\n\
         \x20 --json      Print the summary as JSON\n\
         \x20 --quiet     Only the final summary\n\
         \x20 --help, -h  Show this help"
    );
}

// ── Results ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
struct GameRecord {
    seed: u64,
    winner: Option<Player>,
    moves: usize,
}

#[derive(Debug, Default, Serialize)]
struct Summary {
    games: u32,
    black_wins: u32,
    white_wins: u32,
    draws: u32,
    average_moves: f64,
    records: Vec<GameRecord>,
}

impl Summary {
    fn from_records(records: Vec<GameRecord>) -> Self {
        let mut summary = Summary {
            games: records.len() as u32,
            ..Default::default()
        };
        for record in &records {
            match record.winner {
                Some(Player::Black) => summary.black_wins += 1,
                Some(Player::White) => summary.white_wins += 1,
                None => summary.draws += 1,
            }
        }
        if !records.is_empty() {
            let total: usize = records.iter().map(|r| r.moves).sum();
            summary.average_moves = total as f64 / records.len() as f64;
        }
        summary.records = records;
        summary
    }
}

/// Seed for the `game`-th game; wraps past `u64::MAX`.
fn game_seed(base: u64, game: u32) -> u64 {
    base.wrapping_add(game as u64)
}

/// Play one AI-vs-AI game to completion from `seed`.
fn play_game(seed: u64) -> Result<GameRecord, MoveError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut session = Session::new(GameMode::PlayerVsPlayer);

    loop {
        let player = session.current_player();
        let mut scratch = session.board().clone();
        let pos = choose_move(&mut scratch, player, &mut rng)?;
        match session.attempt_move(pos, player)? {
            MoveOutcome::Continued(_) => {}
            MoveOutcome::Won(winner, _) => {
                return Ok(GameRecord {
                    seed,
                    winner: Some(winner),
                    moves: session.history().len(),
                })
            }
            MoveOutcome::Drawn => {
                return Ok(GameRecord {
                    seed,
                    winner: None,
                    moves: session.history().len(),
                })
            }
        }
    }
}

// ── Main ─────────────────────────────────────────────────────────────

fn main() {
    let config = parse_args();

    if !config.quiet {
        eprintln!("Self-play: {} game(s), seed={}", config.games, config.seed);
    }

    let mut records = Vec::with_capacity(config.games as usize);
    for game in 0..config.games {
        let seed = game_seed(config.seed, game);
        match play_game(seed) {
            Ok(record) => {
                if !config.quiet {
                    eprintln!(
                        "  Game {}: {} in {} moves",
                        game + 1,
                        match record.winner {
                            Some(player) => format!("{player:?} wins"),
                            None => "draw".to_string(),
                        },
                        record.moves
                    );
                }
                records.push(record);
            }
            Err(e) => {
                eprintln!("Game {} aborted: {}", game + 1, e);
                std::process::exit(1);
            }
        }
    }

    let summary = Summary::from_records(records);
    if config.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to encode summary: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!(
            "{} games: Black {} / White {} / Draw {} (avg {:.1} moves)",
            summary.games,
            summary.black_wins,
            summary.white_wins,
            summary.draws,
            summary.average_moves
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(winner: Option<Player>, moves: usize) -> GameRecord {
        GameRecord {
            seed: 0,
            winner,
            moves,
        }
    }

    #[test]
    fn test_summary_tallies_results() {
        let summary = Summary::from_records(vec![
            record(Some(Player::Black), 9),
            record(Some(Player::White), 20),
            record(Some(Player::Black), 31),
            record(None, 225),
        ]);
        assert_eq!(summary.games, 4);
        assert_eq!(summary.black_wins, 2);
        assert_eq!(summary.white_wins, 1);
        assert_eq!(summary.draws, 1);
        assert!((summary.average_moves - 71.25).abs() < f64::EPSILON);
        assert_eq!(summary.records.len(), 4);
    }

    #[test]
    fn test_summary_empty() {
        let summary = Summary::from_records(Vec::new());
        assert_eq!(summary.games, 0);
        assert_eq!(summary.black_wins + summary.white_wins + summary.draws, 0);
        assert_eq!(summary.average_moves, 0.0);
    }

    #[test]
    fn test_game_seed_wraps_at_max() {
        assert_eq!(game_seed(42, 3), 45);
        assert_eq!(game_seed(u64::MAX, 0), u64::MAX);
        assert_eq!(game_seed(u64::MAX, 1), 0);
    }

    #[test]
    fn test_play_game_finishes() {
        let record = play_game(7).unwrap();
        assert_eq!(record.seed, 7);
        assert!(record.moves >= 9 && record.moves <= 225);
    }
}
