use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use sapper_core::{Board, RevealOutcome};
use tracing_subscriber::filter::LevelFilter;

use command::Command;

mod command;
mod persist;
mod render;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board side length, 9 or 16 (anything else plays 9)
    #[arg(short, long, default_value_t = 9)]
    size: usize,

    /// Force a seed instead of random
    #[arg(long)]
    seed: Option<u64>,

    /// Resume a previously saved game
    #[arg(short, long)]
    load: Option<PathBuf>,

    /// Where `s` saves when no path is given
    #[arg(long, default_value = "sapper-save.json")]
    save_path: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose.tracing_level_filter());

    let mut board = match &args.load {
        Some(path) => persist::load(path)?,
        None => {
            let seed = args.seed.unwrap_or_else(clock_seed);
            log::debug!("seed: {}", seed);
            Board::from_seed(args.size, seed)
        }
    };

    play(&mut board, &args.save_path)
}

fn init_logging(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn play(board: &mut Board, save_path: &Path) -> Result<()> {
    let mut lines = io::stdin().lock().lines();
    let mut stdout = io::stdout();

    while !board.is_over() {
        println!("{}", render::render(board));
        print!("> ");
        stdout.flush().context("Could not flush stdout")?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line.context("Could not read input")?;

        let command = match command::parse(&line, board.size()) {
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match command {
            Command::Reveal(coords) => {
                if board.reveal(coords)? == RevealOutcome::NoChange {
                    println!("Nothing to reveal there");
                }
            }
            Command::Flag(coords) => {
                if !board.toggle_flag(coords)?.has_update() {
                    println!("Revealed cells cannot be flagged");
                }
            }
            Command::Save(path) => {
                let path = path.as_deref().unwrap_or(save_path);
                match persist::save(path, board) {
                    Ok(()) => println!("Saved to {}", path.display()),
                    Err(err) => println!("{err:#}"),
                }
            }
            Command::Quit => return Ok(()),
            Command::Help => println!("{}", command::HELP),
        }
    }

    println!("{}", render::render(board));
    if board.is_won() {
        println!("You win!");
    } else {
        println!("Boom! You lose.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn verbosity_flags_pick_tracing_level() {
        let level = |argv: &[&str]| {
            let args = Args::try_parse_from(argv).unwrap();
            args.verbose.tracing_level_filter()
        };

        assert_eq!(level(&["sapper"]), LevelFilter::ERROR);
        assert_eq!(level(&["sapper", "-vv"]), LevelFilter::INFO);
        assert_eq!(level(&["sapper", "-vvvv"]), LevelFilter::TRACE);
        assert_eq!(level(&["sapper", "-q"]), LevelFilter::OFF);
    }

    #[test]
    fn size_and_seed_default() {
        let args = Args::try_parse_from(["sapper", "--seed", "5"]).unwrap();

        assert_eq!(args.size, 9);
        assert_eq!(args.seed, Some(5));
        assert_eq!(args.save_path, PathBuf::from("sapper-save.json"));
    }
}
