//! Fairgame terminal front end.
//!
//! Takes the move catalog from the command line, publishes the HMAC
//! commitment, then runs the menu loop: pick a move by number, `0` to exit,
//! `?` for the outcome table. After a valid pick the computer's move, the
//! verdict, and the HMAC key are printed so the commitment can be checked.

use clap::Parser;
use fairgame_core::rules::table;
use fairgame_core::{GameSession, HmacAlgorithm, MoveCatalog, SessionError};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Provably-fair generalized rock-paper-scissors.
///
/// The computer commits to its move (HMAC-SHA256) before you choose, then
/// discloses the key so you can verify it never switched moves.
#[derive(Debug, Parser)]
#[command(name = "fairgame", version)]
struct Args {
    /// Move catalog: an odd number (at least 3) of distinct move names,
    /// in cyclic order
    #[arg(value_name = "MOVE", allow_hyphen_values = true)]
    moves: Vec<String>,
}

#[derive(Debug, Error)]
enum PlayError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    let args = Args::parse();

    // logs go to stderr; stdout carries the game protocol verbatim
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let catalog = match MoveCatalog::new(args.moves) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let algorithm = match HmacAlgorithm::from_name("sha256") {
        Ok(algorithm) => algorithm,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut session = GameSession::new(catalog, algorithm);
    match play(&mut session) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

/// Run one round over stdin/stdout.
fn play(session: &mut GameSession) -> Result<ExitCode, PlayError> {
    let commitment = session.commit()?;
    println!("HMAC: {}", commitment);
    info!(digest = %commitment, "committed to computer move");

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print_menu(session.catalog());
        print!("Enter your move: ");
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            // stdin closed; same as an explicit exit
            println!("bye!");
            return Ok(ExitCode::SUCCESS);
        }
        let line = input.trim();

        if line == "0" {
            println!("bye!");
            return Ok(ExitCode::SUCCESS);
        }
        if line == "?" {
            println!("{}", table::render_matrix(session.catalog()));
            continue;
        }

        let count = session.catalog().len();
        let selection = line
            .parse::<usize>()
            .ok()
            .filter(|index| (1..=count).contains(index))
            .and_then(|index| session.catalog().get(index - 1));
        let Some(human_move) = selection else {
            println!(
                "Invalid input. You must enter a number between 1 and {}, 0 for exit, or ? for help.",
                count
            );
            continue;
        };
        let human_move = human_move.to_string();

        session.choose(&human_move)?;
        let reveal = session.finish()?;

        println!("Your move: {}", reveal.result.human_move);
        println!("Computer move: {}", reveal.result.computer_move);
        println!("You {}!", reveal.result.outcome.verdict());
        println!("HMAC key: {}", reveal.key);
        info!(outcome = %reveal.result.outcome, "round complete");
        return Ok(ExitCode::SUCCESS);
    }
}

fn print_menu(catalog: &MoveCatalog) {
    let mut menu = String::from("Available moves:\n");
    for (index, mv) in catalog.moves().iter().enumerate() {
        menu.push_str(&format!("{} - {}\n", index + 1, mv));
    }
    menu.push_str("0 - exit\n");
    menu.push_str("? - help\n");
    println!("{}", menu);
}
