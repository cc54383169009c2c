//! Line-oriented interactive game
//!
//! Plays the game over plain stdin/stdout, one line per turn. The
//! countdown needs a live event loop, so this mode always runs untimed;
//! the TUI mode carries the timer.

use crate::catalog::Catalog;
use crate::game::{Game, GameConfig};
use crate::output::display::ConsolePresenter;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};

/// Run the line-oriented game loop.
///
/// `seed` pins the word picker for reproducible runs.
///
/// # Errors
///
/// Returns an error if the catalog cannot supply a configured level or on
/// an I/O error reading player input.
pub fn run_simple(catalog: &Catalog, config: GameConfig, seed: Option<u64>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Bull Cow - Terminal Breach                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Bulls are letters in the right place, cows are letters hiding");
    println!("elsewhere in the password. Wrong length or repeated letters cost");
    println!("nothing; a wrong password costs a life.\n");
    println!("Commands: 'quit' to log off\n");

    let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let config = GameConfig {
        countdown: None,
        ..config
    };

    let mut presenter = ConsolePresenter::new();
    let mut game = Game::new(catalog, config, rng, &mut presenter).map_err(|e| e.to_string())?;

    loop {
        let prompt = if game.round().phase().is_terminal() {
            "Press Enter"
        } else {
            "Guess"
        };

        let Some(input) = get_user_input(prompt)? else {
            println!("\nLogging off.\n");
            return Ok(());
        };

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\nLogging off.\n");
                return Ok(());
            }
            line => game.on_input(line, &mut presenter).map_err(|e| e.to_string())?,
        }
    }
}

/// Get user input with a prompt; `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
