//! Bull Cow - CLI
//!
//! Terminal Bull Cow game with TUI and line-oriented modes, plus catalog
//! inspection and scoring utilities.

use anyhow::{Context, Result};
use bullcow::{
    catalog::{Catalog, HIDDEN_WORDS, loader::load_from_file},
    commands::{catalog_report, run_audit, run_simple, score_guess},
    game::{DEFAULT_COUNTDOWN_SECS, DEFAULT_MAX_LEVEL, GameConfig},
    output::{print_audit_result, print_catalog_report, print_score_result},
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bullcow",
    about = "Bull Cow isogram guessing game for the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or a path to a file of candidates
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for the hidden-word picker (reproducible runs)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Countdown seconds per round in the TUI; 0 disables the timer
    #[arg(short = 't', long, global = true, default_value_t = DEFAULT_COUNTDOWN_SECS)]
    time: u32,

    /// Levels to clear before the run is complete
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_MAX_LEVEL)]
    levels: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode with the live countdown (default)
    Play,

    /// Line-oriented CLI mode (untimed)
    Simple,

    /// Score a single guess against a hidden word
    Score {
        /// The guess to evaluate
        guess: String,

        /// The hidden word to score against
        hidden: String,
    },

    /// Show the catalog's length buckets
    Words,

    /// Audit bulls/cows feedback across catalog buckets
    Audit {
        /// Restrict the audit to one word length
        #[arg(short = 'n', long)]
        length: Option<usize>,
    },
}

/// Load the catalog based on the -w flag
fn load_catalog(wordlist_mode: &str) -> Result<Catalog> {
    match wordlist_mode {
        "embedded" => {
            Catalog::from_candidates(HIDDEN_WORDS).context("filtering the embedded word list")
        }
        path => {
            let lines =
                load_from_file(path).with_context(|| format!("reading word list {path}"))?;
            Catalog::from_candidates(lines).with_context(|| format!("filtering word list {path}"))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let catalog = load_catalog(&cli.wordlist)?;
    let countdown = if cli.time == 0 { None } else { Some(cli.time) };
    let config = GameConfig::new(cli.levels, countdown);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&catalog, config, cli.seed),
        Commands::Simple => run_simple(&catalog, config, cli.seed).map_err(|e| anyhow::anyhow!(e)),
        Commands::Score { guess, hidden } => {
            let result = score_guess(&guess, &hidden).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Words => {
            print_catalog_report(&catalog_report(&catalog));
            Ok(())
        }
        Commands::Audit { length } => {
            print_audit_result(&run_audit(&catalog, length));
            Ok(())
        }
    }
}

fn run_play_command(catalog: &Catalog, config: GameConfig, seed: Option<u64>) -> Result<()> {
    use bullcow::interactive::{App, run_tui};

    let app = App::new(catalog, config, seed)?;
    run_tui(app)
}
