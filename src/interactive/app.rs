//! TUI application state and logic

use crate::catalog::Catalog;
use crate::game::{Game, GameConfig, Phase, Presenter, SoundEffect};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Most log lines kept before old ones are dropped
const MESSAGE_LIMIT: usize = 50;

/// Presenter backing the TUI: collects the message log, the two display
/// labels, and the most recent sound cue (rendered as a border flash).
#[derive(Debug, Default)]
pub struct Screen {
    pub messages: Vec<String>,
    pub level_label: String,
    pub timer_label: String,
    pub last_sound: Option<SoundEffect>,
}

impl Presenter for Screen {
    fn print_line(&mut self, line: &str) {
        self.messages.push(line.to_string());
        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }

    fn clear_screen(&mut self) {
        self.messages.clear();
    }

    fn set_level_label(&mut self, label: &str) {
        self.level_label = label.to_string();
    }

    fn set_timer_label(&mut self, label: &str) {
        self.timer_label = label.to_string();
    }

    fn play_sound(&mut self, effect: SoundEffect) {
        self.last_sound = Some(effect);
    }
}

/// Application state
pub struct App<'a> {
    pub game: Game<'a, StdRng>,
    pub screen: Screen,
    pub input_buffer: String,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Create the app and start the first round.
    ///
    /// # Errors
    /// Returns an error when the catalog cannot supply a configured level.
    pub fn new(catalog: &'a Catalog, config: GameConfig, seed: Option<u64>) -> Result<Self> {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let mut screen = Screen::default();
        let game = Game::new(catalog, config, rng, &mut screen)?;

        Ok(Self {
            game,
            screen,
            input_buffer: String::new(),
            should_quit: false,
        })
    }

    pub fn on_char(&mut self, c: char) {
        self.screen.last_sound = None;
        self.input_buffer.push(c);
    }

    pub fn on_backspace(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the typed line to the game
    ///
    /// # Errors
    /// Propagates a catalog shortfall from starting the next round.
    pub fn on_enter(&mut self) -> Result<()> {
        let input = std::mem::take(&mut self.input_buffer);
        self.game.on_input(input.trim(), &mut self.screen)?;
        Ok(())
    }

    /// One wall-clock second elapsed
    pub fn on_tick(&mut self) {
        self.game.tick(&mut self.screen);
    }

    /// Input-line title for the current phase
    #[must_use]
    pub fn prompt(&self) -> &'static str {
        match self.game.round().phase() {
            Phase::AwaitingGuess => " Your guess ",
            Phase::RoundWon | Phase::LevelAdvance => " Press Enter to continue ",
            Phase::RoundLost | Phase::GameComplete => " Press Enter to start over ",
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let tick_rate = Duration::from_secs(1);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Wait for input, but wake up in time for the next countdown tick
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Enter => app.on_enter()?,
                        KeyCode::Char(c) => app.on_char(c),
                        KeyCode::Backspace => app.on_backspace(),
                        _ => {}
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_catalog() -> Catalog {
        Catalog::from_candidates(["tank", "ghost", "bounty", "auction", "keyboard"]).unwrap()
    }

    #[test]
    fn app_starts_with_announced_round() {
        let catalog = fixture_catalog();
        let app = App::new(&catalog, GameConfig::default(), Some(3)).unwrap();

        assert_eq!(app.screen.level_label, "Level 1: 4 characters");
        assert_eq!(app.screen.timer_label, "1:00");
        assert!(!app.screen.messages.is_empty());
        assert_eq!(app.prompt(), " Your guess ");
    }

    #[test]
    fn typing_clears_the_sound_flash() {
        let catalog = fixture_catalog();
        let mut app = App::new(&catalog, GameConfig::default(), Some(3)).unwrap();

        // A wrong four-letter isogram triggers the error cue
        for c in "bone".chars() {
            app.on_char(c);
        }
        app.on_enter().unwrap();
        assert_eq!(app.screen.last_sound, Some(SoundEffect::Error));

        app.on_char('t');
        assert_eq!(app.screen.last_sound, None);
    }

    #[test]
    fn enter_consumes_the_input_buffer() {
        let catalog = fixture_catalog();
        let mut app = App::new(&catalog, GameConfig::default(), Some(3)).unwrap();

        app.on_char('a');
        app.on_backspace();
        for c in "tall".chars() {
            app.on_char(c);
        }
        app.on_enter().unwrap();

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.game.round().lives(), 4);
    }

    #[test]
    fn screen_caps_the_message_log() {
        let mut screen = Screen::default();
        for i in 0..(MESSAGE_LIMIT + 10) {
            screen.print_line(&format!("line {i}"));
        }
        assert_eq!(screen.messages.len(), MESSAGE_LIMIT);
        assert_eq!(screen.messages.last().unwrap(), &format!("line {}", MESSAGE_LIMIT + 9));
    }
}
