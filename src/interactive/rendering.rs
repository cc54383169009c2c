//! TUI rendering with ratatui

use super::app::App;
use crate::game::{Phase, SoundEffect};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Status gauges
            Constraint::Min(8),    // Message log
            Constraint::Length(3), // Input line
            Constraint::Length(3), // Help bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_status(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
    render_input(f, app, chunks[3]);
    render_help(f, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🐂 BULL COW - TERMINAL BREACH")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34), // Level label
            Constraint::Percentage(33), // Lives
            Constraint::Percentage(33), // Countdown
        ])
        .split(area);

    let level = Paragraph::new(app.screen.level_label.clone())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Level ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(level, chunks[0]);

    render_lives_gauge(f, app, chunks[1]);
    render_timer_gauge(f, app, chunks[2]);
}

fn render_lives_gauge(f: &mut Frame, app: &App, area: Rect) {
    let round = app.game.round();
    let max_lives = round.word_length() as f64;
    let ratio = if max_lives > 0.0 {
        (f64::from(round.lives()) / max_lives).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(ratio)
        .label(format!("{} left", round.lives()));
    f.render_widget(gauge, area);
}

fn render_timer_gauge(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Countdown ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(time_left) = app.game.round().time_left() else {
        let untimed = Paragraph::new("untimed")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(untimed, area);
        return;
    };

    let max_time = app.game.config().countdown.unwrap_or(time_left).max(1);
    let color = if time_left <= 10 {
        Color::Red
    } else {
        Color::Cyan
    };

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(color))
        .ratio((f64::from(time_left) / f64::from(max_time)).clamp(0.0, 1.0))
        .label(app.screen.timer_label.clone());
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let start = app.screen.messages.len().saturating_sub(visible);

    let items: Vec<ListItem> = app.screen.messages[start..]
        .iter()
        .map(|message| ListItem::new(message.clone()))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Terminal ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    // Flash the border with the latest sound cue
    let border_color = match app.screen.last_sound {
        Some(SoundEffect::Success) => Color::Green,
        Some(SoundEffect::Error) => Color::Red,
        None => match app.game.round().phase() {
            Phase::AwaitingGuess => Color::Cyan,
            _ => Color::Yellow,
        },
    };

    let input = Paragraph::new(format!("> {}", app.input_buffer)).block(
        Block::default()
            .title(app.prompt())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(border_color)),
    );
    f.render_widget(input, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("Type letters to build a guess • Enter submits • Esc quits")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(help, area);
}
