//! Console presenter and printers for command results

use super::formatters::{create_progress_bar, format_tally};
use crate::commands::{AuditResult, CatalogReport, ScoreResult};
use crate::game::{Presenter, SoundEffect};
use colored::Colorize;

/// Presenter that writes straight to stdout with light coloring.
///
/// "Clearing" prints a rule instead of wiping the terminal so the session
/// stays readable in scrollback; sound cues become colored glyph lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePresenter;

impl ConsolePresenter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Presenter for ConsolePresenter {
    fn print_line(&mut self, line: &str) {
        println!("{line}");
    }

    fn clear_screen(&mut self) {
        println!("\n{}", "─".repeat(62).bright_black());
    }

    fn set_level_label(&mut self, label: &str) {
        println!("{}", format!("[{label}]").bright_cyan().bold());
    }

    fn set_timer_label(&mut self, label: &str) {
        println!("{}", format!("[{label}]").yellow());
    }

    fn play_sound(&mut self, effect: SoundEffect) {
        match effect {
            SoundEffect::Success => println!("{}", "♪ access chime".green()),
            SoundEffect::Error => println!("{}", "♪ alarm buzz".red()),
        }
    }
}

/// Print the result of a one-shot scoring
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Scoring {} against {}",
        result.guess.to_uppercase().bright_yellow().bold(),
        result.hidden.to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if result.exact {
        println!("\n{}", "✅ Exact match!".green().bold());
        return;
    }

    let word_len = result.hidden.chars().count();
    let bulls_bar = create_progress_bar(f64::from(result.tally.bulls), word_len as f64, 20);
    let cows_bar = create_progress_bar(f64::from(result.tally.cows), word_len as f64, 20);

    println!("\n   {}", format_tally(result.tally).bright_yellow());
    println!("   Bulls: [{}] {}", bulls_bar.green(), result.tally.bulls);
    println!("   Cows:  [{}] {}", cows_bar.yellow(), result.tally.cows);
}

/// Print the catalog composition report
pub fn print_catalog_report(report: &CatalogReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "HIDDEN WORD CATALOG".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📚 {} valid hidden words",
        report.total.to_string().bright_yellow().bold()
    );

    let widest = report
        .buckets
        .iter()
        .map(|bucket| bucket.count)
        .max()
        .unwrap_or(0);

    for bucket in &report.buckets {
        let bar = create_progress_bar(bucket.count as f64, widest as f64, 30);
        println!(
            "   {} letters: {} {:4}",
            bucket.length,
            bar.green(),
            bucket.count
        );
    }
}

/// Print the difficulty audit
pub fn print_audit_result(result: &AuditResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CATALOG DIFFICULTY AUDIT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if result.audits.is_empty() {
        println!("\n{}", "No words in the requested bucket.".yellow());
        return;
    }

    for audit in &result.audits {
        println!(
            "\n📏 {}",
            format!("{}-letter words", audit.length).bright_cyan().bold()
        );
        println!("   Words:        {}", audit.words);
        println!("   Pairs scored: {}", audit.pairs);
        println!(
            "   Mean bulls:   {}",
            format!("{:.3}", audit.mean_bulls).bright_yellow()
        );
        println!(
            "   Mean cows:    {}",
            format!("{:.3}", audit.mean_cows).bright_yellow()
        );

        // Most frequent feedback outcomes, most common first
        let mut outcomes: Vec<(&(u8, u8), &usize)> = audit.histogram.iter().collect();
        outcomes.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));

        for &(&(bulls, cows), &count) in outcomes.iter().take(5) {
            let pct = if audit.pairs == 0 {
                0.0
            } else {
                (count as f64 / audit.pairs as f64) * 100.0
            };
            println!("     {bulls} bulls / {cows} cows: {count:6} ({pct:5.1}%)");
        }
    }

    println!("\n⏱  {}", "Throughput:".bright_cyan().bold());
    println!("   Time taken:   {:.2}s", result.duration.as_secs_f64());
    println!("   Pairs/second: {:.0}", result.pairs_per_second);
}
