//! Catalog difficulty audit
//!
//! Scores every ordered pair of distinct words in a length bucket and
//! aggregates the bulls/cows distribution. Higher mean counts mean a wrong
//! guess leaks more about the hidden word, so the level plays easier.

use crate::catalog::Catalog;
use crate::core::Tally;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Aggregated feedback statistics for one length bucket
pub struct LengthAudit {
    pub length: usize,
    pub words: usize,
    pub pairs: usize,
    pub mean_bulls: f64,
    pub mean_cows: f64,
    /// Occurrences of each (bulls, cows) outcome
    pub histogram: FxHashMap<(u8, u8), usize>,
}

/// Result of a full audit run
pub struct AuditResult {
    pub audits: Vec<LengthAudit>,
    pub duration: Duration,
    pub pairs_per_second: f64,
}

/// Audit the catalog's length buckets.
///
/// With `length` set, only that bucket is scored; otherwise every bucket
/// in the catalog is. The sweep over hidden words runs in parallel.
#[must_use]
pub fn run_audit(catalog: &Catalog, length: Option<usize>) -> AuditResult {
    let lengths: Vec<usize> = length.map_or_else(|| catalog.lengths(), |single| vec![single]);

    let start = Instant::now();
    let mut audits = Vec::new();
    let mut total_pairs = 0;

    for length in lengths {
        let words = catalog.words_of_length(length);
        if words.is_empty() {
            continue;
        }

        let pb = ProgressBar::new(words.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb.set_message(format!("{length}-letter words"));

        let histogram: FxHashMap<(u8, u8), usize> = words
            .par_iter()
            .map(|hidden| {
                let mut local: FxHashMap<(u8, u8), usize> = FxHashMap::default();
                for guess in words {
                    if guess != hidden {
                        let tally = Tally::calculate(guess.text(), hidden.text());
                        *local.entry((tally.bulls, tally.cows)).or_insert(0) += 1;
                    }
                }
                pb.inc(1);
                local
            })
            .reduce(FxHashMap::default, |mut merged, local| {
                for (outcome, count) in local {
                    *merged.entry(outcome).or_insert(0) += count;
                }
                merged
            });

        pb.finish_and_clear();

        let pairs: usize = histogram.values().sum();
        let mut bulls_sum = 0usize;
        let mut cows_sum = 0usize;
        for (&(bulls, cows), &count) in &histogram {
            bulls_sum += usize::from(bulls) * count;
            cows_sum += usize::from(cows) * count;
        }

        let (mean_bulls, mean_cows) = if pairs == 0 {
            (0.0, 0.0)
        } else {
            (bulls_sum as f64 / pairs as f64, cows_sum as f64 / pairs as f64)
        };

        total_pairs += pairs;
        audits.push(LengthAudit {
            length,
            words: words.len(),
            pairs,
            mean_bulls,
            mean_cows,
            histogram,
        });
    }

    let duration = start.elapsed();

    AuditResult {
        audits,
        duration,
        pairs_per_second: total_pairs as f64 / duration.as_secs_f64(),
    }
}
