//! Texture sweep: classify one range against many dealt boards and report
//! how often each category shows up on average.  Boards are dealt up
//! front, classification fans out over rayon.

use std::collections::HashSet;

use rayon::prelude::*;
use serde::Serialize;

use crate::cards::{Card, Deck};
use crate::combo::Combo;
use crate::error::RangeResult;
use crate::range_stats::{classify_range, DRAW_ORDER, MADE_HAND_ORDER};

#[derive(Debug, Clone, Serialize)]
pub struct BatchRow {
    pub category: String,
    /// Mean frequency over all boards, counting boards where the category
    /// never appeared as zero.
    pub avg_frequency: f64,
    /// Boards on which at least one combo landed in the category.
    pub boards_hit: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub boards: usize,
    pub street: String,
    pub made_hands: Vec<BatchRow>,
    pub draws: Vec<BatchRow>,
}

pub fn run_texture_sweep(
    range: &HashSet<Combo>,
    boards: usize,
    street_len: usize,
    street_name: &str,
) -> RangeResult<BatchReport> {
    let dealt: Vec<Vec<Card>> = (0..boards)
        .map(|_| Deck::new(None).shuffle().deal(street_len))
        .collect::<RangeResult<Vec<_>>>()?;

    let stats = dealt
        .par_iter()
        .map(|board| classify_range(range, board))
        .collect::<RangeResult<Vec<_>>>()?;

    let made_hands = MADE_HAND_ORDER
        .iter()
        .map(|&category| {
            let freqs: Vec<f64> = stats
                .iter()
                .map(|s| {
                    s.made_hands
                        .iter()
                        .find(|b| b.category == category)
                        .map_or(0.0, |b| b.frequency)
                })
                .collect();
            summarize(category.to_string(), &freqs)
        })
        .collect();

    let draws = DRAW_ORDER
        .iter()
        .map(|&category| {
            let freqs: Vec<f64> = stats
                .iter()
                .map(|s| {
                    s.draws
                        .iter()
                        .find(|b| b.category == category)
                        .map_or(0.0, |b| b.frequency)
                })
                .collect();
            summarize(category.to_string(), &freqs)
        })
        .collect();

    Ok(BatchReport {
        boards,
        street: street_name.to_string(),
        made_hands,
        draws,
    })
}

fn summarize(category: String, freqs: &[f64]) -> BatchRow {
    let boards_hit = freqs.iter().filter(|&&f| f > 0.0).count();
    let avg_frequency = if freqs.is_empty() {
        0.0
    } else {
        freqs.iter().sum::<f64>() / freqs.len() as f64
    };
    BatchRow {
        category,
        avg_frequency,
        boards_hit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranges::parse_range;

    #[test]
    fn test_sweep_board_count() {
        let range = parse_range("AA, AKs").unwrap();
        let report = run_texture_sweep(&range, 8, 3, "flop").unwrap();
        assert_eq!(report.boards, 8);
        assert_eq!(report.made_hands.len(), 14);
        assert_eq!(report.draws.len(), 4);
    }

    #[test]
    fn test_avg_frequency_bounded() {
        let range = parse_range("22+, ATs+, KQo").unwrap();
        let report = run_texture_sweep(&range, 5, 5, "river").unwrap();
        for row in report.made_hands.iter().chain(report.draws.iter()) {
            assert!(row.avg_frequency >= 0.0 && row.avg_frequency <= 1.0);
            assert!(row.boards_hit <= 5);
        }
    }
}
