//! Board-level nut resolution: which card (or rank) makes the n-th best
//! flush, straight, or top-pair kicker given only the community cards.
//! The made-hand and drawing classifiers compare hole cards against these
//! to split categories into nut / 2nd nut / weaker tiers.

use crate::cards::{Card, Rank, Suit, ALL_SUITS};
use crate::histogram::{distinct_values_desc, LOW_ACE};

/// The card completing the n-th highest flush on this board: for the suit
/// with three or more board cards, the n-th rank of that suit not already
/// on the board, counting down from the Ace.  `None` when no flush is
/// possible or the board is not a flop/turn/river.
pub fn nut_flush_card(board: &[Card], n: usize) -> Option<Card> {
    if !(3..=5).contains(&board.len()) || n == 0 {
        return None;
    }
    let suit = ALL_SUITS
        .iter()
        .copied()
        .find(|&s| board.iter().filter(|c| c.suit == s).count() >= 3)?;
    missing_suit_rank(board, suit, n).map(|rank| Card::new(rank, suit))
}

/// Cards completing the n-th highest flush draw: one per suit holding
/// exactly two or three board cards.
pub fn nut_flush_draw_cards(board: &[Card], n: usize) -> Vec<Card> {
    if n == 0 {
        return Vec::new();
    }
    ALL_SUITS
        .iter()
        .copied()
        .filter(|&s| matches!(board.iter().filter(|c| c.suit == s).count(), 2 | 3))
        .filter_map(|s| missing_suit_rank(board, s, n).map(|rank| Card::new(rank, s)))
        .collect()
}

fn missing_suit_rank(board: &[Card], suit: Suit, n: usize) -> Option<Rank> {
    let mut misses = 0;
    for v in (2..=14u8).rev() {
        let on_board = board
            .iter()
            .any(|c| c.suit == suit && c.value() == v);
        if !on_board {
            misses += 1;
            if misses == n {
                return Rank::from_value(v);
            }
        }
    }
    None
}

/// Hole-card rank completing the n-th highest straight (n is 1 or 2).
///
/// The first rank triple (deduplicated, wheel-adjusted, scanned high to low)
/// spanning at most four ranks fixes the straight template; candidate ranks
/// are then scanned downward from a start offset by the triple's span.  The
/// second-nut rank is withheld on boards that admit no second straight: a
/// three-card wheel, an ace-high board short of the river, and a span-4
/// triple anchored on the board's lowest rank.
pub fn nut_straight_rank(board: &[Card], n: usize) -> Option<Rank> {
    if !(1..=2).contains(&n) {
        return None;
    }
    let mut vals = distinct_values_desc(board);
    if vals.is_empty() {
        return None;
    }
    let board_low = vals[vals.len() - 1];
    let board_top = vals[0];
    if vals.contains(&14) {
        vals.push(LOW_ACE);
    }

    let triple = vals.windows(3).find(|w| w[0] - w[2] <= 4)?;
    let span = triple[0] - triple[2];
    let start = match span {
        2 => triple[0] + 2,
        3 => triple[0] + 1,
        _ => triple[0] - 1,
    };

    if n == 2 {
        if triple.contains(&LOW_ACE) {
            return None;
        }
        if board_top == 14 && board.len() < 5 {
            return None;
        }
        if span == 4 && triple[2] == board_low {
            return None;
        }
    }

    let mut misses = 0;
    let mut v = start.min(14);
    while v >= 2 {
        if !triple.contains(&v) {
            misses += 1;
            if misses == n {
                return Rank::from_value(v as u8);
            }
        }
        v -= 1;
    }
    None
}

/// The n-th highest rank absent from the board; pairing the board's top
/// card with the 1st/2nd/3rd of these is top pair, top/second/third kicker.
pub fn top_pair_kicker_rank(board: &[Card], n: usize) -> Option<Rank> {
    if n == 0 {
        return None;
    }
    let mut misses = 0;
    for v in (2..=14u8).rev() {
        if !board.iter().any(|c| c.value() == v) {
            misses += 1;
            if misses == n {
                return Rank::from_value(v);
            }
        }
    }
    None
}
