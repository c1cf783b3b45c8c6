//! Made-hand classification: one combo against one board, walked through a
//! strict precedence cascade from straight flush down to weak pair.  Each
//! tier has a companion board-only check; when the board alone already
//! shows a tier, combos that do not beat it stop classifying there and
//! claim nothing below it.

use std::fmt;

use itertools::Itertools;

use crate::cards::{Card, ALL_SUITS};
use crate::combo::Combo;
use crate::histogram::{
    add_wheel_entries, combined_entries, count_of, deduped_entries, distinct_values_desc,
    rank_histogram, sort_desc,
};
use crate::nut_ranks::{nut_flush_card, nut_straight_rank, top_pair_kicker_rank};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MadeHand {
    StraightFlush,
    FourOfAKind,
    FullHouse,
    Flush,
    Straight,
    ThreeOfAKind,
    TwoPair,
    Overpair,
    TopPair,
    PocketPairBelowTopPair,
    MiddlePair,
    WeakPair,
    AceHigh,
    Overcards,
}

impl fmt::Display for MadeHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MadeHand::StraightFlush => "Straight Flush",
            MadeHand::FourOfAKind => "Four of a Kind",
            MadeHand::FullHouse => "Full House",
            MadeHand::Flush => "Flush",
            MadeHand::Straight => "Straight",
            MadeHand::ThreeOfAKind => "Three of a Kind",
            MadeHand::TwoPair => "Two Pair",
            MadeHand::Overpair => "Overpair",
            MadeHand::TopPair => "Top Pair",
            MadeHand::PocketPairBelowTopPair => "PP Below TP",
            MadeHand::MiddlePair => "Middle Pair",
            MadeHand::WeakPair => "Weak Pair",
            MadeHand::AceHigh => "Ace High",
            MadeHand::Overcards => "Overcards",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubRank {
    NutFlush,
    SecondNutFlush,
    ThirdNutFlush,
    WeakFlush,
    NutStraight,
    SecondNutStraight,
    WeakStraight,
    Set,
    Trips,
    TopKicker,
    SecondKicker,
    ThirdKicker,
    MiddleKicker,
    WeakKicker,
}

impl fmt::Display for SubRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubRank::NutFlush => "Nut Flush",
            SubRank::SecondNutFlush => "2nd Nut Flush",
            SubRank::ThirdNutFlush => "3rd Nut Flush",
            SubRank::WeakFlush => "Weak Flush",
            SubRank::NutStraight => "Nut Straight",
            SubRank::SecondNutStraight => "2nd Nut Straight",
            SubRank::WeakStraight => "Weak Straight",
            SubRank::Set => "Set",
            SubRank::Trips => "Trips",
            SubRank::TopKicker => "Top Kicker",
            SubRank::SecondKicker => "Second Kicker",
            SubRank::ThirdKicker => "Third Kicker",
            SubRank::MiddleKicker => "Middle Kicker",
            SubRank::WeakKicker => "Weak Kicker",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of the cascade for one combo.  `category` is the single
/// exclusive tier the combo reached (never `AceHigh`/`Overcards`); the two
/// flags are the non-exclusive fallback tags awarded only to combos that
/// fell through every tier unblocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MadeHandClass {
    pub category: Option<MadeHand>,
    pub sub_rank: Option<SubRank>,
    pub ace_high: bool,
    pub overcards: bool,
}

impl MadeHandClass {
    fn none() -> MadeHandClass {
        MadeHandClass {
            category: None,
            sub_rank: None,
            ace_high: false,
            overcards: false,
        }
    }

    fn of(category: MadeHand, sub_rank: Option<SubRank>) -> MadeHandClass {
        MadeHandClass {
            category: Some(category),
            sub_rank,
            ace_high: false,
            overcards: false,
        }
    }
}

/// Walks the precedence cascade top to bottom, first match wins.  Boards
/// shorter than a flop produce an empty classification.
pub fn classify_combo(combo: &Combo, board: &[Card]) -> MadeHandClass {
    if board.len() < 3 {
        return MadeHandClass::none();
    }

    if straight_flush_check(combo, board) {
        return MadeHandClass::of(MadeHand::StraightFlush, None);
    }
    if board_straight_flush_check(board) {
        return MadeHandClass::none();
    }

    if quads_check(combo, board) {
        return MadeHandClass::of(MadeHand::FourOfAKind, None);
    }
    if board_quads_check(board) {
        return MadeHandClass::none();
    }

    if full_house_check(combo, board) {
        return MadeHandClass::of(MadeHand::FullHouse, None);
    }
    if board_full_house_check(board) {
        return MadeHandClass::none();
    }

    if flush_check(combo, board) {
        return MadeHandClass::of(MadeHand::Flush, Some(flush_sub_rank(combo, board)));
    }
    if board_flush_check(board) {
        return MadeHandClass::none();
    }

    if straight_check(combo, board) {
        return MadeHandClass::of(MadeHand::Straight, Some(straight_sub_rank(combo, board)));
    }
    if board_straight_check(board) {
        return MadeHandClass::none();
    }

    if trips_check(combo, board) {
        let sub = if set_check(combo, board) {
            SubRank::Set
        } else {
            SubRank::Trips
        };
        return MadeHandClass::of(MadeHand::ThreeOfAKind, Some(sub));
    }
    if board_trips_check(board) {
        return MadeHandClass::none();
    }

    if two_pair_check(combo, board) {
        return MadeHandClass::of(MadeHand::TwoPair, None);
    }
    if overpair_check(combo, board) {
        return MadeHandClass::of(MadeHand::Overpair, None);
    }
    if top_pair_check(combo, board) {
        return MadeHandClass::of(MadeHand::TopPair, Some(top_pair_kicker(combo, board)));
    }
    if pocket_pair_below_top_check(combo, board) {
        return MadeHandClass::of(MadeHand::PocketPairBelowTopPair, None);
    }
    if middle_pair_check(combo, board) {
        return MadeHandClass::of(MadeHand::MiddlePair, None);
    }
    if weak_pair_check(combo, board) {
        return MadeHandClass::of(MadeHand::WeakPair, None);
    }

    MadeHandClass {
        category: None,
        sub_rank: None,
        ace_high: ace_high_check(combo),
        overcards: overcards_check(combo, board),
    }
}

// ---------------------------------------------------------------------------
// Straight flush
// ---------------------------------------------------------------------------

fn board_straight_flush_high(board: &[Card]) -> i8 {
    if board.len() == 5 && board.iter().all(|c| c.suit == board[0].suit) {
        let mut entries = combined_entries(board, &[]);
        add_wheel_entries(&mut entries);
        sort_desc(&mut entries);
        for w in entries.windows(5) {
            if w[0].value - w[4].value == 4 {
                return w[0].value;
            }
        }
    }
    0
}

pub fn board_straight_flush_check(board: &[Card]) -> bool {
    board_straight_flush_high(board) > 0
}

/// A hole card completes a straight flush ranked above any the board
/// already shows on its own.
pub fn straight_flush_check(combo: &Combo, board: &[Card]) -> bool {
    let board_high = board_straight_flush_high(board);
    let mut entries = combined_entries(board, &combo.cards());
    add_wheel_entries(&mut entries);

    for suit in ALL_SUITS {
        let mut group: Vec<_> = entries.iter().filter(|e| e.suit == suit).copied().collect();
        if group.len() < 5 {
            continue;
        }
        sort_desc(&mut group);
        for w in group.windows(5) {
            if w[0].value - w[4].value == 4 && w[0].value > board_high && w.iter().any(|e| e.hole)
            {
                return true;
            }
        }
    }
    false
}

// ---------------------------------------------------------------------------
// Four of a kind
// ---------------------------------------------------------------------------

pub fn board_quads_check(board: &[Card]) -> bool {
    rank_histogram(board).contains(&4)
}

/// Board quads cannot be improved by hole cards, so they disqualify rather
/// than qualify; otherwise four of a rank in the combined cards always
/// uses at least one hole card.
pub fn quads_check(combo: &Combo, board: &[Card]) -> bool {
    if board_quads_check(board) {
        return false;
    }
    let mut all = board.to_vec();
    all.extend(combo.cards());
    rank_histogram(&all).contains(&4)
}

// ---------------------------------------------------------------------------
// Full house
// ---------------------------------------------------------------------------

pub fn board_full_house_check(board: &[Card]) -> bool {
    rank_histogram(board) == [3, 2]
}

fn full_house_ranks(five: &[Card]) -> (i8, i8) {
    let mut vals: Vec<i8> = five.iter().map(|c| c.value() as i8).collect();
    vals.sort_unstable_by(|a, b| b.cmp(a));
    if vals[2] > vals[3] {
        (vals[0], vals[4])
    } else {
        (vals[4], vals[0])
    }
}

/// A hole card participates in a full house, which must beat the board's
/// own full house (trips rank first, then pair rank) when one exists.
pub fn full_house_check(combo: &Combo, board: &[Card]) -> bool {
    if !rank_histogram(board).iter().any(|&c| c >= 2) {
        return false;
    }

    let board_fh = if board_full_house_check(board) {
        Some(full_house_ranks(board))
    } else {
        None
    };

    let mut all = board.to_vec();
    all.extend(combo.cards());

    for five in all.iter().combinations(5) {
        let five: Vec<Card> = five.into_iter().copied().collect();
        if rank_histogram(&five) != [3, 2] {
            continue;
        }
        if !five.contains(&combo.card_a) && !five.contains(&combo.card_b) {
            continue;
        }
        match board_fh {
            None => return true,
            Some((board_trips, board_pair)) => {
                let (trips, pair) = full_house_ranks(&five);
                if trips > board_trips || (trips == board_trips && pair > board_pair) {
                    return true;
                }
            }
        }
    }
    false
}

// ---------------------------------------------------------------------------
// Flush
// ---------------------------------------------------------------------------

pub fn board_flush_check(board: &[Card]) -> bool {
    board.len() == 5 && board.iter().all(|c| c.suit == board[0].suit)
}

/// A hole card participates in a five-card flush; against a board-only
/// flush the participating hole card must outrank the board flush's lowest
/// card to count as improving it.
pub fn flush_check(combo: &Combo, board: &[Card]) -> bool {
    let board_low: i8 = if board_flush_check(board) {
        board.iter().map(|c| c.value() as i8).min().unwrap_or(0)
    } else {
        0
    };

    let hole = combo.cards();
    for suit in ALL_SUITS {
        let board_count = board.iter().filter(|c| c.suit == suit).count();
        let suited_holes: Vec<&Card> = hole.iter().filter(|c| c.suit == suit).collect();
        if board_count + suited_holes.len() < 5 {
            continue;
        }
        if suited_holes.iter().any(|h| h.value() as i8 > board_low) {
            return true;
        }
    }
    false
}

fn holds_card(combo: &Combo, card: Card) -> bool {
    combo.card_a == card || combo.card_b == card
}

pub fn nut_flush_check(combo: &Combo, board: &[Card]) -> bool {
    nut_flush_card(board, 1).is_some_and(|c| holds_card(combo, c))
}

pub fn second_nut_flush_check(combo: &Combo, board: &[Card]) -> bool {
    nut_flush_card(board, 2).is_some_and(|c| holds_card(combo, c))
}

pub fn third_nut_flush_check(combo: &Combo, board: &[Card]) -> bool {
    nut_flush_card(board, 3).is_some_and(|c| holds_card(combo, c))
}

fn flush_sub_rank(combo: &Combo, board: &[Card]) -> SubRank {
    if nut_flush_check(combo, board) {
        SubRank::NutFlush
    } else if second_nut_flush_check(combo, board) {
        SubRank::SecondNutFlush
    } else if third_nut_flush_check(combo, board) {
        SubRank::ThirdNutFlush
    } else {
        SubRank::WeakFlush
    }
}

// ---------------------------------------------------------------------------
// Straight
// ---------------------------------------------------------------------------

fn board_straight_high(board: &[Card]) -> i8 {
    let mut entries = deduped_entries(board, &[]);
    add_wheel_entries(&mut entries);
    sort_desc(&mut entries);
    for w in entries.windows(5) {
        if w[0].value - w[4].value == 4 {
            return w[0].value;
        }
    }
    0
}

pub fn board_straight_check(board: &[Card]) -> bool {
    board_straight_high(board) > 0
}

/// A hole card participates in a straight ranked above any straight the
/// board makes on its own.
pub fn straight_check(combo: &Combo, board: &[Card]) -> bool {
    let board_high = board_straight_high(board);
    let mut entries = deduped_entries(board, &combo.cards());
    add_wheel_entries(&mut entries);
    sort_desc(&mut entries);

    entries.windows(5).any(|w| {
        w[0].value - w[4].value == 4 && w[0].value > board_high && w.iter().any(|e| e.hole)
    })
}

fn holds_rank_value(combo: &Combo, value: u8) -> bool {
    combo.card_a.value() == value || combo.card_b.value() == value
}

pub fn nut_straight_check(combo: &Combo, board: &[Card]) -> bool {
    nut_straight_rank(board, 1).is_some_and(|r| holds_rank_value(combo, r.value()))
}

pub fn second_nut_straight_check(combo: &Combo, board: &[Card]) -> bool {
    nut_straight_rank(board, 2).is_some_and(|r| holds_rank_value(combo, r.value()))
}

fn straight_sub_rank(combo: &Combo, board: &[Card]) -> SubRank {
    if nut_straight_check(combo, board) {
        SubRank::NutStraight
    } else if second_nut_straight_check(combo, board) {
        SubRank::SecondNutStraight
    } else {
        SubRank::WeakStraight
    }
}

// ---------------------------------------------------------------------------
// Three of a kind
// ---------------------------------------------------------------------------

pub fn board_trips_check(board: &[Card]) -> bool {
    rank_histogram(board).contains(&3)
}

/// Three of a rank in any window of the combined, rank-sorted cards, with a
/// hole card among the three.
pub fn trips_check(combo: &Combo, board: &[Card]) -> bool {
    let mut entries = combined_entries(board, &combo.cards());
    sort_desc(&mut entries);
    entries
        .windows(3)
        .any(|w| w[0].value == w[2].value && w.iter().any(|e| e.hole))
}

/// Pocket pair matching a board rank, as opposed to one hole card paired
/// with a board pair.
pub fn set_check(combo: &Combo, board: &[Card]) -> bool {
    combo.is_pocket_pair() && board.iter().any(|c| c.rank == combo.card_a.rank)
}

// ---------------------------------------------------------------------------
// Pair tiers
// ---------------------------------------------------------------------------

fn highest_board_pair(board: &[Card]) -> Option<i8> {
    distinct_values_desc(board)
        .into_iter()
        .filter(|&v| board.iter().filter(|c| c.value() as i8 == v).count() >= 2)
        .max()
}

/// Both hole cards pair distinct board ranks, neither below the board's
/// highest existing pair.
pub fn two_pair_check(combo: &Combo, board: &[Card]) -> bool {
    let a = combo.card_a.value() as i8;
    let b = combo.card_b.value() as i8;
    if a == b {
        return false;
    }
    let on_board = |v: i8| board.iter().any(|c| c.value() as i8 == v);
    if !on_board(a) || !on_board(b) {
        return false;
    }
    match highest_board_pair(board) {
        Some(pair) => a.min(b) >= pair,
        None => true,
    }
}

pub fn overpair_check(combo: &Combo, board: &[Card]) -> bool {
    combo.is_pocket_pair()
        && board
            .iter()
            .all(|c| c.value() < combo.card_a.value())
}

/// Exactly one hole card pairs the board's highest rank, which must itself
/// be unpaired on the board.
pub fn top_pair_check(combo: &Combo, board: &[Card]) -> bool {
    let top = match board.iter().map(|c| c.rank).max() {
        Some(r) => r,
        None => return false,
    };
    if count_of(board, top) != 1 {
        return false;
    }
    (combo.card_a.rank == top) != (combo.card_b.rank == top)
}

fn top_pair_kicker(combo: &Combo, board: &[Card]) -> SubRank {
    let top = board.iter().map(|c| c.rank).max();
    let kicker = if Some(combo.card_a.rank) == top {
        combo.card_b.rank
    } else {
        combo.card_a.rank
    };
    let tier = (1..=6).find(|&n| top_pair_kicker_rank(board, n) == Some(kicker));
    match tier {
        Some(1) => SubRank::TopKicker,
        Some(2) => SubRank::SecondKicker,
        Some(3) => SubRank::ThirdKicker,
        Some(_) => SubRank::MiddleKicker,
        None => SubRank::WeakKicker,
    }
}

/// Pocket pair strictly between the board's top and second-highest
/// distinct ranks.
pub fn pocket_pair_below_top_check(combo: &Combo, board: &[Card]) -> bool {
    if !combo.is_pocket_pair() {
        return false;
    }
    let distinct = distinct_values_desc(board);
    if distinct.len() < 2 {
        return false;
    }
    let p = combo.card_a.value() as i8;
    p < distinct[0] && p > distinct[1]
}

/// A hole card pairs the board's second-highest distinct rank, provided
/// that rank is unpaired on the board.
pub fn middle_pair_check(combo: &Combo, board: &[Card]) -> bool {
    let distinct = distinct_values_desc(board);
    if distinct.len() < 2 {
        return false;
    }
    let second = distinct[1];
    let unpaired = board.iter().filter(|c| c.value() as i8 == second).count() == 1;
    unpaired
        && (combo.card_a.value() as i8 == second || combo.card_b.value() as i8 == second)
}

/// A pair below middle pair: a hole card matching the third-highest or
/// lower distinct board rank, or a pocket pair under the board's two top
/// ranks.  Double-paired boards shut this tier off entirely.
pub fn weak_pair_check(combo: &Combo, board: &[Card]) -> bool {
    let distinct = distinct_values_desc(board);
    let paired_ranks = distinct
        .iter()
        .filter(|&&v| board.iter().filter(|c| c.value() as i8 == v).count() >= 2)
        .count();
    if paired_ranks >= 2 {
        return false;
    }

    if combo.is_pocket_pair() {
        let p = combo.card_a.value() as i8;
        return distinct.len() >= 2 && p < distinct[1];
    }

    if distinct.len() < 3 {
        return false;
    }
    let third = distinct[2];
    combo.cards().iter().any(|h| {
        let v = h.value() as i8;
        v <= third && board.iter().any(|c| c.value() as i8 == v)
    })
}

// ---------------------------------------------------------------------------
// Fallback tags
// ---------------------------------------------------------------------------

/// Exactly one hole card is an Ace.
pub fn ace_high_check(combo: &Combo) -> bool {
    (combo.card_a.value() == 14) != (combo.card_b.value() == 14)
}

/// Both hole cards outrank the whole board; only meaningful before the
/// river.
pub fn overcards_check(combo: &Combo, board: &[Card]) -> bool {
    if board.len() >= 5 || board.is_empty() {
        return false;
    }
    let top = board.iter().map(|c| c.value()).max().unwrap_or(0);
    combo.card_a.value() > top && combo.card_b.value() > top
}
