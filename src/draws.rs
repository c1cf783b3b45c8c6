//! Drawing-hand classification for incomplete boards: flush and straight
//! draws on the flop and turn, runner-runner (backdoor) draws on the flop
//! only.  Unlike the made-hand cascade these checks are independent; one
//! combo can hold several draws at once.

use std::collections::HashSet;
use std::fmt;

use crate::cards::{Card, ALL_SUITS};
use crate::combo::Combo;
use crate::histogram::{add_wheel_entries, deduped_entries, sort_desc, ScanCard, LOW_ACE};
use crate::made_hands::straight_check;
use crate::nut_ranks::nut_flush_draw_cards;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawCategory {
    FlushDraw,
    StraightDraw,
    BackdoorFlushDraw,
    BackdoorStraightDraw,
}

impl fmt::Display for DrawCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DrawCategory::FlushDraw => "Flush Draw",
            DrawCategory::StraightDraw => "Straight Draw",
            DrawCategory::BackdoorFlushDraw => "BD Flush Draw",
            DrawCategory::BackdoorStraightDraw => "BD Str Draw",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawSubRank {
    NutFlushDraw,
    SecondNutFlushDraw,
    WeakFlushDraw,
    OpenEnded,
    Gutshot,
    NutTwoCardBackdoorFlush,
    NutOneCardBackdoorFlush,
    TwoCardBackdoorFlush,
    OneCardBackdoorFlush,
    OpenEndedThreeStraight,
    TwoCardBackdoorStraight,
    OneCardBackdoorStraight,
}

impl fmt::Display for DrawSubRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DrawSubRank::NutFlushDraw => "Nut Flush Draw",
            DrawSubRank::SecondNutFlushDraw => "Second Nut FD",
            DrawSubRank::WeakFlushDraw => "Weak Flush Draw",
            DrawSubRank::OpenEnded => "OESD",
            DrawSubRank::Gutshot => "Gutshot",
            DrawSubRank::NutTwoCardBackdoorFlush => "Nut, 2 Card",
            DrawSubRank::NutOneCardBackdoorFlush => "Nut, 1 Card",
            DrawSubRank::TwoCardBackdoorFlush => "Non-Nut, 2 Card",
            DrawSubRank::OneCardBackdoorFlush => "Non-Nut, 1 Card",
            DrawSubRank::OpenEndedThreeStraight => "OpenEnd 3 Str",
            DrawSubRank::TwoCardBackdoorStraight => "BDSD 2 Card",
            DrawSubRank::OneCardBackdoorStraight => "BDSD 1 Card",
        };
        write!(f, "{}", name)
    }
}

/// Every draw the combo holds, one slot per family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawClass {
    pub flush_draw: Option<DrawSubRank>,
    pub straight_draw: Option<DrawSubRank>,
    pub backdoor_flush: Option<DrawSubRank>,
    pub backdoor_straight: Option<DrawSubRank>,
}

impl DrawClass {
    pub fn is_empty(&self) -> bool {
        self.flush_draw.is_none()
            && self.straight_draw.is_none()
            && self.backdoor_flush.is_none()
            && self.backdoor_straight.is_none()
    }
}

pub fn classify_draws(combo: &Combo, board: &[Card]) -> DrawClass {
    if !(3..=4).contains(&board.len()) {
        return DrawClass::default();
    }

    let flush_draw = flush_draw_check(combo, board).then(|| {
        if nut_flush_draw_check(combo, board) {
            DrawSubRank::NutFlushDraw
        } else if second_nut_flush_draw_check(combo, board) {
            DrawSubRank::SecondNutFlushDraw
        } else {
            DrawSubRank::WeakFlushDraw
        }
    });

    let straight_draw = straight_draw_check(combo, board).then(|| {
        if oesd_check(combo, board) {
            DrawSubRank::OpenEnded
        } else {
            DrawSubRank::Gutshot
        }
    });

    let backdoor_flush = backdoor_flush_check(combo, board).then(|| {
        match (
            nut_backdoor_flush_check(combo, board),
            two_card_backdoor_flush_check(combo),
        ) {
            (true, true) => DrawSubRank::NutTwoCardBackdoorFlush,
            (true, false) => DrawSubRank::NutOneCardBackdoorFlush,
            (false, true) => DrawSubRank::TwoCardBackdoorFlush,
            (false, false) => DrawSubRank::OneCardBackdoorFlush,
        }
    });

    let backdoor_straight = backdoor_straight_check(combo, board).then(|| {
        if open_ended_three_straight_check(combo, board) {
            DrawSubRank::OpenEndedThreeStraight
        } else if two_card_backdoor_straight_check(combo, board) {
            DrawSubRank::TwoCardBackdoorStraight
        } else {
            DrawSubRank::OneCardBackdoorStraight
        }
    });

    DrawClass {
        flush_draw,
        straight_draw,
        backdoor_flush,
        backdoor_straight,
    }
}

// ---------------------------------------------------------------------------
// Flush draws
// ---------------------------------------------------------------------------

/// A hole card brings some suit to exactly four cards.  Five or more is a
/// made flush, and a board already carrying four of a suit offers the draw
/// to nobody.
pub fn flush_draw_check(combo: &Combo, board: &[Card]) -> bool {
    if board.len() >= 5 {
        return false;
    }
    let hole = combo.cards();
    ALL_SUITS.iter().any(|&suit| {
        let board_count = board.iter().filter(|c| c.suit == suit).count();
        let hole_count = hole.iter().filter(|c| c.suit == suit).count();
        hole_count >= 1 && board_count + hole_count == 4
    })
}

fn holds_any(combo: &Combo, cards: &[Card]) -> bool {
    cards.contains(&combo.card_a) || cards.contains(&combo.card_b)
}

pub fn nut_flush_draw_check(combo: &Combo, board: &[Card]) -> bool {
    holds_any(combo, &nut_flush_draw_cards(board, 1))
}

pub fn second_nut_flush_draw_check(combo: &Combo, board: &[Card]) -> bool {
    holds_any(combo, &nut_flush_draw_cards(board, 2))
}

// ---------------------------------------------------------------------------
// Straight draws
// ---------------------------------------------------------------------------

fn straight_scan(combo: &Combo, board: &[Card]) -> Vec<ScanCard> {
    let mut entries = deduped_entries(board, &combo.cards());
    add_wheel_entries(&mut entries);
    sort_desc(&mut entries);
    entries
}

/// Four deduplicated, wheel-adjusted ranks within a five-rank window, at
/// least one contributed by the combo.
pub fn straight_draw_check(combo: &Combo, board: &[Card]) -> bool {
    if !(3..=4).contains(&board.len()) {
        return false;
    }
    straight_scan(combo, board)
        .windows(4)
        .any(|w| w[0].value - w[3].value <= 4 && w.iter().any(|e| e.hole))
}

/// Distinct rank values whose arrival would complete a straight that uses
/// a hole card.
fn completing_values(combo: &Combo, board: &[Card]) -> Vec<i8> {
    let entries = straight_scan(combo, board);
    let present: HashSet<i8> = entries.iter().map(|e| e.value).collect();
    let holes: HashSet<i8> = entries.iter().filter(|e| e.hole).map(|e| e.value).collect();

    let mut out = Vec::new();
    for v in 1..=14i8 {
        if present.contains(&v) {
            continue;
        }
        let completes = (v.max(5)..=(v + 4).min(14)).any(|top| {
            let run = (top - 4)..=top;
            run.clone().all(|r| r == v || present.contains(&r))
                && run.clone().any(|r| holes.contains(&r))
        });
        if completes {
            out.push(v);
        }
    }
    out
}

/// Open-ended when exactly two distinct ranks fill the straight; a single
/// filler rank is a gutshot.
pub fn oesd_check(combo: &Combo, board: &[Card]) -> bool {
    completing_values(combo, board).len() == 2
}

// ---------------------------------------------------------------------------
// Backdoor flush draws (flop only)
// ---------------------------------------------------------------------------

/// A hole card brings some suit to exactly three cards on the flop,
/// needing runner-runner for the flush.
pub fn backdoor_flush_check(combo: &Combo, board: &[Card]) -> bool {
    if board.len() != 3 {
        return false;
    }
    let hole = combo.cards();
    ALL_SUITS.iter().any(|&suit| {
        let board_count = board.iter().filter(|c| c.suit == suit).count();
        let hole_count = hole.iter().filter(|c| c.suit == suit).count();
        hole_count >= 1 && board_count + hole_count == 3
    })
}

pub fn two_card_backdoor_flush_check(combo: &Combo) -> bool {
    combo.is_suited()
}

/// The combo holds the highest missing card of a suit it is drawing
/// runner-runner at.
pub fn nut_backdoor_flush_check(combo: &Combo, board: &[Card]) -> bool {
    if board.len() != 3 {
        return false;
    }
    let hole = combo.cards();
    for suit in ALL_SUITS {
        let board_count = board.iter().filter(|c| c.suit == suit).count();
        let suited_holes: Vec<&Card> = hole.iter().filter(|c| c.suit == suit).collect();
        if suited_holes.is_empty() || board_count + suited_holes.len() != 3 {
            continue;
        }
        let nut = (2..=14u8)
            .rev()
            .find(|&v| !board.iter().any(|c| c.suit == suit && c.value() == v));
        if let Some(nut) = nut {
            if suited_holes.iter().any(|h| h.value() == nut) {
                return true;
            }
        }
    }
    false
}

// ---------------------------------------------------------------------------
// Backdoor straight draws (flop only)
// ---------------------------------------------------------------------------

fn backdoor_straight_windows(combo: &Combo, board: &[Card]) -> Vec<[ScanCard; 3]> {
    straight_scan(combo, board)
        .windows(3)
        .filter(|w| w[0].value - w[2].value <= 4)
        .map(|w| [w[0], w[1], w[2]])
        .collect()
}

fn backdoor_straight_applies(combo: &Combo, board: &[Card]) -> bool {
    board.len() == 3 && !straight_check(combo, board) && !straight_draw_check(combo, board)
}

/// Three ranks within a five-rank window holding a hole card, on flops
/// where neither a straight nor a straight draw is already present.
pub fn backdoor_straight_check(combo: &Combo, board: &[Card]) -> bool {
    backdoor_straight_applies(combo, board)
        && backdoor_straight_windows(combo, board)
            .iter()
            .any(|w| w.iter().any(|e| e.hole))
}

/// Both hole cards sit in one qualifying three-rank window.
pub fn two_card_backdoor_straight_check(combo: &Combo, board: &[Card]) -> bool {
    backdoor_straight_applies(combo, board)
        && backdoor_straight_windows(combo, board)
            .iter()
            .any(|w| w.iter().filter(|e| e.hole).count() >= 2)
}

/// Three consecutive ranks using both hole cards with room to extend in
/// either direction, so neither an ace-high run nor a wheel run counts.
pub fn open_ended_three_straight_check(combo: &Combo, board: &[Card]) -> bool {
    backdoor_straight_applies(combo, board)
        && backdoor_straight_windows(combo, board).iter().any(|w| {
            w[0].value - w[2].value == 2
                && w.iter().filter(|e| e.hole).count() >= 2
                && w[0].value != 14
                && w[2].value != LOW_ACE
        })
}
