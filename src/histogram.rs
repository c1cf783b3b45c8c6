//! Shared rank-counting and scan-list primitives used by every classifier:
//! descending rank histograms, first-seen rank deduplication, and wheel-ace
//! expansion so A-2-3-4-5 shapes fall out of ordinary window scans.

use crate::cards::{Card, Rank, Suit};

/// Scan value of the synthetic low Ace appended for wheel detection.
pub const LOW_ACE: i8 = 1;

/// Group sizes of equal ranks, largest first: quads -> [4, 1],
/// a full house -> [3, 2], an unpaired five-card set -> [1, 1, 1, 1, 1].
pub fn rank_histogram(cards: &[Card]) -> Vec<u8> {
    let mut counts = [0u8; 15];
    for card in cards {
        counts[card.value() as usize] += 1;
    }
    let mut groups: Vec<u8> = counts.iter().copied().filter(|&c| c > 0).collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));
    groups
}

/// Keeps the first card seen of each rank, in input order.  Extra cards are
/// appended afterwards and only when their rank is not already present, so a
/// hole card pairing the board contributes nothing to straight-shape scans.
pub fn dedupe_by_rank(cards: &[Card], extras: &[Card]) -> Vec<Card> {
    let mut seen = [false; 15];
    let mut out = Vec::with_capacity(cards.len() + extras.len());
    for &card in cards.iter().chain(extras.iter()) {
        let v = card.value() as usize;
        if !seen[v] {
            seen[v] = true;
            out.push(card);
        }
    }
    out
}

/// Distinct rank values present, highest first.
pub fn distinct_values_desc(cards: &[Card]) -> Vec<i8> {
    let mut vals: Vec<i8> = dedupe_by_rank(cards, &[])
        .iter()
        .map(|c| c.value() as i8)
        .collect();
    vals.sort_unstable_by(|a, b| b.cmp(a));
    vals
}

/// How many cards of the given rank the set holds.
pub fn count_of(cards: &[Card], rank: Rank) -> usize {
    cards.iter().filter(|c| c.rank == rank).count()
}

/// One entry of a window-scan list.  `hole` marks entries contributed by the
/// combo (including the synthetic low Ace of a hole-card Ace), which is how
/// every classifier decides whether the combo actually participates.
#[derive(Debug, Clone, Copy)]
pub struct ScanCard {
    pub value: i8,
    pub suit: Suit,
    pub hole: bool,
}

impl ScanCard {
    fn from_card(card: Card, hole: bool) -> ScanCard {
        ScanCard {
            value: card.value() as i8,
            suit: card.suit,
            hole,
        }
    }
}

/// Board and hole cards as one scan list, hole cards flagged.
pub fn combined_entries(board: &[Card], hole: &[Card]) -> Vec<ScanCard> {
    let mut out: Vec<ScanCard> = board
        .iter()
        .map(|&c| ScanCard::from_card(c, false))
        .collect();
    out.extend(hole.iter().map(|&c| ScanCard::from_card(c, true)));
    out
}

/// Like [`combined_entries`] but rank-deduplicated board-first, so hole
/// cards whose rank already shows on the board drop out of the list.
pub fn deduped_entries(board: &[Card], hole: &[Card]) -> Vec<ScanCard> {
    let mut seen = [false; 15];
    let mut out = Vec::with_capacity(board.len() + hole.len());
    for entry in combined_entries(board, hole) {
        let v = entry.value as usize;
        if !seen[v] {
            seen[v] = true;
            out.push(entry);
        }
    }
    out
}

/// Appends a low-Ace copy for every Ace in the list.
pub fn add_wheel_entries(entries: &mut Vec<ScanCard>) {
    let aces: Vec<ScanCard> = entries
        .iter()
        .filter(|e| e.value == 14)
        .map(|e| ScanCard {
            value: LOW_ACE,
            suit: e.suit,
            hole: e.hole,
        })
        .collect();
    entries.extend(aces);
}

pub fn sort_desc(entries: &mut [ScanCard]) {
    entries.sort_by(|a, b| b.value.cmp(&a.value));
}
