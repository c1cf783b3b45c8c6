use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use once_cell::sync::Lazy;

use crate::cards::{Card, ALL_RANKS, ALL_SUITS};
use crate::error::{RangeError, RangeResult};

/// All 1,326 distinct two-card combinations, ordered by grid index.
pub static ALL_COMBOS: Lazy<Vec<Combo>> = Lazy::new(|| {
    let deck: Vec<Card> = ALL_RANKS
        .iter()
        .flat_map(|&r| ALL_SUITS.iter().map(move |&s| Card::new(r, s)))
        .collect();
    let mut combos = Vec::with_capacity(1326);
    for i in 0..deck.len() {
        for j in (i + 1)..deck.len() {
            combos.push(Combo::new(deck[i], deck[j]).expect("deck cards are distinct"));
        }
    }
    combos.sort();
    combos
});

/// An unordered pair of hole cards.  Canonical text, matrix label, and grid
/// index are derived once at construction; equality and hashing go through
/// the canonical text so either card order produces the same combo.
#[derive(Debug, Clone)]
pub struct Combo {
    pub card_a: Card,
    pub card_b: Card,
    text: String,
    label: String,
    grid_index: usize,
}

impl Combo {
    pub fn new(card_a: Card, card_b: Card) -> RangeResult<Combo> {
        if card_a == card_b {
            return Err(RangeError::IdenticalComboCards(card_a.to_string()));
        }
        let text = canonical_text(card_a, card_b);
        let label = matrix_label(card_a, card_b);
        let grid_index = grid_index_for(&label);
        Ok(Combo {
            card_a,
            card_b,
            text,
            label,
            grid_index,
        })
    }

    /// Canonical display text, higher card first, e.g. "AhKd" or "7c7s".
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Range-matrix label, e.g. "AKs", "AKo", or "77".
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Slot in the 169-cell 13x13 range matrix, row-major from "AA".
    pub fn grid_index(&self) -> usize {
        self.grid_index
    }

    pub fn cards(&self) -> [Card; 2] {
        [self.card_a, self.card_b]
    }

    pub fn is_pocket_pair(&self) -> bool {
        self.card_a.rank == self.card_b.rank
    }

    pub fn is_suited(&self) -> bool {
        self.card_a.suit == self.card_b.suit
    }

    /// True if either hole card appears among the given board cards.
    pub fn blocked_by(&self, board: &[Card]) -> bool {
        board.contains(&self.card_a) || board.contains(&self.card_b)
    }
}

impl fmt::Display for Combo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl PartialEq for Combo {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Combo {}

impl Hash for Combo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl PartialOrd for Combo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Combo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.grid_index
            .cmp(&other.grid_index)
            .then_with(|| self.text.cmp(&other.text))
    }
}

fn canonical_text(a: Card, b: Card) -> String {
    let (first, second) = if a.rank == b.rank {
        if a.suit.index() < b.suit.index() {
            (a, b)
        } else {
            (b, a)
        }
    } else if a.rank > b.rank {
        (a, b)
    } else {
        (b, a)
    };
    format!("{}{}", first, second)
}

fn matrix_label(a: Card, b: Card) -> String {
    if a.rank == b.rank {
        return format!("{}{}", a.rank.to_char(), b.rank.to_char());
    }
    let hi = a.rank.max(b.rank);
    let lo = a.rank.min(b.rank);
    let kind = if a.suit == b.suit { 's' } else { 'o' };
    format!("{}{}{}", hi.to_char(), lo.to_char(), kind)
}

/// Matrix rows run A..2 top to bottom; suited combos sit above the pair
/// diagonal, offsuit below it.
fn grid_index_for(label: &str) -> usize {
    let chars: Vec<char> = label.chars().collect();
    let hi = 14 - rank_char_value(chars[0]);
    let lo = 14 - rank_char_value(chars[1]);
    match chars.get(2) {
        None => hi * 13 + hi,
        Some('s') => hi * 13 + lo,
        _ => lo * 13 + hi,
    }
}

fn rank_char_value(c: char) -> usize {
    match c {
        '2' => 2,
        '3' => 3,
        '4' => 4,
        '5' => 5,
        '6' => 6,
        '7' => 7,
        '8' => 8,
        '9' => 9,
        'T' => 10,
        'J' => 11,
        'Q' => 12,
        'K' => 13,
        _ => 14,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_card;

    fn combo(a: &str, b: &str) -> Combo {
        Combo::new(parse_card(a).unwrap(), parse_card(b).unwrap()).unwrap()
    }

    #[test]
    fn test_text_is_order_independent() {
        assert_eq!(combo("Kd", "Ah"), combo("Ah", "Kd"));
        assert_eq!(combo("Kd", "Ah").text(), "AhKd");
    }

    #[test]
    fn test_pocket_pair_text_sorted_by_suit() {
        assert_eq!(combo("7s", "7c").text(), "7c7s");
    }

    #[test]
    fn test_labels() {
        assert_eq!(combo("Ah", "Kh").label(), "AKs");
        assert_eq!(combo("Ah", "Kd").label(), "AKo");
        assert_eq!(combo("2c", "2d").label(), "22");
    }

    #[test]
    fn test_grid_corners() {
        assert_eq!(combo("Ah", "Ad").grid_index(), 0);
        assert_eq!(combo("Ah", "Kh").grid_index(), 1);
        assert_eq!(combo("Ah", "Kd").grid_index(), 13);
        assert_eq!(combo("2c", "2d").grid_index(), 168);
    }

    #[test]
    fn test_identical_cards_rejected() {
        let c = parse_card("Ah").unwrap();
        assert!(Combo::new(c, c).is_err());
    }

    #[test]
    fn test_all_combos_count() {
        assert_eq!(ALL_COMBOS.len(), 1326);
    }
}
