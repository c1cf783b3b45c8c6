use std::collections::HashSet;
use std::fmt;

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::error::{RangeError, RangeResult};

pub const RANKS_STR: &str = "23456789TJQKA";
pub const SUITS_STR: &str = "hdcs";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub fn from_char(c: char) -> RangeResult<Rank> {
        match c {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(RangeError::InvalidRank(c)),
        }
    }

    pub fn from_value(v: u8) -> Option<Rank> {
        match v {
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            14 => Some(Rank::Ace),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }
}

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub fn from_char(c: char) -> RangeResult<Suit> {
        match c.to_ascii_lowercase() {
            'h' => Ok(Suit::Hearts),
            'd' => Ok(Suit::Diamonds),
            'c' => Ok(Suit::Clubs),
            's' => Ok(Suit::Spades),
            _ => Err(RangeError::InvalidSuit(c)),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Hearts => "\u{2665}",
            Suit::Diamonds => "\u{2666}",
            Suit::Clubs => "\u{2663}",
            Suit::Spades => "\u{2660}",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Suit::Hearts => 0,
            Suit::Diamonds => 1,
            Suit::Clubs => 2,
            Suit::Spades => 3,
        }
    }
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn pretty(&self) -> String {
        format!("{}{}", self.rank.to_char(), self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.to_char(), self.suit.to_char())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank
            .cmp(&other.rank)
            .then(self.suit.index().cmp(&other.suit.index()))
    }
}

pub fn parse_card(notation: &str) -> RangeResult<Card> {
    let notation = notation.trim();
    let chars: Vec<char> = notation.chars().collect();
    if chars.len() != 2 {
        return Err(RangeError::InvalidCardNotation(notation.to_string()));
    }
    let rank = Rank::from_char(chars[0].to_ascii_uppercase())?;
    let suit = Suit::from_char(chars[1])?;
    Ok(Card::new(rank, suit))
}

pub fn parse_board(notation: &str) -> RangeResult<Vec<Card>> {
    let notation = notation.trim().replace(' ', "").replace(',', "");
    if notation.len() % 2 != 0 {
        return Err(RangeError::InvalidBoardNotation(notation.to_string()));
    }
    let mut cards = Vec::new();
    let chars: Vec<char> = notation.chars().collect();
    for i in (0..chars.len()).step_by(2) {
        let s: String = chars[i..i + 2].iter().collect();
        cards.push(parse_card(&s)?);
    }
    validate_board(&cards)?;
    Ok(cards)
}

/// Boundary check for community cards: legal street length, no duplicates.
pub fn validate_board(board: &[Card]) -> RangeResult<()> {
    if !matches!(board.len(), 0 | 3 | 4 | 5) {
        return Err(RangeError::InvalidBoardSize(board.len()));
    }
    let mut seen = HashSet::new();
    for card in board {
        if !seen.insert(*card) {
            return Err(RangeError::DuplicateBoardCard(card.to_string()));
        }
    }
    Ok(())
}

pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn new(exclude: Option<&[Card]>) -> Deck {
        let excluded: HashSet<Card> = exclude
            .map(|e| e.iter().copied().collect())
            .unwrap_or_default();
        let cards = ALL_RANKS
            .iter()
            .flat_map(|&r| ALL_SUITS.iter().map(move |&s| Card::new(r, s)))
            .filter(|c| !excluded.contains(c))
            .collect();
        Deck { cards }
    }

    pub fn shuffle(&mut self) -> &mut Self {
        let mut rng = thread_rng();
        self.cards.shuffle(&mut rng);
        self
    }

    pub fn deal(&mut self, n: usize) -> RangeResult<Vec<Card>> {
        if n > self.cards.len() {
            return Err(RangeError::NotEnoughDeck {
                requested: n,
                available: self.cards.len(),
            });
        }
        let dealt: Vec<Card> = self.cards.drain(..n).collect();
        Ok(dealt)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
