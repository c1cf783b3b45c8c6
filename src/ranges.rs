//! Range shorthand: "AA, AKs, 22+, KTs-KQs, AhKh" expanded into a
//! duplicate-free set of combos.  The engine itself only consumes the
//! resulting set; this module is the text-notation front door the CLI uses.

use std::collections::HashSet;

use crate::cards::{parse_card, Card, Rank, ALL_SUITS, RANKS_STR};
use crate::combo::Combo;
use crate::error::{RangeError, RangeResult};

/// Parses a comma-separated range string into the set of combos it names.
pub fn parse_range(range_str: &str) -> RangeResult<HashSet<Combo>> {
    let mut combos = HashSet::new();
    for part in range_str.replace(' ', "").split(',') {
        if part.is_empty() {
            continue;
        }
        for label in expand_token(part)? {
            for combo in label_combos(&label)? {
                combos.insert(combo);
            }
        }
    }
    Ok(combos)
}

/// Number of distinct combos a matrix label stands for: 6 per pair,
/// 4 per suited label, 12 per offsuit label.
pub fn combo_count(label: &str) -> u32 {
    let chars: Vec<char> = label.chars().collect();
    match (chars.len(), chars.last()) {
        (2, _) if chars[0] == chars[1] => 6,
        (3, Some('s')) => 4,
        (3, Some('o')) => 12,
        (4, _) => 1,
        _ => 0,
    }
}

/// Distinct matrix labels of a combo set, in grid order.
pub fn range_labels(range: &HashSet<Combo>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut combos: Vec<&Combo> = range.iter().collect();
    combos.sort();
    combos
        .into_iter()
        .filter(|c| seen.insert(c.label().to_string()))
        .map(|c| c.label().to_string())
        .collect()
}

fn expand_token(token: &str) -> RangeResult<Vec<String>> {
    if let Some(base) = token.strip_suffix('+') {
        return expand_plus(base);
    }
    if token.len() > 4 && token.contains('-') {
        return expand_dash(token);
    }
    Ok(vec![token.to_string()])
}

fn rank_index(c: char) -> RangeResult<usize> {
    RANKS_STR
        .find(c.to_ascii_uppercase())
        .ok_or(RangeError::InvalidRank(c))
}

fn expand_plus(base: &str) -> RangeResult<Vec<String>> {
    let chars: Vec<char> = base.chars().collect();
    let ranks: Vec<char> = RANKS_STR.chars().collect();

    // Pair ladder: "TT+" runs up to AA.
    if chars.len() == 2 && chars[0] == chars[1] {
        let from = rank_index(chars[0])?;
        return Ok((from..ranks.len())
            .map(|i| format!("{}{}", ranks[i], ranks[i]))
            .collect());
    }

    // Kicker ladder: "ATs+" runs the low card up to one under the high.
    if chars.len() == 3 {
        let high = chars[0];
        let low = rank_index(chars[1])?;
        let top = rank_index(high)?;
        let kind = chars[2];
        return Ok((low..top)
            .map(|i| format!("{}{}{}", high, ranks[i], kind))
            .collect());
    }

    Err(RangeError::InvalidHandNotation(format!("{}+", base)))
}

fn expand_dash(token: &str) -> RangeResult<Vec<String>> {
    let parts: Vec<&str> = token.split('-').collect();
    if parts.len() != 2 {
        return Err(RangeError::InvalidHandNotation(token.to_string()));
    }
    let start: Vec<char> = parts[0].chars().collect();
    let end: Vec<char> = parts[1].chars().collect();
    let ranks: Vec<char> = RANKS_STR.chars().collect();

    // Pair span: "77-TT".
    if start.len() == 2 && end.len() == 2 && start[0] == start[1] && end[0] == end[1] {
        let a = rank_index(start[0])?;
        let b = rank_index(end[0])?;
        return Ok((a.min(b)..=a.max(b))
            .map(|i| format!("{}{}", ranks[i], ranks[i]))
            .collect());
    }

    // Kicker span with a fixed high card: "KTs-KQs".
    if start.len() == 3 && end.len() == 3 && start[0] == end[0] && start[2] == end[2] {
        let a = rank_index(start[1])?;
        let b = rank_index(end[1])?;
        return Ok((a.min(b)..=a.max(b))
            .map(|i| format!("{}{}{}", start[0], ranks[i], start[2]))
            .collect());
    }

    Err(RangeError::InvalidHandNotation(token.to_string()))
}

/// Expands one matrix label (or explicit four-character combo) to combos.
pub fn label_combos(label: &str) -> RangeResult<Vec<Combo>> {
    let chars: Vec<char> = label.chars().collect();

    // Pair: "AA" -> six combos.
    if chars.len() == 2 && chars[0] == chars[1] {
        let rank = Rank::from_char(chars[0].to_ascii_uppercase())?;
        let mut combos = Vec::new();
        for i in 0..ALL_SUITS.len() {
            for j in (i + 1)..ALL_SUITS.len() {
                combos.push(Combo::new(
                    Card::new(rank, ALL_SUITS[i]),
                    Card::new(rank, ALL_SUITS[j]),
                )?);
            }
        }
        return Ok(combos);
    }

    // Suited / offsuit: "AKs" -> four combos, "AKo" -> twelve.
    if chars.len() == 3 {
        let r1 = Rank::from_char(chars[0].to_ascii_uppercase())?;
        let r2 = Rank::from_char(chars[1].to_ascii_uppercase())?;
        if r1 == r2 {
            return Err(RangeError::InvalidHandNotation(label.to_string()));
        }
        match chars[2] {
            's' => {
                return Ok(ALL_SUITS
                    .iter()
                    .map(|&s| Combo::new(Card::new(r1, s), Card::new(r2, s)))
                    .collect::<RangeResult<Vec<Combo>>>()?);
            }
            'o' => {
                let mut combos = Vec::new();
                for &s1 in &ALL_SUITS {
                    for &s2 in &ALL_SUITS {
                        if s1 != s2 {
                            combos.push(Combo::new(Card::new(r1, s1), Card::new(r2, s2))?);
                        }
                    }
                }
                return Ok(combos);
            }
            _ => return Err(RangeError::InvalidHandNotation(label.to_string())),
        }
    }

    // Explicit combo: "AhKh".
    if chars.len() == 4 {
        let a = parse_card(&label[..2])?;
        let b = parse_card(&label[2..])?;
        return Ok(vec![Combo::new(a, b)?]);
    }

    Err(RangeError::InvalidHandNotation(label.to_string()))
}

/// The full 1,326-combo range.
pub fn full_range() -> HashSet<Combo> {
    crate::combo::ALL_COMBOS.iter().cloned().collect()
}
