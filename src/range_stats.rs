//! Range-level aggregation: classify every combo in a range against one
//! board and bucket the results per category, with secondary sub-rank
//! buckets for the categories that have them.  Classification of a combo
//! is a pure function of (combo, board), so the range pass fans out over
//! a rayon thread pool and folds back in a deterministic order.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::cards::{validate_board, Card};
use crate::combo::Combo;
use crate::draws::{classify_draws, DrawCategory, DrawClass, DrawSubRank};
use crate::error::RangeResult;
use crate::made_hands::{classify_combo, MadeHand, MadeHandClass, SubRank};

pub const MADE_HAND_ORDER: [MadeHand; 14] = [
    MadeHand::StraightFlush,
    MadeHand::FourOfAKind,
    MadeHand::FullHouse,
    MadeHand::Flush,
    MadeHand::Straight,
    MadeHand::ThreeOfAKind,
    MadeHand::TwoPair,
    MadeHand::Overpair,
    MadeHand::TopPair,
    MadeHand::PocketPairBelowTopPair,
    MadeHand::MiddlePair,
    MadeHand::WeakPair,
    MadeHand::AceHigh,
    MadeHand::Overcards,
];

pub const DRAW_ORDER: [DrawCategory; 4] = [
    DrawCategory::FlushDraw,
    DrawCategory::StraightDraw,
    DrawCategory::BackdoorFlushDraw,
    DrawCategory::BackdoorStraightDraw,
];

const FLUSH_SUBS: [SubRank; 4] = [
    SubRank::NutFlush,
    SubRank::SecondNutFlush,
    SubRank::ThirdNutFlush,
    SubRank::WeakFlush,
];

const STRAIGHT_SUBS: [SubRank; 3] = [
    SubRank::NutStraight,
    SubRank::SecondNutStraight,
    SubRank::WeakStraight,
];

const TRIPS_SUBS: [SubRank; 2] = [SubRank::Set, SubRank::Trips];

const TOP_PAIR_SUBS: [SubRank; 5] = [
    SubRank::TopKicker,
    SubRank::SecondKicker,
    SubRank::ThirdKicker,
    SubRank::MiddleKicker,
    SubRank::WeakKicker,
];

const FLUSH_DRAW_SUBS: [DrawSubRank; 3] = [
    DrawSubRank::NutFlushDraw,
    DrawSubRank::SecondNutFlushDraw,
    DrawSubRank::WeakFlushDraw,
];

const STRAIGHT_DRAW_SUBS: [DrawSubRank; 2] = [DrawSubRank::OpenEnded, DrawSubRank::Gutshot];

const BACKDOOR_FLUSH_SUBS: [DrawSubRank; 4] = [
    DrawSubRank::NutTwoCardBackdoorFlush,
    DrawSubRank::NutOneCardBackdoorFlush,
    DrawSubRank::TwoCardBackdoorFlush,
    DrawSubRank::OneCardBackdoorFlush,
];

const BACKDOOR_STRAIGHT_SUBS: [DrawSubRank; 3] = [
    DrawSubRank::OpenEndedThreeStraight,
    DrawSubRank::TwoCardBackdoorStraight,
    DrawSubRank::OneCardBackdoorStraight,
];

/// Combos of one sub-rank within a primary category.
#[derive(Debug, Clone)]
pub struct SubBucket<S> {
    pub sub_rank: S,
    pub combos: Vec<Combo>,
    pub frequency: f64,
}

/// Combos of one primary category, with its sub-rank breakdown where the
/// category defines one.  Frequencies are relative to the unblocked range.
#[derive(Debug, Clone)]
pub struct CategoryBucket<C, S> {
    pub category: C,
    pub combos: Vec<Combo>,
    pub frequency: f64,
    pub sub_buckets: Vec<SubBucket<S>>,
}

pub type MadeHandBucket = CategoryBucket<MadeHand, SubRank>;
pub type DrawBucket = CategoryBucket<DrawCategory, DrawSubRank>;

#[derive(Debug, Clone)]
pub struct RangeStats {
    pub board: Vec<Card>,
    pub total_combos: usize,
    pub made_hands: Vec<MadeHandBucket>,
    pub draws: Vec<DrawBucket>,
}

/// Drops combos sharing a card with the board; the survivors come back in
/// grid order so downstream bucketing is deterministic.
pub fn remove_blocked_combos(range: &HashSet<Combo>, board: &[Card]) -> Vec<Combo> {
    let mut unblocked: Vec<Combo> = range
        .iter()
        .filter(|c| !c.blocked_by(board))
        .cloned()
        .collect();
    unblocked.sort();
    unblocked
}

/// Classifies the whole range against the board.  Boards shorter than a
/// flop yield empty bucket lists; rerunning with identical inputs always
/// reproduces the same buckets and frequencies.
pub fn classify_range(range: &HashSet<Combo>, board: &[Card]) -> RangeResult<RangeStats> {
    validate_board(board)?;

    let unblocked = remove_blocked_combos(range, board);
    let total = unblocked.len();

    if board.len() < 3 {
        return Ok(RangeStats {
            board: board.to_vec(),
            total_combos: total,
            made_hands: Vec::new(),
            draws: Vec::new(),
        });
    }

    let classified: Vec<(Combo, MadeHandClass, DrawClass)> = unblocked
        .into_par_iter()
        .map(|combo| {
            let made = classify_combo(&combo, board);
            let draws = classify_draws(&combo, board);
            (combo, made, draws)
        })
        .collect();

    let made_hands = build_made_hand_buckets(&classified, total);
    let draws = build_draw_buckets(&classified, total);

    Ok(RangeStats {
        board: board.to_vec(),
        total_combos: total,
        made_hands,
        draws,
    })
}

fn frequency(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

fn build_made_hand_buckets(
    classified: &[(Combo, MadeHandClass, DrawClass)],
    total: usize,
) -> Vec<MadeHandBucket> {
    let mut buckets = Vec::new();

    for category in MADE_HAND_ORDER {
        let members: Vec<(&Combo, &MadeHandClass)> = classified
            .iter()
            .filter(|(_, made, _)| match category {
                MadeHand::AceHigh => made.ace_high,
                MadeHand::Overcards => made.overcards,
                _ => made.category == Some(category),
            })
            .map(|(combo, made, _)| (combo, made))
            .collect();
        if members.is_empty() {
            continue;
        }

        let sub_order: &[SubRank] = match category {
            MadeHand::Flush => &FLUSH_SUBS,
            MadeHand::Straight => &STRAIGHT_SUBS,
            MadeHand::ThreeOfAKind => &TRIPS_SUBS,
            MadeHand::TopPair => &TOP_PAIR_SUBS,
            _ => &[],
        };

        let sub_buckets = sub_order
            .iter()
            .filter_map(|&sub| {
                let combos: Vec<Combo> = members
                    .iter()
                    .filter(|(_, made)| made.sub_rank == Some(sub))
                    .map(|(combo, _)| (*combo).clone())
                    .collect();
                (!combos.is_empty()).then(|| SubBucket {
                    sub_rank: sub,
                    frequency: frequency(combos.len(), total),
                    combos,
                })
            })
            .collect();

        let combos: Vec<Combo> = members.iter().map(|(combo, _)| (*combo).clone()).collect();
        buckets.push(CategoryBucket {
            category,
            frequency: frequency(combos.len(), total),
            combos,
            sub_buckets,
        });
    }

    buckets
}

fn build_draw_buckets(
    classified: &[(Combo, MadeHandClass, DrawClass)],
    total: usize,
) -> Vec<DrawBucket> {
    let mut buckets = Vec::new();

    for category in DRAW_ORDER {
        let slot = |draws: &DrawClass| match category {
            DrawCategory::FlushDraw => draws.flush_draw,
            DrawCategory::StraightDraw => draws.straight_draw,
            DrawCategory::BackdoorFlushDraw => draws.backdoor_flush,
            DrawCategory::BackdoorStraightDraw => draws.backdoor_straight,
        };

        let members: Vec<(&Combo, DrawSubRank)> = classified
            .iter()
            .filter_map(|(combo, _, draws)| slot(draws).map(|sub| (combo, sub)))
            .collect();
        if members.is_empty() {
            continue;
        }

        let sub_order: &[DrawSubRank] = match category {
            DrawCategory::FlushDraw => &FLUSH_DRAW_SUBS,
            DrawCategory::StraightDraw => &STRAIGHT_DRAW_SUBS,
            DrawCategory::BackdoorFlushDraw => &BACKDOOR_FLUSH_SUBS,
            DrawCategory::BackdoorStraightDraw => &BACKDOOR_STRAIGHT_SUBS,
        };

        let sub_buckets = sub_order
            .iter()
            .filter_map(|&sub| {
                let combos: Vec<Combo> = members
                    .iter()
                    .filter(|(_, s)| *s == sub)
                    .map(|(combo, _)| (*combo).clone())
                    .collect();
                (!combos.is_empty()).then(|| SubBucket {
                    sub_rank: sub,
                    frequency: frequency(combos.len(), total),
                    combos,
                })
            })
            .collect();

        let combos: Vec<Combo> = members.iter().map(|(combo, _)| (*combo).clone()).collect();
        buckets.push(CategoryBucket {
            category,
            frequency: frequency(combos.len(), total),
            combos,
            sub_buckets,
        });
    }

    buckets
}
