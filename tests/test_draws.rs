use rangelab_cli::cards::{parse_board, parse_card, Card};
use rangelab_cli::combo::Combo;
use rangelab_cli::draws::*;

fn c(notation: &str) -> Card {
    parse_card(notation).unwrap()
}

fn combo(a: &str, b: &str) -> Combo {
    Combo::new(c(a), c(b)).unwrap()
}

fn board(notation: &str) -> Vec<Card> {
    parse_board(notation).unwrap()
}

// ---------------------------------------------------------------------------
// Flush draws
// ---------------------------------------------------------------------------

#[test]
fn test_flush_draw_two_card() {
    let b = board("9h 8c 4c");
    assert!(flush_draw_check(&combo("Ac", "Kc"), &b));
    assert!(!flush_draw_check(&combo("Ac", "Kh"), &b));
}

#[test]
fn test_flush_draw_turn() {
    let b = board("9s 4s Qc Jc");
    assert!(flush_draw_check(&combo("Ks", "Qs"), &b));
    assert!(flush_draw_check(&combo("Ac", "Kc"), &b));
    assert!(!flush_draw_check(&combo("Ac", "Kh"), &b));
}

#[test]
fn test_flush_draw_one_card() {
    let b = board("Th 7h 6h");
    assert!(flush_draw_check(&combo("Ac", "Kh"), &b));
    // Two suited hole cards on a monotone flop make a flush, not a draw.
    assert!(!flush_draw_check(&combo("Ac", "Kc"), &b));
    assert!(!flush_draw_check(&combo("5h", "4h"), &b));
}

#[test]
fn test_flush_draw_four_suit_board_offers_nothing() {
    let b = board("Th 7h 6h 2h");
    assert!(!flush_draw_check(&combo("Ac", "Kh"), &b));
    assert!(!flush_draw_check(&combo("5h", "4h"), &b));
    assert!(!flush_draw_check(&combo("Ac", "Kc"), &b));
}

#[test]
fn test_nut_flush_draw() {
    let b = board("Kc 7h 2h");
    assert!(!nut_flush_draw_check(&combo("Ac", "Kc"), &b));
    assert!(nut_flush_draw_check(&combo("Ah", "5h"), &b));
    assert!(!nut_flush_draw_check(&combo("Kh", "5h"), &b));

    let b = board("Kc 7h 2h 9h");
    assert!(!nut_flush_draw_check(&combo("Ac", "Kc"), &b));
    assert!(nut_flush_draw_check(&combo("Ah", "5s"), &b));
}

#[test]
fn test_second_nut_flush_draw() {
    let b = board("Kc 7h 2h");
    assert!(!second_nut_flush_draw_check(&combo("Qc", "Kc"), &b));
    assert!(second_nut_flush_draw_check(&combo("Kh", "5h"), &b));
    assert!(!second_nut_flush_draw_check(&combo("Qh", "5h"), &b));

    let b = board("Kc 7h 2h 9h");
    assert!(!second_nut_flush_draw_check(&combo("Ac", "Kc"), &b));
    assert!(second_nut_flush_draw_check(&combo("Kh", "5s"), &b));
}

// ---------------------------------------------------------------------------
// Straight draws
// ---------------------------------------------------------------------------

#[test]
fn test_straight_draw_ace_high_flop() {
    let b = board("Ac 9h 8c");
    assert!(straight_draw_check(&combo("Jh", "Th"), &b));
    assert!(straight_draw_check(&combo("7c", "6d"), &b));
    assert!(straight_draw_check(&combo("6d", "5d"), &b));
    assert!(straight_draw_check(&combo("Qs", "Jc"), &b));
    assert!(!straight_draw_check(&combo("Kd", "Qh"), &b));
    assert!(straight_draw_check(&combo("Th", "7s"), &b));
    assert!(!straight_draw_check(&combo("Kd", "Th"), &b));
    assert!(!straight_draw_check(&combo("Td", "Ts"), &b));
}

#[test]
fn test_straight_draw_low_flop() {
    let b = board("7h 5d 3d");
    assert!(straight_draw_check(&combo("6h", "6s"), &b));
    assert!(straight_draw_check(&combo("6c", "5c"), &b));
    assert!(straight_draw_check(&combo("9d", "8h"), &b));
    assert!(!straight_draw_check(&combo("8d", "7s"), &b));
    assert!(straight_draw_check(&combo("4h", "4d"), &b));
    assert!(!straight_draw_check(&combo("Tc", "9c"), &b));
}

#[test]
fn test_straight_draw_turn() {
    let b = board("9h 6s 5s 7h");
    assert!(!straight_draw_check(&combo("As", "Ks"), &b));
    assert!(straight_draw_check(&combo("4h", "4d"), &b));
    assert!(straight_draw_check(&combo("5h", "4d"), &b));
    // Hole ranks already on the board contribute nothing.
    assert!(!straight_draw_check(&combo("9c", "9d"), &b));
}

#[test]
fn test_straight_draw_river_never() {
    let b = board("9h 6s 5s 7h Kh");
    assert!(!straight_draw_check(&combo("9c", "9d"), &b));
    assert!(!straight_draw_check(&combo("Js", "Ts"), &b));
}

#[test]
fn test_oesd_ace_high_flop() {
    let b = board("Ac 9h 8c");
    assert!(oesd_check(&combo("Jh", "Th"), &b));
    assert!(oesd_check(&combo("7c", "6d"), &b));
    assert!(!oesd_check(&combo("6d", "5d"), &b));
    assert!(!oesd_check(&combo("Qs", "Jc"), &b));
}

#[test]
fn test_oesd_connected_flop() {
    let b = board("9h 8c 7d");
    assert!(oesd_check(&combo("Td", "Ts"), &b));
    assert!(!oesd_check(&combo("Qs", "Jc"), &b));
    assert!(oesd_check(&combo("Tc", "9c"), &b));
    assert!(!oesd_check(&combo("5h", "4d"), &b));
}

#[test]
fn test_oesd_double_gutter_counts() {
    let b = board("Ts 7d 2c 3h");
    assert!(oesd_check(&combo("5h", "4d"), &b));
    assert!(oesd_check(&combo("9d", "8h"), &b));
}

#[test]
fn test_oesd_wheel_side() {
    let b = board("Ah 5c 2c 4s");
    assert!(oesd_check(&combo("8h", "6s"), &b));
}

#[test]
fn test_gutshot_on_turn() {
    let b = board("9h 6s 5s 7h");
    let class = classify_draws(&combo("4h", "4d"), &b);
    assert_eq!(class.straight_draw, Some(DrawSubRank::Gutshot));
}

// ---------------------------------------------------------------------------
// Backdoor flush draws
// ---------------------------------------------------------------------------

#[test]
fn test_backdoor_flush() {
    let b = board("9h 8c 7d");
    assert!(backdoor_flush_check(&combo("Ah", "4h"), &b));
    assert!(backdoor_flush_check(&combo("Kh", "4h"), &b));
    assert!(!backdoor_flush_check(&combo("As", "4s"), &b));
    assert!(!backdoor_flush_check(&combo("Qh", "Js"), &b));
}

#[test]
fn test_backdoor_flush_two_tone_board() {
    let b = board("Ks 2s 7h");
    assert!(!backdoor_flush_check(&combo("As", "Ts"), &b));
    assert!(backdoor_flush_check(&combo("6h", "5h"), &b));
    assert!(backdoor_flush_check(&combo("Js", "Td"), &b));
    assert!(!backdoor_flush_check(&combo("9c", "8h"), &b));
}

#[test]
fn test_backdoor_flush_monotone_board() {
    let b = board("Ks 2s 7s");
    assert!(!backdoor_flush_check(&combo("9c", "8h"), &b));
    assert!(!backdoor_flush_check(&combo("Js", "Td"), &b));
    assert!(!backdoor_flush_check(&combo("As", "4s"), &b));
}

#[test]
fn test_backdoor_flush_flop_only() {
    let b = board("Ks 2s 7h Jc");
    assert!(!backdoor_flush_check(&combo("As", "4s"), &b));
    assert!(!backdoor_flush_check(&combo("Js", "Td"), &b));

    let b = board("Ks 2s 7h Jc 8d");
    assert!(!backdoor_flush_check(&combo("As", "4s"), &b));
    assert!(!backdoor_flush_check(&combo("9c", "8h"), &b));
}

#[test]
fn test_two_card_backdoor_flush() {
    assert!(!two_card_backdoor_flush_check(&combo("Ah", "Ac")));
    assert!(!two_card_backdoor_flush_check(&combo("Ah", "Kc")));
    assert!(two_card_backdoor_flush_check(&combo("Ah", "2h")));
    assert!(two_card_backdoor_flush_check(&combo("Js", "Ts")));
}

#[test]
fn test_nut_backdoor_flush() {
    let b = board("9c 8h 3d");
    assert!(nut_backdoor_flush_check(&combo("Ah", "6h"), &b));
    assert!(!nut_backdoor_flush_check(&combo("Kh", "6h"), &b));
    assert!(nut_backdoor_flush_check(&combo("Ac", "Jc"), &b));
    assert!(!nut_backdoor_flush_check(&combo("Qc", "Jc"), &b));
}

#[test]
fn test_nut_backdoor_flush_broadway_board() {
    let b = board("Ah Kc Qd");
    assert!(nut_backdoor_flush_check(&combo("Kh", "6h"), &b));
    assert!(!nut_backdoor_flush_check(&combo("4h", "3h"), &b));
    assert!(nut_backdoor_flush_check(&combo("Ac", "9c"), &b));
    assert!(!nut_backdoor_flush_check(&combo("Qc", "Jc"), &b));
    assert!(nut_backdoor_flush_check(&combo("Ad", "Kd"), &b));
    assert!(nut_backdoor_flush_check(&combo("Ad", "8d"), &b));
    assert!(!nut_backdoor_flush_check(&combo("Kd", "Jd"), &b));
    assert!(!nut_backdoor_flush_check(&combo("As", "9s"), &b));
}

#[test]
fn test_nut_backdoor_flush_one_card() {
    let b = board("Kh Tc 6h");
    assert!(nut_backdoor_flush_check(&combo("Ah", "8c"), &b));
    assert!(!nut_backdoor_flush_check(&combo("Qh", "Jh"), &b));
    assert!(!nut_backdoor_flush_check(&combo("Ac", "8h"), &b));
    assert!(nut_backdoor_flush_check(&combo("Ac", "Kc"), &b));
    assert!(nut_backdoor_flush_check(&combo("Ac", "2c"), &b));
    assert!(!nut_backdoor_flush_check(&combo("Ac", "6d"), &b));
}

#[test]
fn test_nut_backdoor_flush_monotone_excluded() {
    let b = board("Jh 8h 5h");
    assert!(!nut_backdoor_flush_check(&combo("Ac", "6d"), &b));
    assert!(!nut_backdoor_flush_check(&combo("Ah", "8c"), &b));
    assert!(!nut_backdoor_flush_check(&combo("Kd", "Jd"), &b));
    assert!(!nut_backdoor_flush_check(&combo("Qh", "Th"), &b));
}

#[test]
fn test_nut_backdoor_flush_ace_on_board() {
    let b = board("Ah Kc 8h");
    assert!(nut_backdoor_flush_check(&combo("Kh", "7s"), &b));
    assert!(!nut_backdoor_flush_check(&combo("Kh", "5h"), &b));
    assert!(!nut_backdoor_flush_check(&combo("Qh", "Jh"), &b));
    assert!(nut_backdoor_flush_check(&combo("Ac", "Kh"), &b));
}

// ---------------------------------------------------------------------------
// Backdoor straight draws
// ---------------------------------------------------------------------------

#[test]
fn test_backdoor_straight_high_flop() {
    let b = board("Qh 5h 4d");
    assert!(backdoor_straight_check(&combo("Kh", "Jh"), &b));
    assert!(backdoor_straight_check(&combo("Kc", "Jd"), &b));
    assert!(backdoor_straight_check(&combo("Ah", "Jc"), &b));
    assert!(backdoor_straight_check(&combo("Kh", "Td"), &b));
    assert!(backdoor_straight_check(&combo("Jh", "Td"), &b));
    assert!(backdoor_straight_check(&combo("Js", "8d"), &b));
    assert!(backdoor_straight_check(&combo("Js", "9h"), &b));
    assert!(backdoor_straight_check(&combo("Ac", "6c"), &b));
    assert!(backdoor_straight_check(&combo("9s", "8s"), &b));
    assert!(backdoor_straight_check(&combo("Ad", "Kd"), &b));
    assert!(backdoor_straight_check(&combo("As", "Tc"), &b));
}

#[test]
fn test_backdoor_straight_suppressed_by_better_shapes() {
    let b = board("9h 8c 7d");
    assert!(!backdoor_straight_check(&combo("Ah", "Kh"), &b));
    assert!(backdoor_straight_check(&combo("Kh", "Qh"), &b));
    // A live straight draw (or made straight) trumps the backdoor tag.
    assert!(!backdoor_straight_check(&combo("Qh", "Jh"), &b));
    assert!(!backdoor_straight_check(&combo("Jc", "Tc"), &b));
    assert!(!backdoor_straight_check(&combo("7s", "6s"), &b));
    assert!(!backdoor_straight_check(&combo("6h", "6c"), &b));
    assert!(!backdoor_straight_check(&combo("9c", "9d"), &b));
    assert!(!backdoor_straight_check(&combo("8d", "7s"), &b));
    assert!(backdoor_straight_check(&combo("4c", "4d"), &b));
    assert!(backdoor_straight_check(&combo("4d", "3h"), &b));
}

#[test]
fn test_backdoor_straight_wheel_windows() {
    let b = board("Td 9s 3c");
    assert!(backdoor_straight_check(&combo("Ah", "2s"), &b));
    assert!(backdoor_straight_check(&combo("As", "4c"), &b));
    assert!(backdoor_straight_check(&combo("As", "5s"), &b));
    assert!(backdoor_straight_check(&combo("4h", "2c"), &b));
    assert!(backdoor_straight_check(&combo("5d", "2c"), &b));
    assert!(backdoor_straight_check(&combo("Jh", "Jc"), &b));
    assert!(backdoor_straight_check(&combo("As", "Ks"), &b));
    assert!(backdoor_straight_check(&combo("9c", "8c"), &b));
    assert!(!backdoor_straight_check(&combo("8h", "7d"), &b));
    assert!(backdoor_straight_check(&combo("Ah", "Qh"), &b));
    assert!(backdoor_straight_check(&combo("6c", "5d"), &b));
    assert!(backdoor_straight_check(&combo("6h", "6d"), &b));
    assert!(backdoor_straight_check(&combo("Kh", "Ks"), &b));
    assert!(!backdoor_straight_check(&combo("Ah", "Ac"), &b));
}

#[test]
fn test_backdoor_straight_trips_board() {
    let b = board("Th Tc Td");
    assert!(backdoor_straight_check(&combo("As", "Ks"), &b));
    assert!(backdoor_straight_check(&combo("Kc", "Qh"), &b));
    assert!(!backdoor_straight_check(&combo("9d", "9s"), &b));
    assert!(backdoor_straight_check(&combo("7h", "6s"), &b));
    assert!(!backdoor_straight_check(&combo("Ts", "9c"), &b));
    assert!(!backdoor_straight_check(&combo("Ah", "8c"), &b));
    assert!(backdoor_straight_check(&combo("Qc", "8c"), &b));
}

#[test]
fn test_backdoor_straight_paired_ace_board() {
    let b = board("8h As 8c");
    assert!(backdoor_straight_check(&combo("3c", "2c"), &b));
    assert!(backdoor_straight_check(&combo("5d", "4d"), &b));
    assert!(backdoor_straight_check(&combo("Qs", "Jc"), &b));
    assert!(!backdoor_straight_check(&combo("Kc", "8d"), &b));
    assert!(backdoor_straight_check(&combo("6s", "5s"), &b));
    assert!(!backdoor_straight_check(&combo("8d", "8s"), &b));
}

#[test]
fn test_open_ended_three_straight() {
    let b = board("Qh Td 3h");
    assert!(open_ended_three_straight_check(&combo("4h", "2h"), &b));
    assert!(open_ended_three_straight_check(&combo("5c", "4s"), &b));
    // A wheel run only extends upward.
    assert!(!open_ended_three_straight_check(&combo("Ac", "2d"), &b));
}

#[test]
fn test_open_ended_three_straight_middle_runs() {
    let b = board("Ah 9s 2c");
    assert!(open_ended_three_straight_check(&combo("Td", "8d"), &b));
    assert!(open_ended_three_straight_check(&combo("8d", "7d"), &b));
    assert!(open_ended_three_straight_check(&combo("Jh", "Td"), &b));
    // An ace-high run only extends downward.
    assert!(!open_ended_three_straight_check(&combo("Kc", "Qd"), &b));
    assert!(!open_ended_three_straight_check(&combo("3h", "3s"), &b));
    assert!(!open_ended_three_straight_check(&combo("Qc", "Jh"), &b));
}

#[test]
fn test_open_ended_three_straight_needs_both_holes() {
    let b = board("Ks Jh 2c");
    assert!(open_ended_three_straight_check(&combo("4s", "3c"), &b));
    assert!(!open_ended_three_straight_check(&combo("Ac", "3c"), &b));
    assert!(!open_ended_three_straight_check(&combo("Qd", "Qh"), &b));
    assert!(!open_ended_three_straight_check(&combo("Tc", "9c"), &b));
}

#[test]
fn test_open_ended_three_straight_connected_board() {
    let b = board("Qh Js 8c");
    assert!(!open_ended_three_straight_check(&combo("9s", "7s"), &b));
    assert!(open_ended_three_straight_check(&combo("7d", "6c"), &b));
    assert!(!open_ended_three_straight_check(&combo("6c", "5h"), &b));
    assert!(!open_ended_three_straight_check(&combo("Kh", "Kd"), &b));
    assert!(!open_ended_three_straight_check(&combo("Ac", "Ks"), &b));
}

#[test]
fn test_two_card_backdoor_straight() {
    let b = board("Kd 7s 6c");
    assert!(two_card_backdoor_straight_check(&combo("Ah", "Qh"), &b));
    assert!(two_card_backdoor_straight_check(&combo("Ac", "Jd"), &b));
    assert!(two_card_backdoor_straight_check(&combo("As", "Th"), &b));
    assert!(!two_card_backdoor_straight_check(&combo("9d", "9s"), &b));
    assert!(!two_card_backdoor_straight_check(&combo("5d", "5s"), &b));
    assert!(!two_card_backdoor_straight_check(&combo("5s", "4s"), &b));
    assert!(two_card_backdoor_straight_check(&combo("3h", "2d"), &b));
}

#[test]
fn test_two_card_backdoor_straight_with_wheel() {
    let b = board("Tc 8s 2s");
    assert!(two_card_backdoor_straight_check(&combo("Ac", "3d"), &b));
    assert!(two_card_backdoor_straight_check(&combo("Ah", "4h"), &b));
    assert!(two_card_backdoor_straight_check(&combo("Ah", "5s"), &b));
    assert!(two_card_backdoor_straight_check(&combo("5d", "4c"), &b));
    assert!(two_card_backdoor_straight_check(&combo("5c", "3c"), &b));
    assert!(two_card_backdoor_straight_check(&combo("Kc", "Qc"), &b));
    assert!(two_card_backdoor_straight_check(&combo("Ks", "9d"), &b));
    assert!(!two_card_backdoor_straight_check(&combo("9h", "8h"), &b));
}

#[test]
fn test_backdoor_straight_flop_only() {
    let b = board("Ah Tc 2s 8s");
    assert!(!two_card_backdoor_straight_check(&combo("6s", "5s"), &b));
    assert!(!backdoor_straight_check(&combo("6s", "5s"), &b));
}

// ---------------------------------------------------------------------------
// Combined classification
// ---------------------------------------------------------------------------

#[test]
fn test_classify_draws_gutshot_fixture() {
    // Only an eight fills 9-7-6-5.
    let class = classify_draws(&combo("4h", "4d"), &board("9h 6s 5s 7h"));
    assert_eq!(class.straight_draw, Some(DrawSubRank::Gutshot));
    assert_eq!(class.flush_draw, None);
    assert_eq!(class.backdoor_flush, None);
    assert_eq!(class.backdoor_straight, None);
}

#[test]
fn test_classify_draws_multiple_families() {
    // Nut flush draw plus an open-ender on the turn.
    let class = classify_draws(&combo("Ah", "Th"), &board("Kh 9h Js 2c"));
    assert_eq!(class.flush_draw, Some(DrawSubRank::NutFlushDraw));
    assert_eq!(class.straight_draw, Some(DrawSubRank::Gutshot));
}

#[test]
fn test_classify_draws_river_empty() {
    let class = classify_draws(&combo("Ah", "Th"), &board("Kh 9h Js 2c 3d"));
    assert!(class.is_empty());
}

#[test]
fn test_classify_draws_backdoor_sub_ranks() {
    let b = board("9c 8h 3d");
    let class = classify_draws(&combo("Ac", "Jc"), &b);
    assert_eq!(
        class.backdoor_flush,
        Some(DrawSubRank::NutTwoCardBackdoorFlush)
    );

    let class = classify_draws(&combo("Qc", "Jc"), &b);
    assert_eq!(class.backdoor_flush, Some(DrawSubRank::TwoCardBackdoorFlush));
}
