use holdem_engine::cards::parse_cards;
use holdem_engine::equity::WinRateEstimator;
use holdem_engine::errors::EngineError;

fn hole(tokens: &str) -> [holdem_engine::cards::Card; 2] {
    let cards = parse_cards(tokens).unwrap();
    [cards[0], cards[1]]
}

#[test]
fn zero_opponents_is_certain_win() {
    let mut est = WinRateEstimator::new_with_seed(1);
    let p = est.estimate(hole("Ah Ad"), &[], 0, 37).unwrap();
    assert_eq!(p, 1.0);
}

#[test]
fn made_royal_flush_is_certain_win() {
    let board = parse_cards("Qs Js Ts").unwrap();
    let mut est = WinRateEstimator::new_with_seed(2);
    let p = est.estimate(hole("As Ks"), &board, 2, 200).unwrap();
    assert_eq!(p, 1.0);
}

#[test]
fn board_plays_for_everyone_is_a_pure_tie() {
    // the board itself is a royal flush; every trial splits
    let board = parse_cards("As Ks Qs Js Ts").unwrap();
    let mut est = WinRateEstimator::new_with_seed(3);
    let p = est.estimate(hole("2h 3h"), &board, 1, 100).unwrap();
    assert_eq!(p, 0.5);
}

#[test]
fn threatening_board_cuts_equity() {
    // pocket aces with no spade: a three-spade connected board hands the
    // field flush and straight outs that a dry board does not
    let hero = hole("Ah Ad");
    let wet = parse_cards("Ks Qs Js 2d").unwrap();
    let dry = parse_cards("Kh 8c 3d 2c").unwrap();

    let mut est = WinRateEstimator::new_with_seed(5000);
    let p_wet = est.estimate(hero, &wet, 1, 5000).unwrap();
    let p_dry = est.estimate(hero, &dry, 1, 5000).unwrap();

    assert!(p_wet < p_dry, "wet {p_wet} should trail dry {p_dry}");
    assert!(p_wet > 0.35 && p_wet < 0.9);
    assert!(p_dry > 0.6);
}

#[test]
fn fixed_seed_reproduces_the_estimate() {
    let board = parse_cards("Kc 7d 2h").unwrap();
    let mut a = WinRateEstimator::new_with_seed(42);
    let mut b = WinRateEstimator::new_with_seed(42);
    let pa = a.estimate(hole("Qh Qd"), &board, 2, 500).unwrap();
    let pb = b.estimate(hole("Qh Qd"), &board, 2, 500).unwrap();
    assert_eq!(pa, pb);
    assert!((0.0..=1.0).contains(&pa));
}

#[test]
fn zero_trials_claims_nothing() {
    let mut est = WinRateEstimator::new_with_seed(8);
    let p = est.estimate(hole("Ah Ad"), &[], 3, 0).unwrap();
    assert_eq!(p, 0.0);
}

#[test]
fn too_many_opponents_exhausts_the_deck() {
    let mut est = WinRateEstimator::new_with_seed(9);
    let err = est.estimate(hole("Ah Ad"), &[], 30, 1).unwrap_err();
    assert!(matches!(err, EngineError::InsufficientCards { .. }));
}
