use std::collections::HashSet;

use holdem_engine::cards::parse_cards;
use holdem_engine::deck::Deck;
use holdem_engine::errors::EngineError;

#[test]
fn same_seed_same_shuffle() {
    let mut a = Deck::new_with_seed(7);
    let mut b = Deck::new_with_seed(7);
    a.shuffle();
    b.shuffle();
    assert_eq!(a.deal(52).unwrap(), b.deal(52).unwrap());
}

#[test]
fn different_seeds_differ() {
    let mut a = Deck::new_with_seed(1);
    let mut b = Deck::new_with_seed(2);
    a.shuffle();
    b.shuffle();
    assert_ne!(a.deal(5).unwrap(), b.deal(5).unwrap());
}

#[test]
fn dealing_shrinks_the_deck() {
    let mut deck = Deck::new_with_seed(3);
    deck.shuffle();
    assert_eq!(deck.remaining(), 52);
    let dealt = deck.deal(5).unwrap();
    assert_eq!(dealt.len(), 5);
    assert_eq!(deck.remaining(), 47);

    let none = deck.deal(0).unwrap();
    assert!(none.is_empty());
    assert_eq!(deck.remaining(), 47);
}

#[test]
fn overdealing_fails_without_mutation() {
    let mut deck = Deck::new_with_seed(4);
    deck.shuffle();
    deck.deal(50).unwrap();
    assert_eq!(
        deck.deal(3),
        Err(EngineError::InsufficientCards {
            requested: 3,
            remaining: 2
        })
    );
    assert_eq!(deck.remaining(), 2);
    assert_eq!(deck.deal(2).unwrap().len(), 2);
}

#[test]
fn no_duplicates_after_dealing() {
    let mut deck = Deck::new_with_seed(5);
    deck.shuffle();
    let mut seen: HashSet<_> = deck.deal(10).unwrap().into_iter().collect();
    for &card in deck.remaining_cards() {
        assert!(seen.insert(card), "duplicate card {card}");
    }
    assert_eq!(seen.len(), 52);
}

#[test]
fn filtered_deck_excludes_known_cards() {
    let known = parse_cards("As Kd 2c").unwrap();
    let mut deck = Deck::without(9, &known);
    assert_eq!(deck.remaining(), 49);
    deck.shuffle();
    let dealt = deck.deal(49).unwrap();
    for card in &known {
        assert!(!dealt.contains(card));
    }
}

#[test]
fn filtered_deck_is_seed_deterministic() {
    let known = parse_cards("Ah Ad").unwrap();
    let mut a = Deck::without(11, &known);
    let mut b = Deck::without(11, &known);
    a.shuffle();
    b.shuffle();
    assert_eq!(a.deal(10).unwrap(), b.deal(10).unwrap());
}

#[test]
fn reset_restores_full_deck() {
    let mut deck = Deck::new_with_seed(6);
    deck.shuffle();
    deck.deal(20).unwrap();
    deck.reset();
    assert_eq!(deck.remaining(), 52);
    let all: HashSet<_> = deck.deal(52).unwrap().into_iter().collect();
    assert_eq!(all.len(), 52);
}
