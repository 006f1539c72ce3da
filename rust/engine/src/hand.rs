use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::EngineError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Totally ordered hand strength: category first, then the tiebreak ranks
/// element-wise, most significant first. Unused slots stay zero, so the
/// derived ordering is exactly the comparison rule.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandRank {
    pub category: Category,
    pub tiebreak: [u8; 5],
}

/// Evaluates the best 5-card hand available within 2..=7 cards.
///
/// For 5 or more cards every 5-card subset is classified and the maximum
/// kept, so the result is invariant under any reordering of the input.
/// With fewer than 5 cards the input is classified directly as a partial
/// hand (straights and flushes need all five cards).
pub fn evaluate_best_hand(cards: &[Card]) -> Result<HandRank, EngineError> {
    let n = cards.len();
    if !(2..=7).contains(&n) {
        return Err(EngineError::InvalidHandSize { given: n });
    }
    if n <= 5 {
        return Ok(classify(cards));
    }
    let mut best = HandRank {
        category: Category::HighCard,
        tiebreak: [0; 5],
    };
    for a in 0..n - 4 {
        for b in a + 1..n - 3 {
            for c in b + 1..n - 2 {
                for d in c + 1..n - 1 {
                    for e in d + 1..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let rank = classify(&five);
                        if rank > best {
                            best = rank;
                        }
                    }
                }
            }
        }
    }
    Ok(best)
}

/// Classifies 2..=5 cards into (category, tiebreak).
fn classify(cards: &[Card]) -> HandRank {
    let mut rank_counts = [0u8; 15]; // 2..=14 used
    for c in cards {
        rank_counts[c.rank as usize] += 1;
    }

    let is_flush = cards.len() == 5 && cards.iter().all(|c| c.suit == cards[0].suit);
    let straight = if cards.len() == 5 {
        let ranks: Vec<u8> = cards.iter().map(|c| c.rank as u8).collect();
        straight_high(&ranks)
    } else {
        None
    };

    if is_flush {
        if let Some(high) = straight {
            return HandRank {
                category: Category::StraightFlush,
                tiebreak: tiebreak(&[high]),
            };
        }
    }

    if let Some((quad, kicker)) = detect_quads(&rank_counts) {
        return HandRank {
            category: Category::FourOfAKind,
            tiebreak: tiebreak(&[quad, kicker]),
        };
    }

    if let Some((trip, pair)) = detect_full_house(&rank_counts) {
        return HandRank {
            category: Category::FullHouse,
            tiebreak: tiebreak(&[trip, pair]),
        };
    }

    if is_flush {
        let mut ranks: Vec<u8> = cards.iter().map(|c| c.rank as u8).collect();
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        return HandRank {
            category: Category::Flush,
            tiebreak: tiebreak(&ranks),
        };
    }

    if let Some(high) = straight {
        return HandRank {
            category: Category::Straight,
            tiebreak: tiebreak(&[high]),
        };
    }

    let (trips, pairs, singles) = group_by_count(&rank_counts);

    if let Some(&t) = trips.first() {
        let mut k = vec![t];
        k.extend(singles.iter().take(2));
        return HandRank {
            category: Category::ThreeOfAKind,
            tiebreak: tiebreak(&k),
        };
    }

    if pairs.len() >= 2 {
        let mut k = vec![pairs[0], pairs[1]];
        k.extend(singles.first());
        return HandRank {
            category: Category::TwoPair,
            tiebreak: tiebreak(&k),
        };
    }

    if let Some(&p) = pairs.first() {
        let mut k = vec![p];
        k.extend(singles.iter().take(3));
        return HandRank {
            category: Category::OnePair,
            tiebreak: tiebreak(&k),
        };
    }

    HandRank {
        category: Category::HighCard,
        tiebreak: tiebreak(&singles),
    }
}

/// High card of a 5-long consecutive run over the distinct ranks, checking
/// every window plus the wheel (A-2-3-4-5 counts the Ace low, high card 5).
fn straight_high(ranks: &[u8]) -> Option<u8> {
    let mut uniq = ranks.to_vec();
    uniq.sort_unstable_by(|a, b| b.cmp(a));
    uniq.dedup();
    for w in uniq.windows(5) {
        if w[0] - w[4] == 4 {
            return Some(w[0]);
        }
    }
    if [14u8, 5, 4, 3, 2].iter().all(|r| uniq.contains(r)) {
        return Some(5);
    }
    None
}

fn detect_quads(rank_counts: &[u8; 15]) -> Option<(u8, u8)> {
    let quad = (2..=14u8).rev().find(|&r| rank_counts[r as usize] == 4)?;
    let kicker = (2..=14u8)
        .rev()
        .find(|&r| r != quad && rank_counts[r as usize] > 0)
        .unwrap_or(0);
    Some((quad, kicker))
}

fn detect_full_house(rank_counts: &[u8; 15]) -> Option<(u8, u8)> {
    let trip = (2..=14u8).rev().find(|&r| rank_counts[r as usize] == 3)?;
    let pair = (2..=14u8)
        .rev()
        .find(|&r| r != trip && rank_counts[r as usize] == 2)?;
    Some((trip, pair))
}

/// Ranks grouped by multiplicity, each list descending.
fn group_by_count(rank_counts: &[u8; 15]) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let mut trips = vec![];
    let mut pairs = vec![];
    let mut singles = vec![];
    for r in (2..=14u8).rev() {
        match rank_counts[r as usize] {
            3 => trips.push(r),
            2 => pairs.push(r),
            1 => singles.push(r),
            _ => {}
        }
    }
    (trips, pairs, singles)
}

fn tiebreak(vals: &[u8]) -> [u8; 5] {
    let mut t = [0u8; 5];
    for (slot, v) in t.iter_mut().zip(vals) {
        *slot = *v;
    }
    t
}
