use std::fmt;

use rand::Rng;

pub const DECK_SIZE: usize = 52;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn symbol(&self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
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
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Point value a fresh card of this rank starts with. Aces start high.
    pub fn base_value(&self) -> u8 {
        match self {
            Rank::Ace => 11,
            Rank::Jack | Rank::Queen | Rank::King | Rank::Ten => 10,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
        }
    }
}

/// A playing card. `value` starts at the rank's base value and is the only
/// field that changes during play: an Ace may drop from 11 to 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub value: u8,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Card {
            suit,
            rank,
            value: rank.base_value(),
        }
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.as_str(), self.suit.symbol())
    }
}

/// A single 52-card deck. Cards only ever leave the deck; `refill` puts a
/// full fresh set back so the allocation can be reused between rounds.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    pub fn new() -> Self {
        let mut deck = Deck {
            cards: Vec::with_capacity(DECK_SIZE),
        };
        deck.refill();
        deck
    }

    pub fn refill(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(suit, rank));
            }
        }
    }

    /// Full deck arranged so that an rng always picking index 0 draws `order`
    /// first, in sequence. `swap_remove(0)` pulls the last card to the front,
    /// so everything after the first card is laid out in reverse at the tail.
    #[cfg(test)]
    pub(crate) fn stacked(order: &[Card]) -> Self {
        let rest: Vec<Card> = Deck::new()
            .cards
            .into_iter()
            .filter(|card| !order.iter().any(|o| o.suit == card.suit && o.rank == card.rank))
            .collect();
        assert_eq!(rest.len() + order.len(), DECK_SIZE, "stacked cards must be distinct");
        let mut cards = Vec::with_capacity(DECK_SIZE);
        cards.extend(order.first().copied());
        cards.extend(rest);
        cards.extend(order.iter().skip(1).rev().copied());
        Deck { cards }
    }

    /// Remove a card chosen uniformly at random from what is left.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Card {
        assert!(!self.cards.is_empty(), "draw from an empty deck");
        let index = rng.gen_range(0..self.cards.len());
        self.cards.swap_remove(index)
    }

    pub fn remaining_cards(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn fresh_deck_has_every_card_once() {
        let deck = Deck::new();
        assert_eq!(deck.remaining_cards(), DECK_SIZE);
        let unique: HashSet<(Suit, Rank)> = deck.cards().iter().map(|c| (c.suit, c.rank)).collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn deck_is_built_suit_major() {
        let deck = Deck::new();
        assert_eq!(deck.cards()[0], Card::new(Suit::Spades, Rank::Ace));
        assert_eq!(deck.cards()[12], Card::new(Suit::Spades, Rank::King));
        assert_eq!(deck.cards()[13], Card::new(Suit::Hearts, Rank::Ace));
        assert_eq!(deck.cards()[51], Card::new(Suit::Clubs, Rank::King));
    }

    #[test]
    fn rank_values() {
        assert_eq!(Card::new(Suit::Clubs, Rank::Ace).value, 11);
        assert_eq!(Card::new(Suit::Clubs, Rank::King).value, 10);
        assert_eq!(Card::new(Suit::Clubs, Rank::Queen).value, 10);
        assert_eq!(Card::new(Suit::Clubs, Rank::Jack).value, 10);
        assert_eq!(Card::new(Suit::Clubs, Rank::Ten).value, 10);
        assert_eq!(Card::new(Suit::Clubs, Rank::Seven).value, 7);
        assert_eq!(Card::new(Suit::Clubs, Rank::Two).value, 2);
        let total: u32 = Deck::new().cards().iter().map(|c| c.value as u32).sum();
        assert_eq!(total, 4 * (11 + 2 + 3 + 4 + 5 + 6 + 7 + 8 + 9 + 10 * 4));
    }

    #[test]
    fn display_names() {
        assert_eq!(Card::new(Suit::Spades, Rank::Ace).to_string(), "A♠");
        assert_eq!(Card::new(Suit::Hearts, Rank::Ten).to_string(), "10♥");
        assert_eq!(Card::new(Suit::Diamonds, Rank::Queen).to_string(), "Q♦");
        assert_eq!(Card::new(Suit::Clubs, Rank::Four).to_string(), "4♣");
    }

    #[test]
    fn draw_removes_exactly_one_card() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut deck = Deck::new();
        let mut seen = HashSet::new();
        while deck.remaining_cards() > 0 {
            let before = deck.remaining_cards();
            let card = deck.draw(&mut rng);
            assert_eq!(deck.remaining_cards(), before - 1);
            assert!(!deck.cards().contains(&card));
            assert!(seen.insert((card.suit, card.rank)));
        }
        assert_eq!(seen.len(), DECK_SIZE);
    }

    #[test]
    fn draw_is_roughly_uniform() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut aces = 0;
        let trials = 52_000;
        for _ in 0..trials {
            let mut deck = Deck::new();
            if deck.draw(&mut rng).is_ace() {
                aces += 1;
            }
        }
        // expected 4000
        assert!((3600..4400).contains(&aces), "aces drawn: {aces}");
    }

    #[test]
    fn refill_restores_full_deck() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut deck = Deck::new();
        for _ in 0..20 {
            deck.draw(&mut rng);
        }
        deck.refill();
        assert_eq!(deck.cards(), Deck::new().cards());
    }

    #[test]
    #[should_panic(expected = "empty deck")]
    fn draw_from_empty_deck_panics() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut deck = Deck::new();
        for _ in 0..=DECK_SIZE {
            deck.draw(&mut rng);
        }
    }
}
