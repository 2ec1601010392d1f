use std::fmt;

use rand::Rng;

use crate::deck::{Card, Deck};

pub const BLACKJACK: u8 = 21;

pub fn hand_value(cards: &[Card]) -> u8 {
    cards.iter().map(|card| card.value).sum()
}

/// Walk the hand from the first card and drop each Ace met to 1 until the
/// total fits under 21 or the hand runs out. Order matters: earlier Aces go
/// first, and only the cards reached before the total fits are touched.
pub fn correct_aces(cards: &mut [Card]) {
    let mut index = 0;
    while hand_value(cards) > BLACKJACK && index < cards.len() {
        if cards[index].is_ace() {
            cards[index].value = 1;
        }
        index += 1;
    }
}

#[derive(Clone, Debug, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Hand { cards: Vec::new() }
    }

    /// Build a hand as if the cards were hit one after another.
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        let mut hand = Hand::new();
        for card in cards {
            hand.push(card);
        }
        hand
    }

    /// Draw one random card into the hand and re-value Aces if it busts.
    pub fn hit<R: Rng + ?Sized>(&mut self, deck: &mut Deck, rng: &mut R) {
        let card = deck.draw(rng);
        self.push(card);
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
        correct_aces(&mut self.cards);
    }

    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.cards.iter().map(|c| c.to_string()).collect();
        write!(f, "[{}] = {}", names.join(" "), self.value())
    }
}
