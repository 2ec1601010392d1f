use rand::Rng;

use crate::{
    deck::Deck,
    hand::{Hand, BLACKJACK},
};

pub const DEALER_STANDS: u8 = 17;
pub const FIVE_CARDS: usize = 5;

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Someone hit 21 on the initial deal. Never qualifies, whoever holds it.
    Natural,
    PlayerBust,
    DealerBust,
    PlayerWins,
    /// Dealer is higher or it is a push.
    DealerWins,
}

impl Resolution {
    pub fn as_code(&self) -> &'static str {
        match self {
            Resolution::Natural => "natural",
            Resolution::PlayerBust => "player-bust",
            Resolution::DealerBust => "dealer-bust",
            Resolution::PlayerWins => "player-wins",
            Resolution::DealerWins => "dealer-wins",
        }
    }

    pub fn player_won(&self) -> bool {
        matches!(self, Resolution::DealerBust | Resolution::PlayerWins)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundResult {
    pub resolution: Resolution,
    pub player_cards: usize,
    pub player_total: u8,
    pub dealer_cards: usize,
    pub dealer_total: u8,
}

impl RoundResult {
    /// A five-card win: the player won the round holding at least five cards.
    pub fn is_qualifying(&self) -> bool {
        self.resolution.player_won() && self.player_cards >= FIVE_CARDS
    }

    pub fn outcome(&self) -> u32 {
        u32::from(self.is_qualifying())
    }
}

/// One seat against the dealer. Owns the random stream plus the deck and hand
/// buffers, which are reset at the start of every round.
pub struct Table<R: Rng> {
    rng: R,
    deck: Deck,
    player: Hand,
    dealer: Hand,
}

impl<R: Rng> Table<R> {
    pub fn new(rng: R) -> Self {
        Table {
            rng,
            deck: Deck::new(),
            player: Hand::new(),
            dealer: Hand::new(),
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    pub fn play_round(&mut self) -> RoundResult {
        self.deck.refill();
        self.play_dealt()
    }

    /// Play a round from whatever is in the deck right now.
    fn play_dealt(&mut self) -> RoundResult {
        self.player.clear();
        self.dealer.clear();

        let resolution = self.resolve();
        let result = RoundResult {
            resolution,
            player_cards: self.player.len(),
            player_total: self.player.value(),
            dealer_cards: self.dealer.len(),
            dealer_total: self.dealer.value(),
        };
        log::trace!(
            "{}: player {} dealer {}",
            resolution.as_code(),
            self.player,
            self.dealer
        );
        result
    }

    fn resolve(&mut self) -> Resolution {
        // Lockstep deal: the dealer takes a card every time the player does.
        while self.player.len() < 2 {
            self.player.hit(&mut self.deck, &mut self.rng);
            self.dealer.hit(&mut self.deck, &mut self.rng);
            if self.player.value() == BLACKJACK || self.dealer.value() == BLACKJACK {
                return Resolution::Natural;
            }
        }

        while self.player.value() < BLACKJACK && self.player.len() < FIVE_CARDS {
            self.player.hit(&mut self.deck, &mut self.rng);
            if self.player.is_bust() {
                return Resolution::PlayerBust;
            }
        }

        while self.dealer.value() < DEALER_STANDS {
            self.dealer.hit(&mut self.deck, &mut self.rng);
            if self.dealer.is_bust() {
                return Resolution::DealerBust;
            }
        }

        if self.player.value() > self.dealer.value() {
            Resolution::PlayerWins
        } else {
            Resolution::DealerWins
        }
    }

    /// Play rounds until `target` five-card wins, returning the rounds used.
    pub fn play_session(&mut self, target: u32) -> u32 {
        crate::sim::play_session(target, || self.play_round().is_qualifying())
    }
}
