//! Playing cards, deck, and hand scoring for the blackjack table.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// Hand values above this are a bust.
pub const BLACKJACK_TARGET: u32 = 21;

/// The dealer stands on any value at or above this (stands on all 17s).
pub const DEALER_STAND_MIN: u32 = 17;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn symbol(&self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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

    /// Base point value: ace 11, faces 10, numerals their face value.
    /// [`Hand::value`] re-counts aces as 1 when the hand would bust.
    pub fn points(&self) -> u32 {
        match self {
            Rank::Ace => 11,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        }
    }

    pub fn label(&self) -> &'static str {
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
}

/// An immutable playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub fn points(&self) -> u32 {
        self.rank.points()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// An ordered 52-card deck consumed from the top end; never
/// replenished mid-round.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A fresh, unshuffled deck of 4 suits x 13 ranks.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(52);
        for &suit in &Suit::ALL {
            for &rank in &Rank::ALL {
                cards.push(Card { suit, rank });
            }
        }
        Deck { cards }
    }

    /// Fisher-Yates shuffle drawing from the injected rng, so every
    /// permutation is equally likely and tests can replay a seed.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deal one card from the top. `None` when the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
impl Deck {
    /// Test-only: a deck holding exactly these cards, drawn from the end.
    pub fn stacked(cards: Vec<Card>) -> Self {
        Deck { cards }
    }
}

/// Cards held by one participant for the round, grown only by
/// appending dealt cards.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Blackjack hand value: sum of card points, re-counting aces as 1
    /// one at a time while the total would bust.
    pub fn value(&self) -> u32 {
        let mut value: u32 = self.cards.iter().map(Card::points).sum();
        let mut high_aces = self.cards.iter().filter(|c| c.rank == Rank::Ace).count();
        while value > BLACKJACK_TARGET && high_aces > 0 {
            value -= 10;
            high_aces -= 1;
        }
        value
    }

    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK_TARGET
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Phase of a blackjack round. Dealing happens synchronously inside
/// `new_round`, so a round is born in the player turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    PlayerTurn,
    DealerTurn,
    Settled,
}

/// Result of a round. `InProgress` until the player busts or stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    PlayerWon,
    DealerWon,
    Draw,
}

/// One blackjack round: a single deck and one hand each for the player
/// and the dealer.
#[derive(Debug, Clone)]
pub struct BlackjackRound {
    pub deck: Deck,
    pub player: Hand,
    pub dealer: Hand,
    pub phase: RoundPhase,
    pub outcome: Outcome,
}

impl BlackjackRound {
    /// Whether the dealer's hole card is visible. Hidden during the
    /// player turn, shown from the dealer turn onward.
    pub fn dealer_revealed(&self) -> bool {
        self.phase != RoundPhase::PlayerTurn
    }

    /// The dealer's face-up card (the first one dealt).
    pub fn dealer_up_card(&self) -> Option<&Card> {
        self.dealer.cards.first()
    }
}
