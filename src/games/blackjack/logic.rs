//! Blackjack round flow: dealing, the player turn, dealer auto-play,
//! and settlement.

use super::types::{
    BlackjackRound, Card, Deck, Hand, Outcome, RoundPhase, BLACKJACK_TARGET, DEALER_STAND_MIN,
};
use crate::core::Transition;
use rand::Rng;

/// Deal a fresh, uniformly shuffled round: two cards to the player,
/// then two to the dealer. The round starts in the player turn.
pub fn new_round<R: Rng>(rng: &mut R) -> BlackjackRound {
    let mut deck = Deck::new();
    deck.shuffle(rng);

    let mut player = Hand::default();
    let mut dealer = Hand::default();
    for _ in 0..2 {
        player.push(must_draw(&mut deck));
    }
    for _ in 0..2 {
        dealer.push(must_draw(&mut deck));
    }

    BlackjackRound {
        deck,
        player,
        dealer,
        phase: RoundPhase::PlayerTurn,
        outcome: Outcome::InProgress,
    }
}

/// Draw the next card into the player's hand. A bust settles the round
/// in the dealer's favor. Valid only during the player turn.
pub fn hit(round: &mut BlackjackRound) -> Transition {
    if round.phase != RoundPhase::PlayerTurn {
        return Transition::Ignored;
    }

    let card = must_draw(&mut round.deck);
    round.player.push(card);
    if round.player.is_bust() {
        round.outcome = Outcome::DealerWon;
        round.phase = RoundPhase::Settled;
    }
    Transition::Accepted
}

/// End the player turn: run the dealer out under the stand-on-17 rule
/// and settle the round. Valid only during the player turn.
pub fn stand(round: &mut BlackjackRound) -> Transition {
    if round.phase != RoundPhase::PlayerTurn {
        return Transition::Ignored;
    }

    round.phase = RoundPhase::DealerTurn;
    dealer_play(round);
    settle(round);
    Transition::Accepted
}

/// Dealer draws until reaching 17 or busting.
fn dealer_play(round: &mut BlackjackRound) {
    while round.dealer.value() < DEALER_STAND_MIN {
        let card = must_draw(&mut round.deck);
        round.dealer.push(card);
    }
}

fn settle(round: &mut BlackjackRound) {
    let dealer = round.dealer.value();
    let player = round.player.value();

    round.outcome = if dealer > BLACKJACK_TARGET {
        Outcome::PlayerWon
    } else if dealer > player {
        Outcome::DealerWon
    } else if dealer < player {
        Outcome::PlayerWon
    } else {
        Outcome::Draw
    };
    round.phase = RoundPhase::Settled;
}

/// One 52-card deck against two small hands cannot run dry; an empty
/// deck here means the round state is corrupt, so fail loudly instead
/// of dealing nothing.
fn must_draw(deck: &mut Deck) -> Card {
    match deck.draw() {
        Some(card) => card,
        None => panic!("blackjack deck exhausted mid-round"),
    }
}
