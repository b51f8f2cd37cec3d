//! Rock-paper-scissors game logic.

use super::types::{Choice, RoundResult, RpsGame, RpsRound};
use crate::core::Transition;
use rand::Rng;

/// Standard dominance: rock beats scissors, paper beats rock,
/// scissors beats paper.
pub fn determine_winner(player: Choice, computer: Choice) -> RoundResult {
    if player == computer {
        RoundResult::Draw
    } else if player.beats() == computer {
        RoundResult::Win
    } else {
        RoundResult::Lose
    }
}

/// Play one round against a uniformly random computer throw. Ignored
/// while the previous round's result is still showing.
pub fn play<R: Rng>(game: &mut RpsGame, choice: Choice, rng: &mut R) -> Transition {
    if game.last_round.is_some() {
        return Transition::Ignored;
    }

    let computer = Choice::ALL[rng.gen_range(0..Choice::ALL.len())];
    let result = determine_winner(choice, computer);
    match result {
        RoundResult::Win => game.wins += 1,
        RoundResult::Lose => game.losses += 1,
        RoundResult::Draw => {}
    }
    game.last_round = Some(RpsRound {
        player: choice,
        computer,
        result,
    });
    Transition::Accepted
}

/// Clear the shown round so another can be played. The tally stays.
pub fn next_round(game: &mut RpsGame) {
    game.last_round = None;
}
