//! Click-speed test logic.
//!
//! The first press of an idle run arms the countdown; every press
//! while it runs is counted. The shell ticks the game once per second
//! and the result is fixed the moment the countdown expires.

use super::types::{ClickSpeedGame, CLICK_WINDOW_SECS};
use crate::core::{TimerTick, Transition};

/// Handle one button press. The starting press is not counted as a
/// click; presses after the result is fixed are ignored until reset.
pub fn click(game: &mut ClickSpeedGame) -> Transition {
    if game.cps.is_some() {
        return Transition::Ignored;
    }

    if game.timer.is_running() {
        game.clicks += 1;
    } else {
        game.clicks = 0;
        game.timer.reset();
        game.timer.start();
    }
    Transition::Accepted
}

/// Advance the countdown by one second. On expiry the cps result is
/// computed and the run stops accepting clicks.
pub fn tick(game: &mut ClickSpeedGame) -> TimerTick {
    let tick = game.timer.tick();
    if tick == TimerTick::Expired {
        game.cps = Some(f64::from(game.clicks) / f64::from(CLICK_WINDOW_SECS));
    }
    tick
}

/// Back to idle: cancel the countdown, clear clicks and the result.
pub fn reset(game: &mut ClickSpeedGame) {
    game.timer.reset();
    game.clicks = 0;
    game.cps = None;
}
