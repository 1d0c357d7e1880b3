// Fixed-id rosters and configs for deterministic domain tests.

use crate::config::{GameSettings, PaymentMode, RuleVariant, ScoringConfig};
use crate::domain::player::{Player, PlayerColor, PlayerId};
use crate::domain::rules::{Seat, PLAYERS};
use crate::domain::state::GameState;

/// Player id for `seat`: "p0".."p3".
pub fn pid(seat: Seat) -> PlayerId {
    PlayerId::from(format!("p{seat}"))
}

/// Four players with ids p0..p3, all on `score`.
pub fn table(score: i64) -> [Player; PLAYERS] {
    std::array::from_fn(|seat| {
        let seat = seat as Seat;
        Player {
            id: pid(seat),
            name: format!("player {seat}"),
            score,
            seat_index: seat,
            color: PlayerColor::for_seat(seat),
        }
    })
}

/// Base 1, min 3, cap 13, full payment, standard variant.
pub fn unit_config() -> ScoringConfig {
    ScoringConfig {
        base_score: 1,
        min_fan: 3,
        max_fan: 13,
        starting_score: 0,
        variant: RuleVariant::Standard,
        payment_mode: PaymentMode::Full,
    }
}

pub fn half_config() -> ScoringConfig {
    ScoringConfig {
        payment_mode: PaymentMode::Half,
        ..unit_config()
    }
}

/// A fresh game whose players carry the fixed p0..p3 ids.
pub fn game_with_fixed_ids(starting_score: i64) -> GameState {
    let mut game = GameState::new(&GameSettings {
        starting_score,
        ..GameSettings::default()
    });
    game.players = table(starting_score);
    game
}
