//! Ready-made sessions and win declarations.

use scoring_engine::config::{ScoringConfig, SettingsOverrides};
use scoring_engine::domain::{FanClaim, PlayerId, PreviewRequest, ScoreResult, Seat, WinType};
use scoring_engine::Session;

use crate::unique_helpers::unique_names;

/// Base 1, min 3, cap 13: payouts are plain powers of two.
pub fn unit_scoring() -> ScoringConfig {
    ScoringConfig {
        base_score: 1,
        starting_score: 0,
        ..ScoringConfig::default()
    }
}

/// A session with a game in progress under `scoring`, starting every player on 0.
pub fn started_session(scoring: ScoringConfig) -> Session {
    let mut session = Session::default();
    let started = session.start_game(SettingsOverrides {
        scoring_config: Some(scoring),
        player_names: Some(unique_names("p")),
        starting_score: Some(0),
        ..SettingsOverrides::default()
    });
    if let Err(err) = started {
        panic!("fixture scoring config must be valid: {err}");
    }
    session
}

/// Id of the player in `seat`; panics when no game is running.
pub fn seat_id(session: &Session, seat: Seat) -> PlayerId {
    match session.player_by_seat(seat) {
        Some(p) => p.id.clone(),
        None => panic!("no player in seat {seat}"),
    }
}

/// Preview a direct-mode win; `discarder: None` means self-draw.
pub fn preview_direct(
    session: &Session,
    winner: Seat,
    discarder: Option<Seat>,
    fan_count: u32,
) -> ScoreResult {
    let request = PreviewRequest {
        win_type: if discarder.is_some() {
            WinType::Discard
        } else {
            WinType::SelfDraw
        },
        winner_id: seat_id(session, winner),
        loser_id: discarder.map(|s| seat_id(session, s)),
        fans: FanClaim::Direct {
            fan_count,
            description: None,
        },
    };
    match session.preview_score(&request) {
        Some(result) => result,
        None => panic!("preview needs a game in progress"),
    }
}

/// Preview and record a direct-mode win; panics if either step fails.
pub fn record_direct(session: &mut Session, winner: Seat, discarder: Option<Seat>, fan_count: u32) {
    let result = preview_direct(session, winner, discarder, fan_count);
    if let Err(err) = session.record_win(result) {
        panic!("recording the win failed: {err}");
    }
}

/// Scores by seat.
pub fn scores(session: &Session) -> [i64; 4] {
    match &session.game {
        Some(game) => game.players.each_ref().map(|p| p.score),
        None => [0; 4],
    }
}
