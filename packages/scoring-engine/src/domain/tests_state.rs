use crate::domain::rules::Wind;
use crate::domain::scoring::{calculate_direct, ScoreResult, WinType};
use crate::domain::state::{GameState, RoundOutcome};
use crate::domain::test_state_helpers::{game_with_fixed_ids, pid, unit_config};
use crate::errors::domain::{ConflictKind, DomainError};

fn win(game: &GameState, winner: u8, discarder: Option<u8>, fan: u32) -> ScoreResult {
    let loser = discarder.map(pid);
    let win_type = if discarder.is_some() {
        WinType::Discard
    } else {
        WinType::SelfDraw
    };
    calculate_direct(
        win_type,
        &pid(winner),
        loser.as_ref(),
        fan,
        &game.players,
        &game.dealer().id,
        None,
        &unit_config(),
    )
}

fn scores(game: &GameState) -> [i64; 4] {
    game.players.each_ref().map(|p| p.score)
}

#[test]
fn new_game_starts_east_with_seat_zero_dealing() {
    let game = game_with_fixed_ids(500);
    assert_eq!(game.dealer_seat_index, 0);
    assert_eq!(game.round_wind, Wind::East);
    assert_eq!(game.round_number, 1);
    assert_eq!(game.dealer_continue_count, 0);
    assert!(game.history.is_empty());
    assert_eq!(scores(&game), [500; 4]);
}

#[test]
fn dealer_win_keeps_the_deal() {
    let mut game = game_with_fixed_ids(0);
    let r = win(&game, 0, None, 3);
    game.record_win(r).unwrap();

    assert_eq!(scores(&game), [48, -16, -16, -16]);
    assert_eq!(game.dealer_seat_index, 0);
    assert_eq!(game.dealer_continue_count, 1);
    assert_eq!(game.round_number, 1);
    assert_eq!(game.history.len(), 1);

    let r = win(&game, 0, Some(3), 3);
    game.record_win(r).unwrap();
    assert_eq!(game.dealer_continue_count, 2);
}

#[test]
fn non_dealer_win_rotates_the_deal() {
    let mut game = game_with_fixed_ids(0);
    game.dealer_continue_count = 2;
    let r = win(&game, 2, Some(1), 4);
    game.record_win(r).unwrap();

    assert_eq!(game.dealer_seat_index, 1);
    assert_eq!(game.dealer_continue_count, 0);
    assert_eq!(game.round_number, 2);
    assert_eq!(game.round_wind, Wind::East);
}

#[test]
fn wind_advances_when_the_deal_returns_to_seat_zero() {
    let mut game = game_with_fixed_ids(0);
    for _ in 0..3 {
        game.record_draw();
    }
    assert_eq!(game.dealer_seat_index, 3);
    assert_eq!(game.round_wind, Wind::East);

    game.record_draw();
    assert_eq!(game.dealer_seat_index, 0);
    assert_eq!(game.round_wind, Wind::South);
    assert_eq!(game.round_number, 5);

    for _ in 0..12 {
        game.record_draw();
    }
    assert_eq!(game.round_wind, Wind::East);
}

#[test]
fn draw_rotates_even_after_dealer_streak() {
    let mut game = game_with_fixed_ids(0);
    let r = win(&game, 0, None, 3);
    game.record_win(r).unwrap();
    let before = scores(&game);

    game.record_draw();
    assert_eq!(scores(&game), before);
    assert_eq!(game.dealer_seat_index, 1);
    assert_eq!(game.dealer_continue_count, 0);
    assert!(matches!(
        game.last_round().map(|r| &r.outcome),
        Some(RoundOutcome::Draw)
    ));
}

#[test]
fn round_records_state_before_the_hand() {
    let mut game = game_with_fixed_ids(0);
    game.record_draw();
    let r = win(&game, 1, None, 3);
    game.record_win(r).unwrap();

    let last = game.last_round().unwrap();
    assert_eq!(last.dealer_seat_index, 1);
    assert_eq!(last.round_number, 2);
    assert_eq!(last.round_wind, Wind::East);
    assert_eq!(last.dealer_continue_count, 0);
    assert_eq!(game.dealer_continue_count, 1);
}

#[test]
fn undo_restores_scores_and_table_exactly() {
    let mut game = game_with_fixed_ids(500);
    let r = win(&game, 0, None, 3);
    game.record_win(r).unwrap();
    let before = game.clone();

    let r = win(&game, 2, Some(0), 5);
    game.record_win(r).unwrap();
    assert_ne!(scores(&game), scores(&before));

    let undone = game.undo_last_round().unwrap();
    assert!(matches!(undone.outcome, RoundOutcome::Win(_)));
    assert_eq!(scores(&game), scores(&before));
    assert_eq!(game.dealer_seat_index, before.dealer_seat_index);
    assert_eq!(game.round_wind, before.round_wind);
    assert_eq!(game.round_number, before.round_number);
    assert_eq!(game.dealer_continue_count, before.dealer_continue_count);
    assert_eq!(game.history, before.history);
}

#[test]
fn undo_of_draw_restores_rotation() {
    let mut game = game_with_fixed_ids(0);
    for _ in 0..4 {
        game.record_draw();
    }
    assert_eq!(game.round_wind, Wind::South);
    game.undo_last_round().unwrap();
    assert_eq!(game.round_wind, Wind::East);
    assert_eq!(game.dealer_seat_index, 3);
    assert_eq!(game.round_number, 4);
}

#[test]
fn undo_on_empty_history_changes_nothing() {
    let mut game = game_with_fixed_ids(0);
    let before = game.clone();
    assert!(game.undo_last_round().is_none());
    assert_eq!(game, before);
}

#[test]
fn errored_result_is_refused() {
    let mut game = game_with_fixed_ids(0);
    let r = win(&game, 1, None, 1);
    assert!(!r.is_ok());
    let before = game.clone();

    let err = game.record_win(r).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::ErroredResult, _)
    ));
    assert_eq!(game, before);
}

#[test]
fn result_for_another_table_is_refused() {
    let mut game = game_with_fixed_ids(0);
    let mut r = win(&game, 1, None, 3);
    r.changes[2].player_id = "stranger".into();
    let before = game.clone();

    let err = game.record_win(r).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::RosterMismatch, _)
    ));
    assert_eq!(game, before);
}

#[test]
fn next_round_and_advance_dealer_leave_scores_alone() {
    let mut game = game_with_fixed_ids(100);
    game.dealer_continue_count = 3;
    game.next_round();
    assert_eq!(game.round_number, 2);
    assert_eq!(game.dealer_continue_count, 0);
    assert_eq!(game.dealer_seat_index, 0);

    for _ in 0..4 {
        game.advance_dealer();
    }
    assert_eq!(game.dealer_seat_index, 0);
    assert_eq!(game.round_wind, Wind::South);
    assert!(game.history.is_empty());
    assert_eq!(scores(&game), [100; 4]);
}

#[test]
fn rename_player_touches_only_the_name() {
    let mut game = game_with_fixed_ids(0);
    let id = game.players[2].id.clone();
    game.rename_player(2, "阿明").unwrap();
    assert_eq!(game.players[2].name, "阿明");
    assert_eq!(game.players[2].id, id);
    assert!(game.rename_player(4, "x").is_err());
}

#[test]
fn scores_saturate_at_the_extremes() {
    let mut game = game_with_fixed_ids(i64::MAX - 10);
    let r = win(&game, 0, None, 3);
    game.record_win(r).unwrap();
    assert_eq!(game.players[0].score, i64::MAX);
    assert_eq!(game.players[1].score, i64::MAX - 26);
    assert_eq!(game.history.len(), 1);
}
