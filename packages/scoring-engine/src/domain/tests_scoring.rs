use crate::config::{max_base_score, PaymentMode, ScoringConfig};
use crate::domain::player::{Player, PlayerId};
use crate::domain::scoring::{
    base_points, calculate_direct, calculate_pattern, ScoreError, ScoreResult, WinType,
};
use crate::domain::test_state_helpers::{half_config, pid, table, unit_config};

fn deltas(result: &ScoreResult) -> Vec<i64> {
    result.changes.iter().map(|c| c.delta).collect()
}

fn direct(
    win_type: WinType,
    winner: u8,
    discarder: Option<u8>,
    fan: u32,
    dealer: u8,
    config: &ScoringConfig,
) -> ScoreResult {
    let players = table(0);
    let loser = discarder.map(pid);
    calculate_direct(
        win_type,
        &pid(winner),
        loser.as_ref(),
        fan,
        &players,
        &pid(dealer),
        None,
        config,
    )
}

#[test]
fn dealer_self_draw_collects_double_from_everyone() {
    let r = direct(WinType::SelfDraw, 0, None, 3, 0, &unit_config());
    assert!(r.is_ok());
    assert!(r.is_dealer_win);
    assert_eq!(r.base_points, 8);
    assert_eq!(deltas(&r), vec![48, -16, -16, -16]);
}

#[test]
fn non_dealer_self_draw_dealer_pays_double() {
    let r = direct(WinType::SelfDraw, 1, None, 3, 0, &unit_config());
    assert!(!r.is_dealer_win);
    assert_eq!(deltas(&r), vec![-16, 32, -8, -8]);
}

#[test]
fn dealer_discarding_pays_double() {
    let r = direct(WinType::Discard, 1, Some(0), 5, 0, &unit_config());
    assert_eq!(r.base_points, 32);
    assert_eq!(deltas(&r), vec![-64, 64, 0, 0]);
}

#[test]
fn dealer_winning_by_discard_is_doubled() {
    let r = direct(WinType::Discard, 0, Some(2), 3, 0, &unit_config());
    assert_eq!(deltas(&r), vec![16, 0, -16, 0]);
}

#[test]
fn plain_discard_between_non_dealers() {
    let r = direct(WinType::Discard, 2, Some(3), 4, 0, &unit_config());
    assert_eq!(deltas(&r), vec![0, 0, 16, -16]);
}

#[test]
fn half_payment_bystanders_pay_half_share() {
    // base 8: discarder p2 pays 8, dealer bystander p0 pays 4 doubled, p3 pays 4.
    let r = direct(WinType::Discard, 1, Some(2), 3, 0, &half_config());
    assert_eq!(deltas(&r), vec![-8, 20, -8, -4]);

    // Self-draw is unaffected by the payment mode.
    let full = direct(WinType::SelfDraw, 1, None, 3, 0, &unit_config());
    let half = direct(WinType::SelfDraw, 1, None, 3, 0, &half_config());
    assert_eq!(deltas(&full), deltas(&half));
}

#[test]
fn insufficient_fan_is_reported_as_data() {
    let r = direct(WinType::SelfDraw, 1, None, 2, 0, &unit_config());
    assert_eq!(r.error, Some(ScoreError::InsufficientFan { min_fan: 3 }));
    assert!(r.changes.is_empty());
    assert_eq!(r.total_fan, 2);
    assert_eq!(r.base_points, 0);
    assert!(r
        .error_message()
        .is_some_and(|m| m.contains("最少要 3 番")));
}

#[test]
fn unknown_winner_is_reported() {
    let players = table(0);
    let r = calculate_direct(
        WinType::SelfDraw,
        &PlayerId::from("ghost"),
        None,
        5,
        &players,
        &pid(0),
        None,
        &unit_config(),
    );
    assert_eq!(r.error, Some(ScoreError::WinnerNotFound));
    assert!(r.changes.is_empty());
}

#[test]
fn discard_requires_a_known_discarder() {
    let r = direct(WinType::Discard, 1, None, 3, 0, &unit_config());
    assert_eq!(r.error, Some(ScoreError::DiscarderRequired));
    assert!(r.changes.is_empty());

    let players = table(0);
    let ghost = PlayerId::from("ghost");
    let r = calculate_direct(
        WinType::Discard,
        &pid(1),
        Some(&ghost),
        3,
        &players,
        &pid(0),
        None,
        &unit_config(),
    );
    assert_eq!(r.error, Some(ScoreError::DiscarderNotFound));
}

#[test]
fn fan_above_cap_pays_the_cap() {
    let r = direct(WinType::Discard, 1, Some(2), 20, 0, &unit_config());
    assert_eq!(r.total_fan, 20);
    assert_eq!(r.base_points, 8192);
    assert_eq!(base_points(13, 1, 13), base_points(40, 1, 13));
}

#[test]
fn base_points_saturates_instead_of_overflowing() {
    assert_eq!(base_points(62, i64::MAX / 2, 62), i64::MAX);
    assert_eq!(base_points(0, 4, 13), 4);
}

#[test]
fn largest_valid_config_settles_without_overflow() {
    let config = ScoringConfig {
        base_score: max_base_score(32),
        min_fan: 0,
        max_fan: 32,
        ..unit_config()
    };
    assert!(config.validate().is_ok());

    let r = direct(WinType::SelfDraw, 0, None, 32, 0, &config);
    assert!(r.is_ok());
    assert!(r.base_points < i64::MAX);
    assert_eq!(r.changes[0].delta, r.base_points * 6);
    assert_eq!(deltas(&r).iter().sum::<i64>(), 0);

    let half = ScoringConfig {
        payment_mode: PaymentMode::Half,
        ..config
    };
    let r = direct(WinType::Discard, 0, Some(1), 40, 0, &half);
    assert!(r.is_ok());
    assert_eq!(deltas(&r).iter().sum::<i64>(), 0);
}

#[test]
fn new_score_follows_current_score() {
    let players: Vec<Player> = table(500).into_iter().collect();
    let r = calculate_direct(
        WinType::SelfDraw,
        &pid(0),
        None,
        3,
        &players,
        &pid(0),
        None,
        &unit_config(),
    );
    for change in &r.changes {
        assert_eq!(change.new_score, 500 + change.delta);
    }
    assert_eq!(r.change_for(&pid(0)).map(|c| c.new_score), Some(548));
}

#[test]
fn direct_description_defaults_to_fan_count() {
    let r = direct(WinType::SelfDraw, 1, None, 5, 0, &unit_config());
    assert_eq!(r.fan_description, "5 番");

    let players = table(0);
    let r = calculate_direct(
        WinType::SelfDraw,
        &pid(1),
        None,
        5,
        &players,
        &pid(0),
        Some("清一色".to_string()),
        &unit_config(),
    );
    assert_eq!(r.fan_description, "清一色");

    let r = calculate_direct(
        WinType::SelfDraw,
        &pid(1),
        None,
        5,
        &players,
        &pid(0),
        Some("   ".to_string()),
        &unit_config(),
    );
    assert_eq!(r.fan_description, "5 番");
}

#[test]
fn pattern_mode_resolves_fans_before_scoring() {
    let players = table(0);
    let ids = vec![
        "full-flush".to_string(),
        "half-flush".to_string(),
        "self-draw".to_string(),
    ];
    let r = calculate_pattern(
        WinType::SelfDraw,
        &pid(1),
        None,
        ids,
        &players,
        &pid(0),
        &unit_config(),
    );
    assert!(r.is_ok());
    assert_eq!(r.total_fan, 8);
    assert_eq!(r.fan_description, "清一色、自摸");
    assert_eq!(deltas(&r), vec![-512, 1024, -256, -256]);
}

#[test]
fn empty_pattern_is_chicken_hand_and_needs_min_fan() {
    let players = table(0);
    let r = calculate_pattern(
        WinType::SelfDraw,
        &pid(1),
        None,
        Vec::new(),
        &players,
        &pid(0),
        &unit_config(),
    );
    assert_eq!(r.total_fan, 0);
    assert_eq!(r.fan_description, "雞糊");
    assert_eq!(r.error, Some(ScoreError::InsufficientFan { min_fan: 3 }));

    let open = ScoringConfig {
        min_fan: 0,
        ..unit_config()
    };
    let r = calculate_pattern(
        WinType::Discard,
        &pid(1),
        Some(&pid(2)),
        Vec::new(),
        &players,
        &pid(0),
        &open,
    );
    assert!(r.is_ok());
    assert_eq!(deltas(&r), vec![0, 1, -1, 0]);
}

#[test]
fn score_result_serializes_without_empty_error() {
    let r = direct(WinType::SelfDraw, 1, None, 3, 0, &unit_config());
    let json = serde_json::to_value(&r).unwrap();
    assert!(json.get("error").is_none());
    assert_eq!(json["isDealerWin"], false);
    assert_eq!(json["changes"][1]["playerId"], "p1");

    let failed = direct(WinType::Discard, 1, None, 3, 0, &unit_config());
    let json = serde_json::to_value(&failed).unwrap();
    assert_eq!(json["error"], "discarderRequired");
}
