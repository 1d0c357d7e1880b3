//! Plain-text rendering for terminal output.

use scoring_engine::config::RuleVariant;
use scoring_engine::domain::{
    fans_by_category, FanType, FanValidation, GameState, Round, RoundOutcome, ScoreResult,
    CATEGORY_ORDER,
};

fn signed(n: i64) -> String {
    if n > 0 {
        format!("+{n}")
    } else {
        n.to_string()
    }
}

fn name_of(game: &GameState, id: &scoring_engine::PlayerId) -> String {
    game.player_by_id(id)
        .map_or_else(|| id.to_string(), |p| p.name.clone())
}

pub fn table(game: &GameState) -> String {
    let dealer = game.dealer();
    let mut out = format!(
        "{}風 第{}局  莊家: {} (連莊 {})\n",
        game.round_wind.display_name(),
        game.round_number,
        dealer.name,
        game.dealer_continue_count
    );
    for p in &game.players {
        let marker = if p.seat_index == game.dealer_seat_index {
            '*'
        } else {
            ' '
        };
        out.push_str(&format!(
            "{marker} [{}] {:<12} {:>8}\n",
            p.seat_index, p.name, p.score
        ));
    }
    out
}

pub fn score_result(result: &ScoreResult, game: &GameState) -> String {
    let mut out = format!("{} 番  {}", result.total_fan, result.fan_description);
    if result.is_dealer_win {
        out.push_str("  (莊家食糊)");
    }
    out.push('\n');

    if let Some(err) = &result.error {
        out.push_str(&format!("✗ {err}\n"));
        return out;
    }
    out.push_str(&format!("每底 {}\n", result.base_points));
    for change in &result.changes {
        out.push_str(&format!(
            "  {:<12} {:>8} → {}\n",
            name_of(game, &change.player_id),
            signed(change.delta),
            change.new_score
        ));
    }
    out
}

pub fn round_line(index: usize, round: &Round, game: &GameState) -> String {
    let head = format!(
        "#{:<3} {}風 第{}局 莊[{}]",
        index + 1,
        round.round_wind.display_name(),
        round.round_number,
        round.dealer_seat_index
    );
    match &round.outcome {
        RoundOutcome::Draw => format!("{head}  流局"),
        RoundOutcome::Win(result) => {
            let winner = result
                .changes
                .iter()
                .max_by_key(|c| c.delta)
                .map(|c| name_of(game, &c.player_id))
                .unwrap_or_default();
            format!(
                "{head}  {winner} 食糊 {} 番 ({})",
                result.total_fan, result.fan_description
            )
        }
    }
}

pub fn history(game: &GameState) -> String {
    if game.history.is_empty() {
        return "未有紀錄\n".to_string();
    }
    game.history
        .iter()
        .enumerate()
        .map(|(i, r)| round_line(i, r, game) + "\n")
        .collect()
}

fn fan_line(f: &FanType) -> String {
    let limit = if f.is_limit { " 例牌" } else { "" };
    format!(
        "  {:<22} {:<8} {:>2} 番{limit}  {}\n",
        f.id, f.name, f.value, f.description
    )
}

/// Catalog listing grouped by category, in display order.
pub fn fan_catalog(variant: RuleVariant) -> String {
    let mut out = String::new();
    for category in CATEGORY_ORDER {
        let fans = fans_by_category(category, variant);
        if fans.is_empty() {
            continue;
        }
        out.push_str(&format!("{}\n", category.display_name()));
        for f in fans {
            out.push_str(&fan_line(f));
        }
    }
    out
}

pub fn fan_list(fans: &[&FanType]) -> String {
    fans.iter().map(|f| fan_line(f)).collect()
}

pub fn validation(v: &FanValidation) -> String {
    if v.valid {
        return "✓ 組合冇衝突\n".to_string();
    }
    v.conflicts
        .iter()
        .map(|(a, b)| format!("✗ {a} 同 {b} 唔可以一齊計\n"))
        .collect()
}
