//! Score calculation: win declaration in, point transfers out.
//!
//! Payout convention: `base_points = base_score * 2^min(total_fan, max_fan)`.
//! Every payment is doubled when the dealer is on either side of it.
//!
//! Calculation failures are returned as data on [`ScoreResult::error`] with
//! an empty `changes` list; nothing here panics on bad declarations.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::{PaymentMode, ScoringConfig};
use crate::domain::fan_resolver::resolve_fan_selection;
use crate::domain::player::{Player, PlayerId};

/// Largest shift applied when doubling per fan; keeps `i64` arithmetic in range.
const MAX_SHIFT: u32 = 62;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WinType {
    /// 自摸: all three opponents pay.
    SelfDraw,
    /// 出銃: the discarder pays.
    Discard,
}

#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreError {
    #[error("搵唔到贏家 (winner not found)")]
    WinnerNotFound,
    #[error("番數不足，最少要 {min_fan} 番 (insufficient fan)")]
    InsufficientFan { min_fan: u32 },
    #[error("出銃需要指定出銃者 (discarder required)")]
    DiscarderRequired,
    #[error("搵唔到出銃者 (discarder not found)")]
    DiscarderNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreChange {
    pub player_id: PlayerId,
    pub delta: i64,
    pub new_score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub total_fan: u32,
    /// Payout unit before dealer doubling.
    pub base_points: i64,
    pub fan_description: String,
    /// One entry per player when successful; empty when `error` is set.
    pub changes: Vec<ScoreChange>,
    pub is_dealer_win: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ScoreError>,
}

impl ScoreResult {
    fn failed(
        total_fan: u32,
        base_points: i64,
        fan_description: String,
        is_dealer_win: bool,
        error: ScoreError,
    ) -> Self {
        debug!(%error, total_fan, "score calculation rejected");
        Self {
            total_fan,
            base_points,
            fan_description,
            changes: Vec::new(),
            is_dealer_win,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Human-readable error, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn change_for(&self, player_id: &PlayerId) -> Option<&ScoreChange> {
        self.changes.iter().find(|c| &c.player_id == player_id)
    }
}

/// How the fan total of a win is declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FanClaim {
    /// 入分: the fan count is asserted directly.
    Direct {
        fan_count: u32,
        description: Option<String>,
    },
    /// 計番: fan types picked from the catalog and resolved.
    Pattern { fan_ids: Vec<String> },
}

#[derive(Debug, Clone)]
pub struct WinDeclaration<'a> {
    pub win_type: WinType,
    pub winner_id: &'a PlayerId,
    /// Only meaningful for [`WinType::Discard`].
    pub loser_id: Option<&'a PlayerId>,
    pub players: &'a [Player],
    pub dealer_id: &'a PlayerId,
    pub fans: FanClaim,
}

/// `base_score * 2^min(fan, max_fan)`, saturating.
pub fn base_points(fan: u32, base_score: i64, max_fan: u32) -> i64 {
    let effective = fan.min(max_fan).min(MAX_SHIFT);
    base_score.saturating_mul(1i64 << effective)
}

fn doubled_if(amount: i64, dealer_involved: bool) -> i64 {
    if dealer_involved {
        amount.saturating_mul(2)
    } else {
        amount
    }
}

fn resolve_claim(claim: &FanClaim, config: &ScoringConfig) -> (u32, String) {
    match claim {
        FanClaim::Direct {
            fan_count,
            description,
        } => {
            let description = description
                .as_deref()
                .filter(|d| !d.trim().is_empty())
                .map_or_else(|| format!("{fan_count} 番"), str::to_string);
            (*fan_count, description)
        }
        FanClaim::Pattern { fan_ids } => {
            let resolution = resolve_fan_selection(fan_ids, config.variant);
            (resolution.total_fan, resolution.description)
        }
    }
}

/// Compute the point transfers for a declared win.
pub fn calculate_score(decl: &WinDeclaration<'_>, config: &ScoringConfig) -> ScoreResult {
    let Some(winner) = decl.players.iter().find(|p| &p.id == decl.winner_id) else {
        return ScoreResult::failed(0, 0, String::new(), false, ScoreError::WinnerNotFound);
    };

    let (total_fan, fan_description) = resolve_claim(&decl.fans, config);
    let is_dealer_win = &winner.id == decl.dealer_id;

    if total_fan < config.min_fan {
        return ScoreResult::failed(
            total_fan,
            0,
            fan_description,
            is_dealer_win,
            ScoreError::InsufficientFan {
                min_fan: config.min_fan,
            },
        );
    }

    let base = base_points(total_fan, config.base_score, config.max_fan);

    let deltas: Vec<i64> = match decl.win_type {
        WinType::SelfDraw => {
            let mut deltas: Vec<i64> = decl
                .players
                .iter()
                .map(|p| {
                    if p.id == winner.id {
                        0
                    } else {
                        -doubled_if(base, is_dealer_win || &p.id == decl.dealer_id)
                    }
                })
                .collect();
            credit_winner(&mut deltas, decl.players, &winner.id);
            deltas
        }
        WinType::Discard => {
            let Some(loser_id) = decl.loser_id else {
                return ScoreResult::failed(
                    total_fan,
                    base,
                    fan_description,
                    is_dealer_win,
                    ScoreError::DiscarderRequired,
                );
            };
            if !decl.players.iter().any(|p| &p.id == loser_id) {
                return ScoreResult::failed(
                    total_fan,
                    base,
                    fan_description,
                    is_dealer_win,
                    ScoreError::DiscarderNotFound,
                );
            }
            let is_dealer_lose = loser_id == decl.dealer_id;
            let half_share = base / 2;

            let mut deltas: Vec<i64> = decl
                .players
                .iter()
                .map(|p| {
                    if p.id == winner.id {
                        0
                    } else if &p.id == loser_id {
                        -doubled_if(base, is_dealer_win || is_dealer_lose)
                    } else {
                        match config.payment_mode {
                            PaymentMode::Full => 0,
                            PaymentMode::Half => -doubled_if(
                                half_share,
                                is_dealer_win || &p.id == decl.dealer_id,
                            ),
                        }
                    }
                })
                .collect();
            credit_winner(&mut deltas, decl.players, &winner.id);
            deltas
        }
    };

    let changes: Vec<ScoreChange> = decl
        .players
        .iter()
        .zip(deltas)
        .map(|(p, delta)| ScoreChange {
            player_id: p.id.clone(),
            delta,
            new_score: p.score.saturating_add(delta),
        })
        .collect();

    debug!(
        total_fan,
        base_points = base,
        win_type = ?decl.win_type,
        is_dealer_win,
        "score calculated"
    );

    ScoreResult {
        total_fan,
        base_points: base,
        fan_description,
        changes,
        is_dealer_win,
        error: None,
    }
}

/// The winner collects everything the others pay.
fn credit_winner(deltas: &mut [i64], players: &[Player], winner_id: &PlayerId) {
    let collected = deltas
        .iter()
        .fold(0i64, |acc, d| acc.saturating_sub(*d));
    if let Some(idx) = players.iter().position(|p| &p.id == winner_id) {
        deltas[idx] = collected;
    }
}

/// Direct-mode shorthand for [`calculate_score`].
#[allow(clippy::too_many_arguments)]
pub fn calculate_direct(
    win_type: WinType,
    winner_id: &PlayerId,
    loser_id: Option<&PlayerId>,
    fan_count: u32,
    players: &[Player],
    dealer_id: &PlayerId,
    description: Option<String>,
    config: &ScoringConfig,
) -> ScoreResult {
    let decl = WinDeclaration {
        win_type,
        winner_id,
        loser_id,
        players,
        dealer_id,
        fans: FanClaim::Direct {
            fan_count,
            description,
        },
    };
    calculate_score(&decl, config)
}

/// Pattern-mode shorthand for [`calculate_score`].
pub fn calculate_pattern(
    win_type: WinType,
    winner_id: &PlayerId,
    loser_id: Option<&PlayerId>,
    fan_ids: Vec<String>,
    players: &[Player],
    dealer_id: &PlayerId,
    config: &ScoringConfig,
) -> ScoreResult {
    let decl = WinDeclaration {
        win_type,
        winner_id,
        loser_id,
        players,
        dealer_id,
        fans: FanClaim::Pattern { fan_ids },
    };
    calculate_score(&decl, config)
}
