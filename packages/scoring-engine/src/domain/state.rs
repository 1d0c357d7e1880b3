//! Game state and the round-progression state machine.
//!
//! Every transition snapshots dealer seat, wind, round number and
//! continuation count onto the `Round` it appends, so undo is a plain
//! restore of the tail's snapshot plus reversal of its score deltas.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::debug;
use ulid::Ulid;

use crate::config::GameSettings;
use crate::domain::player::{create_players, Player, PlayerId};
use crate::domain::rules::{is_valid_seat, rotate_dealer, Seat, Wind, PLAYERS};
use crate::domain::ruleset::RuleSetId;
use crate::domain::scoring::ScoreResult;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

/// Unix epoch milliseconds.
pub fn now_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "result", rename_all = "lowercase")]
pub enum RoundOutcome {
    Win(ScoreResult),
    /// 流局: no score changes.
    Draw,
}

/// One finished hand, with the table state as it was before the hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub id: String,
    pub round_number: u32,
    pub round_wind: Wind,
    pub dealer_seat_index: Seat,
    #[serde(default)]
    pub dealer_continue_count: u32,
    pub outcome: RoundOutcome,
    pub timestamp: i64,
}

/// Entire session table state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub id: String,
    pub rule_set_id: RuleSetId,
    pub players: [Player; PLAYERS],
    pub dealer_seat_index: Seat,
    pub round_wind: Wind,
    /// Hands played so far plus one (1-based).
    pub round_number: u32,
    /// 連莊: consecutive dealer wins on the current seat.
    pub dealer_continue_count: u32,
    pub history: Vec<Round>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl GameState {
    /// Fresh game: seat 0 deals, east wind, round 1, empty history.
    pub fn new(settings: &GameSettings) -> Self {
        let now = now_millis();
        Self {
            id: Ulid::new().to_string(),
            rule_set_id: settings.rule_set_id,
            players: create_players(&settings.player_names, settings.starting_score),
            dealer_seat_index: 0,
            round_wind: Wind::East,
            round_number: 1,
            dealer_continue_count: 0,
            history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn dealer(&self) -> &Player {
        &self.players[self.dealer_seat_index as usize % PLAYERS]
    }

    pub fn player_by_id(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn player_by_seat(&self, seat: Seat) -> Option<&Player> {
        self.players.get(seat as usize)
    }

    pub fn last_round(&self) -> Option<&Round> {
        self.history.last()
    }

    fn snapshot_round(&self, outcome: RoundOutcome) -> Round {
        Round {
            id: Ulid::new().to_string(),
            round_number: self.round_number,
            round_wind: self.round_wind,
            dealer_seat_index: self.dealer_seat_index,
            dealer_continue_count: self.dealer_continue_count,
            outcome,
            timestamp: now_millis(),
        }
    }

    /// Pass the deal to the next seat; the wind turns when seat 0 deals again.
    fn rotate(&mut self) {
        let (seat, wind) = rotate_dealer(self.dealer_seat_index, self.round_wind);
        self.dealer_seat_index = seat;
        self.round_wind = wind;
        self.dealer_continue_count = 0;
    }

    /// Apply a successful score result and advance the table.
    ///
    /// A dealer win keeps the deal (連莊); any other win rotates it.
    /// Results carrying an error, or naming players not at this table, are
    /// refused and leave the state untouched.
    pub fn record_win(&mut self, result: ScoreResult) -> Result<(), DomainError> {
        if let Some(err) = &result.error {
            return Err(DomainError::conflict(
                ConflictKind::ErroredResult,
                format!("cannot record a failed score result: {err}"),
            ));
        }
        if let Some(stranger) = result
            .changes
            .iter()
            .find(|c| self.player_by_id(&c.player_id).is_none())
        {
            return Err(DomainError::conflict(
                ConflictKind::RosterMismatch,
                format!("score change for unknown player {}", stranger.player_id),
            ));
        }

        for change in &result.changes {
            if let Some(p) = self.players.iter_mut().find(|p| p.id == change.player_id) {
                p.score = p.score.saturating_add(change.delta);
            }
        }

        let dealer_won = result.is_dealer_win;
        let round = self.snapshot_round(RoundOutcome::Win(result));
        self.history.push(round);

        if dealer_won {
            self.dealer_continue_count += 1;
        } else {
            self.rotate();
            self.round_number += 1;
        }
        self.updated_at = now_millis();

        debug!(
            dealer_won,
            dealer_seat = self.dealer_seat_index,
            wind = ?self.round_wind,
            round_number = self.round_number,
            continue_count = self.dealer_continue_count,
            "win recorded"
        );
        Ok(())
    }

    /// Record a drawn hand: the deal always rotates.
    pub fn record_draw(&mut self) {
        let round = self.snapshot_round(RoundOutcome::Draw);
        self.history.push(round);
        self.rotate();
        self.round_number += 1;
        self.updated_at = now_millis();

        debug!(
            dealer_seat = self.dealer_seat_index,
            wind = ?self.round_wind,
            round_number = self.round_number,
            "draw recorded"
        );
    }

    /// Remove the most recent round and restore the table to how it was
    /// before that round. Returns the removed round, or `None` when there is
    /// no history.
    pub fn undo_last_round(&mut self) -> Option<Round> {
        let last = self.history.pop()?;

        if let RoundOutcome::Win(result) = &last.outcome {
            for change in &result.changes {
                if let Some(p) = self.players.iter_mut().find(|p| p.id == change.player_id) {
                    p.score = p.score.saturating_sub(change.delta);
                }
            }
        }
        self.dealer_seat_index = last.dealer_seat_index;
        self.round_wind = last.round_wind;
        self.round_number = last.round_number;
        self.dealer_continue_count = last.dealer_continue_count;
        self.updated_at = now_millis();

        debug!(
            round_id = %last.id,
            round_number = self.round_number,
            remaining = self.history.len(),
            "round undone"
        );
        Some(last)
    }

    /// Count another hand without scoring or moving the deal.
    pub fn next_round(&mut self) {
        self.round_number += 1;
        self.dealer_continue_count = 0;
        self.updated_at = now_millis();
    }

    /// Move the deal by hand, outside of any recorded round.
    pub fn advance_dealer(&mut self) {
        self.rotate();
        self.updated_at = now_millis();
        debug!(dealer_seat = self.dealer_seat_index, wind = ?self.round_wind, "dealer advanced");
    }

    pub fn rename_player(&mut self, seat: Seat, name: &str) -> Result<(), DomainError> {
        if !is_valid_seat(seat) {
            return Err(DomainError::not_found(NotFoundKind::Seat, format!("seat {seat}")));
        }
        self.players[seat as usize].name = name.to_string();
        self.updated_at = now_millis();
        Ok(())
    }
}
