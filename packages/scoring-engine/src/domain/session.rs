//! Session: remembered settings plus the game in progress, if any.
//!
//! With no game in progress every game operation is a no-op.

use tracing::{debug, info, warn};

use crate::config::{ConfigError, GameSettings, InputMode, SettingsOverrides};
use crate::domain::player::{Player, PlayerId};
use crate::domain::rules::{is_valid_seat, Seat};
use crate::domain::ruleset::rule_set;
use crate::domain::scoring::{FanClaim, ScoreResult, WinDeclaration, WinType};
use crate::domain::state::{GameState, Round};
use crate::errors::domain::{DomainError, NotFoundKind};

/// A dry-run win declaration against the current table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRequest {
    pub win_type: WinType,
    pub winner_id: PlayerId,
    /// Required for [`WinType::Discard`], ignored for self-draw.
    pub loser_id: Option<PlayerId>,
    pub fans: FanClaim,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub settings: GameSettings,
    pub game: Option<GameState>,
    pub preferred_input_mode: InputMode,
}

impl Session {
    pub fn new(settings: GameSettings) -> Self {
        Self {
            settings,
            game: None,
            preferred_input_mode: InputMode::default(),
        }
    }

    pub fn has_game(&self) -> bool {
        self.game.is_some()
    }

    /// Merge `overrides` into the settings and start a fresh game with them.
    ///
    /// Invalid scoring parameters are refused before anything changes.
    pub fn start_game(&mut self, overrides: SettingsOverrides) -> Result<&GameState, ConfigError> {
        let settings = self.settings.merged(overrides);
        settings.validate()?;
        self.settings = settings;
        let game = GameState::new(&self.settings);
        info!(game_id = %game.id, rule_set = ?game.rule_set_id, "game started");
        Ok(&*self.game.insert(game))
    }

    /// Discard the current game and start over with the saved settings.
    pub fn reset_game(&mut self) -> Result<&GameState, ConfigError> {
        self.start_game(SettingsOverrides::default())
    }

    /// Drop the current game; settings are kept.
    pub fn end_game(&mut self) -> Option<GameState> {
        let ended = self.game.take();
        if let Some(game) = &ended {
            info!(game_id = %game.id, rounds = game.history.len(), "game ended");
        }
        ended
    }

    pub fn record_win(&mut self, result: ScoreResult) -> Result<(), DomainError> {
        match self.game.as_mut() {
            Some(game) => game.record_win(result),
            None => {
                warn!("record_win with no game in progress");
                Ok(())
            }
        }
    }

    pub fn record_draw(&mut self) {
        match self.game.as_mut() {
            Some(game) => game.record_draw(),
            None => warn!("record_draw with no game in progress"),
        }
    }

    pub fn undo_last_round(&mut self) -> Option<Round> {
        self.game.as_mut().and_then(GameState::undo_last_round)
    }

    pub fn next_round(&mut self) {
        if let Some(game) = self.game.as_mut() {
            game.next_round();
        }
    }

    pub fn advance_dealer(&mut self) {
        if let Some(game) = self.game.as_mut() {
            game.advance_dealer();
        }
    }

    /// Change remembered settings. The game in progress keeps its roster,
    /// scores and history; new scoring parameters apply from the next
    /// calculation.
    pub fn update_settings(&mut self, overrides: SettingsOverrides) -> Result<(), ConfigError> {
        let settings = self.settings.merged(overrides);
        settings.validate()?;
        debug!(?settings, "settings updated");
        self.settings = settings;
        Ok(())
    }

    /// Rename a seat in the saved settings and, when a game is running, at
    /// the table. Nothing else about the game changes.
    pub fn update_player_name(&mut self, seat: Seat, name: &str) -> Result<(), DomainError> {
        if !is_valid_seat(seat) {
            return Err(DomainError::not_found(NotFoundKind::Seat, format!("seat {seat}")));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("player name must not be empty"));
        }
        self.settings.player_names[seat as usize] = name.to_string();
        if let Some(game) = self.game.as_mut() {
            game.rename_player(seat, name)?;
        }
        Ok(())
    }

    pub fn set_preferred_input_mode(&mut self, mode: InputMode) {
        self.preferred_input_mode = mode;
    }

    pub fn dealer(&self) -> Option<&Player> {
        self.game.as_ref().map(GameState::dealer)
    }

    pub fn player_by_id(&self, id: &PlayerId) -> Option<&Player> {
        self.game.as_ref().and_then(|g| g.player_by_id(id))
    }

    pub fn player_by_seat(&self, seat: Seat) -> Option<&Player> {
        self.game.as_ref().and_then(|g| g.player_by_seat(seat))
    }

    /// Score a hypothetical win against the current roster, dealer and
    /// scoring settings without changing anything.
    pub fn preview_score(&self, request: &PreviewRequest) -> Option<ScoreResult> {
        let game = self.game.as_ref()?;
        let decl = WinDeclaration {
            win_type: request.win_type,
            winner_id: &request.winner_id,
            loser_id: request.loser_id.as_ref(),
            players: &game.players,
            dealer_id: &game.dealer().id,
            fans: request.fans.clone(),
        };
        let rules = rule_set(game.rule_set_id);
        Some((rules.calculate)(&decl, &self.settings.scoring_config))
    }
}
