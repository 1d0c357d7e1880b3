use serde::{Deserialize, Serialize};

use crate::config::scoring::{ConfigError, ScoringConfig};
use crate::domain::rules::PLAYERS;
use crate::domain::ruleset::RuleSetId;

/// How the caller prefers to declare a win.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// 入分模式: fan count typed in directly.
    #[default]
    Pro,
    /// 計番模式: fan patterns picked from the catalog.
    Normal,
}

/// Settings remembered between games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    pub rule_set_id: RuleSetId,
    pub scoring_config: ScoringConfig,
    pub player_names: [String; PLAYERS],
    pub starting_score: i64,
}

impl Default for GameSettings {
    fn default() -> Self {
        let scoring_config = ScoringConfig::default();
        Self {
            rule_set_id: RuleSetId::Cantonese,
            starting_score: scoring_config.starting_score,
            scoring_config,
            player_names: ["東", "南", "西", "北"].map(String::from),
        }
    }
}

/// Partial settings; `None` fields keep the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsOverrides {
    pub rule_set_id: Option<RuleSetId>,
    pub scoring_config: Option<ScoringConfig>,
    pub player_names: Option<[String; PLAYERS]>,
    pub starting_score: Option<i64>,
}

impl SettingsOverrides {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl GameSettings {
    /// Shallow merge: each supplied field replaces the current one whole.
    pub fn merged(&self, overrides: SettingsOverrides) -> GameSettings {
        GameSettings {
            rule_set_id: overrides.rule_set_id.unwrap_or(self.rule_set_id),
            scoring_config: overrides
                .scoring_config
                .unwrap_or_else(|| self.scoring_config.clone()),
            player_names: overrides
                .player_names
                .unwrap_or_else(|| self.player_names.clone()),
            starting_score: overrides.starting_score.unwrap_or(self.starting_score),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring_config.validate()
    }
}
