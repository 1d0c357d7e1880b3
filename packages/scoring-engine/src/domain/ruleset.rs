//! Rule set registry.
//!
//! Only Cantonese scoring is implemented. The other ids exist so persisted
//! settings can name them; they resolve to the Cantonese definition.

use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;
use crate::domain::fan_catalog::{all_fans, FanType};
use crate::domain::scoring::{calculate_score, ScoreResult, WinDeclaration};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSetId {
    #[default]
    Cantonese,
    Sichuan,
    Taiwan,
}

impl RuleSetId {
    pub fn display_name(self) -> &'static str {
        match self {
            RuleSetId::Cantonese => "廣東牌",
            RuleSetId::Sichuan => "四川牌",
            RuleSetId::Taiwan => "台灣牌",
        }
    }
}

/// A scoring rule set: its fan table, table defaults and calculator.
pub struct RuleSet {
    pub id: RuleSetId,
    pub name: &'static str,
    pub fan_types: fn() -> &'static [FanType],
    pub default_config: fn() -> ScoringConfig,
    pub calculate: fn(&WinDeclaration<'_>, &ScoringConfig) -> ScoreResult,
}

static CANTONESE: RuleSet = RuleSet {
    id: RuleSetId::Cantonese,
    name: "廣東牌",
    fan_types: all_fans,
    default_config: ScoringConfig::default,
    calculate: calculate_score,
};

static IMPLEMENTED: &[&RuleSet] = &[&CANTONESE];

/// Rule set for `id`; unimplemented ids fall back to Cantonese.
pub fn rule_set(id: RuleSetId) -> &'static RuleSet {
    match id {
        RuleSetId::Cantonese | RuleSetId::Sichuan | RuleSetId::Taiwan => &CANTONESE,
    }
}

/// Rule sets that are actually implemented (for selection screens).
pub fn implemented_rule_sets() -> &'static [&'static RuleSet] {
    IMPLEMENTED
}
