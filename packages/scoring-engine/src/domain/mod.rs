//! Domain layer: fan catalog, scoring and the round state machine.

pub mod fan_catalog;
pub mod fan_resolver;
pub mod player;
pub mod rules;
pub mod ruleset;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_props_resolver;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_state;

// Re-exports for ergonomics
pub use fan_catalog::{
    all_fans, common_fans, custom_fans, fan_by_id, fan_catalog, fan_in_variant, fans_by_category,
    limit_fans, standard_fans, FanCategory, FanType, VariantScope, CATEGORY_ORDER,
};
pub use fan_resolver::{
    resolve_fan_selection, validate_fan_combination, FanResolution, FanValidation,
};
pub use player::{create_players, Player, PlayerColor, PlayerId};
pub use rules::{rotate_dealer, Seat, Wind, PLAYERS};
pub use ruleset::{implemented_rule_sets, rule_set, RuleSet, RuleSetId};
pub use scoring::{
    base_points, calculate_direct, calculate_pattern, calculate_score, FanClaim, ScoreChange,
    ScoreError, ScoreResult, WinDeclaration, WinType,
};
pub use session::{PreviewRequest, Session};
pub use snapshot::{from_json, to_json, PersistedSession, SnapshotError, SNAPSHOT_VERSION};
pub use state::{GameState, Round, RoundOutcome};
