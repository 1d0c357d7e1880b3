use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest fan cap the payout arithmetic accepts.
pub const MAX_FAN_CAP: u32 = 32;

/// Headroom bits for the largest single-hand transfer: the dealer doubling
/// and three payers.
const TRANSFER_HEADROOM_BITS: u32 = 3;

/// Largest base score whose worst-case hand at `max_fan` still fits in `i64`.
pub fn max_base_score(max_fan: u32) -> i64 {
    i64::MAX >> (max_fan.min(MAX_FAN_CAP) + TRANSFER_HEADROOM_BITS)
}

/// Rule variant: 清章 (standard patterns only) or 新章 (standard plus custom patterns).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleVariant {
    #[default]
    Standard,
    Custom,
}

/// Discard settlement style.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    /// 全銃制: the discarder alone pays.
    #[default]
    Full,
    /// 半銃制: the discarder pays and both bystanders pay half a share.
    Half,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base score must be positive, got {0}")]
    NonPositiveBaseScore(i64),
    #[error("max fan must be between 1 and {MAX_FAN_CAP}, got {0}")]
    MaxFanOutOfRange(u32),
    #[error("min fan ({min_fan}) exceeds max fan ({max_fan})")]
    MinAboveMax { min_fan: u32, max_fan: u32 },
    #[error("base score {base_score} is too large for max fan {max_fan} (limit {limit})")]
    BaseScoreTooLarge {
        base_score: i64,
        max_fan: u32,
        limit: i64,
    },
}

/// Scoring parameters passed into every calculation.
///
/// The engine holds no configuration of its own; a calculation is a pure
/// function of this value and the win declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfig {
    /// Multiplier unit (每底).
    pub base_score: i64,
    /// Smallest fan total that may win.
    pub min_fan: u32,
    /// Fan cap (封頂); fan beyond this does not raise the payout.
    pub max_fan: u32,
    pub starting_score: i64,
    pub variant: RuleVariant,
    pub payment_mode: PaymentMode,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 4,
            min_fan: 3,
            max_fan: 13,
            starting_score: 500,
            variant: RuleVariant::Standard,
            payment_mode: PaymentMode::Full,
        }
    }
}

impl ScoringConfig {
    /// Reject configurations the payout arithmetic cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_score <= 0 {
            return Err(ConfigError::NonPositiveBaseScore(self.base_score));
        }
        if self.max_fan == 0 || self.max_fan > MAX_FAN_CAP {
            return Err(ConfigError::MaxFanOutOfRange(self.max_fan));
        }
        if self.min_fan > self.max_fan {
            return Err(ConfigError::MinAboveMax {
                min_fan: self.min_fan,
                max_fan: self.max_fan,
            });
        }
        let limit = max_base_score(self.max_fan);
        if self.base_score > limit {
            return Err(ConfigError::BaseScoreTooLarge {
                base_score: self.base_score,
                max_fan: self.max_fan,
                limit,
            });
        }
        Ok(())
    }
}
