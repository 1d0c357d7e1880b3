//! Cantonese fan catalog: the fixed table of scoring patterns.
//!
//! The table is ordered by category and value and never mutated. Lookups go
//! through an id index and a handful of filtered views, each built once on
//! first use.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::config::RuleVariant;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FanCategory {
    Basic,
    Triplets,
    Suits,
    Honors,
    Terminals,
    Special,
    Situational,
    Flowers,
    Limit,
}

pub const CATEGORY_ORDER: [FanCategory; 9] = [
    FanCategory::Situational,
    FanCategory::Basic,
    FanCategory::Triplets,
    FanCategory::Suits,
    FanCategory::Honors,
    FanCategory::Terminals,
    FanCategory::Flowers,
    FanCategory::Special,
    FanCategory::Limit,
];

impl FanCategory {
    pub fn display_name(self) -> &'static str {
        match self {
            FanCategory::Basic => "基本",
            FanCategory::Triplets => "刻子",
            FanCategory::Suits => "花色",
            FanCategory::Honors => "字牌",
            FanCategory::Terminals => "么九",
            FanCategory::Special => "特殊",
            FanCategory::Situational => "情景",
            FanCategory::Flowers => "花牌",
            FanCategory::Limit => "例牌",
        }
    }
}

/// Which rule variants a fan type is played under.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantScope {
    Standard,
    Custom,
    Both,
}

impl VariantScope {
    /// Standard play admits standard and shared patterns; custom play admits everything.
    pub fn admits(self, variant: RuleVariant) -> bool {
        match variant {
            RuleVariant::Standard => matches!(self, VariantScope::Standard | VariantScope::Both),
            RuleVariant::Custom => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FanType {
    pub id: &'static str,
    pub name: &'static str,
    pub english_name: &'static str,
    pub value: u32,
    pub category: FanCategory,
    pub description: &'static str,
    pub variant_scope: VariantScope,
    pub is_limit: bool,
    /// Symmetric: declared on both sides.
    pub incompatible_with: &'static [&'static str],
    /// Fans whose value this one already counts.
    pub includes: &'static [&'static str],
    /// Fans whose presence makes this one non-additional.
    pub implied_by: &'static [&'static str],
}

/// Id of the zero-value hand whose name labels an empty selection.
pub const ZERO_VALUE_FAN_ID: &str = "chicken";

const COMMON_FAN_IDS: [&str; 6] = [
    "all-chows",
    "all-pungs",
    "half-flush",
    "full-flush",
    "self-draw",
    "concealed",
];

const fn fan(
    id: &'static str,
    name: &'static str,
    english_name: &'static str,
    value: u32,
    category: FanCategory,
    description: &'static str,
) -> FanType {
    FanType {
        id,
        name,
        english_name,
        value,
        category,
        description,
        variant_scope: VariantScope::Both,
        is_limit: false,
        incompatible_with: &[],
        includes: &[],
        implied_by: &[],
    }
}

impl FanType {
    const fn scope(mut self, scope: VariantScope) -> Self {
        self.variant_scope = scope;
        self
    }

    const fn limit(mut self) -> Self {
        self.is_limit = true;
        self
    }

    const fn incompatible(mut self, ids: &'static [&'static str]) -> Self {
        self.incompatible_with = ids;
        self
    }

    const fn including(mut self, ids: &'static [&'static str]) -> Self {
        self.includes = ids;
        self
    }

    const fn implied(mut self, ids: &'static [&'static str]) -> Self {
        self.implied_by = ids;
        self
    }
}

use FanCategory::{Basic, Flowers, Honors, Limit, Situational, Special, Suits, Terminals, Triplets};

static CANTONESE_FAN_TYPES: &[FanType] = &[
    // Basic
    fan("chicken", "雞糊", "Chicken Hand", 0, Basic, "冇番，但滿足最低要求時可以食"),
    fan("all-chows", "平糊", "All Chows", 1, Basic, "全部係順子，冇刻子")
        .incompatible(&["all-pungs", "all-concealed-pungs"]),
    // Triplets
    fan("all-pungs", "對對糊", "All Pungs", 3, Triplets, "全部係刻子（碰碰糊）")
        .incompatible(&["all-chows"]),
    // Suits
    fan("half-flush", "混一色", "Half Flush", 3, Suits, "一種花色加字牌")
        .incompatible(&["full-flush", "all-honors"]),
    fan("full-flush", "清一色", "Full Flush", 7, Suits, "全部同一種花色，冇字牌")
        .incompatible(&["half-flush", "all-honors"])
        .including(&["half-flush"]),
    fan("all-honors", "字一色", "All Honors", 10, Suits, "全部係字牌（風牌同三元牌）")
        .incompatible(&["half-flush", "full-flush"]),
    // Honors
    fan("dragon-pung", "三元牌", "Dragon Pung", 1, Honors, "中、發或白刻子，每組一番"),
    fan("seat-wind", "門風", "Seat Wind", 1, Honors, "自己門風嘅刻子"),
    fan("prevailing-wind", "圈風", "Prevailing Wind", 1, Honors, "當圈圈風嘅刻子"),
    fan("small-dragons", "小三元", "Small Three Dragons", 5, Honors, "兩組三元刻子，一組三元對子")
        .incompatible(&["big-dragons"]),
    fan("big-dragons", "大三元", "Big Three Dragons", 8, Honors, "三組三元刻子（中發白）")
        .incompatible(&["small-dragons"])
        .including(&["small-dragons"]),
    fan("small-winds", "小四喜", "Small Four Winds", 6, Honors, "三組風刻子，一組風對子")
        .incompatible(&["big-winds"]),
    fan("big-winds", "大四喜", "Big Four Winds", 13, Honors, "四組風刻子（東南西北）")
        .incompatible(&["small-winds"])
        .including(&["small-winds"])
        .limit(),
    // Terminals
    fan("mixed-terminals", "花么九", "Mixed Terminals", 1, Terminals, "全部係么九牌同字牌")
        .incompatible(&["pure-terminals"]),
    fan("pure-terminals", "清么九", "Pure Terminals", 10, Terminals, "全部係么九牌，冇字牌")
        .incompatible(&["mixed-terminals"])
        .including(&["mixed-terminals"]),
    // Special
    fan("seven-pairs", "七對", "Seven Pairs", 4, Special, "七個對子"),
    fan("thirteen-orphans", "十三么", "Thirteen Orphans", 13, Special, "所有么九牌加字牌各一隻")
        .limit(),
    fan("nine-gates", "九蓮寶燈", "Nine Gates", 13, Special, "1112345678999 同一花色")
        .including(&["full-flush", "half-flush"])
        .limit(),
    fan("all-kongs", "十八羅漢", "All Kongs", 13, Special, "四組槓子").limit(),
    // Situational
    fan("self-draw", "自摸", "Self Draw", 1, Situational, "自己摸牌食糊")
        .implied(&["win-on-kong", "last-tile-draw"]),
    fan("concealed", "門清", "Concealed Hand", 1, Situational, "冇碰冇槓，全部暗牌")
        .implied(&["seven-pairs"]),
    fan("last-tile-draw", "海底撈月", "Win on Last Tile (Self Draw)", 1, Situational, "摸最後一隻牌食糊"),
    fan("last-tile-discard", "河底撈魚", "Win on Last Tile (Discard)", 1, Situational, "最後一隻打出嘅牌食糊"),
    fan("win-on-kong", "槓上開花", "Win on Kong", 1, Situational, "槓後摸嘅牌食糊"),
    fan("robbing-kong", "搶槓", "Robbing the Kong", 1, Situational, "人哋加槓時搶糊"),
    fan("kong-on-kong", "槓上槓", "Kong on Kong", 8, Situational, "連續開槓後摸牌食糊")
        .scope(VariantScope::Custom)
        .including(&["win-on-kong"]),
    // Flowers
    fan("no-flowers", "無花", "No Flowers", 1, Flowers, "冇摸到花牌")
        .incompatible(&["seat-flower", "flower-set", "all-flowers"]),
    fan("seat-flower", "正花", "Seat Flower", 1, Flowers, "摸到自己座位嘅花牌，每隻一番")
        .incompatible(&["no-flowers"]),
    fan("flower-set", "一台花", "Flower Set", 2, Flowers, "集齊同一組四隻花牌")
        .incompatible(&["no-flowers"]),
    fan("all-flowers", "八仙過海", "All Eight Flowers", 13, Flowers, "集齊八隻花牌")
        .incompatible(&["no-flowers"])
        .including(&["flower-set", "seat-flower"])
        .limit(),
    // Limit hands
    fan("heavenly-hand", "天糊", "Heavenly Hand", 13, Limit, "莊家起手即糊")
        .incompatible(&["earthly-hand"])
        .limit(),
    fan("earthly-hand", "地糊", "Earthly Hand", 13, Limit, "閒家第一隻摸牌即糊")
        .incompatible(&["heavenly-hand"])
        .limit(),
    fan("all-concealed-pungs", "坎坎糊", "All Concealed Pungs", 13, Limit, "四組暗刻")
        .incompatible(&["all-chows"])
        .including(&["all-pungs", "concealed"])
        .limit(),
];

static FAN_INDEX: LazyLock<HashMap<&'static str, &'static FanType>> =
    LazyLock::new(|| CANTONESE_FAN_TYPES.iter().map(|f| (f.id, f)).collect());

static STANDARD_FANS: LazyLock<Vec<&'static FanType>> =
    LazyLock::new(|| filter_fans(|f| f.variant_scope.admits(RuleVariant::Standard)));

static CUSTOM_FANS: LazyLock<Vec<&'static FanType>> =
    LazyLock::new(|| filter_fans(|f| f.variant_scope == VariantScope::Custom));

static LIMIT_FANS: LazyLock<Vec<&'static FanType>> = LazyLock::new(|| filter_fans(|f| f.is_limit));

static COMMON_FANS: LazyLock<Vec<&'static FanType>> =
    LazyLock::new(|| filter_fans(|f| COMMON_FAN_IDS.contains(&f.id)));

fn filter_fans(pred: impl Fn(&FanType) -> bool) -> Vec<&'static FanType> {
    CANTONESE_FAN_TYPES.iter().filter(|f| pred(f)).collect()
}

/// The whole table in catalog order.
pub fn all_fans() -> &'static [FanType] {
    CANTONESE_FAN_TYPES
}

/// The table as seen by a variant, or the whole table when `None`.
pub fn fan_catalog(variant: Option<RuleVariant>) -> Vec<&'static FanType> {
    match variant {
        Some(RuleVariant::Standard) => STANDARD_FANS.clone(),
        Some(RuleVariant::Custom) | None => CANTONESE_FAN_TYPES.iter().collect(),
    }
}

pub fn fan_by_id(id: &str) -> Option<&'static FanType> {
    FAN_INDEX.get(id).copied()
}

/// Like [`fan_by_id`] but only when the fan is played under `variant`.
pub fn fan_in_variant(id: &str, variant: RuleVariant) -> Option<&'static FanType> {
    fan_by_id(id).filter(|f| f.variant_scope.admits(variant))
}

pub fn fans_by_category(category: FanCategory, variant: RuleVariant) -> Vec<&'static FanType> {
    CANTONESE_FAN_TYPES
        .iter()
        .filter(|f| f.category == category && f.variant_scope.admits(variant))
        .collect()
}

pub fn limit_fans() -> &'static [&'static FanType] {
    &LIMIT_FANS
}

/// Quick-pick subset shown first in selection UIs.
pub fn common_fans() -> &'static [&'static FanType] {
    &COMMON_FANS
}

/// Everything playable under the standard variant.
pub fn standard_fans() -> &'static [&'static FanType] {
    &STANDARD_FANS
}

/// The patterns only the custom variant adds.
pub fn custom_fans() -> &'static [&'static FanType] {
    &CUSTOM_FANS
}

/// Display label for a hand with no surviving fans.
pub fn zero_value_label() -> &'static str {
    fan_by_id(ZERO_VALUE_FAN_ID).map_or("雞糊", |f| f.name)
}
