//! Turns a selection of fan ids into a net fan total.

use std::collections::HashSet;

use serde::Serialize;

use crate::config::RuleVariant;
use crate::domain::fan_catalog::{fan_by_id, fan_in_variant, zero_value_label, FanType};

/// Separator between fan names in a hand description.
pub const DESCRIPTION_SEPARATOR: &str = "、";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FanResolution {
    pub total_fan: u32,
    /// Fans that still count, in selection order.
    pub surviving: Vec<&'static FanType>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FanValidation {
    pub valid: bool,
    /// Display-name pairs of mutually exclusive fans, each pair once.
    pub conflicts: Vec<(String, String)>,
}

/// Distinct ids in first-seen order.
fn dedup_in_order<'a, S: AsRef<str>>(ids: &'a [S]) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    ids.iter()
        .map(|s| s.as_ref())
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Resolve a fan selection under `variant`.
///
/// Unknown or out-of-variant ids are dropped. A fan named in another
/// selected fan's `includes` is suppressed, as is a fan whose `implied_by`
/// names another selected fan. The result does not depend on selection
/// order except for the order of `surviving`.
pub fn resolve_fan_selection<S: AsRef<str>>(ids: &[S], variant: RuleVariant) -> FanResolution {
    let selected: Vec<&'static FanType> = dedup_in_order(ids)
        .into_iter()
        .filter_map(|id| fan_in_variant(id, variant))
        .collect();
    let selected_ids: HashSet<&str> = selected.iter().map(|f| f.id).collect();

    let mut suppressed: HashSet<&str> = HashSet::new();
    for f in &selected {
        suppressed.extend(f.includes.iter().copied());
        if f.implied_by.iter().any(|by| selected_ids.contains(by)) {
            suppressed.insert(f.id);
        }
    }

    let surviving: Vec<&'static FanType> = selected
        .into_iter()
        .filter(|f| !suppressed.contains(f.id))
        .collect();
    let total_fan: u32 = surviving.iter().map(|f| f.value).sum();
    let description = if surviving.is_empty() {
        zero_value_label().to_string()
    } else {
        surviving
            .iter()
            .map(|f| f.name)
            .collect::<Vec<_>>()
            .join(DESCRIPTION_SEPARATOR)
    };

    tracing::trace!(total_fan, suppressed = suppressed.len(), "resolved fan selection");

    FanResolution {
        total_fan,
        surviving,
        description,
    }
}

/// Report mutually exclusive pairs in a selection.
///
/// Advisory only: the calculator does not enforce it.
pub fn validate_fan_combination<S: AsRef<str>>(ids: &[S]) -> FanValidation {
    let ids = dedup_in_order(ids);
    let mut conflicts = Vec::new();

    for (i, id) in ids.iter().enumerate() {
        let Some(fan) = fan_by_id(id) else {
            continue;
        };
        for other in &ids[i + 1..] {
            if fan.incompatible_with.contains(other) {
                let other_name = fan_by_id(other).map_or(*other, |f| f.name);
                conflicts.push((fan.name.to_string(), other_name.to_string()));
            }
        }
    }

    FanValidation {
        valid: conflicts.is_empty(),
        conflicts,
    }
}
