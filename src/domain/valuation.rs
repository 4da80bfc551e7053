//! Crop valuation: base value times the resolved mutation factors.
//!
//! Every function here is pure and infallible. Bad input degrades instead of erroring:
//! an override without a leading number counts as 0, an unknown mutation name counts as identity.

#![allow(dead_code)]

use std::collections::BTreeSet;

use super::entities::{MutationCategory, MutationDefinition, SelectionState};
use super::mutations::MutationTable;

/// Result bundle handed to the display layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Valuation {
    pub base: f64,
    pub multiplier: f64,
    pub value: f64,
}

/// State of the override field, used only for the hint shown under the input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverrideStatus {
    Empty,
    Valid(f64),
    Invalid,
}

pub fn compute_base_value(selection: &SelectionState) -> f64 {
    if !selection.override_value.is_empty() {
        return match override_status(selection) {
            OverrideStatus::Valid(value) => value,
            _ => 0.0,
        };
    }

    selection
        .chosen_crop
        .as_ref()
        .map(|crop| crop.value)
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

pub fn override_status(selection: &SelectionState) -> OverrideStatus {
    if selection.override_value.is_empty() {
        return OverrideStatus::Empty;
    }

    match leading_number(&selection.override_value) {
        Some(value) if value.is_finite() => OverrideStatus::Valid(value),
        _ => OverrideStatus::Invalid,
    }
}

/// Longest decimal prefix after leading whitespace (`"12abc"` -> 12, `"1,000"` -> 1).
///
/// Only plain decimal notation with an optional exponent is recognised, so `"0x10"` reads as 0
/// and `"inf"` has no prefix at all.
fn leading_number(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes
            .get(start..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer = digits_from(end);
    end += integer;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_from(end + 1);
        if integer + fraction > 0 {
            end += 1 + fraction;
        }
    }
    if integer + fraction == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_digits = digits_from(exponent);
        if exponent_digits > 0 {
            end = exponent + exponent_digits;
        }
    }

    text[..end].parse::<f64>().ok()
}

/// Factor of a single-choice category. Unknown names, and zero factors, resolve to 1.
pub fn resolve_category_factor(definitions: &[MutationDefinition], choice: Option<&str>) -> f64 {
    choice
        .and_then(|name| definitions.iter().find(|definition| definition.name == name))
        .map(|definition| definition.factor)
        .filter(|factor| *factor != 0.0)
        .unwrap_or(1.0)
}

/// Environmental factors add up among themselves and the sum is applied as one term.
///
/// No selection gives 1. A sum of 0 (only unknown or zero-weighted names) also gives 1.
pub fn resolve_environmental_factor(
    definitions: &[MutationDefinition],
    chosen: &BTreeSet<String>,
) -> f64 {
    if chosen.is_empty() {
        return 1.0;
    }

    let sum = chosen
        .iter()
        .map(|name| {
            definitions
                .iter()
                .find(|definition| &definition.name == name)
                .map(|definition| definition.factor)
                .unwrap_or(0.0)
        })
        .sum::<f64>();

    if sum == 0.0 {
        1.0
    } else {
        sum
    }
}

pub fn total_multiplier(selection: &SelectionState, table: &MutationTable) -> f64 {
    let growth = resolve_category_factor(
        table.definitions(MutationCategory::Growth),
        selection.choice(MutationCategory::Growth),
    );
    let temperature = resolve_category_factor(
        table.definitions(MutationCategory::Temperature),
        selection.choice(MutationCategory::Temperature),
    );
    let environmental = resolve_environmental_factor(
        table.definitions(MutationCategory::Environmental),
        &selection.environmental,
    );

    growth * temperature * environmental
}

pub fn calculate_value(selection: &SelectionState, table: &MutationTable) -> f64 {
    compute_base_value(selection) * total_multiplier(selection, table)
}

pub fn evaluate(selection: &SelectionState, table: &MutationTable) -> Valuation {
    let base = compute_base_value(selection);
    let multiplier = total_multiplier(selection, table);
    Valuation {
        base,
        multiplier,
        value: base * multiplier,
    }
}
