//! Mutation tables the valuation engine is parameterised with.
//!
//! - `MutationTable::default()` carries the stock Growth / Temperature / Environmental figures.
//! - Replacement tables can be loaded from JSON so alternate game balances need no code change.

#![allow(dead_code)]

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use super::entities::{MutationCategory, MutationDefinition};

#[derive(Debug, Error)]
pub enum MutationTableError {
    #[error("failed to decode mutation table: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("duplicate {category:?} mutation: {name}")]
    Duplicate {
        category: MutationCategory,
        name: String,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct MutationTable {
    pub growth: Vec<MutationDefinition>,
    pub temperature: Vec<MutationDefinition>,
    pub environmental: Vec<MutationDefinition>,
}

impl Default for MutationTable {
    fn default() -> Self {
        Self {
            growth: default_growth(),
            temperature: default_temperature(),
            environmental: default_environmental(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct MutationTableDto {
    #[serde(default)]
    growth: Option<Vec<MutationDefinition>>,
    #[serde(default)]
    temperature: Option<Vec<MutationDefinition>>,
    #[serde(default)]
    environmental: Option<Vec<MutationDefinition>>,
}

impl MutationTable {
    pub fn definitions(&self, category: MutationCategory) -> &[MutationDefinition] {
        match category {
            MutationCategory::Growth => &self.growth,
            MutationCategory::Temperature => &self.temperature,
            MutationCategory::Environmental => &self.environmental,
        }
    }

    pub fn find(&self, category: MutationCategory, name: &str) -> Option<&MutationDefinition> {
        self.definitions(category)
            .iter()
            .find(|definition| definition.name == name)
    }

    /// Parses a table override. Categories missing from the document keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, MutationTableError> {
        let dto: MutationTableDto = serde_json::from_str(raw)?;
        let defaults = Self::default();
        let table = Self {
            growth: dto.growth.unwrap_or(defaults.growth),
            temperature: dto.temperature.unwrap_or(defaults.temperature),
            environmental: dto.environmental.unwrap_or(defaults.environmental),
        };
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<(), MutationTableError> {
        for category in MutationCategory::ALL {
            let mut seen = HashSet::new();
            for definition in self.definitions(category) {
                if !seen.insert(definition.name.as_str()) {
                    return Err(MutationTableError::Duplicate {
                        category,
                        name: definition.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

fn default_growth() -> Vec<MutationDefinition> {
    vec![
        MutationDefinition::new("none", "", 1.0),
        MutationDefinition::new("golden", "🏆", 20.0),
        MutationDefinition::new("rainbow", "🌈", 50.0),
        MutationDefinition::new("shocked", "⚡", 100.0),
        MutationDefinition::new("celestial", "✨", 120.0),
        MutationDefinition::new("admin_blessed", "👑", 125.0),
    ]
}

fn default_temperature() -> Vec<MutationDefinition> {
    vec![
        MutationDefinition::new("none", "", 1.0),
        MutationDefinition::new("wet", "💧", 2.0),
        MutationDefinition::new("chilled", "🧊", 3.0),
        MutationDefinition::new("frozen", "❄️", 5.0),
    ]
}

fn default_environmental() -> Vec<MutationDefinition> {
    vec![
        MutationDefinition::new("chocolate", "🍫", 1.0),
        MutationDefinition::new("moonlit", "🌙", 1.0),
        MutationDefinition::new("bloodlit", "🩸", 3.0),
        MutationDefinition::new("plasma", "⚡", 4.0),
        MutationDefinition::new("zombified", "🧟", 24.0),
        MutationDefinition::new("shocked", "⚡", 99.0),
        MutationDefinition::new("celestial", "✨", 119.0),
        MutationDefinition::new("disco", "🪩", 124.0),
    ]
}

/// Human label for a mutation ("none" -> "Default", "admin_blessed" -> "Admin Blessed").
pub fn display_name(definition: &MutationDefinition) -> String {
    if definition.is_none() {
        return "Default".to_string();
    }

    definition
        .name
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Factor suffix shown next to a mutation label.
///
/// Temperature factors are shown as the bonus over the base (`×5` renders as `+4`).
pub fn factor_label(category: MutationCategory, definition: &MutationDefinition) -> String {
    match category {
        MutationCategory::Growth => format!("(×{})", compact(definition.factor)),
        MutationCategory::Temperature if definition.is_none() => "(+0)".to_string(),
        MutationCategory::Temperature => format!("(+{})", compact(definition.factor - 1.0)),
        MutationCategory::Environmental => format!("(+{})", compact(definition.factor)),
    }
}

fn compact(value: f64) -> String {
    crate::util::format::format_multiplier(value)
}
