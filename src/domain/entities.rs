#![allow(dead_code)]

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A crop record from the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    pub name: String,
    /// Base value before any mutation is applied.
    pub value: f64,
}

impl Crop {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MutationCategory {
    Growth,
    Temperature,
    Environmental,
}

impl MutationCategory {
    pub const ALL: [MutationCategory; 3] = [
        MutationCategory::Growth,
        MutationCategory::Temperature,
        MutationCategory::Environmental,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            MutationCategory::Growth => "Growth Mutations",
            MutationCategory::Temperature => "Temperature Mutations",
            MutationCategory::Environmental => "Other Environmental Mutations",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            MutationCategory::Growth => "⭐",
            MutationCategory::Temperature => "❄️",
            MutationCategory::Environmental => "✨",
        }
    }
}

/// One selectable mutation within a category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MutationDefinition {
    pub name: String,
    #[serde(default)]
    pub emoji: String,
    /// Multiplier for Growth/Temperature, additive bonus units for Environmental.
    #[serde(alias = "multiplier")]
    pub factor: f64,
}

impl MutationDefinition {
    pub fn new(name: impl Into<String>, emoji: impl Into<String>, factor: f64) -> Self {
        Self {
            name: name.into(),
            emoji: emoji.into(),
            factor,
        }
    }

    pub fn is_none(&self) -> bool {
        self.name == NONE_MUTATION
    }
}

/// Name of the identity entry in the single-choice categories.
pub const NONE_MUTATION: &str = "none";

/// Everything the user has picked on the calculator.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionState {
    pub chosen_crop: Option<Crop>,
    /// Raw text of the override field; empty means "use the crop value".
    pub override_value: String,
    pub growth: String,
    pub temperature: String,
    pub environmental: BTreeSet<String>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            chosen_crop: None,
            override_value: String::new(),
            growth: NONE_MUTATION.to_string(),
            temperature: NONE_MUTATION.to_string(),
            environmental: BTreeSet::new(),
        }
    }
}

impl SelectionState {
    pub fn choice(&self, category: MutationCategory) -> Option<&str> {
        match category {
            MutationCategory::Growth => Some(self.growth.as_str()),
            MutationCategory::Temperature => Some(self.temperature.as_str()),
            MutationCategory::Environmental => None,
        }
    }

    pub fn is_selected(&self, category: MutationCategory, name: &str) -> bool {
        match category {
            MutationCategory::Environmental => self.environmental.contains(name),
            _ => self.choice(category) == Some(name),
        }
    }
}
