use super::entities::{Crop, MutationCategory, SelectionState};
use super::mutations::MutationTable;
use super::valuation::{self, OverrideStatus, Valuation};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CatalogStatus {
    #[default]
    Loading,
    Loaded(usize),
    Unavailable,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub crops: Vec<Crop>,
    pub selection: SelectionState,
    pub mutations: MutationTable,
    pub catalog_status: CatalogStatus,
}

impl AppState {
    pub fn with_mutations(mutations: MutationTable) -> Self {
        Self {
            mutations,
            ..Self::default()
        }
    }

    /// Stores the loaded catalog and picks the first crop unless one is already chosen.
    pub fn apply_catalog(&mut self, crops: Vec<Crop>) {
        if self.selection.chosen_crop.is_none() {
            self.selection.chosen_crop = crops.first().cloned();
        }
        self.catalog_status = CatalogStatus::Loaded(crops.len());
        self.crops = crops;
    }

    pub fn mark_catalog_unavailable(&mut self) {
        self.crops.clear();
        self.catalog_status = CatalogStatus::Unavailable;
    }

    /// Exact, case-sensitive lookup. Unknown names leave the selection untouched.
    pub fn select_crop(&mut self, name: &str) -> bool {
        match self.crops.iter().find(|crop| crop.name == name) {
            Some(crop) => {
                self.selection.chosen_crop = Some(crop.clone());
                true
            }
            None => false,
        }
    }

    pub fn set_override(&mut self, raw: impl Into<String>) {
        self.selection.override_value = raw.into();
    }

    pub fn set_growth(&mut self, name: impl Into<String>) {
        self.selection.growth = name.into();
    }

    pub fn set_temperature(&mut self, name: impl Into<String>) {
        self.selection.temperature = name.into();
    }

    pub fn set_environmental(&mut self, name: &str, checked: bool) {
        if checked {
            self.selection.environmental.insert(name.to_string());
        } else {
            self.selection.environmental.remove(name);
        }
    }

    pub fn clear_environmental(&mut self) {
        self.selection.environmental.clear();
    }

    /// Routes a radio/checkbox change to the right category.
    pub fn toggle_mutation(&mut self, category: MutationCategory, name: &str, checked: bool) {
        match category {
            MutationCategory::Growth => self.set_growth(name),
            MutationCategory::Temperature => self.set_temperature(name),
            MutationCategory::Environmental => self.set_environmental(name, checked),
        }
    }

    pub fn valuation(&self) -> Valuation {
        valuation::evaluate(&self.selection, &self.mutations)
    }

    pub fn override_status(&self) -> OverrideStatus {
        valuation::override_status(&self.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Crop> {
        vec![
            Crop::new("Carrot", 22.0),
            Crop::new("Strawberry", 18.0),
            Crop::new("Dragon Fruit", 248.0),
        ]
    }

    #[test]
    fn catalog_load_defaults_to_first_crop() {
        let mut state = AppState::default();
        state.apply_catalog(catalog());

        assert_eq!(state.catalog_status, CatalogStatus::Loaded(3));
        assert_eq!(
            state.selection.chosen_crop.as_ref().map(|c| c.name.as_str()),
            Some("Carrot")
        );
        assert_eq!(state.valuation().value, 22.0);
    }

    #[test]
    fn catalog_load_keeps_existing_choice() {
        let mut state = AppState::default();
        state.selection.chosen_crop = Some(Crop::new("Dragon Fruit", 248.0));
        state.apply_catalog(catalog());

        assert_eq!(state.valuation().base, 248.0);
    }

    #[test]
    fn failed_catalog_leaves_nothing_selected() {
        let mut state = AppState::default();
        state.mark_catalog_unavailable();

        assert!(state.crops.is_empty());
        assert!(state.selection.chosen_crop.is_none());
        assert_eq!(state.catalog_status, CatalogStatus::Unavailable);
        assert_eq!(state.valuation().value, 0.0);
    }

    #[test]
    fn empty_catalog_selects_nothing() {
        let mut state = AppState::default();
        state.apply_catalog(Vec::new());

        assert!(state.selection.chosen_crop.is_none());
        assert_eq!(state.catalog_status, CatalogStatus::Loaded(0));
    }

    #[test]
    fn crop_lookup_is_case_sensitive() {
        let mut state = AppState::default();
        state.apply_catalog(catalog());

        assert!(!state.select_crop("dragon fruit"));
        assert!(state.select_crop("Dragon Fruit"));
        assert_eq!(state.valuation().base, 248.0);
    }

    #[test]
    fn selection_surface_drives_valuation() {
        let mut state = AppState::default();
        state.apply_catalog(catalog());
        state.select_crop("Dragon Fruit");
        state.toggle_mutation(MutationCategory::Growth, "golden", true);
        state.toggle_mutation(MutationCategory::Environmental, "bloodlit", true);
        state.toggle_mutation(MutationCategory::Environmental, "plasma", true);
        state.toggle_mutation(MutationCategory::Environmental, "plasma", true);

        let valuation = state.valuation();
        assert_eq!(state.selection.environmental.len(), 2);
        assert_eq!(valuation.multiplier, 140.0);
        assert_eq!(valuation.value, 34_720.0);

        state.toggle_mutation(MutationCategory::Environmental, "plasma", false);
        state.toggle_mutation(MutationCategory::Temperature, "frozen", true);
        assert_eq!(state.valuation().multiplier, 20.0 * 5.0 * 3.0);

        state.clear_environmental();
        state.set_growth("none");
        assert_eq!(state.valuation().multiplier, 5.0);
    }

    #[test]
    fn radio_choice_replaces_previous_value() {
        let mut state = AppState::default();
        state.set_growth("golden");
        state.set_growth("rainbow");

        assert_eq!(state.selection.growth, "rainbow");
        assert!(state.selection.is_selected(MutationCategory::Growth, "rainbow"));
        assert!(!state.selection.is_selected(MutationCategory::Growth, "golden"));
    }

    #[test]
    fn override_takes_precedence_until_cleared() {
        let mut state = AppState::default();
        state.apply_catalog(catalog());
        state.set_override("abc");

        assert_eq!(state.valuation().base, 0.0);
        assert_eq!(state.override_status(), OverrideStatus::Invalid);

        state.set_override("");
        assert_eq!(state.valuation().base, 22.0);
    }
}
