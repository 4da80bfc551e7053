//! Domain logic for crop valuation lives here.

pub mod app_state;
pub mod entities;
pub mod mutations;
pub mod valuation;

#[allow(unused_imports)]
pub use app_state::{AppState, CatalogStatus};
#[allow(unused_imports)]
pub use entities::{Crop, MutationCategory, MutationDefinition, SelectionState, NONE_MUTATION};
#[allow(unused_imports)]
pub use mutations::{display_name, factor_label, MutationTable, MutationTableError};
#[allow(unused_imports)]
pub use valuation::{
    calculate_value, compute_base_value, evaluate, override_status, resolve_category_factor,
    resolve_environmental_factor, total_multiplier, OverrideStatus, Valuation,
};
