pub mod crop_picker;
pub mod mutation_options;
pub mod result_panel;
pub mod toast;
