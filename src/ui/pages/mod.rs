pub mod calculator;
pub mod mutations;

pub use calculator::CalculatorPage;
pub use mutations::MutationsPage;
