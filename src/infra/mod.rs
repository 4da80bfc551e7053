//! I/O collaborators of the calculator.

pub mod catalog;
