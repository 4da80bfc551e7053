//! Dioxus views: the selection surface around the valuation engine.

pub mod components;
pub mod pages;
pub mod shell;
pub mod theme;
