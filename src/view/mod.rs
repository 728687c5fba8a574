//! Ratatui rendering for the interactive host

pub mod page;
pub mod terminal_view;
