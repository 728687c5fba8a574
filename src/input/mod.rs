//! Input handling: command recall, line editing and key translation

pub mod command_history;
pub mod line_editor;

#[cfg(feature = "runtime")]
pub mod key_handler;
