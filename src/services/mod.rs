//! Services: time, deferred tasks, and the runtime's logging and terminal setup

pub mod deferred;
pub mod time_source;

#[cfg(feature = "runtime")]
pub mod log_dirs;
#[cfg(feature = "runtime")]
pub mod terminal_modes;
#[cfg(feature = "runtime")]
pub mod tracing_setup;
