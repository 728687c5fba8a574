// InnoHacks terminal library - exposes all modules for testing

pub mod commands;
pub mod config;
pub mod headless;
pub mod host;
pub mod input;
pub mod model;
pub mod services;
pub mod session;
pub mod window;

#[cfg(feature = "runtime")]
pub mod app;
#[cfg(feature = "runtime")]
pub mod config_io;
#[cfg(feature = "runtime")]
pub mod view;
