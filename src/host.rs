//! Collaborator seam between the interpreter and whatever hosts it
//!
//! The interpreter never closes a window or changes pages on its own; it asks
//! the host to. The interactive app implements this for the TUI, and
//! `RecordingHost` captures requests for tests and the headless runner.

use crate::model::Route;

/// Requests the interpreter can make of its host
pub trait TerminalHost {
    /// Close the terminal window
    fn request_close(&mut self);

    /// Switch the site to another page
    fn request_navigate(&mut self, route: Route);
}

/// A single host request, as stored by deferred tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEffect {
    Close,
    Navigate(Route),
}

impl HostEffect {
    pub fn apply(self, host: &mut dyn TerminalHost) {
        match self {
            HostEffect::Close => host.request_close(),
            HostEffect::Navigate(route) => host.request_navigate(route),
        }
    }
}

/// Host that records every request it receives
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    /// Requests in the order they arrived
    pub effects: Vec<HostEffect>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn close_count(&self) -> usize {
        self.effects
            .iter()
            .filter(|e| matches!(e, HostEffect::Close))
            .count()
    }

    /// Routes navigated to, in order
    pub fn navigations(&self) -> Vec<Route> {
        self.effects
            .iter()
            .filter_map(|e| match e {
                HostEffect::Navigate(route) => Some(*route),
                HostEffect::Close => None,
            })
            .collect()
    }

    /// Drain recorded requests
    pub fn take(&mut self) -> Vec<HostEffect> {
        std::mem::take(&mut self.effects)
    }
}

impl TerminalHost for RecordingHost {
    fn request_close(&mut self) {
        self.effects.push(HostEffect::Close);
    }

    fn request_navigate(&mut self, route: Route) {
        self.effects.push(HostEffect::Navigate(route));
    }
}
