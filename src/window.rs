//! Presentation state of the terminal widget
//!
//! The window is either closed, open, or open-but-minimized. `is_open` and
//! `is_minimized` are tracked separately, so minimizing a closed window and
//! then opening it shows it minimized.
//!
//! The session is created the first time the window opens and survives
//! close/open cycles; only `teardown()` discards it.

use crate::config::TerminalConfig;
use crate::host::TerminalHost;
use crate::services::time_source::SharedTimeSource;
use crate::session::TerminalSession;

pub struct TerminalWindow {
    config: TerminalConfig,
    time: SharedTimeSource,
    session: Option<TerminalSession>,
    is_open: bool,
    is_minimized: bool,
}

impl TerminalWindow {
    pub fn new(config: TerminalConfig, time: SharedTimeSource) -> Self {
        Self {
            config,
            time,
            session: None,
            is_open: false,
            is_minimized: false,
        }
    }

    /// Show the window
    ///
    /// Opening a closed window seeds the welcome banner when the scrollback
    /// is empty. Opening an already open window does nothing.
    pub fn open(&mut self) {
        if self.is_open {
            return;
        }
        self.is_open = true;

        let session = self.session.get_or_insert_with(|| {
            tracing::info!("Creating terminal session");
            TerminalSession::new(self.config.clone(), self.time.clone())
        });
        if session.seed_welcome_if_empty() {
            tracing::debug!("Seeded welcome banner");
        }
    }

    /// Hide the window, keeping the session and any pending tasks
    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn minimize(&mut self) {
        self.is_minimized = true;
    }

    pub fn maximize(&mut self) {
        self.is_minimized = false;
    }

    /// Discard the session, cancelling its deferred tasks
    pub fn teardown(&mut self) -> usize {
        self.is_open = false;
        self.is_minimized = false;
        match self.session.take() {
            Some(mut session) => {
                let cancelled = session.cancel_pending();
                tracing::info!("Terminal session torn down, {} task(s) cancelled", cancelled);
                cancelled
            }
            None => 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_minimized(&self) -> bool {
        self.is_minimized
    }

    /// Open and not minimized
    pub fn is_expanded(&self) -> bool {
        self.is_open && !self.is_minimized
    }

    pub fn session(&self) -> Option<&TerminalSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut TerminalSession> {
        self.session.as_mut()
    }

    /// Submit the pending input line. Ignored while the window is hidden.
    pub fn submit_pending(&mut self, host: &mut dyn TerminalHost) {
        if !self.is_expanded() {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            session.submit_pending(host);
        }
    }

    /// Fire due deferred tasks, whether or not the window is visible
    pub fn tick(&mut self, host: &mut dyn TerminalHost) -> usize {
        match self.session.as_mut() {
            Some(session) => session.run_due_effects(host),
            None => 0,
        }
    }
}
