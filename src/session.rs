//! Command interpreter and session buffer
//!
//! A `TerminalSession` owns everything the terminal shows: the scrollback,
//! the command history with its recall cursor, and the pending input line.
//! `submit()` turns one line of input into output lines and host requests.
//! Deferred requests (see `register`) are queued and fired from
//! `run_due_effects()`, which the host calls from its event loop.

use crate::commands::{CommandAction, CommandRegistry};
use crate::config::TerminalConfig;
use crate::host::{HostEffect, TerminalHost};
use crate::input::command_history::{CommandHistory, Recall};
use crate::input::line_editor::LineEditor;
use crate::model::{Scrollback, ScrollbackLine};
use crate::services::deferred::{DeferredEffects, EffectId};
use crate::services::time_source::SharedTimeSource;
use std::time::Instant;

/// First welcome line
pub const WELCOME_BANNER: &str = "Welcome to InnoHacks 2.0 Terminal v2.0.0";
/// Second welcome line
pub const WELCOME_HINT: &str = "Type 'help' to see available commands or 'register' to join.";

/// One terminal session: scrollback, history and pending input
pub struct TerminalSession {
    config: TerminalConfig,
    registry: CommandRegistry,
    scrollback: Scrollback,
    history: CommandHistory,
    input: LineEditor,
    deferred: DeferredEffects,
    time: SharedTimeSource,
}

impl TerminalSession {
    pub fn new(config: TerminalConfig, time: SharedTimeSource) -> Self {
        Self::with_registry(config, CommandRegistry::new(), time)
    }

    pub fn with_registry(
        config: TerminalConfig,
        registry: CommandRegistry,
        time: SharedTimeSource,
    ) -> Self {
        Self {
            config,
            registry,
            scrollback: Scrollback::new(),
            history: CommandHistory::new(),
            input: LineEditor::new(),
            deferred: DeferredEffects::new(),
            time,
        }
    }

    /// Submit one line of input
    ///
    /// Whitespace-only input is ignored. Anything else is recorded in the
    /// history, echoed after the prompt, and dispatched case-insensitively.
    /// The pending input is cleared afterwards.
    pub fn submit(&mut self, raw: &str, host: &mut dyn TerminalHost) {
        let command = raw.trim();
        if command.is_empty() {
            return;
        }

        self.history.push(command);
        self.scrollback
            .push(ScrollbackLine::command(self.config.echo(command)));

        let output = self.registry.dispatch(command, &self.config);
        self.scrollback.extend(output.lines);

        match output.action {
            CommandAction::None => {}
            CommandAction::ClearScrollback => {
                let removed = self.scrollback.clear();
                tracing::debug!("Cleared {} scrollback line(s)", removed);
            }
            CommandAction::Close => host.request_close(),
            CommandAction::Defer(effects) => {
                self.schedule(effects);
            }
        }

        self.input.clear();
    }

    /// Submit whatever is in the pending input line
    pub fn submit_pending(&mut self, host: &mut dyn TerminalHost) {
        let line = self.input.text().to_string();
        self.submit(&line, host);
    }

    /// Step back through history into the pending input
    pub fn recall_previous(&mut self) {
        match self.history.recall_previous() {
            Recall::Entry(entry) => self.input.set_text(entry),
            Recall::Live => self.input.clear(),
            Recall::Unchanged => {}
        }
    }

    /// Step forward through history; past the newest entry clears the input
    pub fn recall_next(&mut self) {
        match self.history.recall_next() {
            Recall::Entry(entry) => self.input.set_text(entry),
            Recall::Live => self.input.clear(),
            Recall::Unchanged => {}
        }
    }

    /// Seed the two welcome lines if the scrollback is empty
    ///
    /// Returns true if the lines were added.
    pub fn seed_welcome_if_empty(&mut self) -> bool {
        if !self.scrollback.is_empty() {
            return false;
        }
        self.scrollback.push(ScrollbackLine::info(WELCOME_BANNER));
        self.scrollback.push(ScrollbackLine::info(WELCOME_HINT));
        true
    }

    fn schedule(&mut self, effects: Vec<HostEffect>) -> EffectId {
        let now = self.time.now();
        self.deferred.schedule(now, self.config.register_delay(), effects)
    }

    /// Apply every deferred task that is due, in order
    ///
    /// Returns the number of tasks fired.
    pub fn run_due_effects(&mut self, host: &mut dyn TerminalHost) -> usize {
        let due = self.deferred.take_due(self.time.now());
        let fired = due.len();
        for task in due {
            tracing::debug!("Firing deferred task {:?}", task.id);
            for effect in task.effects {
                effect.apply(host);
            }
        }
        fired
    }

    /// Drop every pending deferred task
    pub fn cancel_pending(&mut self) -> usize {
        self.deferred.cancel_all()
    }

    pub fn pending_effects(&self) -> usize {
        self.deferred.pending()
    }

    /// When the next deferred task becomes due
    pub fn next_due(&self) -> Option<Instant> {
        self.deferred.next_due()
    }

    pub fn scrollback(&self) -> &Scrollback {
        &self.scrollback
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// The not-yet-submitted input text
    pub fn pending_input(&self) -> &str {
        self.input.text()
    }

    pub fn input(&self) -> &LineEditor {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut LineEditor {
        &mut self.input
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }
}

impl std::fmt::Debug for TerminalSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalSession")
            .field("lines", &self.scrollback().len())
            .field("history", &self.history().len())
            .field("pending_effects", &self.pending_effects())
            .finish_non_exhaustive()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let cancelled = self.deferred.cancel_all();
        if cancelled > 0 {
            tracing::info!(
                "Terminal session dropped with {} pending task(s), cancelled",
                cancelled
            );
        }
    }
}
