//! Non-interactive runner behind `innohacks -c CMD`
//!
//! Feeds commands to a fresh session, waits out deferred tasks on the
//! session's time source and renders the outcome as plain text.

use crate::config::TerminalConfig;
use crate::host::{HostEffect, RecordingHost};
use crate::services::time_source::SharedTimeSource;
use crate::session::TerminalSession;

/// Outcome of a headless run
#[derive(Debug)]
pub struct HeadlessRun {
    pub session: TerminalSession,
    pub host: RecordingHost,
}

/// Submit each command in order, then wait until every deferred task fired
pub fn run_commands<S: AsRef<str>>(
    config: TerminalConfig,
    time: SharedTimeSource,
    commands: &[S],
) -> HeadlessRun {
    let mut session = TerminalSession::new(config, time.clone());
    let mut host = RecordingHost::new();

    session.seed_welcome_if_empty();
    for command in commands {
        session.submit(command.as_ref(), &mut host);
    }

    while let Some(due) = session.next_due() {
        let wait = due.saturating_duration_since(time.now());
        tracing::debug!("Waiting {:?} for deferred tasks", wait);
        time.sleep(wait);
        session.run_due_effects(&mut host);
    }

    HeadlessRun { session, host }
}

impl HeadlessRun {
    /// Scrollback rows as `[kind] text`, then one row per host request
    pub fn transcript(&self) -> Vec<String> {
        let mut out = Vec::new();
        for line in self.session.scrollback().lines() {
            for row in line.text().split('\n') {
                out.push(format!("[{}] {}", line.kind(), row));
            }
        }
        for effect in &self.host.effects {
            out.push(match effect {
                HostEffect::Close => "close".to_string(),
                HostEffect::Navigate(route) => format!("navigate {}", route.path()),
            });
        }
        out
    }
}
