//! Session harness: a terminal session wired to a recording host and a
//! controllable clock.

use innohacks::config::TerminalConfig;
use innohacks::host::RecordingHost;
use innohacks::model::LineKind;
use innohacks::services::time_source::TestTimeSource;
use innohacks::session::TerminalSession;
use std::sync::Arc;
use std::time::Duration;

pub struct TerminalHarness {
    pub session: TerminalSession,
    pub host: RecordingHost,
    pub time: Arc<TestTimeSource>,
}

impl TerminalHarness {
    pub fn new() -> Self {
        Self::with_config(TerminalConfig::default())
    }

    pub fn with_config(config: TerminalConfig) -> Self {
        let time = TestTimeSource::shared();
        Self {
            session: TerminalSession::new(config, time.clone()),
            host: RecordingHost::new(),
            time,
        }
    }

    /// A session with the welcome banner already shown
    pub fn seeded() -> Self {
        let mut harness = Self::new();
        harness.session.seed_welcome_if_empty();
        harness
    }

    pub fn submit(&mut self, input: &str) {
        self.session.submit(input, &mut self.host);
    }

    /// Type `text` into the pending input, then submit it
    pub fn type_and_submit(&mut self, text: &str) {
        self.session.input_mut().insert_str(text);
        self.session.submit_pending(&mut self.host);
    }

    pub fn len(&self) -> usize {
        self.session.scrollback().len()
    }

    pub fn texts(&self) -> Vec<String> {
        self.session
            .scrollback()
            .lines()
            .iter()
            .map(|l| l.text().to_string())
            .collect()
    }

    pub fn kinds(&self) -> Vec<LineKind> {
        self.session
            .scrollback()
            .lines()
            .iter()
            .map(|l| l.kind())
            .collect()
    }

    /// Advance the clock and fire whatever became due
    pub fn advance(&mut self, duration: Duration) -> usize {
        self.time.advance(duration);
        self.session.run_due_effects(&mut self.host)
    }

    pub fn advance_ms(&mut self, ms: u64) -> usize {
        self.advance(Duration::from_millis(ms))
    }
}
