//! Interactive host application state
//!
//! `App` plays the page around the terminal: it tracks the current route,
//! owns the terminal window, turns key events into terminal operations and
//! carries out the close/navigate requests the interpreter makes.

use crate::config::Config;
use crate::host::TerminalHost;
use crate::input::key_handler::{self, KeyAction};
use crate::model::Route;
use crate::services::time_source::SharedTimeSource;
use crate::view::page::PageRenderer;
use crate::view::terminal_view::TerminalRenderer;
use crate::window::TerminalWindow;
use crossterm::event::KeyEvent;
use ratatui::Frame;
use std::time::Instant;

/// Host side of the interpreter seam
#[derive(Debug, Default)]
pub struct ShellState {
    route: Route,
    close_requested: bool,
}

impl ShellState {
    pub fn route(&self) -> Route {
        self.route
    }
}

impl TerminalHost for ShellState {
    fn request_close(&mut self) {
        self.close_requested = true;
    }

    fn request_navigate(&mut self, route: Route) {
        tracing::info!("Navigating from {} to {}", self.route, route);
        self.route = route;
    }
}

pub struct App {
    shell: ShellState,
    window: TerminalWindow,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config, time: SharedTimeSource) -> Self {
        let mut window = TerminalWindow::new(config.terminal.clone(), time);
        if config.terminal.start_open {
            window.open();
        }
        Self {
            shell: ShellState::default(),
            window,
            should_quit: false,
        }
    }

    pub fn route(&self) -> Route {
        self.shell.route
    }

    pub fn window(&self) -> &TerminalWindow {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut TerminalWindow {
        &mut self.window
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Handle one key press
    pub fn handle_key(&mut self, event: KeyEvent) {
        let action = key_handler::action_for_key(&event, self.window.is_expanded());
        tracing::trace!("Key {:?} -> {:?}", event, action);

        match action {
            KeyAction::Submit => {
                self.window.submit_pending(&mut self.shell);
                self.apply_host_requests();
            }
            KeyAction::RecallPrevious => {
                if let Some(session) = self.window.session_mut() {
                    session.recall_previous();
                }
            }
            KeyAction::RecallNext => {
                if let Some(session) = self.window.session_mut() {
                    session.recall_next();
                }
            }
            KeyAction::Edit(edit) => {
                if let Some(session) = self.window.session_mut() {
                    key_handler::apply_edit(session.input_mut(), edit);
                }
            }
            KeyAction::Minimize => self.window.minimize(),
            KeyAction::ToggleTerminal => {
                if self.window.is_open() && self.window.is_minimized() {
                    self.window.maximize();
                } else {
                    self.window.toggle();
                }
            }
            KeyAction::NextPage => self.shell.route = self.shell.route.next(),
            KeyAction::PreviousPage => self.shell.route = self.shell.route.previous(),
            KeyAction::Quit => self.quit(),
            KeyAction::Ignored => {}
        }
    }

    /// Insert pasted text into the pending input
    pub fn handle_paste(&mut self, text: &str) {
        if !self.window.is_expanded() {
            return;
        }
        if let Some(session) = self.window.session_mut() {
            session.input_mut().insert_str(text);
        }
    }

    /// Fire due deferred tasks. Returns true if any fired.
    pub fn tick(&mut self) -> bool {
        let fired = self.window.tick(&mut self.shell);
        if fired > 0 {
            self.apply_host_requests();
        }
        fired > 0
    }

    /// When `tick` next has work to do
    pub fn next_wakeup(&self) -> Option<Instant> {
        self.window.session().and_then(|s| s.next_due())
    }

    fn apply_host_requests(&mut self) {
        if std::mem::take(&mut self.shell.close_requested) {
            tracing::debug!("Closing terminal on request");
            self.window.close();
        }
    }

    /// Tear the session down before exit
    pub fn shutdown(&mut self) {
        self.window.teardown();
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let layout = PageRenderer::render(frame, area, self.route(), self.window.is_open());
        TerminalRenderer::render(frame, layout.body, &self.window);
    }
}
