//! Built-in terminal commands
//!
//! The command table is data: each entry pairs a lowercase name with a
//! description (shown by `help`) and a handler. Handlers are pure functions
//! that return the lines to print plus an optional action for the session to
//! carry out, so the table can be exercised without any UI.

use crate::config::TerminalConfig;
use crate::host::HostEffect;
use crate::model::{Route, ScrollbackLine};

/// What the session should do after printing a command's output
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CommandAction {
    #[default]
    None,
    /// Wipe the scrollback (echo included) and the pending input
    ClearScrollback,
    /// Ask the host to close the terminal right away
    Close,
    /// Ask the host to apply these effects after the configured delay
    Defer(Vec<HostEffect>),
}

/// Result of running a command handler
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    pub lines: Vec<ScrollbackLine>,
    pub action: CommandAction,
}

impl CommandOutput {
    pub fn line(line: ScrollbackLine) -> Self {
        Self {
            lines: vec![line],
            action: CommandAction::None,
        }
    }

    pub fn action(action: CommandAction) -> Self {
        Self {
            lines: Vec::new(),
            action,
        }
    }

    pub fn with_action(mut self, action: CommandAction) -> Self {
        self.action = action;
        self
    }
}

/// Data handed to command handlers
pub struct CommandContext<'a> {
    pub config: &'a TerminalConfig,
    pub registry: &'a CommandRegistry,
}

pub type CommandHandler = fn(&CommandContext<'_>) -> CommandOutput;

/// One entry of the command table
#[derive(Clone, Copy)]
pub struct CommandSpec {
    /// Lowercase command name
    pub name: &'static str,
    /// One-line description for `help`
    pub description: &'static str,
    pub handler: CommandHandler,
}

impl std::fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

const ABOUT_TEXT: &str = "InnoHacks 2.0 is India's premier inter-college hackathon. Join 500+ innovators for 24 hours of coding, creativity, and collaboration.";

/// The 2025 tracks, in display order
pub const TRACKS: [&str; 6] = [
    "AI/ML",
    "Web3 & Blockchain",
    "FinTech",
    "HealthTech",
    "EdTech",
    "Open Innovation",
];

/// The fixed command table, in `help` order
pub fn builtin_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec {
            name: "help",
            description: "Show this list",
            handler: help,
        },
        CommandSpec {
            name: "about",
            description: "About InnoHacks",
            handler: about,
        },
        CommandSpec {
            name: "tracks",
            description: "List 2025 tracks",
            handler: tracks,
        },
        CommandSpec {
            name: "register",
            description: "Registration link",
            handler: register,
        },
        CommandSpec {
            name: "clear",
            description: "Clear terminal",
            handler: clear,
        },
        CommandSpec {
            name: "whoami",
            description: "Current user info",
            handler: whoami,
        },
        CommandSpec {
            name: "exit",
            description: "Close terminal",
            handler: exit,
        },
    ]
}

fn help(ctx: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::line(ScrollbackLine::success(ctx.registry.help_text()))
}

fn about(_ctx: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::line(ScrollbackLine::info(ABOUT_TEXT))
}

fn tracks(_ctx: &CommandContext<'_>) -> CommandOutput {
    let mut text = String::from("2025 Tracks:");
    for track in TRACKS {
        text.push_str("\n  > ");
        text.push_str(track);
    }
    CommandOutput::line(ScrollbackLine::info(text))
}

fn register(_ctx: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::line(ScrollbackLine::warning("Navigating to registration page..."))
        .with_action(CommandAction::Defer(vec![
            HostEffect::Close,
            HostEffect::Navigate(Route::Register),
        ]))
}

fn clear(_ctx: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::action(CommandAction::ClearScrollback)
}

fn whoami(ctx: &CommandContext<'_>) -> CommandOutput {
    let identity = &ctx.config.identity;
    CommandOutput::line(ScrollbackLine::info(format!(
        "User: {}\nRole: {}\nStatus: {}",
        identity.user, identity.role, identity.status
    )))
}

fn exit(_ctx: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::action(CommandAction::Close)
}

/// Error line for input that matches no command. Keeps the casing as typed.
pub fn not_found(input: &str) -> ScrollbackLine {
    ScrollbackLine::error(format!(
        "Command not found: {input}. Type 'help' for available commands."
    ))
}

/// Lookup table from command name to handler
pub struct CommandRegistry {
    commands: Vec<CommandSpec>,
}

impl CommandRegistry {
    /// Width of the name column in `help`
    const HELP_NAME_WIDTH: usize = 10;

    /// Create a registry holding the built-in commands
    pub fn new() -> Self {
        Self::with_commands(builtin_commands())
    }

    /// Create a registry from an explicit table
    pub fn with_commands(commands: Vec<CommandSpec>) -> Self {
        Self { commands }
    }

    /// Find a command by name, ignoring case. The whole input must match;
    /// arguments are not supported.
    pub fn find(&self, input: &str) -> Option<&CommandSpec> {
        let name = input.to_lowercase();
        self.commands.iter().find(|c| c.name == name)
    }

    /// Run the handler for `input`, or produce the not-found error line
    pub fn dispatch(&self, input: &str, config: &TerminalConfig) -> CommandOutput {
        match self.find(input) {
            Some(spec) => {
                tracing::debug!("Dispatching terminal command '{}'", spec.name);
                let ctx = CommandContext {
                    config,
                    registry: self,
                };
                (spec.handler)(&ctx)
            }
            None => {
                tracing::debug!("Unknown terminal command '{}'", input);
                CommandOutput::line(not_found(input))
            }
        }
    }

    /// Command names in table order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|c| c.name)
    }

    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Multi-line listing of every command with its description
    pub fn help_text(&self) -> String {
        let mut text = String::from("Available commands:");
        for cmd in &self.commands {
            text.push_str(&format!(
                "\n  {:<width$}- {}",
                cmd.name,
                cmd.description,
                width = Self::HELP_NAME_WIDTH
            ));
        }
        text
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LineKind;

    fn run(input: &str) -> CommandOutput {
        CommandRegistry::new().dispatch(input, &TerminalConfig::default())
    }

    #[test]
    fn test_builtin_table() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["help", "about", "tracks", "register", "clear", "whoami", "exit"]
        );
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let registry = CommandRegistry::new();
        assert_eq!(registry.find("HELP").unwrap().name, "help");
        assert_eq!(registry.find("WhoAmI").unwrap().name, "whoami");
        assert!(registry.find("help me").is_none());
        assert!(registry.find("hel").is_none());
    }

    #[test]
    fn test_help_text_layout() {
        let out = run("help");
        assert_eq!(out.action, CommandAction::None);
        assert_eq!(out.lines.len(), 1);
        assert_eq!(out.lines[0].kind(), LineKind::Success);
        assert_eq!(
            out.lines[0].text(),
            "Available commands:\n  help      - Show this list\n  about     - About InnoHacks\n  tracks    - List 2025 tracks\n  register  - Registration link\n  clear     - Clear terminal\n  whoami    - Current user info\n  exit      - Close terminal"
        );
    }

    #[test]
    fn test_tracks_lists_six() {
        let out = run("tracks");
        let text = out.lines[0].text();
        assert!(text.starts_with("2025 Tracks:"));
        assert_eq!(text.matches("  > ").count(), 6);
        assert!(text.ends_with("  > Open Innovation"));
    }

    #[test]
    fn test_register_defers_close_then_navigate() {
        let out = run("register");
        assert_eq!(out.lines[0].kind(), LineKind::Warning);
        assert_eq!(out.lines[0].text(), "Navigating to registration page...");
        assert_eq!(
            out.action,
            CommandAction::Defer(vec![
                HostEffect::Close,
                HostEffect::Navigate(Route::Register)
            ])
        );
    }

    #[test]
    fn test_clear_and_exit_print_nothing() {
        let clear = run("clear");
        assert!(clear.lines.is_empty());
        assert_eq!(clear.action, CommandAction::ClearScrollback);

        let exit = run("exit");
        assert!(exit.lines.is_empty());
        assert_eq!(exit.action, CommandAction::Close);
    }

    #[test]
    fn test_whoami_uses_identity() {
        let mut config = TerminalConfig::default();
        config.identity.user = "Ada".to_string();
        let out = CommandRegistry::new().dispatch("whoami", &config);
        assert_eq!(
            out.lines[0].text(),
            "User: Ada\nRole: Participant\nStatus: Ready to Innovate"
        );
    }

    #[test]
    fn test_unknown_keeps_typed_case() {
        let out = run("Sudo Make-Me-A-Sandwich");
        assert_eq!(out.lines.len(), 1);
        assert_eq!(out.lines[0].kind(), LineKind::Error);
        assert_eq!(
            out.lines[0].text(),
            "Command not found: Sudo Make-Me-A-Sandwich. Type 'help' for available commands."
        );
    }

    #[test]
    fn test_custom_table() {
        fn ping(_ctx: &CommandContext<'_>) -> CommandOutput {
            CommandOutput::line(ScrollbackLine::success("pong"))
        }

        let registry = CommandRegistry::with_commands(vec![CommandSpec {
            name: "ping",
            description: "Reply with pong",
            handler: ping,
        }]);
        assert_eq!(registry.len(), 1);
        let out = registry.dispatch("PING", &TerminalConfig::default());
        assert_eq!(out.lines[0].text(), "pong");
        assert_eq!(registry.help_text(), "Available commands:\n  ping      - Reply with pong");
        let help = registry.dispatch("help", &TerminalConfig::default());
        assert_eq!(help.lines[0].kind(), LineKind::Error);
    }
}
