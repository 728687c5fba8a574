use anyhow::{bail, Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{
    poll as event_poll, read as event_read, Event as CrosstermEvent, KeyEventKind,
};
use innohacks::app::App;
use innohacks::config::Config;
use innohacks::config_io::DirectoryContext;
use innohacks::headless;
use innohacks::services::log_dirs;
use innohacks::services::terminal_modes::{self, TerminalModes};
use innohacks::services::time_source::RealTimeSource;
use innohacks::services::tracing_setup;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// The InnoHacks 2.0 terminal
#[derive(Parser, Debug)]
#[command(name = "innohacks")]
#[command(about = "The InnoHacks 2.0 terminal: type 'help' to get started", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file (default: XDG state dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Print the directories used by InnoHacks and exit
    #[arg(long)]
    show_paths: bool,

    /// Run a command without the TUI and print the transcript. Repeatable.
    #[arg(short = 'c', long = "command", value_name = "CMD")]
    commands: Vec<String>,
}

fn load_config(args: &Args) -> AnyhowResult<Config> {
    if let Some(path) = &args.config {
        if !path.is_file() {
            bail!("Config file not found: {}", path.display());
        }
        return Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    let dir_context = DirectoryContext::from_system()?;
    let working_dir = std::env::current_dir().unwrap_or_default();
    Ok(Config::load_for_working_dir(&working_dir, &dir_context))
}

fn run_event_loop(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> AnyhowResult<()> {
    const FRAME_DURATION: Duration = Duration::from_millis(16); // 60fps
    const IDLE_POLL: Duration = Duration::from_millis(50);

    let mut last_render = Instant::now();
    let mut needs_render = true;

    loop {
        if app.tick() {
            needs_render = true;
        }

        if app.should_quit() {
            break;
        }

        if needs_render && last_render.elapsed() >= FRAME_DURATION {
            terminal.draw(|frame| app.render(frame))?;
            last_render = Instant::now();
            needs_render = false;
        }

        let mut timeout = if needs_render {
            FRAME_DURATION.saturating_sub(last_render.elapsed())
        } else {
            IDLE_POLL
        };
        if let Some(due) = app.next_wakeup() {
            timeout = timeout.min(due.saturating_duration_since(Instant::now()));
        }

        if !event_poll(timeout)? {
            continue;
        }

        match event_read()? {
            CrosstermEvent::Key(key_event) => {
                if key_event.kind == KeyEventKind::Press {
                    app.handle_key(key_event);
                    needs_render = true;
                }
            }
            CrosstermEvent::Paste(text) => {
                app.handle_paste(&text);
                needs_render = true;
            }
            CrosstermEvent::Resize(_, _) => {
                needs_render = true;
            }
            _ => {}
        }
    }

    Ok(())
}

fn run_tui(config: &Config) -> AnyhowResult<()> {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal_modes::emergency_cleanup();
        original_hook(panic);
    }));

    let mut terminal_modes = TerminalModes::enable().context("Failed to set up terminal")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let mut app = App::new(config, RealTimeSource::shared());
    let result = run_event_loop(&mut app, &mut terminal);
    app.shutdown();

    terminal_modes.undo();
    tracing::info!("Terminal closed");
    result
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    if args.show_paths {
        log_dirs::print_all_paths();
        return Ok(());
    }

    let log_file = args.log_file.clone().unwrap_or_else(log_dirs::main_log_path);
    if !tracing_setup::init_global(&log_file) {
        eprintln!("Warning: logging disabled");
    }
    log_dirs::cleanup_stale_logs();
    tracing::info!("InnoHacks terminal starting");

    let config = load_config(&args)?;

    if args.dump_config {
        let json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        println!("{}", json);
        return Ok(());
    }

    if !args.commands.is_empty() {
        let run = headless::run_commands(
            config.terminal.clone(),
            RealTimeSource::shared(),
            &args.commands,
        );
        for row in run.transcript() {
            println!("{}", row);
        }
        return Ok(());
    }

    run_tui(&config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        Args::parse_from(std::iter::once("innohacks").chain(extra.iter().copied()))
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = load_config(&args(&["--config", missing.to_str().unwrap()])).unwrap_err();
        assert!(err.to_string().starts_with("Config file not found"));
    }

    #[test]
    fn test_explicit_config_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"terminal": {"prompt": "hacker$"}}"#).unwrap();

        let config = load_config(&args(&["--config", path.to_str().unwrap()])).unwrap();
        assert_eq!(config.terminal.prompt, "hacker$");
    }

    #[test]
    fn test_repeated_command_flags() {
        let args = args(&["-c", "help", "--command", "exit"]);
        assert_eq!(args.commands, vec!["help", "exit"]);
    }
}
