use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{poll as event_poll, read as event_read, Event as CrosstermEvent, KeyEventKind};
use crossterm::terminal::SetTitle;
use crossterm::ExecutableCommand;
use ratatui::Terminal;
use scribe::app::Editor;
use scribe::config::Config;
use scribe::services::log_dirs;
use scribe::services::terminal_modes::{self, TerminalModes};
use scribe::services::tracing_setup;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

/// A minimal terminal text editor
#[derive(Parser, Debug)]
#[command(name = "scribe")]
#[command(about = "A minimal terminal text editor with undo/redo and find/replace", long_about = None)]
#[command(version)]
struct Args {
    /// File to open. A missing file is created on the first save.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for editor diagnostics
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Print the directories used by scribe and exit
    #[arg(long)]
    show_paths: bool,
}

fn load_config(args: &Args) -> AnyhowResult<Config> {
    match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::load_default()),
    }
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    // Handled before any terminal setup
    if args.show_paths {
        log_dirs::print_all_paths();
        return Ok(());
    }

    if args.dump_config {
        let config = load_config(&args)?;
        let json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        println!("{}", json);
        return Ok(());
    }

    let log_file = args.log_file.clone().unwrap_or_else(log_dirs::main_log_path);
    if let Err(e) = tracing_setup::init_global(&log_file) {
        eprintln!("Warning: logging disabled, cannot create {}: {}", log_file.display(), e);
    }
    log_dirs::cleanup_stale_logs();
    tracing::info!("Editor starting");

    let config = load_config(&args)?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal_modes::emergency_cleanup();
        original_hook(panic);
    }));

    let mut editor = Editor::new(config);
    if let Some(path) = &args.file {
        editor
            .open_initial_file(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
    }

    let mut modes = TerminalModes::enable().context("Failed to set up terminal")?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.clear()?;

    let result = run_event_loop(&mut editor, &mut terminal);

    modes.undo();
    tracing::info!("Editor exiting");
    result
}

fn run_event_loop(
    editor: &mut Editor,
    terminal: &mut Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>,
) -> AnyhowResult<()> {
    let mut needs_render = true;
    let mut shown_title = String::new();

    loop {
        if editor.should_quit() {
            break;
        }

        if needs_render {
            let title = editor.title();
            if title != shown_title {
                let _ = stdout().execute(SetTitle(&title));
                shown_title = title;
            }
            terminal.draw(|frame| editor.render(frame))?;
            needs_render = false;
        }

        if !event_poll(Duration::from_millis(250))? {
            continue;
        }

        match event_read()? {
            CrosstermEvent::Key(key_event) => {
                if key_event.kind == KeyEventKind::Press {
                    editor.handle_key(key_event);
                    needs_render = true;
                }
            }
            CrosstermEvent::Paste(text) => {
                editor.handle_paste(&text);
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
