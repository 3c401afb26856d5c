use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{backend::TermionBackend, Terminal};
use std::io::{self, Write};
use termion::raw::IntoRawMode;
use termion::screen::IntoAlternateScreen;

use cursortrail::config::Config;
use cursortrail::history::NavigatorRegistry;
use cursortrail::input::InputHandler;
use cursortrail::ui::UI;
use cursortrail::viewer::{Buffer, Workspace};

/// cursortrail - cursor history navigation in a terminal file viewer
#[derive(Parser)]
#[command(name = "cursortrail")]
#[command(version)]
#[command(about = "Browse files with back/forward cursor history", long_about = None)]
struct Cli {
    /// Files to open, one tab each (omit to browse a sample document)
    files: Vec<String>,

    /// Maximum history entries per buffer (overrides config)
    #[arg(short = 'n', long)]
    max_history: Option<usize>,
}

/// Set up a panic hook that restores the terminal before displaying panic
/// information.
///
/// Without this, panic messages would be hidden or garbled by raw mode and
/// the alternate screen.
fn setup_panic_hook() {
    use std::panic;

    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = write!(io::stderr(), "{}", termion::screen::ToMainScreen);
        let _ = write!(io::stderr(), "{}", termion::cursor::Show);
        let _ = io::stderr().flush();

        default_panic(panic_info);
    }));
}

/// Builds a sample document for running without arguments.
fn sample_buffer() -> Buffer {
    let mut lines = Vec::with_capacity(200);
    lines.push("cursortrail demo".to_string());
    lines.push(String::new());
    lines.push("Move with hjkl or the arrow keys; Ctrl-d/Ctrl-u jump half a page,".to_string());
    lines.push("g/G jump to the top and bottom. Big jumps become history entries.".to_string());
    lines.push(String::new());
    lines.push("Ctrl-o  step back to a previous cursor position".to_string());
    lines.push("Ctrl-i  step forward again".to_string());
    lines.push("m       drop a waypoint at the cursor".to_string());
    lines.push("X       clear this buffer's history".to_string());
    lines.push("q       quit".to_string());
    lines.push(String::new());
    for i in lines.len()..200 {
        lines.push(format!("~ filler line {}", i + 1));
    }
    Buffer::from_lines("demo", lines)
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();
    let config = Config::load();

    let mut workspace = Workspace::new();
    if cli.files.is_empty() {
        workspace.add_buffer(sample_buffer());
    } else {
        for path in &cli.files {
            workspace.add_buffer(Buffer::from_file(path)?);
        }
    }

    let mut registry = NavigatorRegistry::from_config(&config);
    if let Some(max_history) = cli.max_history {
        registry.set_max_history(&mut workspace, max_history);
    }

    // Setup terminal
    let stdout = io::stdout()
        .into_raw_mode()
        .context("Failed to enable raw mode")?;
    let stdout = stdout
        .into_alternate_screen()
        .context("Failed to enter alternate screen")?;

    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut ui = UI::new(config.show_line_numbers);
    let mut input_handler = InputHandler::new();

    let result = run_event_loop(
        &mut terminal,
        &mut ui,
        &mut input_handler,
        &mut workspace,
        &mut registry,
    );

    // Return every anchor to the host before tearing the terminal down.
    registry.shutdown(&mut workspace);

    write!(terminal.backend_mut(), "{}", termion::cursor::Show)?;
    terminal.backend_mut().flush()?;

    result
}

fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    ui: &mut UI,
    input_handler: &mut InputHandler,
    workspace: &mut Workspace,
    registry: &mut NavigatorRegistry,
) -> Result<()> {
    loop {
        ui.render(terminal, workspace, registry)?;

        if let Some(event) = input_handler.poll_event()? {
            ui.clear_message();
            let outcome = input_handler.handle_event(event, workspace, registry)?;
            ui.set_message(outcome.message);
            if outcome.quit {
                break;
            }
        } else {
            break;
        }
    }

    Ok(())
}
