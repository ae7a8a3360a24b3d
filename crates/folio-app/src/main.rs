//! Portfolio desktop entry point.
//!
//! Shows the portfolio page in the terminal window with the command-line
//! widget docked at the bottom. Ctrl+O (or F1) toggles the widget, Ctrl+N
//! minimizes it, Ctrl+T flips the theme, PageUp/PageDown scroll the page,
//! Ctrl+Q quits. Shortcuts are configurable.

mod input;
mod render;

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;
use crossterm::{ExecutableCommand, cursor, terminal};

use folio_content::resolve_content;
use folio_platform::DesktopClock;
use folio_terminal::{ShellEffect, TerminalShell};
use folio_types::config::TerminalConfig;

use input::AppInput;
use render::PageView;

/// Event poll interval; also the blink timer resolution.
const FRAME: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    init_logging();

    // Resolve config from CLI arg, FOLIO_CONFIG env var, or defaults.
    let config = match std::env::args()
        .nth(1)
        .or_else(|| std::env::var("FOLIO_CONFIG").ok())
    {
        Some(path) => TerminalConfig::load(&PathBuf::from(path))?,
        None => TerminalConfig::default(),
    };
    let content = resolve_content(config.content_path.as_deref())?;
    log::info!(
        "Starting portfolio for {} ({} skills, {} projects)",
        content.profile.name,
        content.skills.len(),
        content.projects.len(),
    );

    let mut shell = TerminalShell::new(config, content, Box::new(DesktopClock::new()));
    let mut view = PageView::new(shell.content());

    let _screen = ScreenGuard::acquire()?;
    let mut stdout = io::stdout();
    let mut last_tick = Instant::now();
    let mut dirty = true;

    'running: loop {
        if dirty {
            render::draw(&mut stdout, &shell, &view)?;
            dirty = false;
        }

        if event::poll(FRAME)? {
            match input::map_event(event::read()?) {
                Some(AppInput::Shell(ev)) => dirty |= shell.handle_event(&ev),
                Some(AppInput::Scroll(delta)) => {
                    view.scroll_by(delta);
                    dirty = true;
                },
                Some(AppInput::Redraw) => dirty = true,
                None => {},
            }
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last_tick).as_millis() as u64;
        last_tick = now;
        dirty |= shell.tick(elapsed);

        for effect in shell.drain_effects() {
            match effect {
                ShellEffect::ScrollTo(section) => view.scroll_to(section),
                ShellEffect::ThemeChanged(theme) => log::info!("Theme is now {theme}"),
                ShellEffect::Quit => break 'running,
            }
            dirty = true;
        }
    }

    log::info!("Shutting down");
    Ok(())
}

/// Send logs to the file named by `FOLIO_LOG`, else stderr.
fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = std::env::var_os("FOLIO_LOG") {
        match std::fs::File::create(&path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            },
            Err(e) => eprintln!("cannot open log file {}: {e}", path.to_string_lossy()),
        }
    }
    builder.init();
}

/// Raw mode plus alternate screen for the life of the guard.
struct ScreenGuard;

impl ScreenGuard {
    fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(terminal::EnterAlternateScreen)?;
        stdout.execute(cursor::Hide)?;
        stdout.execute(event::EnableFocusChange)?;
        Ok(Self)
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = stdout.execute(event::DisableFocusChange);
        let _ = stdout.execute(cursor::Show);
        let _ = stdout.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
