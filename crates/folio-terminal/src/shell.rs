//! Presentation shell: open/minimized/closed lifecycle, focus, key routing.
//!
//! The shell is the sole owner of the terminal session. Hosts feed it
//! [`InputEvent`]s, call [`TerminalShell::tick`] from their frame loop, and
//! drain [`ShellEffect`]s for anything that reaches outside the terminal
//! (page scrolling, theme propagation, quit).

use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::StdRng;

use folio_content::{Portfolio, Section};
use folio_platform::TimeService;
use folio_types::config::{Shortcuts, TerminalConfig};
use folio_types::input::{InputEvent, Key};
use folio_types::theme::Theme;

use crate::commands::register_builtins;
use crate::interpreter::{CommandRegistry, Environment};
use crate::palette::Palette;
use crate::rich::{RichText, Span, Style};
use crate::session::{Dispatch, Output, TerminalSession};

/// Lifecycle state of the terminal widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShellState {
    #[default]
    Closed,
    Open,
    /// Open but collapsed to its title bar; the session is kept.
    Minimized,
}

/// Side effect for the host to carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEffect {
    /// Scroll the page to a section.
    ScrollTo(Section),
    /// The presentation theme changed.
    ThemeChanged(Theme),
    /// The user asked to quit.
    Quit,
}

/// The terminal widget.
pub struct TerminalShell {
    config: TerminalConfig,
    shortcuts: Shortcuts,
    registry: CommandRegistry,
    content: Portfolio,
    clock: Box<dyn TimeService>,
    rng: Box<dyn RngCore>,
    session: TerminalSession,
    state: ShellState,
    theme: Theme,
    welcomed: bool,
    focused: bool,
    cursor_visible: bool,
    blink_elapsed: u64,
    effects: Vec<ShellEffect>,
}

impl TerminalShell {
    /// Create a closed shell. The registry is built once here.
    pub fn new(config: TerminalConfig, content: Portfolio, clock: Box<dyn TimeService>) -> Self {
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);
        let shortcuts = config.shortcuts.resolve();
        Self {
            shortcuts,
            registry,
            content,
            clock,
            rng: Box::new(StdRng::from_entropy()),
            session: TerminalSession::with_max_transcript(config.max_transcript),
            state: ShellState::Closed,
            theme: config.theme,
            welcomed: false,
            focused: false,
            cursor_visible: true,
            blink_elapsed: 0,
            effects: Vec::new(),
            config,
        }
    }

    /// Replace the random source (deterministic output in tests).
    pub fn with_rng(mut self, rng: Box<dyn RngCore>) -> Self {
        self.rng = rng;
        self
    }

    // -- Accessors ------------------------------------------------------------

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn session(&self) -> &TerminalSession {
        &self.session
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn content(&self) -> &Portfolio {
        &self.content
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    pub fn shortcuts(&self) -> Shortcuts {
        self.shortcuts
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Prompt prefix, e.g. `visitor@portfolio:~$`.
    pub fn prompt(&self) -> String {
        self.config.prompt()
    }

    /// Colors for the current theme.
    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.theme)
    }

    // -- Lifecycle ------------------------------------------------------------

    /// Open (or restore) the terminal and focus its input.
    ///
    /// The first open of a shell injects the welcome entry.
    pub fn open(&mut self) {
        if self.state == ShellState::Open {
            return;
        }
        log::info!("Terminal opened (was {:?})", self.state);
        self.state = ShellState::Open;
        self.focused = true;
        self.reset_blink();
        if !self.welcomed {
            self.welcomed = true;
            let welcome = self.welcome_output();
            let now = self.clock.now().unwrap_or_default();
            self.session.push_system(welcome, now);
        }
    }

    pub fn close(&mut self) {
        if self.state == ShellState::Closed {
            return;
        }
        log::info!("Terminal closed");
        self.state = ShellState::Closed;
        self.focused = false;
    }

    /// Closed opens; Open and Minimized close.
    pub fn toggle(&mut self) {
        match self.state {
            ShellState::Closed => self.open(),
            ShellState::Open | ShellState::Minimized => self.close(),
        }
    }

    pub fn minimize(&mut self) {
        if self.state == ShellState::Open {
            log::info!("Terminal minimized");
            self.state = ShellState::Minimized;
            self.focused = false;
        }
    }

    pub fn restore(&mut self) {
        if self.state == ShellState::Minimized {
            self.open();
        }
    }

    // -- Theme ----------------------------------------------------------------

    /// Switch theme. A change wipes transcript, recall buffer, cursor, and
    /// edit buffer. Returns whether the theme changed.
    pub fn set_theme(&mut self, theme: Theme) -> bool {
        if theme == self.theme {
            return false;
        }
        log::info!("Theme {} -> {theme}; resetting terminal session", self.theme);
        self.theme = theme;
        self.session.reset();
        self.effects.push(ShellEffect::ThemeChanged(theme));
        true
    }

    pub fn toggle_theme(&mut self) {
        self.set_theme(self.theme.toggled());
    }

    // -- Dispatch -------------------------------------------------------------

    /// Dispatch a line directly, bypassing the edit buffer.
    pub fn run(&mut self, line: &str) -> Dispatch {
        let mut env = Environment {
            theme: self.theme,
            user: &self.config.user,
            content: &self.content,
            time: self.clock.as_ref(),
            rng: self.rng.as_mut(),
        };
        let dispatch = self.session.run(line, &self.registry, &mut env);
        if let Dispatch::Navigate(section) = dispatch {
            self.effects.push(ShellEffect::ScrollTo(section));
        }
        dispatch
    }

    /// Dispatch the edit buffer (Enter).
    pub fn submit(&mut self) -> Dispatch {
        let line = self.session.input().to_string();
        self.run(&line)
    }

    /// Route one input event. Returns whether the shell consumed it.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Chord(chord) => {
                if *chord == self.shortcuts.toggle {
                    self.toggle();
                } else if *chord == self.shortcuts.minimize {
                    match self.state {
                        ShellState::Open => self.minimize(),
                        ShellState::Minimized => self.restore(),
                        ShellState::Closed => return false,
                    }
                } else if *chord == self.shortcuts.theme {
                    self.toggle_theme();
                } else if *chord == self.shortcuts.quit {
                    self.effects.push(ShellEffect::Quit);
                } else {
                    return false;
                }
                true
            },
            InputEvent::LauncherClick => {
                self.toggle();
                true
            },
            InputEvent::Quit => {
                self.effects.push(ShellEffect::Quit);
                true
            },
            InputEvent::FocusGained => {
                self.focused = self.state == ShellState::Open;
                self.focused
            },
            InputEvent::FocusLost => {
                let was = self.focused;
                self.focused = false;
                was
            },
            _ if !self.accepts_input() => false,
            InputEvent::TextInput(ch) => {
                self.session.insert_char(*ch);
                self.reset_blink();
                true
            },
            InputEvent::Backspace => {
                self.session.backspace();
                self.reset_blink();
                true
            },
            InputEvent::Key(Key::Enter) => {
                self.submit();
                self.reset_blink();
                true
            },
            InputEvent::Key(Key::Up) => {
                self.session.recall_previous();
                true
            },
            InputEvent::Key(Key::Down) => {
                self.session.recall_next();
                true
            },
            InputEvent::Key(Key::Tab) => {
                self.session.complete(&self.registry);
                true
            },
            InputEvent::Key(Key::Escape) => {
                self.minimize();
                true
            },
        }
    }

    /// Advance the cursor blink timer. Returns whether visibility flipped.
    pub fn tick(&mut self, elapsed_ms: u64) -> bool {
        let period = self.config.cursor_blink_ms;
        if period == 0 || self.state != ShellState::Open {
            return false;
        }
        self.blink_elapsed += elapsed_ms;
        let flips = self.blink_elapsed / period;
        self.blink_elapsed %= period;
        if flips % 2 == 1 {
            self.cursor_visible = !self.cursor_visible;
            true
        } else {
            false
        }
    }

    /// Take queued effects.
    pub fn drain_effects(&mut self) -> Vec<ShellEffect> {
        std::mem::take(&mut self.effects)
    }

    fn accepts_input(&self) -> bool {
        self.state == ShellState::Open && self.focused
    }

    fn reset_blink(&mut self) {
        self.cursor_visible = true;
        self.blink_elapsed = 0;
    }

    fn welcome_output(&self) -> Output {
        if let Some(text) = &self.config.welcome {
            return Output::Rich(RichText::from(text.as_str()));
        }
        let mut out = RichText::new();
        out.push([
            Span::plain("Welcome to "),
            Span::heading(&self.content.profile.name),
            Span::plain("'s portfolio terminal."),
        ])
        .push([
            Span::muted("Type "),
            Span::command("help"),
            Span::muted(" to see available commands."),
        ]);
        out.line(Style::Muted, format!("Press {} to close.", self.shortcuts.toggle));
        Output::Rich(out)
    }
}
