//! Terminal session state: transcript, recall buffer, and edit buffer.
//!
//! The session is the dispatcher's state. It owns no services; callers pass
//! a `CommandRegistry` and an `Environment` into [`TerminalSession::run`].

use folio_content::Section;
use folio_platform::SystemTime;
use folio_types::error::FolioError;

use crate::interpreter::{CommandOutput, CommandRegistry, Environment, tokenize};
use crate::rich::{RichText, Span};

/// Renderable result stored in the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Text(String),
    Rich(RichText),
}

impl Output {
    /// Text with styles stripped.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Rich(rich) => rich.plain_text(),
        }
    }
}

/// One record of interaction. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    /// Trimmed line as typed; empty for system-injected entries.
    pub input: String,
    pub output: Output,
    /// Capture time, for display only.
    pub timestamp: SystemTime,
}

/// What a call to [`TerminalSession::run`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Blank line; nothing changed.
    Ignored,
    /// An entry was appended (including unknown-command and usage messages).
    Appended,
    /// The transcript was wiped.
    Cleared,
    /// An entry was appended and the host should scroll to `Section`.
    Navigate(Section),
}

/// Effect of a recall-navigation step on the edit buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecallStep<'a> {
    /// Nothing to do.
    Unchanged,
    /// Show this history entry.
    Show(&'a str),
    /// Back to the live (empty) edit buffer.
    Live,
}

/// Previously submitted non-blank lines plus a navigation cursor.
///
/// `cursor == None` means "not recalling". Moving the cursor never changes
/// the stored entries; only `push` and `clear` do, and both reset it.
#[derive(Debug, Clone, Default)]
pub struct RecallBuffer {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl RecallBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line (duplicates allowed) and stop recalling.
    pub fn push(&mut self, line: &str) {
        self.entries.push(line.to_string());
        self.cursor = None;
    }

    /// Step back in history.
    pub fn previous(&mut self) -> RecallStep<'_> {
        if self.entries.is_empty() {
            return RecallStep::Unchanged;
        }
        let idx = match self.cursor {
            None => self.entries.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(idx);
        RecallStep::Show(&self.entries[idx])
    }

    /// Step forward in history, falling off the end back to the live buffer.
    pub fn next(&mut self) -> RecallStep<'_> {
        let Some(i) = self.cursor else {
            return RecallStep::Unchanged;
        };
        if i + 1 >= self.entries.len() {
            self.cursor = None;
            RecallStep::Live
        } else {
            self.cursor = Some(i + 1);
            RecallStep::Show(&self.entries[i + 1])
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}

/// Transcript, recall buffer, and live edit buffer of one terminal.
#[derive(Debug, Clone, Default)]
pub struct TerminalSession {
    transcript: Vec<TranscriptEntry>,
    recall: RecallBuffer,
    input: String,
    /// Transcript cap; 0 = unbounded.
    max_transcript: usize,
}

impl TerminalSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session that keeps at most `max` transcript entries.
    pub fn with_max_transcript(max: usize) -> Self {
        Self {
            max_transcript: max,
            ..Self::default()
        }
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn recall(&self) -> &RecallBuffer {
        &self.recall
    }

    /// The live edit buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn insert_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Dispatch one raw line.
    ///
    /// Blank lines are ignored. `clear` wipes the transcript and leaves the
    /// recall buffer alone. Everything else, unknown commands and usage
    /// errors included, becomes a transcript entry and a recall entry.
    pub fn run(
        &mut self,
        raw: &str,
        registry: &CommandRegistry,
        env: &mut Environment<'_>,
    ) -> Dispatch {
        let line = raw.trim();
        let Some(inv) = tokenize(line) else {
            return Dispatch::Ignored;
        };
        log::debug!("dispatch: {} ({} args)", inv.name, inv.args.len());

        let (output, dispatch) = match registry.execute(&inv, env) {
            Ok(CommandOutput::Clear) => {
                self.transcript.clear();
                self.input.clear();
                return Dispatch::Cleared;
            },
            Ok(CommandOutput::Text(text)) => (Output::Text(text), Dispatch::Appended),
            Ok(CommandOutput::Rich(rich)) => (Output::Rich(rich), Dispatch::Appended),
            Ok(CommandOutput::Navigate { section }) => {
                let mut out = RichText::new();
                out.push([
                    Span::success("Navigating to "),
                    Span::link(section.anchor()),
                    Span::success("..."),
                ]);
                (Output::Rich(out), Dispatch::Navigate(section))
            },
            Err(e) => (Output::Rich(error_output(&e)), Dispatch::Appended),
        };

        let timestamp = env.time.now().unwrap_or_default();
        self.push_entry(TranscriptEntry {
            input: line.to_string(),
            output,
            timestamp,
        });
        self.recall.push(line);
        self.input.clear();
        dispatch
    }

    /// Dispatch the live edit buffer.
    pub fn submit(&mut self, registry: &CommandRegistry, env: &mut Environment<'_>) -> Dispatch {
        let line = self.input.clone();
        self.run(&line, registry, env)
    }

    /// Append a system entry (empty input), e.g. the welcome banner.
    pub fn push_system(&mut self, output: Output, timestamp: SystemTime) {
        self.push_entry(TranscriptEntry {
            input: String::new(),
            output,
            timestamp,
        });
    }

    /// Up-arrow: show the previous history entry in the edit buffer.
    pub fn recall_previous(&mut self) {
        if let RecallStep::Show(line) = self.recall.previous() {
            self.input = line.to_string();
        }
    }

    /// Down-arrow: show the next entry, or return to an empty buffer.
    pub fn recall_next(&mut self) {
        match self.recall.next() {
            RecallStep::Show(line) => self.input = line.to_string(),
            RecallStep::Live => self.input.clear(),
            RecallStep::Unchanged => {},
        }
    }

    /// Tab: expand the edit buffer when exactly one command matches.
    pub fn complete(&mut self, registry: &CommandRegistry) -> bool {
        match registry.complete(&self.input) {
            Some(expanded) => {
                self.input = expanded;
                true
            },
            None => false,
        }
    }

    /// Drop transcript, recall buffer, cursor, and edit buffer.
    pub fn reset(&mut self) {
        self.transcript.clear();
        self.recall.clear();
        self.input.clear();
    }

    fn push_entry(&mut self, entry: TranscriptEntry) {
        self.transcript.push(entry);
        if self.max_transcript > 0 && self.transcript.len() > self.max_transcript {
            let overflow = self.transcript.len() - self.max_transcript;
            self.transcript.drain(0..overflow);
        }
    }
}

/// Render a command failure as transcript output.
fn error_output(err: &FolioError) -> RichText {
    let mut out = RichText::new();
    match err {
        FolioError::UnknownCommand(name) => {
            out.push([
                Span::error(format!("command not found: {name}")),
                Span::muted(". Type "),
                Span::command("help"),
                Span::muted(" to see available commands."),
            ]);
        },
        FolioError::Usage(_) => {
            out.push([Span::warning(err.to_string())]);
        },
        _ => {
            out.push([Span::error(err.to_string())]);
        },
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::register_builtins;
    use folio_content::Portfolio;
    use folio_platform::FixedClock;
    use folio_types::theme::Theme;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct Harness {
        registry: CommandRegistry,
        content: Portfolio,
        clock: FixedClock,
        rng: StdRng,
        session: TerminalSession,
    }

    impl Harness {
        fn new() -> Self {
            let mut registry = CommandRegistry::new();
            register_builtins(&mut registry);
            Self {
                registry,
                content: Portfolio::builtin().unwrap(),
                clock: FixedClock::new(SystemTime::from_unix_secs(1_700_000_000)),
                rng: StdRng::seed_from_u64(1),
                session: TerminalSession::new(),
            }
        }

        fn run(&mut self, line: &str) -> Dispatch {
            let mut env = Environment {
                theme: Theme::Dark,
                user: "visitor",
                content: &self.content,
                time: &self.clock,
                rng: &mut self.rng,
            };
            self.session.run(line, &self.registry, &mut env)
        }

        fn last_output(&self) -> String {
            self.session
                .transcript()
                .last()
                .expect("transcript entry")
                .output
                .plain_text()
        }
    }

    #[test]
    fn blank_input_is_noop() {
        let mut h = Harness::new();
        assert_eq!(h.run(""), Dispatch::Ignored);
        assert_eq!(h.run("   \t "), Dispatch::Ignored);
        assert!(h.session.transcript().is_empty());
        assert!(h.session.recall().is_empty());
    }

    #[test]
    fn entry_keeps_trimmed_original_case() {
        let mut h = Harness::new();
        assert_eq!(h.run("  WhoAmI  "), Dispatch::Appended);
        let entry = &h.session.transcript()[0];
        assert_eq!(entry.input, "WhoAmI");
        assert_eq!(entry.output.plain_text(), "visitor");
        assert_eq!(entry.timestamp, h.clock.now);
        assert_eq!(h.session.recall().entries(), ["WhoAmI"]);
    }

    #[test]
    fn case_insensitive_dispatch() {
        let mut h = Harness::new();
        h.run("HELP");
        let upper = h.last_output();
        h.run("help");
        assert_eq!(upper, h.last_output());
    }

    #[test]
    fn unknown_command_is_recorded() {
        let mut h = Harness::new();
        assert_eq!(h.run("frobnicate"), Dispatch::Appended);
        let text = h.last_output();
        assert!(text.contains("frobnicate"));
        assert!(text.contains("help"));
        assert_eq!(h.session.transcript().len(), 1);
        assert_eq!(h.session.recall().entries(), ["frobnicate"]);
    }

    #[test]
    fn usage_error_is_ordinary_output() {
        let mut h = Harness::new();
        h.run("grep");
        assert!(h.last_output().starts_with("usage: grep"));
        assert_eq!(h.session.recall().len(), 1);
    }

    #[test]
    fn history_round_trip() {
        let mut h = Harness::new();
        h.run("about");
        h.run("skills");
        h.session.recall_previous();
        assert_eq!(h.session.input(), "skills");
        h.session.recall_previous();
        assert_eq!(h.session.input(), "about");
        h.session.recall_next();
        assert_eq!(h.session.input(), "skills");
        h.session.recall_next();
        assert_eq!(h.session.input(), "");
        assert_eq!(h.session.recall().cursor(), None);
        assert_eq!(h.session.recall().entries(), ["about", "skills"]);
    }

    #[test]
    fn recall_previous_clamps_at_oldest() {
        let mut h = Harness::new();
        h.run("about");
        h.session.recall_previous();
        h.session.recall_previous();
        h.session.recall_previous();
        assert_eq!(h.session.input(), "about");
        assert_eq!(h.session.recall().cursor(), Some(0));
    }

    #[test]
    fn recall_on_empty_or_live_is_noop() {
        let mut h = Harness::new();
        h.session.set_input("draft");
        h.session.recall_previous();
        h.session.recall_next();
        assert_eq!(h.session.input(), "draft");
    }

    #[test]
    fn submitting_resets_cursor() {
        let mut h = Harness::new();
        h.run("about");
        h.session.recall_previous();
        assert_eq!(h.session.recall().cursor(), Some(0));
        let mut env = Environment {
            theme: Theme::Dark,
            user: "visitor",
            content: &h.content,
            time: &h.clock,
            rng: &mut h.rng,
        };
        assert_eq!(h.session.submit(&h.registry, &mut env), Dispatch::Appended);
        assert_eq!(h.session.recall().cursor(), None);
        assert_eq!(h.session.input(), "");
        assert_eq!(h.session.recall().entries(), ["about", "about"]);
    }

    #[test]
    fn clear_isolates_transcript() {
        let mut h = Harness::new();
        h.run("about");
        h.run("skills");
        h.run("nope");
        assert_eq!(h.run("clear"), Dispatch::Cleared);
        assert!(h.session.transcript().is_empty());
        assert_eq!(h.session.recall().entries(), ["about", "skills", "nope"]);
        h.session.recall_previous();
        assert_eq!(h.session.input(), "nope");
    }

    #[test]
    fn nav_reports_section() {
        let mut h = Harness::new();
        assert_eq!(h.run("nav projects"), Dispatch::Navigate(Section::Projects));
        assert!(h.last_output().contains("#projects"));
        assert_eq!(h.run("nav blog"), Dispatch::Appended);
        assert!(h.last_output().contains("blog"));
    }

    #[test]
    fn transcript_cap_drops_oldest() {
        let mut h = Harness::new();
        h.session = TerminalSession::with_max_transcript(2);
        h.run("echo one");
        h.run("echo two");
        h.run("echo three");
        let inputs: Vec<&str> = h
            .session
            .transcript()
            .iter()
            .map(|e| e.input.as_str())
            .collect();
        assert_eq!(inputs, vec!["echo two", "echo three"]);
        assert_eq!(h.session.recall().len(), 3);
    }

    #[test]
    fn complete_expands_unique_prefix() {
        let mut h = Harness::new();
        h.session.set_input("abo");
        assert!(h.session.complete(&h.registry));
        assert_eq!(h.session.input(), "about ");
        h.session.set_input("s");
        assert!(!h.session.complete(&h.registry));
        assert_eq!(h.session.input(), "s");
    }

    #[test]
    fn reset_clears_everything() {
        let mut h = Harness::new();
        h.run("about");
        h.session.recall_previous();
        h.session.reset();
        assert!(h.session.transcript().is_empty());
        assert!(h.session.recall().is_empty());
        assert_eq!(h.session.recall().cursor(), None);
        assert_eq!(h.session.input(), "");
    }

    #[test]
    fn system_entry_has_empty_input() {
        let mut session = TerminalSession::new();
        session.push_system(Output::Text("welcome".into()), SystemTime::default());
        assert_eq!(session.transcript()[0].input, "");
        assert!(session.recall().is_empty());
    }

    proptest! {
        #[test]
        fn navigation_never_mutates_buffer(
            lines in proptest::collection::vec("[a-z]{1,8}", 0..6),
            moves in proptest::collection::vec(any::<bool>(), 0..20),
        ) {
            let mut recall = RecallBuffer::new();
            for line in &lines {
                recall.push(line);
            }
            for up in moves {
                if up {
                    recall.previous();
                } else {
                    recall.next();
                }
                prop_assert_eq!(recall.entries(), lines.as_slice());
                if let Some(c) = recall.cursor() {
                    prop_assert!(c < lines.len());
                }
            }
        }
    }
}
