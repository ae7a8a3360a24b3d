//! Command trait, registry, tokenizer, and dispatch logic.
//!
//! Deliberately shallow: no quoting, pipes, variables, or aliases. A line is
//! a command name followed by whitespace-separated arguments.

use std::collections::{BTreeMap, HashMap};

use rand::RngCore;

use folio_content::{Portfolio, Section};
use folio_platform::TimeService;
use folio_types::error::{FolioError, Result};
use folio_types::theme::Theme;

use crate::rich::{RichText, Span, Style};

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Plain text lines.
    Text(String),
    /// Styled lines.
    Rich(RichText),
    /// Signal to wipe the transcript.
    Clear,
    /// Signal to scroll the page to a section.
    Navigate { section: Section },
}

/// Read-only context passed to every command.
pub struct Environment<'a> {
    /// Current presentation theme.
    pub theme: Theme,
    /// Visitor name (prompt user).
    pub user: &'a str,
    /// Static portfolio content.
    pub content: &'a Portfolio,
    /// Wall clock for date/time commands.
    pub time: &'a dyn TimeService,
    /// Randomness for jokes, facts, and quizzes.
    pub rng: &'a mut dyn RngCore,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "grep <term>").
    fn usage(&self) -> &str;

    /// Command category for grouping in `help` output.
    fn category(&self) -> &str {
        "general"
    }

    /// Execute the command with the given arguments and environment.
    ///
    /// Bad arguments are reported as `FolioError::Usage` or
    /// `FolioError::InvalidSubcommand`; the session renders them as output.
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput>;
}

/// Commands the registry answers itself because they need registry access.
const INTERCEPTED: [(&str, &str, &str, &str); 1] = [(
    "help",
    "List available commands, or describe one",
    "help [command]",
    "general",
)];

/// A resolved command name.
pub enum Resolved<'a> {
    /// A registered command.
    Command(&'a dyn Command),
    /// The registry's own `help`.
    Help,
}

/// Registry of available commands with dispatch.
///
/// Built once and read-only afterwards; command names are stored
/// lower-cased and looked up case-insensitively.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_lowercase(), cmd);
    }

    /// Exact, case-insensitive lookup, including `help`.
    pub fn lookup(&self, name: &str) -> Option<Resolved<'_>> {
        let lower = name.to_lowercase();
        if INTERCEPTED.iter().any(|(n, ..)| *n == lower) {
            return Some(Resolved::Help);
        }
        self.commands
            .get(lower.as_str())
            .map(|cmd| Resolved::Command(&**cmd))
    }

    /// Whether `name` resolves to a command.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Execute a tokenized command line.
    ///
    /// An unresolvable name yields `FolioError::UnknownCommand`.
    pub fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let args = inv.arg_refs();
        match self.lookup(&inv.name) {
            Some(Resolved::Command(cmd)) => cmd.execute(&args, env),
            Some(Resolved::Help) => self.execute_help(&args),
            None => Err(FolioError::UnknownCommand(inv.name.clone())),
        }
    }

    /// Built-in help with access to the registry.
    fn execute_help(&self, args: &[&str]) -> Result<CommandOutput> {
        if let Some(&name) = args.first() {
            let name_lower = name.to_lowercase();
            let entry = match self.commands.get(name_lower.as_str()) {
                Some(cmd) => Some((cmd.name(), cmd.description(), cmd.usage(), cmd.category())),
                None => INTERCEPTED.iter().find(|(n, ..)| *n == name_lower).copied(),
            };
            let Some((name, description, usage, category)) = entry else {
                return Err(FolioError::UnknownCommand(name.to_string()));
            };
            let mut out = RichText::new();
            out.push([Span::command(name), Span::muted(format!(" ({category})"))])
                .push([Span::plain(format!("  {description}"))])
                .push([Span::muted("  Usage: "), Span::accent(usage)]);
            return Ok(CommandOutput::Rich(out));
        }

        // Group commands by category.
        let mut categories: BTreeMap<&str, Vec<(&str, &str)>> = BTreeMap::new();
        for &(name, description, _, category) in &INTERCEPTED {
            categories
                .entry(category)
                .or_default()
                .push((name, description));
        }
        for cmd in self.commands.values() {
            categories
                .entry(cmd.category())
                .or_default()
                .push((cmd.name(), cmd.description()));
        }

        let total: usize = categories.values().map(Vec::len).sum();
        let mut out = RichText::new();
        out.line(Style::Heading, format!("Available commands ({total}):"));
        for (category, cmds) in &mut categories {
            cmds.sort_by_key(|(name, _)| *name);
            out.blank().line(Style::Accent, format!("  [{category}]"));
            for (name, description) in cmds.iter() {
                out.push([
                    Span::command(format!("    {name:12}")),
                    Span::plain(*description),
                ]);
            }
        }
        out.blank().push([
            Span::muted("Type "),
            Span::command("help <command>"),
            Span::muted(" for details. Tab completes, Up/Down recall history."),
        ]);
        Ok(CommandOutput::Rich(out))
    }

    /// Return every command name starting with `partial`, sorted.
    pub fn completions(&self, partial: &str) -> Vec<String> {
        let lower = partial.to_lowercase();
        let mut names: Vec<String> = self
            .commands
            .keys()
            .map(String::as_str)
            .chain(INTERCEPTED.iter().map(|(n, ..)| *n))
            .filter(|name| name.starts_with(&lower))
            .map(str::to_string)
            .collect();
        names.sort();
        names
    }

    /// Single-candidate expansion of the first token of `buffer`.
    ///
    /// Returns `candidate + " "` when exactly one command matches; `None`
    /// when zero or several do.
    pub fn complete(&self, buffer: &str) -> Option<String> {
        let partial = buffer.split_whitespace().next().unwrap_or("");
        let mut candidates = self.completions(partial);
        if candidates.len() == 1 {
            candidates.pop().map(|name| format!("{name} "))
        } else {
            None
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tokenizer: whitespace only, no quoting or escaping.
// ---------------------------------------------------------------------------

/// A tokenized command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Lower-cased command name.
    pub name: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn arg_refs(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}

/// Split a line on runs of whitespace.
///
/// Returns `None` for blank lines. The first token is lower-cased; the
/// arguments keep their case.
pub fn tokenize(line: &str) -> Option<Invocation> {
    let mut tokens = line.split_whitespace();
    let name = tokens.next()?.to_lowercase();
    Some(Invocation {
        name,
        args: tokens.map(str::to_string).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_platform::{FixedClock, SystemTime};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct EchoCmd;
    impl Command for EchoCmd {
        fn name(&self) -> &str {
            "echo"
        }
        fn description(&self) -> &str {
            "Print arguments"
        }
        fn usage(&self) -> &str {
            "echo <text...>"
        }
        fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
            Ok(CommandOutput::Text(args.join(" ")))
        }
    }

    struct AboutCmd;
    impl Command for AboutCmd {
        fn name(&self) -> &str {
            "About"
        }
        fn description(&self) -> &str {
            "Who I am"
        }
        fn usage(&self) -> &str {
            "about"
        }
        fn category(&self) -> &str {
            "info"
        }
        fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
            Ok(CommandOutput::Text("about me".to_string()))
        }
    }

    fn run(reg: &CommandRegistry, line: &str) -> Result<CommandOutput> {
        let content = Portfolio::builtin().unwrap();
        let clock = FixedClock::new(SystemTime::default());
        let mut rng = StdRng::seed_from_u64(7);
        let mut env = Environment {
            theme: Theme::Dark,
            user: "visitor",
            content: &content,
            time: &clock,
            rng: &mut rng,
        };
        let inv = tokenize(line).expect("non-blank line");
        reg.execute(&inv, &mut env)
    }

    fn registry() -> CommandRegistry {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoCmd));
        reg.register(Box::new(AboutCmd));
        reg
    }

    #[test]
    fn tokenize_collapses_whitespace() {
        let inv = tokenize(" help  about ").unwrap();
        assert_eq!(inv.name, "help");
        assert_eq!(inv.args, vec!["about"]);
    }

    #[test]
    fn tokenize_blank_is_none() {
        assert!(tokenize("").is_none());
        assert!(tokenize("   \t  ").is_none());
    }

    #[test]
    fn tokenize_lowercases_name_only() {
        let inv = tokenize("ECHO Hello World").unwrap();
        assert_eq!(inv.name, "echo");
        assert_eq!(inv.args, vec!["Hello", "World"]);
    }

    #[test]
    fn tokenize_no_quoting() {
        let inv = tokenize(r#"echo "a b""#).unwrap();
        assert_eq!(inv.args, vec!["\"a", "b\""]);
    }

    #[test]
    fn register_and_execute() {
        match run(&registry(), "echo hello world").unwrap() {
            CommandOutput::Text(s) => assert_eq!(s, "hello world"),
            other => panic!("expected text output, got {other:?}"),
        }
    }

    #[test]
    fn command_case_insensitive() {
        let reg = registry();
        assert_eq!(run(&reg, "HELP").unwrap(), run(&reg, "help").unwrap());
        assert_eq!(run(&reg, "about").unwrap(), run(&reg, "AbOuT").unwrap());
        assert!(reg.lookup("ECHO").is_some());
    }

    #[test]
    fn unknown_command_error_contains_name() {
        let err = run(&registry(), "frobnicate").unwrap_err();
        assert!(matches!(err, FolioError::UnknownCommand(ref n) if n == "frobnicate"));
    }

    #[test]
    fn lookup_is_exact() {
        let reg = registry();
        assert!(reg.lookup("ech").is_none());
        assert!(reg.lookup("echoo").is_none());
        assert!(reg.contains("help"));
        assert!(!reg.contains("hel"));
    }

    #[test]
    fn help_groups_by_category() {
        let CommandOutput::Rich(out) = run(&registry(), "help").unwrap() else {
            panic!("expected rich help");
        };
        let text = out.plain_text();
        assert!(text.contains("[general]"));
        assert!(text.contains("[info]"));
        assert!(text.contains("echo"));
        assert!(text.contains("Available commands (3)"));
        // BTreeMap keeps categories sorted.
        assert!(text.find("[general]").unwrap() < text.find("[info]").unwrap());
    }

    #[test]
    fn help_for_one_command() {
        let CommandOutput::Rich(out) = run(&registry(), "help Echo").unwrap() else {
            panic!("expected rich help");
        };
        let text = out.plain_text();
        assert!(text.contains("Print arguments"));
        assert!(text.contains("Usage: echo <text...>"));
    }

    #[test]
    fn help_for_unknown_command() {
        let err = run(&registry(), "help nope").unwrap_err();
        assert!(format!("{err}").contains("nope"));
    }

    #[test]
    fn completions_sorted_and_lowercased() {
        let reg = registry();
        let names = reg.completions("");
        assert_eq!(names, vec!["about", "echo", "help"]);
    }

    #[test]
    fn lookup_resolves_help() {
        let reg = registry();
        assert!(matches!(reg.lookup("help"), Some(Resolved::Help)));
        assert!(matches!(reg.lookup("HELP"), Some(Resolved::Help)));
        assert!(matches!(reg.lookup("Echo"), Some(Resolved::Command(cmd)) if cmd.name() == "echo"));
        assert!(reg.lookup("hel").is_none());
    }

    #[test]
    fn register_replaces_existing_command() {
        struct Loud;
        impl Command for Loud {
            fn name(&self) -> &str {
                "ECHO"
            }
            fn description(&self) -> &str {
                "Shout"
            }
            fn usage(&self) -> &str {
                "echo"
            }
            fn execute(&self, _: &[&str], _: &mut Environment<'_>) -> Result<CommandOutput> {
                Ok(CommandOutput::Text("LOUD".to_string()))
            }
        }
        let mut reg = registry();
        reg.register(Box::new(Loud));
        assert_eq!(run(&reg, "echo x").unwrap(), CommandOutput::Text("LOUD".into()));
        assert_eq!(reg.completions("").len(), 3);
    }

    #[test]
    fn completions_prefix() {
        let reg = registry();
        assert_eq!(reg.completions("E"), vec!["echo"]);
        assert_eq!(reg.completions("zz"), Vec::<String>::new());
        assert_eq!(reg.completions("").len(), 3);
    }

    #[test]
    fn complete_unique_candidate() {
        let reg = registry();
        assert_eq!(reg.complete("ab"), Some("about ".to_string()));
        assert_eq!(reg.complete("ec"), Some("echo ".to_string()));
    }

    #[test]
    fn complete_uses_first_token() {
        let reg = registry();
        assert_eq!(reg.complete("he extra words"), Some("help ".to_string()));
    }

    #[test]
    fn complete_ambiguous_or_empty_is_none() {
        let mut reg = registry();
        struct Autocomplete;
        impl Command for Autocomplete {
            fn name(&self) -> &str {
                "autocomplete"
            }
            fn description(&self) -> &str {
                ""
            }
            fn usage(&self) -> &str {
                "autocomplete"
            }
            fn execute(&self, _: &[&str], _: &mut Environment<'_>) -> Result<CommandOutput> {
                Ok(CommandOutput::Text(String::new()))
            }
        }
        reg.register(Box::new(Autocomplete));
        assert_eq!(reg.complete("a"), None);
        assert_eq!(reg.complete("x"), None);
        assert_eq!(reg.complete(""), None);
    }

    proptest! {
        #[test]
        fn tokenize_never_yields_empty_tokens(line in "[ \ta-zA-Z0-9]{0,40}") {
            match tokenize(&line) {
                None => prop_assert!(line.trim().is_empty()),
                Some(inv) => {
                    prop_assert!(!inv.name.is_empty());
                    prop_assert!(inv.args.iter().all(|a| !a.is_empty()));
                    prop_assert_eq!(inv.args.len() + 1, line.split_whitespace().count());
                },
            }
        }
    }
}
