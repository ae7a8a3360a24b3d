//! Built-in commands for the portfolio terminal.

use folio_content::Section;
use folio_types::error::{FolioError, Result};

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};
use crate::rich::{RichText, Span, Style};

/// Register all built-in commands into a registry.
///
/// `help` is answered by the registry itself and is not registered here.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(EchoCmd));
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(PwdCmd));
    reg.register(Box::new(LsCmd));
    reg.register(Box::new(DateCmd));
    reg.register(Box::new(ThemeCmd));
    reg.register(Box::new(NavCmd));
    crate::info_commands::register_info_commands(reg);
    crate::dev_commands::register_dev_commands(reg);
    crate::fun_commands::register_fun_commands(reg);
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear the terminal"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Print text"
    }
    fn usage(&self) -> &str {
        "echo <text...>"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        if args.is_empty() {
            return Err(FolioError::usage(self.usage()));
        }
        Ok(CommandOutput::Text(args.join(" ")))
    }
}

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Print the current user"
    }
    fn usage(&self) -> &str {
        "whoami"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(env.user.to_string()))
    }
}

// ---------------------------------------------------------------------------
// pwd
// ---------------------------------------------------------------------------

struct PwdCmd;
impl Command for PwdCmd {
    fn name(&self) -> &str {
        "pwd"
    }
    fn description(&self) -> &str {
        "Print working directory"
    }
    fn usage(&self) -> &str {
        "pwd"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(format!("/home/{}/portfolio", env.user)))
    }
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "List portfolio sections"
    }
    fn usage(&self) -> &str {
        "ls"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let mut spans: Vec<Span> = Section::ALL
            .iter()
            .filter(|s| **s != Section::Home)
            .map(|s| Span::link(format!("{}/  ", s.id())))
            .collect();
        if env.content.profile.resume_url.is_some() {
            spans.push(Span::plain("resume.pdf  "));
        }
        spans.push(Span::plain("README.md"));
        let mut out = RichText::new();
        out.push(spans);
        Ok(CommandOutput::Rich(out))
    }
}

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Print the current date and time"
    }
    fn usage(&self) -> &str {
        "date"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let now = env.time.now()?;
        Ok(CommandOutput::Text(now.long_format()))
    }
}

// ---------------------------------------------------------------------------
// theme
// ---------------------------------------------------------------------------

struct ThemeCmd;
impl Command for ThemeCmd {
    fn name(&self) -> &str {
        "theme"
    }
    fn description(&self) -> &str {
        "Show the current color theme"
    }
    fn usage(&self) -> &str {
        "theme"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let mut out = RichText::new();
        out.push([
            Span::plain("Current theme: "),
            Span::accent(env.theme.to_string()),
        ])
        .line(
            Style::Muted,
            "Use the theme toggle to switch. Switching resets the terminal.",
        );
        Ok(CommandOutput::Rich(out))
    }
}

// ---------------------------------------------------------------------------
// nav
// ---------------------------------------------------------------------------

struct NavCmd;
impl Command for NavCmd {
    fn name(&self) -> &str {
        "nav"
    }
    fn description(&self) -> &str {
        "Scroll the page to a section"
    }
    fn usage(&self) -> &str {
        "nav <section>"
    }
    fn category(&self) -> &str {
        "navigation"
    }
    fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        let Some(target) = args.first() else {
            return Err(FolioError::usage(format!(
                "nav <section> (one of: {})",
                Section::valid_ids()
            )));
        };
        let section: Section = target.parse()?;
        Ok(CommandOutput::Navigate { section })
    }
}
