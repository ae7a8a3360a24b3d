//! Developer-flavoured commands: grep, git, sudo, npm.

use folio_types::error::{FolioError, Result};

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};
use crate::rich::{RichText, Span, Style};

/// Register the developer commands.
pub fn register_dev_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(GrepCmd));
    reg.register(Box::new(GitCmd));
    reg.register(Box::new(SudoCmd));
    reg.register(Box::new(NpmCmd));
}

// ---------------------------------------------------------------------------
// grep
// ---------------------------------------------------------------------------

struct GrepCmd;
impl Command for GrepCmd {
    fn name(&self) -> &str {
        "grep"
    }
    fn description(&self) -> &str {
        "Search skills and projects"
    }
    fn usage(&self) -> &str {
        "grep <term...>"
    }
    fn category(&self) -> &str {
        "dev"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let term = args.join(" ");
        if term.trim().is_empty() {
            return Err(FolioError::usage(self.usage()));
        }
        let results = env.content.search(&term);
        let mut out = RichText::new();
        if results.is_empty() {
            out.push([
                Span::muted("No matches for "),
                Span::accent(format!("'{term}'")),
                Span::muted("."),
            ]);
            return Ok(CommandOutput::Rich(out));
        }

        out.push([
            Span::plain(format!("{} match(es) for ", results.len())),
            Span::accent(format!("'{term}'")),
        ]);
        if !results.skills.is_empty() {
            out.blank().line(Style::Heading, "skills");
            for skill in &results.skills {
                out.push([
                    Span::plain(format!("  {}", skill.name)),
                    Span::muted(format!(" ({})", skill.category)),
                ]);
            }
        }
        if !results.projects.is_empty() {
            out.blank().line(Style::Heading, "projects");
            for project in &results.projects {
                out.push([
                    Span::plain(format!("  {}", project.title)),
                    Span::muted(format!(" [{}]", project.technologies.join(", "))),
                ]);
            }
        }
        Ok(CommandOutput::Rich(out))
    }
}

// ---------------------------------------------------------------------------
// git
// ---------------------------------------------------------------------------

const GIT_LOG: &[(&str, &str)] = &[
    ("a1f9c3e", "feat: ship the terminal easter egg"),
    ("7be20d4", "fix: center the hero on ultrawide screens"),
    ("4c81a0b", "perf: lazy-load the 3D scene"),
    ("e03d5f2", "chore: bump dependencies"),
    ("0000001", "initial commit: hello, world"),
];

struct GitCmd;
impl Command for GitCmd {
    fn name(&self) -> &str {
        "git"
    }
    fn description(&self) -> &str {
        "Version control, portfolio edition"
    }
    fn usage(&self) -> &str {
        "git <status|log>"
    }
    fn category(&self) -> &str {
        "dev"
    }
    fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        let Some(sub) = args.first() else {
            return Err(FolioError::usage(self.usage()));
        };
        let mut out = RichText::new();
        match sub.to_lowercase().as_str() {
            "status" => {
                out.line(Style::Plain, "On branch main")
                    .line(Style::Plain, "Your branch is up to date with 'origin/main'.")
                    .blank()
                    .line(Style::Plain, "Changes not staged for commit:")
                    .push([
                        Span::error("        modified:   "),
                        Span::error("career.ts"),
                    ])
                    .blank()
                    .line(Style::Muted, "no changes added to commit (open to offers)");
            },
            "log" => {
                for (hash, message) in GIT_LOG {
                    out.push([Span::warning(*hash), Span::plain(format!(" {message}"))]);
                }
            },
            _ => {
                return Err(FolioError::InvalidSubcommand {
                    command: "git".to_string(),
                    sub: (*sub).to_string(),
                });
            },
        }
        Ok(CommandOutput::Rich(out))
    }
}

// ---------------------------------------------------------------------------
// sudo
// ---------------------------------------------------------------------------

/// Canned replies keyed by the lower-cased command line after `sudo`.
const SUDO_REPLIES: &[(&str, &str)] = &[
    ("hire me", "Permission granted. Opening a line to the hiring manager..."),
    ("rm -rf /", "Nice try. This portfolio is immutable."),
    ("make me a sandwich", "Okay."),
    ("apt install coffee", "coffee is already the newest version."),
    ("su", "You are already as powerful as this terminal allows."),
    ("reboot", "Refusing to reboot a static website."),
];

struct SudoCmd;
impl Command for SudoCmd {
    fn name(&self) -> &str {
        "sudo"
    }
    fn description(&self) -> &str {
        "Run a command as superuser"
    }
    fn usage(&self) -> &str {
        "sudo <command...>"
    }
    fn category(&self) -> &str {
        "dev"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        if args.is_empty() {
            return Err(FolioError::usage(self.usage()));
        }
        let key = args.join(" ").to_lowercase();
        let mut out = RichText::new();
        match SUDO_REPLIES.iter().find(|(cmd, _)| *cmd == key) {
            Some((_, reply)) => {
                out.line(Style::Success, *reply);
            },
            None => {
                out.line(
                    Style::Error,
                    format!(
                        "{} is not in the sudoers file. This incident will be reported.",
                        env.user
                    ),
                );
            },
        }
        Ok(CommandOutput::Rich(out))
    }
}

// ---------------------------------------------------------------------------
// npm
// ---------------------------------------------------------------------------

/// Canned replies for `npm install <package>`.
const NPM_PACKAGES: &[(&str, &str)] = &[
    ("react", "already installed. Used daily since 2018."),
    ("typescript", "already installed. Strict mode enabled."),
    ("motivation", "added 1 package: unlimited supply, no vulnerabilities."),
    ("coffee", "added 1 package. Warning: peer dependency 'sleep' not met."),
    ("left-pad", "added 1 package. Some things never change."),
    ("jordan", "added 1 engineer. Run 'hire' to complete installation."),
];

struct NpmCmd;
impl Command for NpmCmd {
    fn name(&self) -> &str {
        "npm"
    }
    fn description(&self) -> &str {
        "Install packages (sort of)"
    }
    fn usage(&self) -> &str {
        "npm install <package>"
    }
    fn category(&self) -> &str {
        "dev"
    }
    fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        let (Some(sub), Some(package)) = (args.first(), args.get(1)) else {
            return Err(FolioError::usage(self.usage()));
        };
        if !matches!(sub.to_lowercase().as_str(), "install" | "i") {
            return Err(FolioError::usage(self.usage()));
        }
        let package = package.to_lowercase();
        let mut out = RichText::new();
        match NPM_PACKAGES.iter().find(|(name, _)| *name == package) {
            Some((_, reply)) => {
                out.push([Span::accent(package.clone()), Span::plain(format!(": {reply}"))]);
            },
            None => {
                out.push([
                    Span::error("npm ERR! 404 "),
                    Span::accent(format!("'{package}'")),
                    Span::error(" is not in this registry."),
                ]);
            },
        }
        Ok(CommandOutput::Rich(out))
    }
}
