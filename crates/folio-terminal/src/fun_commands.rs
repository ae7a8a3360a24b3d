//! Fun and utility commands: joke, fact, quiz, time, ps.

use rand::seq::SliceRandom;

use folio_types::error::Result;

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};
use crate::rich::{RichText, Span, Style};

/// Register the fun commands.
pub fn register_fun_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(JokeCmd));
    reg.register(Box::new(FactCmd));
    reg.register(Box::new(QuizCmd));
    reg.register(Box::new(TimeCmd));
    reg.register(Box::new(PsCmd));
}

// ---------------------------------------------------------------------------
// joke
// ---------------------------------------------------------------------------

const JOKES: &[&str] = &[
    "There are 10 kinds of people: those who understand binary and those who don't.",
    "A SQL query walks into a bar, walks up to two tables and asks: 'Can I join you?'",
    "Why do programmers prefer dark mode? Because light attracts bugs.",
    "I would tell you a UDP joke, but you might not get it.",
    "It works on my machine. Ship the machine.",
    "!false: it's funny because it's true.",
    "Debugging is like being the detective in a crime movie where you are also the murderer.",
];

struct JokeCmd;
impl Command for JokeCmd {
    fn name(&self) -> &str {
        "joke"
    }
    fn description(&self) -> &str {
        "Tell a programming joke"
    }
    fn usage(&self) -> &str {
        "joke"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let joke = JOKES.choose(&mut *env.rng).copied().unwrap_or_default();
        Ok(CommandOutput::Text(joke.to_string()))
    }
}

// ---------------------------------------------------------------------------
// fact
// ---------------------------------------------------------------------------

const FACTS: &[&str] = &[
    "The first computer bug was an actual moth, taped into a logbook in 1947.",
    "The first website ever published is still online at info.cern.ch.",
    "JavaScript was written in 10 days in 1995.",
    "The Apollo 11 guidance computer had about 4 KB of RAM.",
    "Git was written in about two weeks to host Linux kernel development.",
    "The term 'debugging' predates computers; engineers used it for hardware faults.",
    "Rust's mascot is an unofficial crab named Ferris.",
];

struct FactCmd;
impl Command for FactCmd {
    fn name(&self) -> &str {
        "fact"
    }
    fn description(&self) -> &str {
        "Share a random tech fact"
    }
    fn usage(&self) -> &str {
        "fact"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let fact = FACTS.choose(&mut *env.rng).copied().unwrap_or_default();
        let mut out = RichText::new();
        out.push([Span::accent("Did you know? "), Span::plain(fact)]);
        Ok(CommandOutput::Rich(out))
    }
}

// ---------------------------------------------------------------------------
// quiz
// ---------------------------------------------------------------------------

struct Question {
    prompt: &'static str,
    choices: [&'static str; 4],
    answer: usize,
}

const QUESTIONS: &[Question] = &[
    Question {
        prompt: "What does CSS stand for?",
        choices: [
            "Computer Style Sheets",
            "Cascading Style Sheets",
            "Creative Style System",
            "Colorful Style Syntax",
        ],
        answer: 1,
    },
    Question {
        prompt: "Which HTTP status code means 'Not Found'?",
        choices: ["200", "301", "404", "500"],
        answer: 2,
    },
    Question {
        prompt: "Which data structure uses LIFO order?",
        choices: ["Queue", "Stack", "Heap", "Tree"],
        answer: 1,
    },
    Question {
        prompt: "What does `git rebase` rewrite?",
        choices: ["Commit history", "The remote URL", "File permissions", "Nothing"],
        answer: 0,
    },
    Question {
        prompt: "In React, which hook holds component state?",
        choices: ["useEffect", "useMemo", "useRef", "useState"],
        answer: 3,
    },
];

struct QuizCmd;
impl Command for QuizCmd {
    fn name(&self) -> &str {
        "quiz"
    }
    fn description(&self) -> &str {
        "A quick tech trivia question"
    }
    fn usage(&self) -> &str {
        "quiz"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let mut out = RichText::new();
        let Some(q) = QUESTIONS.choose(&mut *env.rng) else {
            out.line(Style::Muted, "No questions today.");
            return Ok(CommandOutput::Rich(out));
        };
        out.line(Style::Heading, q.prompt);
        for (label, choice) in ['A', 'B', 'C', 'D'].iter().zip(q.choices) {
            out.push([Span::accent(format!("  {label}) ")), Span::plain(choice)]);
        }
        let letter = ['A', 'B', 'C', 'D'][q.answer];
        out.blank().push([
            Span::muted("Answer: "),
            Span::success(format!("{letter}) {}", q.choices[q.answer])),
        ]);
        Ok(CommandOutput::Rich(out))
    }
}

// ---------------------------------------------------------------------------
// time
// ---------------------------------------------------------------------------

struct TimeCmd;
impl Command for TimeCmd {
    fn name(&self) -> &str {
        "time"
    }
    fn description(&self) -> &str {
        "Show current time"
    }
    fn usage(&self) -> &str {
        "time"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let now = env.time.now()?;
        let greeting = match now.hour {
            5..=11 => "Good morning",
            12..=17 => "Good afternoon",
            _ => "Good evening",
        };
        let mut out = RichText::new();
        out.push([
            Span::plain("It is "),
            Span::accent(now.clock()),
            Span::plain(" UTC. "),
            Span::muted(format!("{greeting}!")),
        ]);
        Ok(CommandOutput::Rich(out))
    }
}

// ---------------------------------------------------------------------------
// ps
// ---------------------------------------------------------------------------

/// Fake process table: (pid, share of uptime in percent, command).
const PROCESSES: &[(u32, u64, &str)] = &[
    (1, 100, "portfolio --serve"),
    (42, 100, "curiosity"),
    (137, 35, "coffee-daemon"),
    (256, 20, "side-project --wip"),
    (404, 5, "free-time"),
];

/// `[H]H:MM:SS`.
fn format_duration(secs: u64) -> String {
    format!("{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

struct PsCmd;
impl Command for PsCmd {
    fn name(&self) -> &str {
        "ps"
    }
    fn description(&self) -> &str {
        "List running processes"
    }
    fn usage(&self) -> &str {
        "ps"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let uptime = env.time.uptime_secs()?;
        let mut out = RichText::new();
        out.line(Style::Heading, format!("{:>5}  {:>9}  CMD", "PID", "TIME"));
        for &(pid, share, cmd) in PROCESSES {
            out.push([
                Span::muted(format!("{pid:>5}  ")),
                Span::plain(format!("{:>9}  ", format_duration(uptime * share / 100))),
                Span::command(cmd),
            ]);
        }
        out.push([
            Span::muted(format!("{:>5}  ", 1337)),
            Span::plain(format!("{:>9}  ", format_duration(0))),
            Span::command("ps"),
        ]);
        Ok(CommandOutput::Rich(out))
    }
}
