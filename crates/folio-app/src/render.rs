//! Drawing the page and the terminal widget with crossterm.

use std::io::{self, Write};

use crossterm::QueueableCommand;
use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};

use folio_content::{Portfolio, Section};
use folio_terminal::{Output, Palette, RichLine, RichText, ShellState, Span, Style, TerminalShell};

fn to_color(color: folio_terminal::Color) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

// ---------------------------------------------------------------------------
// Page view
// ---------------------------------------------------------------------------

/// The portfolio page rendered as styled lines, with a scroll position.
pub struct PageView {
    page: RichText,
    anchors: Vec<(Section, usize)>,
    scroll: usize,
}

impl PageView {
    pub fn new(content: &Portfolio) -> Self {
        let mut page = RichText::new();
        let mut anchors = Vec::with_capacity(Section::ALL.len());
        for section in Section::ALL {
            anchors.push((section, page.lines().len()));
            render_section(&mut page, section, content);
            page.blank();
        }
        Self {
            page,
            anchors,
            scroll: 0,
        }
    }

    /// First visible line.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Line offset of a section heading.
    pub fn anchor(&self, section: Section) -> usize {
        self.anchors
            .iter()
            .find(|(s, _)| *s == section)
            .map_or(0, |(_, line)| *line)
    }

    pub fn scroll_to(&mut self, section: Section) {
        self.scroll = self.anchor(section);
        log::debug!("Page scrolled to {section} (line {})", self.scroll);
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.page.lines().len().saturating_sub(1);
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
    }

    /// Up to `rows` lines starting at the scroll position.
    pub fn visible(&self, rows: usize) -> &[RichLine] {
        let lines = self.page.lines();
        let start = self.scroll.min(lines.len());
        let end = (start + rows).min(lines.len());
        &lines[start..end]
    }
}

fn render_section(page: &mut RichText, section: Section, content: &Portfolio) {
    let profile = &content.profile;
    match section {
        Section::Home => {
            page.line(Style::Heading, &profile.name)
                .line(Style::Accent, &profile.title)
                .line(Style::Muted, &profile.location);
        },
        Section::About => {
            page.line(Style::Heading, "## About");
            for paragraph in &profile.bio {
                page.line(Style::Plain, paragraph);
            }
        },
        Section::Skills => {
            page.line(Style::Heading, "## Skills");
            for category in content.skill_categories() {
                let names: Vec<&str> = content
                    .skills_in(category)
                    .map(|s| s.name.as_str())
                    .collect();
                page.push([
                    Span::accent(format!("{category}: ")),
                    Span::plain(names.join(", ")),
                ]);
            }
        },
        Section::Experience => {
            page.line(Style::Heading, "## Experience");
            for job in &content.experience {
                page.push([
                    Span::plain(format!("{} @ {}", job.role, job.company)),
                    Span::muted(format!("  {}", job.period)),
                ]);
            }
        },
        Section::Projects => {
            page.line(Style::Heading, "## Projects");
            for project in &content.projects {
                page.push([
                    Span::accent(&project.title),
                    Span::plain(format!(" -- {}", project.description)),
                ]);
            }
        },
        Section::Contact => {
            page.line(Style::Heading, "## Contact")
                .push([Span::link(&profile.email)]);
            if let Some(github) = &profile.github {
                page.push([Span::link(github)]);
            }
        },
    }
}

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

/// Draw one full frame: page, then the terminal in its current state.
pub fn draw<W: Write>(out: &mut W, shell: &TerminalShell, view: &PageView) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let palette = shell.palette();
    out.queue(SetBackgroundColor(to_color(palette.background)))?
        .queue(Clear(ClearType::All))?;

    let panel_rows = match shell.state() {
        ShellState::Open => rows.saturating_mul(3) / 5,
        ShellState::Minimized | ShellState::Closed => 1,
    };
    let page_rows = rows.saturating_sub(panel_rows);
    for (i, line) in view.visible(usize::from(page_rows)).iter().enumerate() {
        out.queue(MoveTo(0, i as u16))?;
        draw_spans(out, &line.spans, &palette, usize::from(cols))?;
    }

    let shortcuts = shell.shortcuts();
    match shell.state() {
        ShellState::Closed => {
            let bar = [
                Span::command(format!("[{}]", shortcuts.toggle)),
                Span::muted(" open terminal  "),
                Span::command("[PgUp/PgDn]"),
                Span::muted(" scroll"),
            ];
            out.queue(MoveTo(0, rows.saturating_sub(1)))?;
            draw_spans(out, &bar, &palette, usize::from(cols))?;
        },
        ShellState::Minimized => {
            let bar = [
                Span::accent(format!("_ {} ", shell.prompt())),
                Span::muted("terminal minimized  "),
                Span::command(format!("[{}]", shortcuts.minimize)),
                Span::muted(" restore"),
            ];
            out.queue(MoveTo(0, rows.saturating_sub(1)))?;
            draw_spans(out, &bar, &palette, usize::from(cols))?;
        },
        ShellState::Open => draw_panel(out, shell, &palette, page_rows, cols, panel_rows)?,
    }
    out.flush()
}

/// One visual row of the terminal panel.
enum Row<'a> {
    /// A submitted line echoed after the prompt.
    Echo(&'a str),
    Rich(&'a RichLine),
    Text(&'a str),
}

fn draw_panel<W: Write>(
    out: &mut W,
    shell: &TerminalShell,
    palette: &Palette,
    top: u16,
    cols: u16,
    height: u16,
) -> io::Result<()> {
    let width = usize::from(cols);
    let shortcuts = shell.shortcuts();
    let title = format!(
        "-- terminal -- [{}] minimize [{}] close [{}] theme ",
        shortcuts.minimize, shortcuts.toggle, shortcuts.theme
    );
    out.queue(MoveTo(0, top))?;
    draw_spans(
        out,
        &[Span::muted(format!("{title:-<width$}"))],
        palette,
        width,
    )?;

    let mut rows = Vec::new();
    for entry in shell.session().transcript() {
        if !entry.input.is_empty() {
            rows.push(Row::Echo(&entry.input));
        }
        match &entry.output {
            Output::Text(text) => rows.extend(text.lines().map(Row::Text)),
            Output::Rich(rich) => rows.extend(rich.lines().iter().map(Row::Rich)),
        }
    }

    // Title bar and live prompt take one row each.
    let body = usize::from(height.saturating_sub(2));
    let skip = rows.len().saturating_sub(body);
    let prompt = shell.prompt();
    let mut y = top + 1;
    for row in rows.iter().skip(skip) {
        out.queue(MoveTo(0, y))?;
        match row {
            Row::Echo(input) => draw_prompt(out, palette, &prompt, input, width)?,
            Row::Rich(line) => draw_spans(out, &line.spans, palette, width)?,
            Row::Text(text) => draw_spans(out, &[Span::plain(*text)], palette, width)?,
        }
        y += 1;
    }

    out.queue(MoveTo(0, y))?;
    let cursor = if shell.cursor_visible() { "_" } else { " " };
    let live = format!("{}{cursor}", shell.session().input());
    draw_prompt(out, palette, &prompt, &live, width)
}

fn draw_prompt<W: Write>(
    out: &mut W,
    palette: &Palette,
    prompt: &str,
    input: &str,
    width: usize,
) -> io::Result<()> {
    out.queue(SetForegroundColor(to_color(palette.prompt)))?;
    let used = print_clipped(out, prompt, width)?;
    out.queue(SetForegroundColor(to_color(palette.text)))?;
    print_clipped(out, &format!(" {input}"), width.saturating_sub(used))?;
    Ok(())
}

fn draw_spans<W: Write>(
    out: &mut W,
    spans: &[Span],
    palette: &Palette,
    width: usize,
) -> io::Result<()> {
    let mut remaining = width;
    for span in spans {
        if remaining == 0 {
            break;
        }
        out.queue(SetForegroundColor(to_color(palette.color(span.style))))?;
        remaining -= print_clipped(out, &span.text, remaining)?;
    }
    Ok(())
}

/// Print at most `max` characters; returns how many were printed.
fn print_clipped<W: Write>(out: &mut W, text: &str, max: usize) -> io::Result<usize> {
    let clipped: String = text.chars().take(max).collect();
    let count = clipped.chars().count();
    out.queue(Print(clipped))?;
    Ok(count)
}
