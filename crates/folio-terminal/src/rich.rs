//! Styled terminal output.
//!
//! Commands describe *what* a fragment is (a heading, a link, an error) and
//! never which color it gets. Renderers map each [`Style`] through the
//! active [`Palette`](crate::Palette).

/// Semantic role of a text fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Style {
    #[default]
    Plain,
    Heading,
    Accent,
    Muted,
    Success,
    Warning,
    Error,
    Link,
    /// A command name the user can type.
    Command,
}

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(style: Style, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(Style::Plain, text)
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(Style::Heading, text)
    }

    pub fn accent(text: impl Into<String>) -> Self {
        Self::new(Style::Accent, text)
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self::new(Style::Muted, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Style::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Style::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Style::Error, text)
    }

    pub fn link(text: impl Into<String>) -> Self {
        Self::new(Style::Link, text)
    }

    pub fn command(text: impl Into<String>) -> Self {
        Self::new(Style::Command, text)
    }
}

/// One output line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichLine {
    pub spans: Vec<Span>,
}

impl RichLine {
    /// Concatenated text of every span.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// A block of styled lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichText {
    lines: Vec<RichLine>,
}

impl RichText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line made of `spans`.
    pub fn push(&mut self, spans: impl IntoIterator<Item = Span>) -> &mut Self {
        self.lines.push(RichLine {
            spans: spans.into_iter().collect(),
        });
        self
    }

    /// Append a single-style line.
    pub fn line(&mut self, style: Style, text: impl Into<String>) -> &mut Self {
        self.push([Span::new(style, text)])
    }

    /// Append an empty line.
    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(RichLine::default());
        self
    }

    pub fn lines(&self) -> &[RichLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text with styles stripped, lines joined by `\n`.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(RichLine::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        let mut out = Self::new();
        for line in text.lines() {
            out.line(Style::Plain, line);
        }
        out
    }
}
