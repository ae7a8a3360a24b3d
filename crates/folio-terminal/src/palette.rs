//! Theme palettes: semantic styles to concrete colors.

use folio_types::theme::Theme;

use crate::rich::Style;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colors for every [`Style`] plus the panel chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub heading: Color,
    pub accent: Color,
    pub muted: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub link: Color,
    pub command: Color,
    pub prompt: Color,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Color::rgb(0x0d, 0x11, 0x17),
        text: Color::rgb(0xe6, 0xed, 0xf3),
        heading: Color::rgb(0x79, 0xc0, 0xff),
        accent: Color::rgb(0xd2, 0xa8, 0xff),
        muted: Color::rgb(0x8b, 0x94, 0x9e),
        success: Color::rgb(0x3f, 0xb9, 0x50),
        warning: Color::rgb(0xd2, 0x99, 0x22),
        error: Color::rgb(0xf8, 0x51, 0x49),
        link: Color::rgb(0x58, 0xa6, 0xff),
        command: Color::rgb(0x56, 0xd3, 0x64),
        prompt: Color::rgb(0x3f, 0xb9, 0x50),
    };

    pub const LIGHT: Palette = Palette {
        background: Color::rgb(0xff, 0xff, 0xff),
        text: Color::rgb(0x1f, 0x23, 0x28),
        heading: Color::rgb(0x09, 0x69, 0xda),
        accent: Color::rgb(0x82, 0x50, 0xdf),
        muted: Color::rgb(0x65, 0x6d, 0x76),
        success: Color::rgb(0x1a, 0x7f, 0x37),
        warning: Color::rgb(0x9a, 0x67, 0x00),
        error: Color::rgb(0xcf, 0x22, 0x2e),
        link: Color::rgb(0x09, 0x69, 0xda),
        command: Color::rgb(0x11, 0x63, 0x29),
        prompt: Color::rgb(0x1a, 0x7f, 0x37),
    };

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::DARK,
            Theme::Light => Self::LIGHT,
        }
    }

    /// Color for a semantic style.
    pub fn color(&self, style: Style) -> Color {
        match style {
            Style::Plain => self.text,
            Style::Heading => self.heading,
            Style::Accent => self.accent,
            Style::Muted => self.muted,
            Style::Success => self.success,
            Style::Warning => self.warning,
            Style::Error => self.error,
            Style::Link => self.link,
            Style::Command => self.command,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_differ() {
        let dark = Palette::for_theme(Theme::Dark);
        let light = Palette::for_theme(Theme::Light);
        assert_ne!(dark.background, light.background);
        assert_ne!(dark.color(Style::Plain), light.color(Style::Plain));
    }

    #[test]
    fn every_style_maps() {
        let p = Palette::DARK;
        assert_eq!(p.color(Style::Error), p.error);
        assert_eq!(p.color(Style::Command), p.command);
        assert_eq!(p.color(Style::Plain), p.text);
    }
}
