//! Parrot/neon theme tokens for the seek bar demo.
//!
//! # Color Palette
//! - **Background**: Near-black / deep charcoal (base layer)
//! - **Accent**: Electric cyan (focus, filled track, thumb)
//! - **Positive**: Neon green (value above the reference)
//! - **Negative**: Hot pink (value below the reference)
//! - **Muted**: Steel blue (empty track, hints)

use std::cmp::Ordering;

use ratatui::style::{Color, Modifier, Style};

/// Parrot/neon theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Near-black background (primary surface)
    pub background: Color,
    /// Electric cyan accent (focus, filled track)
    pub accent: Color,
    /// Neon green (above reference)
    pub positive: Color,
    /// Hot pink (below reference)
    pub negative: Color,
    /// Neon orange (warnings)
    pub warning: Color,
    /// Steel blue (empty track, disabled)
    pub muted: Color,
    /// White (primary text)
    pub text_primary: Color,
    /// Light gray (secondary text)
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub fn parrot_neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Color for a value relative to a reference (above = green, below = pink).
    pub fn delta_color(&self, value: f32, reference: f32) -> Color {
        match value.partial_cmp(&reference) {
            Some(Ordering::Greater) => self.positive,
            Some(Ordering::Less) => self.negative,
            _ => self.accent,
        }
    }

    /// Filled part of the track.
    pub fn track_filled(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.text_secondary)
        }
    }

    /// Empty part of the track.
    pub fn track_empty(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn thumb(&self, focused: bool) -> Style {
        let style = Style::default().fg(self.text_primary);
        if focused {
            style.fg(self.accent).add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn label(&self) -> Style {
        Style::default().fg(self.text_primary)
    }
}

pub fn accent() -> Style {
    Style::default().fg(Theme::default().accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(Theme::default().muted)
}

pub fn warning() -> Style {
    Style::default().fg(Theme::default().warning)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}
