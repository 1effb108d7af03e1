/*
Catppuccin palette subset

Latte: Peach fe640b, Green 40a02b, Lavender 7287fd, Text 4c4f69, Subtext 0 6c6f85, Overlay 0 9ca0b0,
Surface 1 bcc0cc, Surface 0 ccd0da, Base eff1f5

Mocha: Peach fab387, Green a6e3a1, Lavender b4befe, Text cdd6f4, Subtext 0 a6adc8, Overlay 0 6c7086,
Surface 1 45475a, Surface 0 313244, Base 1e1e2e
*/

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// Dark theme
    #[default]
    Mocha,
    /// Light theme
    Latte,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub peach: Color,
    pub green: Color,
    pub lavender: Color,
    pub text: Color,
    pub subtext0: Color,
    pub overlay0: Color,
    pub surface1: Color,
    pub surface0: Color,
    pub base: Color,
}

impl Theme {
    pub fn new(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Mocha => Self::mocha(),
            ThemeVariant::Latte => Self::latte(),
        }
    }

    fn mocha() -> Self {
        Self {
            peach: Color::Rgb(0xfa, 0xb3, 0x87),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            overlay0: Color::Rgb(0x6c, 0x70, 0x86),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            surface0: Color::Rgb(0x31, 0x32, 0x44),
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
        }
    }

    fn latte() -> Self {
        Self {
            peach: Color::Rgb(0xfe, 0x64, 0x0b),
            green: Color::Rgb(0x40, 0xa0, 0x2b),
            lavender: Color::Rgb(0x72, 0x87, 0xfd),
            text: Color::Rgb(0x4c, 0x4f, 0x69),
            subtext0: Color::Rgb(0x6c, 0x6f, 0x85),
            overlay0: Color::Rgb(0x9c, 0xa0, 0xb0),
            surface1: Color::Rgb(0xbc, 0xc0, 0xcc),
            surface0: Color::Rgb(0xcc, 0xd0, 0xda),
            base: Color::Rgb(0xef, 0xf1, 0xf5),
        }
    }

    // Offer figures and the selected tier
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.peach)
    }

    // Loading messages and completed stepper stages
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.green)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.subtext0)
    }

    pub fn heading_style(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn cursor_style(&self) -> Style {
        Style::default().bg(self.lavender).fg(self.base)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}
