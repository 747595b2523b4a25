//! Terminal styling and color utilities.
//!
//! ANSI escape codes, color detection, and a palette that resolves to empty
//! strings when color is disabled so renderers never branch on it.

use galaxy_forge_lib::{Habitability, StarType};

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for designations.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary elements (headers, separators).
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for distances and cool stars.
    pub const CYAN: &str = "\x1b[36m";
    /// Green for habitable planets.
    pub const GREEN: &str = "\x1b[32m";
    /// Blue for hot stars.
    pub const BLUE: &str = "\x1b[34m";
    /// Yellow for marginal habitability and sun-like stars.
    pub const YELLOW: &str = "\x1b[33m";
    /// Orange (256-color) for terraforming candidates.
    pub const ORANGE: &str = "\x1b[38;5;208m";
    /// Red for uninhabitable planets and red stars.
    pub const RED: &str = "\x1b[31m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
    pub blue: &'static str,
    pub yellow: &'static str,
    pub orange: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            cyan: colors::CYAN,
            green: colors::GREEN,
            blue: colors::BLUE,
            yellow: colors::YELLOW,
            orange: colors::ORANGE,
            red: colors::RED,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            white_bold: "",
            gray: "",
            cyan: "",
            green: "",
            blue: "",
            yellow: "",
            orange: "",
            red: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Palette for the `--no-color` flag, falling back to detection.
    #[must_use]
    pub fn for_flag(no_color: bool) -> Self {
        if no_color {
            Self::plain()
        } else {
            Self::detect()
        }
    }

    /// Color for a planet's habitability tier.
    #[must_use]
    pub fn habitability(&self, tier: Habitability) -> &'static str {
        match tier {
            Habitability::Yes => self.green,
            Habitability::Marginally => self.yellow,
            Habitability::Terraforming => self.orange,
            Habitability::Biosphere => self.cyan,
            Habitability::No => self.red,
        }
    }

    /// Rough visual color of a star class.
    #[must_use]
    pub fn star_type(&self, star_type: StarType) -> &'static str {
        match star_type {
            StarType::W | StarType::O | StarType::B => self.blue,
            StarType::A | StarType::F | StarType::D => self.white_bold,
            StarType::G => self.yellow,
            StarType::K => self.orange,
            StarType::M | StarType::C | StarType::S => self.red,
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// This function respects:
/// - The `NO_COLOR` environment variable (https://no-color.org/)
/// - The `TERM=dumb` convention for non-capable terminals
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Format a number with thousand separators (commas).
///
/// # Examples
///
/// ```
/// # use galaxy_forge_cli::terminal::format_with_separators;
/// assert_eq!(format_with_separators(999), "999");
/// assert_eq!(format_with_separators(1000), "1,000");
/// assert_eq!(format_with_separators(1234567), "1,234,567");
/// ```
#[must_use]
pub fn format_with_separators(n: u64) -> String {
    if n < 1000 {
        return n.to_string();
    }
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
