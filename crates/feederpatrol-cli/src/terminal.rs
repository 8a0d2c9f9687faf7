//! Terminal styling and color detection.

/// ANSI escape codes used by the plan renderer.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for section headings.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary elements (line numbers, drone labels).
    pub const GRAY: &str = "\x1b[90m";
    /// Orange (256-color) for worst-path nodes.
    pub const ORANGE: &str = "\x1b[38;5;208m";
    /// Magenta for hand-off waypoints.
    pub const MAGENTA: &str = "\x1b[35m";
    /// Green for a complete plan.
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow for a partial plan.
    pub const YELLOW: &str = "\x1b[33m";
}

/// Resolved color codes, either ANSI sequences or empty strings when color
/// is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub heading: &'static str,
    pub muted: &'static str,
    pub worst: &'static str,
    pub handoff: &'static str,
    pub complete: &'static str,
    pub partial: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            heading: colors::WHITE_BOLD,
            muted: colors::GRAY,
            worst: colors::ORANGE,
            handoff: colors::MAGENTA,
            complete: colors::GREEN,
            partial: colors::YELLOW,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            heading: "",
            muted: "",
            worst: "",
            handoff: "",
            complete: "",
            partial: "",
        }
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// Honours `NO_COLOR` (https://no-color.org/) and `TERM=dumb`.
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
