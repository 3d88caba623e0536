//! Visual theme and styling.

use console::Style;

/// Terminal styles for setup output.
#[derive(Debug, Clone)]
pub struct SetupTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for box-drawing borders (dim).
    pub border: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
}

impl Default for SetupTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            border: Style::new().dim(),
            key: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            border: Style::new(),
            key: Style::new(),
        }
    }

    /// Colored theme unless colors are disabled for this process.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a skipped message (icon + text in dim).
    pub fn format_skipped(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(format!("○ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("◆"),
            self.highlight.apply_to(title)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = SetupTheme::plain().format_success("Complete");
        assert_eq!(msg, "✓ Complete");
    }

    #[test]
    fn theme_formats_warning() {
        let msg = SetupTheme::plain().format_warning("Caution");
        assert_eq!(msg, "⚠ Caution");
    }

    #[test]
    fn theme_formats_error() {
        let msg = SetupTheme::plain().format_error("Failed");
        assert_eq!(msg, "✗ Failed");
    }

    #[test]
    fn theme_formats_skipped() {
        let msg = SetupTheme::plain().format_skipped("Skipped");
        assert_eq!(msg, "○ Skipped");
    }

    #[test]
    fn theme_formats_header() {
        let msg = SetupTheme::plain().format_header("dnSpy setup");
        assert!(msg.contains("dnSpy setup"));
        assert!(msg.contains("◆"));
    }

    #[test]
    fn default_impl_matches_new() {
        let default = SetupTheme::default();
        let new = SetupTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
