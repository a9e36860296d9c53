//! Status icons for per-item lines.

use super::theme::Theme;

/// Canonical status kinds used for per-item output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed or item created.
    Success,
    /// Check failed.
    Failed,
    /// Item was left alone.
    Skipped,
    /// Non-fatal problem.
    Warning,
}

impl StatusKind {
    /// Unicode icon.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Skipped => "○",
            Self::Warning => "⚠",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &Theme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Skipped => theme.dim.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &Theme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }

    /// Format a status line without styling.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.icon(), msg)
    }
}

impl From<bool> for StatusKind {
    fn from(ok: bool) -> Self {
        if ok {
            Self::Success
        } else {
            Self::Failed
        }
    }
}
