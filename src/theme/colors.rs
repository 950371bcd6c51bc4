//! Color constants for the portfolio palette.

#![allow(dead_code)]

// === SURFACES ===
pub const BACKGROUND: &str = "#ffffff";
pub const SURFACE: &str = "#f8f9fa";
pub const BORDER: &str = "#e1e4e8";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#2c3e50";
pub const TEXT_SECONDARY: &str = "#5d6d7e";

// === ACCENT ===
pub const ACCENT: &str = "#3498db";
pub const ACCENT_DARK: &str = "#2980b9";

// === SEMANTIC (toast backgrounds) ===
pub const SUCCESS: &str = "#2ecc71";
pub const ERROR: &str = "#e74c3c";
pub const INFO: &str = "#3498db";

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Severity;

    #[test]
    fn toast_colors_match_severity() {
        assert_eq!(Severity::Success.color(), SUCCESS);
        assert_eq!(Severity::Error.color(), ERROR);
        assert_eq!(Severity::Info.color(), INFO);
    }
}
