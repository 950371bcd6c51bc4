//! Site configuration: animation timings and layout offsets.
//!
//! Every field has a default matching the site's stylesheet transitions, so
//! a config file only needs the keys it wants to change:
//!
//! ```json
//! { "notifications": { "display_ms": 8000 } }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// Top-level configuration for a [`Page`](crate::Page).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub notifications: NotificationTimings,
    pub portfolio: FadeTimings,
    pub contact: ContactTimings,
    pub scroll: ScrollConfig,
    pub skills: SkillConfig,
}

impl SiteConfig {
    /// Parse a JSON config; missing keys keep their defaults
    pub fn from_json_str(json: &str) -> FolioResult<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file from disk
    pub fn load(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "Loaded site config");
        Ok(config)
    }

    /// Reject values that would make timelines or layout maths meaningless
    pub fn validate(&self) -> FolioResult<()> {
        if self.notifications.display.is_zero() {
            return Err(FolioError::Config(
                "notifications.display_ms must be greater than zero".to_string(),
            ));
        }
        if self.notifications.show_delay >= self.notifications.display {
            return Err(FolioError::Config(format!(
                "notifications.show_delay_ms ({}) must be less than display_ms ({})",
                self.notifications.show_delay.as_millis(),
                self.notifications.display.as_millis()
            )));
        }
        if !(self.skills.reveal_ratio.is_finite() && self.skills.reveal_ratio > 0.0) {
            return Err(FolioError::Config(format!(
                "skills.reveal_ratio must be a positive number (got {})",
                self.skills.reveal_ratio
            )));
        }
        if !(self.scroll.header_offset >= 0.0 && self.scroll.spy_offset >= 0.0) {
            return Err(FolioError::Config(
                "scroll offsets must be non-negative".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> FolioResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Toast lifecycle timings.
///
/// A toast becomes visible `show_delay` after creation, starts hiding
/// `display` after creation and is removed `exit` after it starts hiding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationTimings {
    #[serde(rename = "show_delay_ms", with = "millis")]
    pub show_delay: Duration,
    #[serde(rename = "display_ms", with = "millis")]
    pub display: Duration,
    #[serde(rename = "exit_ms", with = "millis")]
    pub exit: Duration,
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self {
            show_delay: Duration::from_millis(100),
            display: Duration::from_millis(5000),
            exit: Duration::from_millis(300),
        }
    }
}

/// Portfolio filter fade timings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeTimings {
    #[serde(rename = "fade_in_ms", with = "millis")]
    pub fade_in: Duration,
    #[serde(rename = "fade_out_ms", with = "millis")]
    pub fade_out: Duration,
}

impl Default for FadeTimings {
    fn default() -> Self {
        Self {
            fade_in: Duration::from_millis(50),
            fade_out: Duration::from_millis(300),
        }
    }
}

/// Simulated contact form delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactTimings {
    #[serde(rename = "send_delay_ms", with = "millis")]
    pub send_delay: Duration,
}

impl Default for ContactTimings {
    fn default() -> Self {
        Self {
            send_delay: Duration::from_millis(1500),
        }
    }
}

/// Layout offsets for smooth scrolling and the scroll spy (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Height of the fixed header subtracted from scroll targets
    pub header_offset: f64,
    /// A section becomes active this many pixels before its top reaches the viewport top
    pub spy_offset: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            spy_offset: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillConfig {
    /// A bar reveals once its top is above `viewport_height / reveal_ratio`
    pub reveal_ratio: f64,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self { reveal_ratio: 1.3 }
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_site_transitions() {
        let config = SiteConfig::default();
        assert_eq!(config.notifications.show_delay, Duration::from_millis(100));
        assert_eq!(config.notifications.display, Duration::from_millis(5000));
        assert_eq!(config.notifications.exit, Duration::from_millis(300));
        assert_eq!(config.contact.send_delay, Duration::from_millis(1500));
        assert_eq!(config.scroll.header_offset, 80.0);
        assert_eq!(config.skills.reveal_ratio, 1.3);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SiteConfig::from_json_str(r#"{ "notifications": { "display_ms": 8000 } }"#)
            .unwrap();
        assert_eq!(config.notifications.display, Duration::from_millis(8000));
        assert_eq!(config.notifications.show_delay, Duration::from_millis(100));
        assert_eq!(config.portfolio, FadeTimings::default());
    }

    #[test]
    fn json_roundtrip_uses_millisecond_keys() {
        let json = SiteConfig::default().to_json_pretty().unwrap();
        assert!(json.contains("\"display_ms\": 5000"));
        assert_eq!(SiteConfig::from_json_str(&json).unwrap(), SiteConfig::default());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = SiteConfig::from_json_str(r#"{ "skills": { "reveal_ratio": 0.0 } }"#).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));

        let err = SiteConfig::from_json_str(r#"{ "notifications": { "display_ms": 0 } }"#).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));

        // A toast must not be shown after it has started hiding
        let err = SiteConfig::from_json_str(r#"{ "notifications": { "show_delay_ms": 5200 } }"#)
            .unwrap_err();
        assert!(matches!(err, FolioError::Config(ref msg) if msg.contains("show_delay_ms")));

        let err = SiteConfig::from_json_str(
            r#"{ "notifications": { "show_delay_ms": 800, "display_ms": 800 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));

        assert!(SiteConfig::from_json_str(
            r#"{ "notifications": { "show_delay_ms": 799, "display_ms": 800 } }"#
        )
        .is_ok());
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = SiteConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, FolioError::Json(_)));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(&path, r#"{ "contact": { "send_delay_ms": 10 } }"#).unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.contact.send_delay, Duration::from_millis(10));

        let err = SiteConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
    }
}
