//! Site configuration loaded from TOML
//!
//! Every field has a default, so an empty document is a valid configuration.
//!
//! ```
//! use folio_core::config::{MediaMode, SiteConfig};
//!
//! let config = SiteConfig::from_toml_str(
//!     r##"
//!     [theme]
//!     hover_accent = "#00e5ff"
//!     project_media = "placeholder"
//!     "##,
//! )?;
//! assert_eq!(config.theme.project_media, MediaMode::Placeholder);
//! assert_eq!(config.theme.accent, "#ff4d4d");
//! # Ok::<(), folio_core::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;

/// How project cards fill their media slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaMode {
    /// Show the project's image asset
    #[default]
    Asset,
    /// Show a text block with the project title
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub title: String,
    pub description: String,
    pub resume_href: String,
    pub profile_url: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Portfolio | Awwwards".to_string(),
            description: "Award-winning portfolio with stunning animations".to_string(),
            resume_href: "/resume.pdf".to_string(),
            profile_url: "https://github.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSection {
    /// Accent used for highlighted headline words
    pub accent: String,
    /// Color the project ordinal takes while its card is hovered
    pub hover_accent: String,
    pub project_media: MediaMode,
}

impl Default for ThemeSection {
    fn default() -> Self {
        Self {
            accent: "#ff4d4d".to_string(),
            hover_accent: "#ff4d4d".to_string(),
            project_media: MediaMode::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionSection {
    /// Time the scrubbed progress line takes to catch up with the scroll position
    pub scrub_lag_ms: f64,
    /// Pointer offset (px) per degree of card tilt
    pub tilt_divisor: f64,
    pub tilt_perspective: f64,
    /// Skip reveal animations when the user asks for reduced motion
    pub respect_reduced_motion: bool,
    pub log_level: String,
}

impl Default for MotionSection {
    fn default() -> Self {
        Self {
            scrub_lag_ms: 1000.0,
            tilt_divisor: 20.0,
            tilt_perspective: 1000.0,
            respect_reduced_motion: true,
            log_level: "info".to_string(),
        }
    }
}

/// Complete site configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub theme: ThemeSection,
    pub motion: MotionSection,
}

impl SiteConfig {
    /// Parses and validates a TOML document
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] for malformed TOML and
    /// [`Error::InvalidConfig`] for values that fail validation.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges that serde cannot express
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        ensure_hex_color("theme.accent", &self.theme.accent)?;
        ensure_hex_color("theme.hover_accent", &self.theme.hover_accent)?;

        if !(self.motion.tilt_divisor.is_finite() && self.motion.tilt_divisor > 0.0) {
            return Err(Error::invalid_config(
                "motion.tilt_divisor",
                format!("must be a positive number, got {}", self.motion.tilt_divisor),
            ));
        }
        if !(self.motion.scrub_lag_ms.is_finite() && self.motion.scrub_lag_ms >= 0.0) {
            return Err(Error::invalid_config(
                "motion.scrub_lag_ms",
                format!("must be zero or positive, got {}", self.motion.scrub_lag_ms),
            ));
        }
        if !(self.motion.tilt_perspective.is_finite() && self.motion.tilt_perspective >= 0.0) {
            return Err(Error::invalid_config(
                "motion.tilt_perspective",
                format!("must be zero or positive, got {}", self.motion.tilt_perspective),
            ));
        }
        Ok(())
    }
}

fn ensure_hex_color(field: &'static str, value: &str) -> Result<()> {
    let digits = value.strip_prefix('#').unwrap_or_default();
    let valid = matches!(digits.len(), 3 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(())
    } else {
        Err(Error::invalid_config(
            field,
            format!("expected a hex color like #ff4d4d, got '{value}'"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() -> Result<()> {
        let config = SiteConfig::from_toml_str("")?;
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.site.resume_href, "/resume.pdf");
        assert!((config.motion.tilt_divisor - 20.0).abs() < f64::EPSILON);
        Ok(())
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() -> Result<()> {
        let config = SiteConfig::from_toml_str("[motion]\nscrub_lag_ms = 0.0\n")?;
        assert!(config.motion.scrub_lag_ms.abs() < f64::EPSILON);
        assert!(config.motion.respect_reduced_motion);
        assert_eq!(config.motion.log_level, "info");
        Ok(())
    }

    #[test]
    fn test_bad_accent_is_rejected() {
        let result = SiteConfig::from_toml_str("[theme]\naccent = \"red\"\n");
        assert!(matches!(
            result,
            Err(Error::InvalidConfig {
                field: "theme.accent",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_tilt_divisor_is_rejected() {
        let result = SiteConfig::from_toml_str("[motion]\ntilt_divisor = 0.0\n");
        assert!(matches!(
            result,
            Err(Error::InvalidConfig {
                field: "motion.tilt_divisor",
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let result = SiteConfig::from_toml_str("[theme\naccent = 1");
        assert!(matches!(result, Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_unknown_media_mode_is_a_parse_error() {
        let result = SiteConfig::from_toml_str("[theme]\nproject_media = \"video\"\n");
        assert!(matches!(result, Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_short_hex_colors_are_accepted() {
        assert!(ensure_hex_color("theme.accent", "#fff").is_ok());
        assert!(ensure_hex_color("theme.accent", "#ff4d4dcc").is_ok());
        assert!(ensure_hex_color("theme.accent", "#ggg").is_err());
    }
}
