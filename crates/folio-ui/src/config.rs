//! Embedded site configuration and its Leptos context

use folio_core::{Result, SiteConfig};
use leptos::prelude::*;

const SITE_TOML: &str = include_str!("../site.toml");

/// Parses the configuration compiled into the binary
///
/// # Errors
///
/// Returns the parse or validation error; callers fall back to defaults.
pub fn embedded() -> Result<SiteConfig> {
    SiteConfig::from_toml_str(SITE_TOML)
}

/// Makes `config` available to every component below the caller
pub fn provide_site_config(config: SiteConfig) {
    provide_context(config);
}

/// The configuration provided by [`provide_site_config`], or defaults
#[must_use]
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::config::MediaMode;

    #[test]
    fn test_embedded_config_parses() {
        let config = embedded();
        assert!(config.is_ok(), "site.toml should be valid: {config:?}");
        assert_eq!(
            config.map(|c| c.theme.project_media).ok(),
            Some(MediaMode::Placeholder)
        );
    }
}
