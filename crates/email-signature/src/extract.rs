//! Icon URL extraction from signature HTML.

use std::collections::HashSet;

use regex::Regex;

use crate::config::BuildConfig;
use crate::types::{IconReference, SignatureResult};

/// Compiled matcher for hosted icon URLs.
///
/// Matches `https://<host>/s/i/<family>/<name>/<rest>`, where `<rest>` runs
/// up to the next quote character.
#[derive(Debug, Clone)]
pub struct IconPattern {
    regex: Regex,
}

impl IconPattern {
    pub fn new(icon_host: &str, icon_family: &str) -> SignatureResult<Self> {
        let pattern = format!(
            r#"https://{}/s/i/{}/([^/]+)/[^"']+"#,
            regex::escape(icon_host),
            regex::escape(icon_family)
        );
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    pub fn from_config(config: &BuildConfig) -> SignatureResult<Self> {
        Self::new(&config.icon_host, &config.icon_family)
    }

    /// All icon references in `html`, deduplicated, in first-seen order.
    pub fn extract(&self, html: &str) -> Vec<IconReference> {
        let mut seen = HashSet::new();
        let mut icons = Vec::new();

        for caps in self.regex.captures_iter(html) {
            let icon = IconReference::new(&caps[1], &caps[0]);
            if seen.insert(icon.clone()) {
                icons.push(icon);
            }
        }

        icons
    }
}

/// Extract icon references using the configured host and family.
pub fn extract_icons(html: &str, config: &BuildConfig) -> SignatureResult<Vec<IconReference>> {
    let icons = IconPattern::from_config(config)?.extract(html);
    tracing::debug!("Extracted {} icon reference(s)", icons.len());
    Ok(icons)
}
