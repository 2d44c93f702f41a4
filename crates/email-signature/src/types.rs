//! Core data types for icon references, conversion outcomes, and errors.

use std::path::PathBuf;

use serde::Serialize;

/// An externally-hosted icon found in the signature HTML.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IconReference {
    /// Icon name captured from the source URL (e.g. `email`).
    pub name: String,
    /// The full source URL exactly as it appears in the HTML.
    pub source_url: String,
}

impl IconReference {
    pub fn new(name: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_url: source_url.into(),
        }
    }

    /// File name of the rasterized asset.
    pub fn asset_file_name(&self) -> String {
        format!("{}.png", self.name)
    }
}

/// What happened to a single icon during conversion.
#[derive(Debug)]
pub enum IconStatus {
    /// Asset written to the given path.
    Converted(PathBuf),
    /// Conversion failed; the run continued.
    Failed(IconError),
    /// Another reference with the same name already produced the asset this run.
    Duplicate,
}

/// Per-icon conversion result.
#[derive(Debug)]
pub struct IconOutcome {
    pub icon: IconReference,
    pub status: IconStatus,
}

impl IconOutcome {
    pub fn is_converted(&self) -> bool {
        matches!(self.status, IconStatus::Converted(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, IconStatus::Failed(_))
    }
}

/// Summary of a completed build.
#[derive(Debug)]
pub struct BuildReport {
    pub icons: Vec<IconReference>,
    pub outcomes: Vec<IconOutcome>,
    pub output_path: PathBuf,
    pub replacements: usize,
}

impl BuildReport {
    pub fn converted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_converted()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failed()).count()
    }

    /// Icons whose conversion failed, by name.
    pub fn failed_icons(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.is_failed())
            .map(|o| o.icon.name.as_str())
            .collect()
    }

    /// Names with no asset on disk: every reference to them failed.
    pub fn missing_assets(&self) -> Vec<&str> {
        let mut missing: Vec<&str> = Vec::new();
        for name in self.failed_icons() {
            let produced = self
                .outcomes
                .iter()
                .any(|o| o.icon.name == name && o.is_converted());
            if !produced && !missing.contains(&name) {
                missing.push(name);
            }
        }
        missing
    }
}

/// Errors for a single icon. Logged and recorded, never fatal to the build.
#[derive(thiserror::Error, Debug)]
pub enum IconError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for IconError {
    fn from(e: image::ImageError) -> Self {
        IconError::Decode(e.to_string())
    }
}

/// Errors that abort the build.
#[derive(thiserror::Error, Debug)]
pub enum SignatureError {
    #[error("Failed to read input file '{path}': {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output file '{path}': {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid URL pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("HTTP client error: {0}")]
    Client(String),
}

/// Convenience result type.
pub type SignatureResult<T> = Result<T, SignatureError>;

/// Convenience result type for per-icon work.
pub type IconResult<T> = Result<T, IconError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = IconError::Status(404);
        assert_eq!(err.to_string(), "HTTP 404");
    }

    #[test]
    fn test_report_counts() {
        let report = BuildReport {
            icons: vec![IconReference::new("email", "a"), IconReference::new("phone", "b")],
            outcomes: vec![
                IconOutcome {
                    icon: IconReference::new("email", "a"),
                    status: IconStatus::Converted(PathBuf::from("assets/icons/email.png")),
                },
                IconOutcome {
                    icon: IconReference::new("phone", "b"),
                    status: IconStatus::Failed(IconError::Status(500)),
                },
            ],
            output_path: PathBuf::from("output/signature.html"),
            replacements: 2,
        };
        assert_eq!(report.converted_count(), 1);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.failed_icons(), vec!["phone"]);
    }

    #[test]
    fn test_missing_assets_ignores_names_recovered_later() {
        let v1 = "https://fonts.gstatic.com/s/i/materialiconsoutlined/email/v1/24px.svg";
        let v2 = "https://fonts.gstatic.com/s/i/materialiconsoutlined/email/v2/24px.svg";
        let report = BuildReport {
            icons: vec![
                IconReference::new("email", v1),
                IconReference::new("email", v2),
                IconReference::new("phone", "c"),
            ],
            outcomes: vec![
                IconOutcome {
                    icon: IconReference::new("email", v1),
                    status: IconStatus::Failed(IconError::Status(404)),
                },
                IconOutcome {
                    icon: IconReference::new("email", v2),
                    status: IconStatus::Converted(PathBuf::from("assets/icons/email.png")),
                },
                IconOutcome {
                    icon: IconReference::new("phone", "c"),
                    status: IconStatus::Failed(IconError::Status(500)),
                },
            ],
            output_path: PathBuf::from("output/signature.html"),
            replacements: 3,
        };
        assert_eq!(report.failed_icons(), vec!["email", "phone"]);
        assert_eq!(report.missing_assets(), vec!["phone"]);
    }

    #[test]
    fn test_asset_file_name() {
        let icon = IconReference::new("location_on", "https://example.com");
        assert_eq!(icon.asset_file_name(), "location_on.png");
    }
}
