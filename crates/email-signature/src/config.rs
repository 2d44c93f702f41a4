//! Build configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default input signature.
pub const DEFAULT_INPUT_FILE: &str = "src/signature.html";

/// Default directory for the rewritten signature.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// File name of the rewritten signature inside the output directory.
pub const DEFAULT_OUTPUT_FILE: &str = "signature.html";

/// Local directory for rasterized icons. Also the path used in the hosted URL.
pub const DEFAULT_ASSETS_DIR: &str = "assets/icons";

/// Edge length of the square PNG assets, in pixels.
pub const DEFAULT_ICON_SIZE: u32 = 24;

/// Everything the pipeline needs to know. `Default` gives the fixed build constants.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub input_file: PathBuf,
    pub output_dir: PathBuf,
    pub output_file: String,
    pub assets_dir: PathBuf,
    pub icon_size: u32,
    /// Host serving the original icons.
    pub icon_host: String,
    /// Icon family path segment after `/s/i/`.
    pub icon_family: String,
    /// Host serving raw repository content.
    pub raw_host: String,
    pub github_user: String,
    pub github_repo: String,
    pub github_branch: String,
    /// Repository-relative directory of the hosted assets.
    pub hosted_assets_path: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub fetch_timeout: Option<Duration>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from(DEFAULT_INPUT_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            icon_size: DEFAULT_ICON_SIZE,
            icon_host: "fonts.gstatic.com".to_string(),
            icon_family: "materialiconsoutlined".to_string(),
            raw_host: "raw.githubusercontent.com".to_string(),
            github_user: "Dylan-Howard".to_string(),
            github_repo: "email_signature".to_string(),
            github_branch: "main".to_string(),
            hosted_assets_path: DEFAULT_ASSETS_DIR.to_string(),
            fetch_timeout: None,
        }
    }
}

impl BuildConfig {
    /// Full path of the rewritten signature.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }

    /// Re-root every local path under `root`. Hosted URL components are untouched.
    pub fn rooted_at(mut self, root: &Path) -> Self {
        self.input_file = root.join(&self.input_file);
        self.output_dir = root.join(&self.output_dir);
        self.assets_dir = root.join(&self.assets_dir);
        self
    }
}
