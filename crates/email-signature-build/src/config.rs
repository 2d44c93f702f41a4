//! Configuration resolution from command-line overrides.

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;

use email_signature::BuildConfig;

/// Path and size overrides. Anything left unset keeps the built-in default.
#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Input signature HTML [default: src/signature.html].
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory for the rewritten signature [default: output].
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Directory for rasterized PNG icons [default: assets/icons].
    #[arg(long)]
    pub assets_dir: Option<PathBuf>,

    /// Icon edge length in pixels [default: 24].
    #[arg(long)]
    pub size: Option<u32>,

    /// Per-request download timeout in seconds (no timeout if omitted).
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

/// Apply overrides on top of the default configuration.
pub fn resolve_config(args: &BuildArgs) -> BuildConfig {
    let mut config = BuildConfig::default();

    if let Some(input) = &args.input {
        config.input_file = input.clone();
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(dir) = &args.assets_dir {
        config.assets_dir = dir.clone();
    }
    if let Some(size) = args.size {
        config.icon_size = size;
    }
    config.fetch_timeout = args.timeout_secs.map(Duration::from_secs);

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_overrides_is_default() {
        let config = resolve_config(&BuildArgs::default());
        let default = BuildConfig::default();
        assert_eq!(config.input_file, default.input_file);
        assert_eq!(config.output_path(), default.output_path());
        assert_eq!(config.icon_size, 24);
        assert!(config.fetch_timeout.is_none());
    }

    #[test]
    fn test_overrides_apply() {
        let args = BuildArgs {
            input: Some(PathBuf::from("sig.html")),
            size: Some(48),
            timeout_secs: Some(10),
            ..BuildArgs::default()
        };
        let config = resolve_config(&args);
        assert_eq!(config.input_file, PathBuf::from("sig.html"));
        assert_eq!(config.icon_size, 48);
        assert_eq!(config.fetch_timeout, Some(Duration::from_secs(10)));
        assert_eq!(config.assets_dir, PathBuf::from("assets/icons"));
    }
}
