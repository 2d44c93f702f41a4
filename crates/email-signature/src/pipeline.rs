//! The build pipeline: extract, convert, rewrite, save.

use crate::config::BuildConfig;
use crate::convert::convert_icons;
use crate::extract::extract_icons;
use crate::fetch::{HttpFetcher, IconFetcher};
use crate::output::save_output;
use crate::raster::{IconRasterizer, ResvgRasterizer};
use crate::rewrite::rewrite_html;
use crate::types::{BuildReport, SignatureError, SignatureResult};

/// One signature build with its fetch and rasterize components.
pub struct SignatureBuild {
    config: BuildConfig,
    fetcher: Box<dyn IconFetcher>,
    rasterizer: Box<dyn IconRasterizer>,
}

impl SignatureBuild {
    /// Build with the HTTP fetcher and the resvg rasterizer.
    pub fn new(config: BuildConfig) -> SignatureResult<Self> {
        let fetcher = HttpFetcher::new(config.fetch_timeout)?;
        Ok(Self::with_components(
            config,
            Box::new(fetcher),
            Box::new(ResvgRasterizer),
        ))
    }

    pub fn with_components(
        config: BuildConfig,
        fetcher: Box<dyn IconFetcher>,
        rasterizer: Box<dyn IconRasterizer>,
    ) -> Self {
        Self {
            config,
            fetcher,
            rasterizer,
        }
    }

    /// Run all four stages in order.
    ///
    /// Per-icon conversion failures are recorded in the report; anything else
    /// stops the build and nothing further is written.
    pub async fn run(&self) -> SignatureResult<BuildReport> {
        let config = &self.config;

        tracing::info!("Reading {}", config.input_file.display());
        let html = read_input(config).await?;

        let icons = extract_icons(&html, config)?;
        if !icons.is_empty() {
            let names: Vec<&str> = icons.iter().map(|i| i.name.as_str()).collect();
            tracing::info!("Found icons: {}", names.join(", "));
        }

        let outcomes = convert_icons(
            &icons,
            &config.assets_dir,
            config.icon_size,
            self.fetcher.as_ref(),
            self.rasterizer.as_ref(),
        )
        .await?;

        let (updated, replacements) = rewrite_html(&html, &icons, config)?;

        let output_path = save_output(&updated, &config.output_dir, &config.output_file).await?;

        Ok(BuildReport {
            icons,
            outcomes,
            output_path,
            replacements,
        })
    }
}

/// Read the input signature as UTF-8.
pub async fn read_input(config: &BuildConfig) -> SignatureResult<String> {
    tokio::fs::read_to_string(&config.input_file)
        .await
        .map_err(|source| SignatureError::ReadInput {
            path: config.input_file.clone(),
            source,
        })
}
