//! Download-and-rasterize loop over extracted icons.

use std::collections::HashSet;
use std::path::Path;

use crate::fetch::IconFetcher;
use crate::raster::IconRasterizer;
use crate::types::{
    IconOutcome, IconReference, IconResult, IconStatus, SignatureError, SignatureResult,
};

/// Convert every icon into `<assets_dir>/<name>.png`, one at a time.
///
/// A failing icon is logged and recorded; the loop moves on. Only failure to
/// create `assets_dir` aborts. An empty `icons` slice touches nothing.
/// References sharing a name are skipped once that name's asset is written;
/// until then each one is tried in turn.
pub async fn convert_icons(
    icons: &[IconReference],
    assets_dir: &Path,
    size: u32,
    fetcher: &dyn IconFetcher,
    rasterizer: &dyn IconRasterizer,
) -> SignatureResult<Vec<IconOutcome>> {
    if icons.is_empty() {
        tracing::warn!("No hosted icons found in HTML, nothing to convert");
        return Ok(Vec::new());
    }

    tokio::fs::create_dir_all(assets_dir)
        .await
        .map_err(|source| SignatureError::CreateDir {
            path: assets_dir.to_path_buf(),
            source,
        })?;

    tracing::info!("Converting {} icon(s)...", icons.len());

    let mut produced: HashSet<&str> = HashSet::new();
    let mut outcomes = Vec::with_capacity(icons.len());

    for icon in icons {
        // Same name means same asset file; once written, later URLs would overwrite it.
        if produced.contains(icon.name.as_str()) {
            tracing::warn!(
                "Skipping {}: asset already produced from another URL ({})",
                icon.name,
                icon.source_url
            );
            outcomes.push(IconOutcome {
                icon: icon.clone(),
                status: IconStatus::Duplicate,
            });
            continue;
        }

        tracing::info!("Processing {}...", icon.name);
        let status = match convert_one(icon, assets_dir, size, fetcher, rasterizer).await {
            Ok(path) => {
                tracing::info!("Created {}", icon.asset_file_name());
                produced.insert(icon.name.as_str());
                IconStatus::Converted(path)
            }
            Err(e) => {
                tracing::error!("Failed to process {}: {e}", icon.name);
                IconStatus::Failed(e)
            }
        };
        outcomes.push(IconOutcome {
            icon: icon.clone(),
            status,
        });
    }

    Ok(outcomes)
}

async fn convert_one(
    icon: &IconReference,
    assets_dir: &Path,
    size: u32,
    fetcher: &dyn IconFetcher,
    rasterizer: &dyn IconRasterizer,
) -> IconResult<std::path::PathBuf> {
    let source = fetcher.fetch(&icon.source_url).await?;
    let png = rasterizer.rasterize(&source, size)?;

    let path = assets_dir.join(icon.asset_file_name());
    tokio::fs::write(&path, png).await?;
    Ok(path)
}
