//! Substitution of hosted icon URLs with self-hosted ones.

use regex::{NoExpand, Regex};

use crate::config::BuildConfig;
use crate::types::{IconReference, SignatureResult};

/// Self-hosted URL for an icon name.
pub fn destination_url(name: &str, config: &BuildConfig) -> String {
    format!(
        "https://{}/{}/{}/{}/{}/{name}.png",
        config.raw_host,
        config.github_user,
        config.github_repo,
        config.github_branch,
        config.hosted_assets_path.trim_matches('/'),
    )
}

/// Recover the icon name from a URL produced by [`destination_url`].
pub fn destination_icon_name<'a>(url: &'a str, config: &BuildConfig) -> Option<&'a str> {
    let prefix = destination_url("", config);
    let prefix = prefix.strip_suffix(".png")?;
    let name = url.strip_prefix(prefix)?.strip_suffix(".png")?;
    (!name.is_empty() && !name.contains('/')).then_some(name)
}

/// Replace every occurrence of each icon's source URL.
///
/// Returns the new HTML and the total number of replacements. Runs for every
/// reference regardless of whether its asset was produced.
pub fn rewrite_html(
    html: &str,
    icons: &[IconReference],
    config: &BuildConfig,
) -> SignatureResult<(String, usize)> {
    let mut updated = html.to_string();
    let mut total = 0;

    for icon in icons {
        let pattern = Regex::new(&regex::escape(&icon.source_url))?;
        let target = destination_url(&icon.name, config);

        let count = pattern.find_iter(&updated).count();
        if count > 0 {
            updated = pattern
                .replace_all(&updated, NoExpand(target.as_str()))
                .into_owned();
        }
        total += count;

        tracing::info!(
            "Replaced {} ({count} occurrence(s)): {} -> {}",
            icon.name,
            config.icon_host,
            config.raw_host
        );
    }

    Ok((updated, total))
}
