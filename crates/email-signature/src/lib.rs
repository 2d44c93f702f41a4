//! Email signature builder — localize hosted Material icons as PNG assets and
//! point the signature HTML at the self-hosted copies.

pub mod config;
pub mod convert;
pub mod extract;
pub mod fetch;
pub mod output;
pub mod pipeline;
pub mod raster;
pub mod rewrite;
pub mod types;

pub use config::BuildConfig;
pub use convert::convert_icons;
pub use extract::{extract_icons, IconPattern};
pub use fetch::{HttpFetcher, IconFetcher};
pub use output::save_output;
pub use pipeline::{read_input, SignatureBuild};
pub use raster::{IconRasterizer, ResvgRasterizer};
pub use rewrite::{destination_icon_name, destination_url, rewrite_html};
pub use types::*;
