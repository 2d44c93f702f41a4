//! Persisting the rewritten signature.

use std::path::{Path, PathBuf};

use crate::types::{SignatureError, SignatureResult};

/// Write `html` to `<output_dir>/<file_name>`, creating the directory and
/// overwriting any previous file.
pub async fn save_output(html: &str, output_dir: &Path, file_name: &str) -> SignatureResult<PathBuf> {
    tokio::fs::create_dir_all(output_dir)
        .await
        .map_err(|source| SignatureError::CreateDir {
            path: output_dir.to_path_buf(),
            source,
        })?;

    let path = output_dir.join(file_name);
    tokio::fs::write(&path, html)
        .await
        .map_err(|source| SignatureError::WriteOutput {
            path: path.clone(),
            source,
        })?;

    tracing::info!("Updated signature saved to: {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_creates_dir_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("output");

        let path = save_output("<p>first</p>", &out_dir, "signature.html").await.unwrap();
        assert_eq!(path, out_dir.join("signature.html"));

        save_output("<p>second</p>", &out_dir, "signature.html").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>second</p>");
    }

    #[tokio::test]
    async fn test_blocked_output_dir_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("output");
        std::fs::write(&blocker, b"").unwrap();

        let err = save_output("<p/>", &blocker, "signature.html").await.unwrap_err();
        assert!(matches!(err, SignatureError::CreateDir { .. }));
    }
}
