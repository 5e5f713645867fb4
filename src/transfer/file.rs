//! Saving downloaded assets to disk

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::TransferError;

/// Destination for downloaded files
pub trait FileSink: Send + Sync {
    /// Save `contents` under `file_name` and return the final path
    fn save(&self, file_name: &str, contents: &str) -> Result<PathBuf, TransferError>;
}

/// Writes into a directory, creating it on first use.
///
/// Files are written to a temporary sibling and renamed into place so a
/// half-written SVG never appears under the final name.
#[derive(Debug, Clone)]
pub struct DownloadDir {
    root: PathBuf,
}

impl DownloadDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileSink for DownloadDir {
    fn save(&self, file_name: &str, contents: &str) -> Result<PathBuf, TransferError> {
        let target = self.root.join(file_name);
        if Path::new(file_name).file_name().and_then(|name| name.to_str()) != Some(file_name) {
            return Err(TransferError::Save {
                path: target,
                message: "file name must be a single path component".to_string(),
            });
        }
        let save_err = |e: std::io::Error| TransferError::Save {
            path: target.clone(),
            message: e.to_string(),
        };

        fs::create_dir_all(&self.root).map_err(save_err)?;

        let temp = self.root.join(format!(".{}.part", file_name));
        fs::write(&temp, contents).map_err(save_err)?;
        if let Err(e) = fs::rename(&temp, &target) {
            let _ = fs::remove_file(&temp);
            return Err(save_err(e));
        }

        debug!(path = %target.display(), "saved download");
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_creates_directory() {
        let temp = TempDir::new().unwrap();
        let dir = DownloadDir::new(temp.path().join("nested/icons"));

        let path = dir.save("house-solid-112233.svg", "<svg/>").unwrap();
        assert_eq!(path, temp.path().join("nested/icons/house-solid-112233.svg"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "<svg/>");
        assert!(!temp.path().join("nested/icons/.house-solid-112233.svg.part").exists());
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        let dir = DownloadDir::new(temp.path());
        dir.save("a.svg", "old").unwrap();
        let path = dir.save("a.svg", "new").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "new");
    }

    #[test]
    fn test_save_rejects_names_leaving_the_root() {
        let temp = TempDir::new().unwrap();
        let dir = DownloadDir::new(temp.path().join("downloads"));

        for name in ["../escaped.svg", "nested/a.svg", "..", ""] {
            let err = dir.save(name, "<svg/>").unwrap_err();
            assert!(matches!(err, TransferError::Save { .. }), "{name}");
        }
        assert!(!temp.path().join("escaped.svg").exists());
        assert!(!temp.path().join("downloads").exists());
    }

    #[test]
    fn test_save_failure_is_reported() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("not-a-dir");
        fs::write(&blocker, "file").unwrap();

        let dir = DownloadDir::new(&blocker);
        let err = dir.save("a.svg", "<svg/>").unwrap_err();
        assert!(matches!(err, TransferError::Save { .. }));
    }
}
