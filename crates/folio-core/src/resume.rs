//! Resume download action.
//!
//! On the desktop there is no browser download manager, so "download" means
//! copying the bundled asset into the user's download directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{HeroError, HeroResult};

/// A static resume file and the name it is saved under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeAsset {
    pub source: PathBuf,
    pub file_name: String,
}

impl Default for ResumeAsset {
    fn default() -> Self {
        Self {
            source: PathBuf::from("assets/resume.pdf"),
            file_name: "resume.pdf".to_string(),
        }
    }
}

impl ResumeAsset {
    /// `file_name` must be a bare file name so the copy cannot escape the
    /// destination directory.
    pub fn validate(&self) -> HeroResult<()> {
        let bare = Path::new(&self.file_name)
            .file_name()
            .map(|n| n == self.file_name.as_str())
            .unwrap_or(false);
        if !bare {
            return Err(HeroError::InvalidConfiguration(format!(
                "resume file name must not contain a path: {:?}",
                self.file_name
            )));
        }
        Ok(())
    }
}

/// The user's download directory, or the working directory if unknown.
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Copy the resume into `dest_dir` and return the written path.
pub fn download_resume(asset: &ResumeAsset, dest_dir: &Path) -> HeroResult<PathBuf> {
    asset.validate()?;
    if !asset.source.is_file() {
        return Err(HeroError::ResumeNotFound(asset.source.clone()));
    }

    fs::create_dir_all(dest_dir)?;
    let target = dest_dir.join(&asset.file_name);
    let bytes = fs::copy(&asset.source, &target)?;
    info!(path = %target.display(), bytes, "Resume saved");
    Ok(target)
}
