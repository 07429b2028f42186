use std::path::{Path, PathBuf};
use chrono::Local;
use crate::errors::ExtractorError;

/// File locations for one run. Both files share a local timestamp so that
/// runs never overwrite each other.
#[derive(Debug, Clone)]
pub struct RunSession {
    output_dir: PathBuf,
    stamp: String,
}

impl RunSession {
    pub fn initialize(output_dir: &Path) -> Result<Self, ExtractorError> {
        std::fs::create_dir_all(output_dir)?;
        Ok(Self::with_stamp(output_dir, &Local::now().format("%Y%m%d_%H%M%S").to_string()))
    }

    pub fn with_stamp(output_dir: &Path, stamp: &str) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            stamp: stamp.to_string(),
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.output_dir.join(format!("log_{}.txt", self.stamp))
    }

    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(format!("irrelevant_issues_output_{}.csv", self.stamp))
    }

    pub fn stamp(&self) -> &str {
        &self.stamp
    }
}
