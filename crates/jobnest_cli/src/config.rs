//! Data directory and file layout resolution.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "jobnest";
const DB_FILE_NAME: &str = "jobnest.sqlite3";
const LOG_DIR_NAME: &str = "logs";

/// Resolved on-disk locations for one CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub data_dir: PathBuf,
}

impl Paths {
    /// Uses `explicit` when given (flag or `JOBNEST_DATA_DIR`), otherwise the
    /// platform data directory.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let data_dir = match explicit {
            Some(dir) => absolutize(dir)?,
            None => dirs::data_dir()
                .context("Could not determine a platform data directory; pass --data-dir")?
                .join(APP_DIR_NAME),
        };
        Ok(Self { data_dir })
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }

    pub fn ensure_data_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir).with_context(|| {
            format!(
                "Failed to create data directory {}",
                self.data_dir.display()
            )
        })
    }
}

fn absolutize(dir: &Path) -> Result<PathBuf> {
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }
    let cwd = std::env::current_dir().context("Could not read current directory")?;
    Ok(cwd.join(dir))
}
