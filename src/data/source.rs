use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use super::error::DataLoadError;
use super::loader::load_file;
use super::model::PokemonTable;

// ---------------------------------------------------------------------------
// CachedDataset – owns the parsed source and its reload policy
// ---------------------------------------------------------------------------

/// A parsed dataset plus the file it came from.
///
/// The table is shared read-only; every view is derived into a new table.
/// `refresh` re-parses only when the file's modification time moved.
#[derive(Debug, Clone)]
pub struct CachedDataset {
    path: PathBuf,
    table: Arc<PokemonTable>,
    modified: Option<SystemTime>,
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

impl CachedDataset {
    pub fn open(path: &Path) -> Result<Self, DataLoadError> {
        let modified = modified_time(path);
        let table = load_file(path)?;
        log::info!("Loaded {} records from {}", table.len(), path.display());
        Ok(CachedDataset {
            path: path.to_path_buf(),
            table: Arc::new(table),
            modified,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn table(&self) -> &Arc<PokemonTable> {
        &self.table
    }

    /// Re-read the source if it changed on disk. Returns whether the table
    /// was replaced. On error the cached table is kept.
    pub fn refresh(&mut self) -> Result<bool, DataLoadError> {
        let modified = modified_time(&self.path);
        if modified.is_some() && modified == self.modified {
            log::debug!("{} unchanged, keeping cached table", self.path.display());
            return Ok(false);
        }
        let table = load_file(&self.path)?;
        log::info!(
            "Reloaded {} records from {}",
            table.len(),
            self.path.display()
        );
        self.table = Arc::new(table);
        self.modified = modified;
        Ok(true)
    }
}
