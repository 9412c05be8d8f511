//! Library persistence.
//!
//! One JSON file in the data directory. Missing file on first run seeds
//! the sample library; an unreadable file is reported to the caller and
//! left untouched on disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::data::library::Library;

pub struct LibraryStore {
    path: PathBuf,
}

impl LibraryStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("library.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn load(&self) -> color_eyre::Result<Library> {
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self, library: &Library) -> color_eyre::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(library)?)?;
        Ok(())
    }

    /// Load the library, seeding the sample one on first run. A corrupt or
    /// unreadable file is an error; it stays untouched on disk and the
    /// caller decides what to show.
    pub fn load_or_seed(&self) -> color_eyre::Result<Library> {
        if !self.exists() {
            let library = Library::sample();
            if let Err(e) = self.save(&library) {
                tracing::warn!("Failed to seed library at {:?}: {e}", self.path);
            } else {
                tracing::info!("Seeded sample library at {:?}", self.path);
            }
            return Ok(library);
        }

        self.load()
    }
}
