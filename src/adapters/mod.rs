// Adapters layer: concrete implementations for external systems (storage backends).

use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Filesystem storage. Reads take the path as given; writes land
/// under `base_path`, creating parent directories as needed.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_text(&self, path: &str) -> Result<String> {
        let content = fs::read_to_string(path)?;
        Ok(content)
    }

    async fn write_text(&self, path: &str, content: &str) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, content)?;
        Ok(())
    }
}
