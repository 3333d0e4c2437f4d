use super::error::InfrastructureError;
use crate::domain::file_storage_trait::FileStorage;
use std::fs;
use std::path::Path;

pub struct LocalFileStorage;

impl LocalFileStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStorage for LocalFileStorage {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_image(&self, path: &Path) -> Result<Vec<u8>, InfrastructureError> {
        let data = fs::read(path).map_err(InfrastructureError::IoError)?;
        Ok(data)
    }

    fn save_image(&self, path: &Path, data: &[u8]) -> Result<(), InfrastructureError> {
        if data.is_empty() {
            return Err(InfrastructureError::FileStorageError(format!(
                "refusing to write empty image to {}",
                path.display()
            )));
        }
        fs::write(path, data).map_err(InfrastructureError::IoError)?;
        Ok(())
    }
}
