use std::path::Path;

use crate::infrastructure::error::InfrastructureError;

#[cfg_attr(test, mockall::automock)]
pub trait FileStorage {
    fn exists(&self, path: &Path) -> bool;

    fn read_image(&self, path: &Path) -> Result<Vec<u8>, InfrastructureError>;

    /// Writes the whole buffer in one step.
    fn save_image(&self, path: &Path, data: &[u8]) -> Result<(), InfrastructureError>;
}
