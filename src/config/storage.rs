//! Document storage configuration

use serde::Deserialize;

use super::error::ConfigValidationError;

/// Blob storage configuration for uploaded documents.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory where document blobs are written.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,

    /// Largest accepted upload, in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,
}

fn default_upload_dir() -> String {
    "./data/uploads".to_string()
}

fn default_max_upload_bytes() -> u64 {
    10 * 1024 * 1024
}

impl StorageConfig {
    /// Validate storage configuration.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.upload_dir.trim().is_empty() {
            return Err(ConfigValidationError::EmptyUploadDir);
        }
        if self.max_upload_bytes == 0 {
            return Err(ConfigValidationError::InvalidMaxUploadSize);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}
