use error_types::AppError;

use crate::processor::JPEG_QUALITY;

/// Worker configuration, loaded once per process.
#[derive(Debug, Clone)]
pub struct Config {
    /// Uploads table holding the per-upload records.
    pub uploads_table: String,
    /// JPEG quality for generated thumbnails.
    pub jpeg_quality: u8,
}

impl Config {
    pub fn from_env() -> error_types::Result<Self> {
        let uploads_table = std::env::var("UPLOADS_TABLE")
            .map_err(|_| AppError::DependencyFailure("UPLOADS_TABLE not set".to_string()))?;

        let jpeg_quality = std::env::var("THUMB_JPEG_QUALITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(JPEG_QUALITY);

        Ok(Self {
            uploads_table,
            jpeg_quality,
        })
    }
}
