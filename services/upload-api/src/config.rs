use std::time::Duration;

use error_types::AppError;

/// Lifetime of an issued upload (PUT) URL.
pub const UPLOAD_URL_TTL: Duration = Duration::from_secs(60);
/// Lifetime of a thumbnail read (GET) URL.
pub const READ_URL_TTL: Duration = Duration::from_secs(600);

/// API configuration, loaded once per process.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bucket holding originals and thumbnails.
    pub bucket: String,
    /// Uploads table holding the per-upload records.
    pub uploads_table: String,
}

impl Config {
    pub fn from_env() -> error_types::Result<Self> {
        let bucket = std::env::var("UPLOAD_BUCKET")
            .map_err(|_| AppError::DependencyFailure("UPLOAD_BUCKET not set".to_string()))?;
        let uploads_table = std::env::var("UPLOADS_TABLE")
            .map_err(|_| AppError::DependencyFailure("UPLOADS_TABLE not set".to_string()))?;

        Ok(Self {
            bucket,
            uploads_table,
        })
    }
}
