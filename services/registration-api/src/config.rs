use error_types::AppError;

/// API configuration, loaded once per process.
#[derive(Debug, Clone)]
pub struct Config {
    /// Users table.
    pub users_table: String,
    /// Event bus receiving `UserRegistered` events.
    pub event_bus_name: String,
}

impl Config {
    pub fn from_env() -> error_types::Result<Self> {
        let users_table = std::env::var("USERS_TABLE")
            .map_err(|_| AppError::DependencyFailure("USERS_TABLE not set".to_string()))?;
        let event_bus_name = std::env::var("EVENT_BUS_NAME")
            .map_err(|_| AppError::DependencyFailure("EVENT_BUS_NAME not set".to_string()))?;

        Ok(Self {
            users_table,
            event_bus_name,
        })
    }
}
