use std::time::Duration;

/// Configuration for opening PQP databases
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Open the file without write access (`patch_decoys` will fail)
    pub read_only: bool,
    /// How long SQLite waits on a locked database before giving up
    pub busy_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            read_only: false,
            busy_timeout: Duration::from_millis(5000),
        }
    }
}

impl DatabaseConfig {
    /// Read-only configuration with the default busy timeout
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Default::default()
        }
    }
}
