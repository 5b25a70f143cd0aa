/// Shared application state for the webserver
///
/// Handed to every route handler; the client handle inside is the one
/// trading session the process owns.
use std::sync::Arc;

use crate::clob::ClientHandle;

#[derive(Clone)]
pub struct AppState {
    /// Lazily constructed trading client
    pub client: ClientHandle,

    /// Server startup time
    pub startup_time: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(client: ClientHandle) -> Self {
        Self {
            client,
            startup_time: chrono::Utc::now(),
        }
    }

    pub fn shared(client: ClientHandle) -> Arc<Self> {
        Arc::new(Self::new(client))
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        (chrono::Utc::now() - self.startup_time)
            .num_seconds()
            .max(0) as u64
    }
}
