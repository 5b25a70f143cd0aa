/// Shared handle to the single trading client
///
/// The client is built on first use by the injected factory and then lives
/// for the rest of the process. Construction is serialized through a
/// `tokio::sync::OnceCell`, so concurrent first requests never build two
/// clients. A failed construction is not cached: the error goes back to the
/// request that triggered it and the next request tries again.
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::OnceCell;

use super::TradingClient;
use crate::errors::BridgeError;
use crate::logger::{self, LogTag};

/// Builds the trading client; credentials are the factory's concern
pub type ClientFactory = Arc<dyn Fn() -> anyhow::Result<Arc<dyn TradingClient>> + Send + Sync>;

#[derive(Clone)]
pub struct ClientHandle {
    cell: Arc<OnceCell<Arc<dyn TradingClient>>>,
    factory: ClientFactory,
    attempts: Arc<AtomicU64>,
}

impl ClientHandle {
    /// Handle that builds its client lazily with `factory`
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> anyhow::Result<Arc<dyn TradingClient>> + Send + Sync + 'static,
    {
        Self {
            cell: Arc::new(OnceCell::new()),
            factory: Arc::new(factory),
            attempts: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Handle around an already constructed client
    pub fn from_client(client: Arc<dyn TradingClient>) -> Self {
        let fallback = Arc::clone(&client);
        Self {
            cell: Arc::new(OnceCell::new_with(Some(client))),
            factory: Arc::new(move || -> anyhow::Result<Arc<dyn TradingClient>> {
                Ok(Arc::clone(&fallback))
            }),
            attempts: Arc::new(AtomicU64::new(0)),
        }
    }

    /// The shared client, constructing it if needed
    pub async fn get(&self) -> Result<Arc<dyn TradingClient>, BridgeError> {
        let client = self
            .cell
            .get_or_try_init(|| async {
                let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
                logger::debug(
                    LogTag::Client,
                    &format!("Constructing trading client (attempt {})", attempt),
                );

                match (self.factory)() {
                    Ok(client) => {
                        logger::info(LogTag::Client, "✅ Trading client ready");
                        Ok(client)
                    }
                    Err(e) => {
                        logger::error(
                            LogTag::Client,
                            &format!("❌ Trading client construction failed: {:#}", e),
                        );
                        Err(BridgeError::from(e))
                    }
                }
            })
            .await?;

        Ok(Arc::clone(client))
    }

    /// Eagerly build the client; failures are logged and left for the next request
    pub async fn warm_up(&self) -> bool {
        match self.get().await {
            Ok(_) => true,
            Err(e) => {
                logger::warning(
                    LogTag::Client,
                    &format!(
                        "Trading client unavailable at startup, will retry on first request: {}",
                        e
                    ),
                );
                false
            }
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.initialized()
    }

    /// Number of times the factory has been invoked
    pub fn construction_attempts(&self) -> u64 {
        self.attempts.load(Ordering::SeqCst)
    }
}
