/// Configuration schemas for the bridge
///
/// Every section is declared with `config_struct!`, so defaults live next to
/// the field they belong to.
use crate::config_struct;

/// Port used when neither the config file nor `CLOB_BRIDGE_PORT` set one
pub const DEFAULT_PORT: u16 = 8001;

/// Bind on all interfaces by default
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Name reported by `/health`
pub const DEFAULT_SERVICE_NAME: &str = "polymarket-clob-bridge";

/// Default CLOB REST endpoint for the trading client
pub const DEFAULT_CLOB_API_URL: &str = "https://clob.polymarket.com";

config_struct! {
    /// HTTP listener configuration
    pub struct ServerConfig {
        host: String = DEFAULT_HOST.to_string(),
        port: u16 = DEFAULT_PORT,
        service_name: String = DEFAULT_SERVICE_NAME.to_string(),
        /// Try to construct the trading client once before accepting requests
        warm_up_client: bool = true,
    }
}

config_struct! {
    /// Trading client transport configuration
    pub struct ClientConfig {
        api_url: String = DEFAULT_CLOB_API_URL.to_string(),
    }
}

config_struct! {
    /// Root configuration
    pub struct Config {
        server: ServerConfig = ServerConfig::default(),
        client: ClientConfig = ClientConfig::default(),
    }
}
