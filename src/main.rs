use std::sync::Arc;

use clob_bridge::{
    arguments::{get_enabled_debug_modes, is_help_requested, print_help},
    clob::{ClientHandle, ClobRestClient, TradingClient},
    config,
    logger::{self, LogTag},
    webserver,
};

/// Main entry point for the CLOB bridge
///
/// Resolves configuration, prepares the (lazily built) trading client and
/// serves the HTTP API until Ctrl-C.
#[tokio::main]
async fn main() {
    logger::init();

    if is_help_requested() {
        print_help();
        std::process::exit(0);
    }

    logger::info(LogTag::System, "🚀 CLOB bridge starting up...");

    let debug_modes = get_enabled_debug_modes();
    if !debug_modes.is_empty() {
        logger::info(
            LogTag::System,
            &format!("Debug modes enabled: {}", debug_modes.join(", ")),
        );
    }

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            logger::error(LogTag::Config, &format!("❌ Failed to load configuration: {:#}", e));
            std::process::exit(1);
        }
    };

    let api_url = config.client.api_url.clone();
    logger::debug(LogTag::Config, &format!("Trading API: {}", api_url));

    let client = ClientHandle::new(move || {
        let client = ClobRestClient::from_env(&api_url)?;
        Ok(Arc::new(client) as Arc<dyn TradingClient>)
    });

    if let Err(e) = ctrlc::set_handler(|| {
        logger::info(LogTag::System, "🛑 Ctrl-C received, shutting down...");
        webserver::shutdown();
    }) {
        logger::warning(
            LogTag::System,
            &format!("Failed to install Ctrl-C handler: {}", e),
        );
    }

    if let Err(e) = webserver::start_server(config.server, client).await {
        logger::error(LogTag::Webserver, &format!("❌ {}", e));
        std::process::exit(1);
    }

    logger::info(LogTag::System, "✅ CLOB bridge stopped");
}
