/// Command-line argument handling for the bridge binary
///
/// Arguments are kept in a process-wide store so the logger, the config
/// loader and `main` read the same view; tests override it with
/// `set_cmd_args`.
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

/// Global command-line arguments storage
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Override the stored command-line arguments
pub fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Copy of the current command-line arguments
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        // Poisoned mutex: fall back to the real process arguments
        Err(_) => env::args().collect(),
    }
}

pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

/// Value following `flag`, accepting both `--flag value` and `--flag=value`
pub fn get_arg_value(flag: &str) -> Option<String> {
    let args = get_cmd_args();
    let prefix = format!("{}=", flag);
    for (i, arg) in args.iter().enumerate() {
        if let Some(value) = arg.strip_prefix(&prefix) {
            return Some(value.to_string());
        }
        if arg == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

// =============================================================================
// BRIDGE OPTIONS
// =============================================================================

pub fn is_help_requested() -> bool {
    has_arg("--help") || has_arg("-h")
}

/// `--port <n>` override for the listening port
pub fn get_port_override() -> Option<String> {
    get_arg_value("--port")
}

/// `--host <addr>` override for the bind address
pub fn get_host_override() -> Option<String> {
    get_arg_value("--host")
}

/// `--config <path>` TOML configuration file
pub fn get_config_path() -> Option<String> {
    get_arg_value("--config")
}

/// Names of all `--debug-<tag>` flags present
pub fn get_enabled_debug_modes() -> Vec<String> {
    get_cmd_args()
        .iter()
        .filter_map(|arg| arg.strip_prefix("--debug-"))
        .map(|tag| tag.to_string())
        .collect()
}

pub fn print_help() {
    println!("clob-bridge - HTTP gateway for an authenticated CLOB trading client");
    println!();
    println!("USAGE:");
    println!("    clob-bridge [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --port <PORT>        Listening port (env CLOB_BRIDGE_PORT, default 8001)");
    println!("    --host <ADDR>        Bind address (env CLOB_BRIDGE_HOST, default 0.0.0.0)");
    println!("    --config <PATH>      TOML config file (env CLOB_BRIDGE_CONFIG)");
    println!("    --log-level <LEVEL>  error | warning | info | debug | verbose (debug: all tags)");
    println!("    --debug-<TAG>        Debug logs for a tag: system, config, webserver, client, orders");
    println!("    --only-<TAG>         Only show logs for the given tag(s); errors always show");
    println!("    --verbose            Show all debug and verbose logs");
    println!("    --quiet              Only warnings and errors");
    println!("    -h, --help           Print this help");
    println!();
    println!("TRADING CLIENT ENVIRONMENT:");
    println!("    CLOB_API_URL, CLOB_API_KEY, CLOB_SECRET, CLOB_PASS_PHRASE, CLOB_WALLET_ADDRESS");
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test owns the global argument store to avoid parallel-test races
    #[test]
    fn test_argument_parsing() {
        set_cmd_args(vec![
            "clob-bridge".to_string(),
            "--port".to_string(),
            "9100".to_string(),
            "--host=127.0.0.1".to_string(),
            "--debug-webserver".to_string(),
            "--debug-orders".to_string(),
        ]);

        assert_eq!(get_port_override(), Some("9100".to_string()));
        assert_eq!(get_host_override(), Some("127.0.0.1".to_string()));
        assert_eq!(get_config_path(), None);
        assert!(has_arg("--debug-webserver"));
        assert!(!has_arg("--debug-client"));
        assert!(!is_help_requested());

        let modes = get_enabled_debug_modes();
        assert_eq!(modes, vec!["webserver".to_string(), "orders".to_string()]);

        // Flag at the end without a value
        set_cmd_args(vec!["clob-bridge".to_string(), "--port".to_string()]);
        assert_eq!(get_port_override(), None);
    }
}
