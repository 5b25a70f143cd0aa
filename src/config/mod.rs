//! Bridge configuration: schemas with embedded defaults and the loader that
//! layers file, environment and command-line values on top of them.

pub mod macros;
mod schemas;
mod utils;

pub use schemas::{
    ClientConfig, Config, ServerConfig, DEFAULT_CLOB_API_URL, DEFAULT_HOST, DEFAULT_PORT,
    DEFAULT_SERVICE_NAME,
};
pub use utils::{
    apply_env_overrides, apply_overrides, load_config, parse_config_file, with_config,
    CONFIG_PATH_ENV, HOST_ENV, PORT_ENV,
};
