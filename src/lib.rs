pub mod arguments;
pub mod clob; // Trading client seam, credentials and REST transport
pub mod config;
pub mod errors;
pub mod logger;
pub mod webserver;
