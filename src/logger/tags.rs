/// Log tags identify which part of the bridge emitted a message.
///
/// The debug key of a tag is what `--debug-<key>` matches against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Config,
    Webserver,
    Client,
    Orders,
    Other(String),
}

impl LogTag {
    /// Key used by `--debug-<key>` / `--verbose-<key>` flags
    pub fn to_debug_key(&self) -> String {
        match self {
            LogTag::System => "system".to_string(),
            LogTag::Config => "config".to_string(),
            LogTag::Webserver => "webserver".to_string(),
            LogTag::Client => "client".to_string(),
            LogTag::Orders => "orders".to_string(),
            LogTag::Other(name) => name.to_lowercase(),
        }
    }

    /// Uppercase label written into the log line
    pub fn to_plain_string(&self) -> String {
        match self {
            LogTag::Other(name) => name.to_uppercase(),
            other => other.to_debug_key().to_uppercase(),
        }
    }
}

impl std::fmt::Display for LogTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_plain_string())
    }
}
