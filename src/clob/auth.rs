/// L2 API-key authentication for the CLOB REST endpoint
///
/// Each authenticated request carries five headers. `POLY_SIGNATURE` is the
/// url-safe base64 HMAC-SHA256 of `timestamp + METHOD + path + body`, keyed
/// with the url-safe base64 decoded API secret.
use anyhow::{anyhow, Context, Result};
use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

pub const API_KEY_ENV: &str = "CLOB_API_KEY";
pub const SECRET_ENV: &str = "CLOB_SECRET";
pub const PASSPHRASE_ENV: &str = "CLOB_PASS_PHRASE";
pub const ADDRESS_ENV: &str = "CLOB_WALLET_ADDRESS";

pub const HEADER_ADDRESS: &str = "POLY_ADDRESS";
pub const HEADER_SIGNATURE: &str = "POLY_SIGNATURE";
pub const HEADER_TIMESTAMP: &str = "POLY_TIMESTAMP";
pub const HEADER_API_KEY: &str = "POLY_API_KEY";
pub const HEADER_PASSPHRASE: &str = "POLY_PASSPHRASE";

/// API credentials of the trading wallet
#[derive(Clone)]
pub struct ApiCredentials {
    pub api_key: String,
    pub secret: String,
    pub passphrase: String,
    pub address: String,
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.api_key)
            .field("secret", &"<redacted>")
            .field("passphrase", &"<redacted>")
            .field("address", &self.address)
            .finish()
    }
}

impl ApiCredentials {
    /// Read credentials from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through `lookup`; blank values count as missing
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| anyhow!("Missing required environment variable {}", key))
        };

        Ok(Self {
            api_key: required(API_KEY_ENV)?,
            secret: required(SECRET_ENV)?,
            passphrase: required(PASSPHRASE_ENV)?,
            address: required(ADDRESS_ENV)?,
        })
    }

    /// Headers for one authenticated request
    pub fn l2_headers(
        &self,
        timestamp: i64,
        method: &str,
        request_path: &str,
        body: Option<&str>,
    ) -> Result<Vec<(&'static str, String)>> {
        let signature =
            build_hmac_signature(&self.secret, timestamp, method, request_path, body)?;

        Ok(vec![
            (HEADER_ADDRESS, self.address.clone()),
            (HEADER_SIGNATURE, signature),
            (HEADER_TIMESTAMP, timestamp.to_string()),
            (HEADER_API_KEY, self.api_key.clone()),
            (HEADER_PASSPHRASE, self.passphrase.clone()),
        ])
    }
}

/// Sign `timestamp + method + request_path + body` with the API secret
pub fn build_hmac_signature(
    secret: &str,
    timestamp: i64,
    method: &str,
    request_path: &str,
    body: Option<&str>,
) -> Result<String> {
    let key = URL_SAFE
        .decode(secret)
        .context("API secret is not valid url-safe base64")?;

    let mut message = format!("{}{}{}", timestamp, method, request_path);
    if let Some(body) = body {
        message.push_str(body);
    }

    let mut mac =
        HmacSha256::new_from_slice(&key).map_err(|e| anyhow!("Invalid HMAC key: {}", e))?;
    mac.update(message.as_bytes());

    Ok(URL_SAFE.encode(mac.finalize().into_bytes()))
}
