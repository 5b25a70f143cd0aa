/// REST transport to a CLOB-compatible endpoint
///
/// Thin wrapper: every trait call maps to one HTTP request signed with the
/// L2 API-key headers. Replies are handed back as raw JSON. Order signing and
/// wallet management live on the other side of this endpoint.
use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Method};
use serde_json::{json, Value};

use super::auth::ApiCredentials;
use super::{RawRecord, TradingClient};
use crate::logger::{self, LogTag};

/// Collateral balances are reported in micro-USDC
const USDC_DECIMALS_SCALE: f64 = 1_000_000.0;

const BALANCE_PATH: &str = "/balance-allowance";
const ORDERS_PATH: &str = "/data/orders";
const POSITIONS_PATH: &str = "/positions";
const ORDER_PATH: &str = "/order";
const BOOK_PATH: &str = "/book";

pub struct ClobRestClient {
    http: reqwest::Client,
    base_url: String,
    credentials: ApiCredentials,
}

impl ClobRestClient {
    /// Build a client for `api_url` with credentials from the environment
    pub fn from_env(api_url: &str) -> Result<Self> {
        let credentials = ApiCredentials::from_env()?;
        Self::new(api_url, credentials)
    }

    pub fn new(api_url: &str, credentials: ApiCredentials) -> Result<Self> {
        let base_url = api_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            bail!("CLOB API URL is empty");
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("clob-bridge/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        logger::debug(
            LogTag::Client,
            &format!(
                "CLOB REST client for {} (address {})",
                base_url, credentials.address
            ),
        );

        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    /// Send one signed request and decode the JSON reply
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Value> {
        let body = body
            .map(|b| serde_json::to_string(&b))
            .transpose()
            .context("Failed to serialize request body")?;

        let timestamp = chrono::Utc::now().timestamp();
        let headers =
            self.credentials
                .l2_headers(timestamp, method.as_str(), path, body.as_deref())?;

        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method.clone(), &url).query(query);
        for (name, value) in headers {
            request = request.header(name, value);
        }
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        logger::verbose(LogTag::Client, &format!("→ {} {}", method, url));

        let response = request
            .send()
            .await
            .with_context(|| format!("{} {} failed", method, path))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read response of {} {}", method, path))?;

        logger::verbose(
            LogTag::Client,
            &format!("← {} {} {}: {}", method, path, status.as_u16(), text),
        );

        if !status.is_success() {
            bail!("{} {} returned {}: {}", method, path, status, text);
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text)
            .with_context(|| format!("Malformed response from {} {}", method, path))
    }
}

/// Accept either a bare array or a paginated `{"data": [...]}` envelope
fn extract_records(payload: Value, what: &str) -> Result<Vec<RawRecord>> {
    match payload {
        Value::Array(records) => Ok(records),
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(records)) => Ok(records),
            _ => Err(anyhow!("Unexpected {} payload: missing data array", what)),
        },
        Value::Null => Ok(Vec::new()),
        other => Err(anyhow!("Unexpected {} payload: {}", what, other)),
    }
}

/// The CLOB reports placed orders as `orderID`; expose it as `id` too
fn with_order_id(mut reply: Value) -> Value {
    if let Value::Object(map) = &mut reply {
        if !map.contains_key("id") {
            if let Some(order_id) = map.get("orderID").cloned() {
                map.insert("id".to_string(), order_id);
            }
        }
    }
    reply
}

fn parse_micro_usdc(payload: &Value) -> Result<f64> {
    let raw = payload
        .get("balance")
        .ok_or_else(|| anyhow!("Balance missing from response"))?;

    let micro = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| anyhow!("Unparsable balance: {}", raw))?;

    Ok(micro / USDC_DECIMALS_SCALE)
}

#[async_trait]
impl TradingClient for ClobRestClient {
    async fn get_balance(&self) -> Result<f64> {
        let payload = self
            .send(
                Method::GET,
                BALANCE_PATH,
                &[("asset_type", "COLLATERAL".to_string())],
                None,
            )
            .await?;
        parse_micro_usdc(&payload)
    }

    fn get_address_for_private_key(&self) -> Result<String> {
        Ok(self.credentials.address.clone())
    }

    async fn get_orders(&self) -> Result<Vec<RawRecord>> {
        let payload = self.send(Method::GET, ORDERS_PATH, &[], None).await?;
        extract_records(payload, "orders")
    }

    async fn get_positions(&self) -> Result<Vec<RawRecord>> {
        let payload = self
            .send(
                Method::GET,
                POSITIONS_PATH,
                &[("user", self.credentials.address.clone())],
                None,
            )
            .await?;
        extract_records(payload, "positions")
    }

    async fn place_market_order(&self, token_id: &str, side: &str, amount: f64) -> Result<RawRecord> {
        let body = json!({
            "token_id": token_id,
            "side": side,
            "amount": amount,
            "order_type": "FOK",
        });
        let reply = self.send(Method::POST, ORDER_PATH, &[], Some(body)).await?;
        Ok(with_order_id(reply))
    }

    async fn place_limit_order(
        &self,
        token_id: &str,
        side: &str,
        amount: f64,
        price: f64,
    ) -> Result<RawRecord> {
        let body = json!({
            "token_id": token_id,
            "side": side,
            "size": amount,
            "price": price,
            "order_type": "GTC",
        });
        let reply = self.send(Method::POST, ORDER_PATH, &[], Some(body)).await?;
        Ok(with_order_id(reply))
    }

    async fn cancel_order(&self, order_id: &str) -> Result<RawRecord> {
        let body = json!({ "orderID": order_id });
        self.send(Method::DELETE, ORDER_PATH, &[], Some(body)).await
    }

    async fn get_order_book(&self, token_id: &str) -> Result<RawRecord> {
        self.send(
            Method::GET,
            BOOK_PATH,
            &[("token_id", token_id.to_string())],
            None,
        )
        .await
    }
}
