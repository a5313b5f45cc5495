//! Binance REST payloads

use serde::Deserialize;
use serde_json::Value;

use crate::error::FetchError;

/// Position of the close price inside a kline array
pub const KLINE_CLOSE_INDEX: usize = 4;

/// `GET /ticker/price` response
#[derive(Debug, Clone, Deserialize)]
pub struct TickerPrice {
    pub symbol: String,
    pub price: String,
}

impl TickerPrice {
    pub fn value(&self) -> Result<f64, FetchError> {
        parse_price(&self.price)
    }
}

fn parse_price(raw: &str) -> Result<f64, FetchError> {
    let price: f64 = raw
        .parse()
        .map_err(|e| FetchError::Malformed(format!("invalid price {:?}: {}", raw, e)))?;
    if !price.is_finite() || price < 0.0 {
        return Err(FetchError::Malformed(format!("price out of range: {}", price)));
    }
    Ok(price)
}

/// Extract close prices from a `GET /klines` body.
///
/// Binance encodes decimals as strings; plain numbers are accepted too.
pub fn parse_kline_closes(body: &Value) -> Result<Vec<f64>, FetchError> {
    let rows = body
        .as_array()
        .ok_or_else(|| FetchError::Malformed("klines response is not an array".to_string()))?;

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let field = row
                .as_array()
                .and_then(|fields| fields.get(KLINE_CLOSE_INDEX))
                .ok_or_else(|| FetchError::Malformed(format!("kline {} has no close field", i)))?;
            match field {
                Value::String(s) => parse_price(s),
                Value::Number(n) => n
                    .as_f64()
                    .ok_or_else(|| FetchError::Malformed(format!("kline {} close is not f64", i))),
                other => Err(FetchError::Malformed(format!(
                    "kline {} close has unexpected type: {}",
                    i, other
                ))),
            }
        })
        .collect()
}
