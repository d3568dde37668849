//! Decoding of the `/admin/api/stocks` response.
//!
//! The backend answers with `{"success": bool, "stocks": [ {...}, ... ]}`.
//! Both the WASM client and the native CLI feed the raw status code and body
//! text through [`decode_stocks_response`], so the two agree on what counts
//! as usable data.

use crate::error::{FetchError, Result};
use crate::models::StockRecord;
use serde_json::Value;

/// Path of the stock listing endpoint, relative to the backend origin.
pub const STOCKS_ENDPOINT: &str = "/admin/api/stocks";

/// Turn an HTTP status and body into stock records.
///
/// Succeeds only for a 2xx status whose body is a JSON object with
/// `success: true` and a `stocks` array made entirely of objects.
pub fn decode_stocks_response(status: u16, body: &str) -> Result<Vec<StockRecord>> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }

    let parsed: Value = serde_json::from_str(body)?;

    if parsed.get("success").and_then(Value::as_bool) != Some(true) {
        return Err(FetchError::Unsuccessful);
    }

    let stocks = match parsed.get("stocks") {
        Some(Value::Array(items)) => items,
        _ => return Err(FetchError::MissingStocks),
    };

    stocks
        .iter()
        .enumerate()
        .map(|(index, item)| {
            StockRecord::try_from(item.clone()).map_err(|_| FetchError::MalformedRecord(index))
        })
        .collect()
}

/// Join a backend origin and the stocks endpoint path.
pub fn stocks_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), STOCKS_ENDPOINT)
}
