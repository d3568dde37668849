//! Browser client for the stock listing endpoint.

use stocks_core::response::decode_stocks_response;
use stocks_core::{FetchError, StockRecord};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// GET `url` with the browser `fetch` API and decode the stock list.
///
/// No timeout and no retry: the caller gets exactly one attempt.
pub async fn fetch_stocks(url: &str) -> Result<Vec<StockRecord>, FetchError> {
    let window =
        web_sys::window().ok_or_else(|| FetchError::Network("no window object".to_string()))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| FetchError::Network(describe(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| FetchError::Network(describe(&e)))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let text = response.text().map_err(|e| FetchError::Body(describe(&e)))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|e| FetchError::Body(describe(&e)))?
        .as_string()
        .ok_or_else(|| FetchError::Body("response body is not text".to_string()))?;

    decode_stocks_response(response.status(), &body)
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
