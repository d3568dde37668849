//! Native HTTP client for the stock listing endpoint.

use crate::Settings;
use log::{info, warn};
use reqwest::Client;
use std::time::Duration;
use stocks_core::response::{decode_stocks_response, stocks_url};
use stocks_core::{FetchError, StockRecord};

/// GET `url` once and decode the stock list.
pub async fn fetch_stocks(client: &Client, url: &str) -> Result<Vec<StockRecord>, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Body(e.to_string()))?;

    decode_stocks_response(status.as_u16(), &body)
}

/// Load the stock list from the configured backend.
///
/// With `settings.lenient` any failure yields an empty list, as it does in
/// the dashboard; otherwise the failure is returned.
pub async fn load_stocks(settings: &Settings) -> anyhow::Result<Vec<StockRecord>> {
    let client = Client::builder()
        .timeout(Duration::from_secs(settings.timeout_secs))
        .build()?;
    let url = stocks_url(&settings.base_url);

    info!("Fetching stocks from {}", url);
    match fetch_stocks(&client, &url).await {
        Ok(stocks) => {
            info!("Fetched {} stocks", stocks.len());
            Ok(stocks)
        }
        Err(e) if settings.lenient => {
            warn!("Stock data unavailable, continuing with none: {}", e);
            Ok(Vec::new())
        }
        Err(e) => Err(anyhow::Error::new(e).context(format!("Failed to load stocks from {}", url))),
    }
}
