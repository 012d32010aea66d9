pub mod random_data;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Common GET request handler.
///
/// The random-data API answers with either one record or an array, so the body
/// is read as text and decoded by [`common::decode_records`].
pub async fn get_records<T>(url: &str) -> Result<Vec<T>, String>
where
    T: DeserializeOwned,
{
    log::debug!("GET request to: {}", url);

    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("GET {} - {}", url, error_msg);
            error_msg
        })?;

    if !response.ok() {
        let error_msg = format!("HTTP error: {}", response.status());
        log::error!("GET {} - {}", url, error_msg);
        return Err(error_msg);
    }

    log::trace!("GET {} - Response received, parsing JSON", url);
    let body = response
        .text()
        .await
        .map_err(|e| {
            let error_msg = format!("Failed to read response: {}", e);
            log::error!("GET {} - {}", url, error_msg);
            error_msg
        })?;

    let records = common::decode_records::<T>(&body).map_err(|e| {
        let error_msg = e.to_string();
        log::error!("GET {} - {}", url, error_msg);
        error_msg
    })?;

    log::info!("GET {} - Success", url);
    Ok(records)
}
