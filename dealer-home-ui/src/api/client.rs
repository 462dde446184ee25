//! Dashboard Data Client
//!
//! Fetches the dashboard data document and reads settings from local storage.

use gloo_net::http::Request;

use dealer_home::DashboardData;

/// Read a key from local storage
pub fn storage_get(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(key).ok()?
}

/// Fetch the dashboard data document
pub async fn fetch_dashboard(url: &str) -> Result<DashboardData, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to load dashboard data ({} {})",
            response.status(),
            response.status_text()
        ));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    dealer_home::data::parse_json(&body).map_err(|e| format!("Parse error: {}", e))
}
