use crate::data::locations::{validate_elements, LocationRecord};
use crate::Result;

/// Path of the locations endpoint, relative to the host root.
pub const LOCATIONS_PATH: &str = "/xapi/map/locations";

/// Async client for the locations feed. Fetching happens once, before
/// the marker-layer engine is ever invoked; on failure the caller's
/// error screen takes over and the engine never sees partial data.
pub struct LocationClient {
    base_url: String,
    client: reqwest::Client,
}

impl LocationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Full URL of the locations endpoint.
    pub fn locations_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), LOCATIONS_PATH)
    }

    /// Fetches the dataset and validates each record, dropping malformed
    /// elements the same way [`parse_locations`](crate::parse_locations)
    /// does.
    pub async fn fetch_locations(&self) -> Result<Vec<LocationRecord>> {
        let url = self.locations_url();
        log::debug!("fetching locations from {url}");
        let elements: Vec<serde_json::Value> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        let records = validate_elements(elements);
        log::info!("loaded {} locations from {url}", records.len());
        Ok(records)
    }
}
