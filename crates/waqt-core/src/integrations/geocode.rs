//! GeocodeClient: reverse geocoding via BigDataCloud.
//!
//! Turns coordinates into a place label and the country code that drives
//! calculation-method selection. The endpoint is free and unauthenticated.

use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Where a pair of coordinates lands.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Place {
    #[serde(default)]
    pub city: String,
    #[serde(rename = "countryName", default)]
    pub country_name: String,
    #[serde(rename = "countryCode", default)]
    pub country_code: String,
}

impl Place {
    /// "City, Country" label, omitting whichever parts are empty.
    pub fn label(&self) -> String {
        match (self.city.is_empty(), self.country_name.is_empty()) {
            (false, false) => format!("{}, {}", self.city, self.country_name),
            (false, true) => self.city.clone(),
            (true, false) => self.country_name.clone(),
            (true, true) => String::new(),
        }
    }
}

/// Client for the reverse-geocoding API.
pub struct GeocodeClient {
    http_client: Client,
    base_url: String,
}

impl GeocodeClient {
    /// Create a client against the public service.
    pub fn new() -> Self {
        Self::with_base_url("https://api.bigdatacloud.net")
    }

    /// Create a client against another host (tests point this at a local
    /// mock server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Resolve coordinates to a place.
    pub async fn reverse(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Place, Box<dyn std::error::Error>> {
        let url = format!("{}/data/reverse-geocode-client", self.base_url);
        let place: Place = self
            .http_client
            .get(&url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("localityLanguage", "en".to_string()),
            ])
            .send()
            .await?
            .json()
            .await?;
        Ok(place)
    }
}

impl Default for GeocodeClient {
    fn default() -> Self {
        Self::new()
    }
}
