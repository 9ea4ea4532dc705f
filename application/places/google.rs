use reqwest::Client;
use tracing::error;

use crate::error::{AppError, AppResult};
use crate::places::base::PlaceDirectory;
use crate::places::provider::PlaceDetailsEnvelope;

/// The fixed field set requested on every detail lookup.
const DETAIL_FIELDS: &str = "place_id,name,formatted_address,formatted_phone_number,website,\
                             opening_hours,photos,reviews,rating,user_ratings_total,price_level,\
                             geometry,types";

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";

#[derive(Clone)]
pub struct GooglePlaces {
    http: Client,
    api_key: String,
    base_url: String,
}

impl GooglePlaces {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            base_url,
        }
    }
}

fn provider_unreachable(err: reqwest::Error) -> AppError {
    let error_message = err.to_string();
    error!(error_message, "places provider request failed");
    AppError::Upstream("UNKNOWN_ERROR".to_string())
}

#[async_trait::async_trait]
impl PlaceDirectory for GooglePlaces {
    async fn fetch_details(&self, place_id: &str) -> AppResult<PlaceDetailsEnvelope> {
        let url = format!("{}/maps/api/place/details/json", self.base_url);
        let response = self
            .http
            .get(url)
            .query(&[
                ("place_id", place_id),
                ("fields", DETAIL_FIELDS),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(provider_unreachable)?;

        response
            .json::<PlaceDetailsEnvelope>()
            .await
            .map_err(provider_unreachable)
    }
}
