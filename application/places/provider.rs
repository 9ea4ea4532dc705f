use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::models::shop::{Location, Shop};

pub const PRICE_NOT_AVAILABLE: &str = "Not available";

/// Envelope every place-details response arrives in.
#[derive(Clone, Debug, Deserialize)]
pub struct PlaceDetailsEnvelope {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub result: Option<PlaceDetails>,
}

impl PlaceDetailsEnvelope {
    /// Applies the provider's status contract: `OK` yields the payload, a
    /// denial is forwarded with the provider's own message, and every other
    /// status is reported opaquely.
    pub fn into_result(self) -> AppResult<PlaceDetails> {
        match self.status.as_str() {
            "OK" => self
                .result
                .ok_or_else(|| AppError::Upstream("OK".to_string())),
            "REQUEST_DENIED" => Err(AppError::UpstreamDenied {
                details: self
                    .error_message
                    .unwrap_or_else(|| "request denied".to_string()),
            }),
            status => Err(AppError::Upstream(status.to_string())),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PlaceDetails {
    #[serde(default)]
    pub place_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<Value>,
    #[serde(default)]
    pub photos: Vec<PhotoReference>,
    #[serde(default)]
    pub reviews: Vec<Value>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    #[serde(default)]
    pub price_level: Option<u8>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PhotoReference {
    pub photo_reference: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub location: Location,
}

impl PlaceDetails {
    pub fn into_shop(self) -> Shop {
        Shop {
            place_id: self.place_id,
            name: self.name,
            address: self.formatted_address,
            phone: self.formatted_phone_number,
            website: self.website,
            location: self.geometry.unwrap_or_default().location,
            rating: self.rating.unwrap_or(0.0),
            review_count: self.user_ratings_total.unwrap_or(0),
            price_level: render_price_level(self.price_level),
            photos: self
                .photos
                .into_iter()
                .map(|photo| photo.photo_reference)
                .collect(),
            types: self.types,
            opening_hours: self.opening_hours,
            reviews: self.reviews,
        }
    }
}

/// A tier of n becomes n currency symbols; an absent tier is spelled out.
fn render_price_level(price_level: Option<u8>) -> String {
    match price_level {
        Some(level) => "$".repeat(level as usize),
        None => PRICE_NOT_AVAILABLE.to_string(),
    }
}
