use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Geocoordinates of a shop.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// Internal view of a third-party place record. Never persisted; rebuilt from
/// the provider payload on every request.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Shop {
    pub place_id: String,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub location: Location,
    pub rating: f64,
    pub review_count: u32,
    /// Rendered price tier: one currency symbol per level, or "Not available".
    pub price_level: String,
    /// Provider photo reference identifiers, possibly empty.
    pub photos: Vec<String>,
    pub types: Vec<String>,
    /// Provider opening hours, passed through unmodified.
    pub opening_hours: Option<Value>,
    /// Raw provider reviews.
    pub reviews: Vec<Value>,
}
