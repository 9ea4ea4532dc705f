use crate::error::AppResult;
use crate::places::provider::PlaceDetailsEnvelope;

#[async_trait::async_trait]
pub trait PlaceDirectory: Clone + Send + Sync + 'static {
    /// Fetch the raw detail envelope for a place. Status interpretation and
    /// reshaping happen on the envelope itself.
    async fn fetch_details(&self, place_id: &str) -> AppResult<PlaceDetailsEnvelope>;
}
