use anyhow::anyhow;
use serde_json::Value;

/// Google Place ID of the academy's listing. Callers cannot override it.
pub const ACADEMY_PLACE_ID: &str = "ChIJVeLlTadXei4RfpT-bpUgjpU";

pub const GOOGLE_PLACE_DETAILS_URL: &str =
    "https://maps.googleapis.com/maps/api/place/details/json";

const REQUESTED_FIELDS: &str = "reviews";

#[derive(Debug)]
pub enum ReviewsError {
    /// The upstream answered, but the decoded body carried no
    /// `result.reviews`. Invalid key, exhausted quota and unknown place
    /// all land here; the full upstream body is kept for the caller.
    MissingReviews { raw: Value },
    /// The round trip itself failed: connect/send error or a body that
    /// did not decode as JSON.
    Upstream(anyhow::Error),
}

pub struct PlacesClient {
    http_client: reqwest::Client,
    details_url: String,
    api_key: String,
}

impl PlacesClient {
    pub fn new(
        http_client: reqwest::Client,
        details_url: String,
        api_key: String,
    ) -> Self {
        Self {
            http_client,
            details_url,
            api_key,
        }
    }

    /// One outbound place-details request per call. The key is forwarded
    /// as-is, empty included, and the upstream status code is never
    /// consulted: whatever JSON comes back goes through the shape check.
    pub async fn fetch_place_reviews(&self) -> Result<Value, ReviewsError> {
        let response = self.http_client
            .get(&self.details_url)
            .query(&[
                ("place_id", ACADEMY_PLACE_ID),
                ("fields", REQUESTED_FIELDS),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ReviewsError::Upstream(anyhow!(e)))?;

        let details: Value = response
            .json()
            .await
            .map_err(|e| ReviewsError::Upstream(anyhow!(e)))?;

        match reviews_in_details(&details) {
            Some(reviews) => Ok(reviews.clone()),
            None => Err(ReviewsError::MissingReviews { raw: details }),
        }
    }
}

/// An explicit JSON null counts as missing, same as no key at all.
fn reviews_in_details(details: &Value) -> Option<&Value> {
    details
        .get("result")
        .and_then(|result| result.get("reviews"))
        .filter(|reviews| !reviews.is_null())
}
