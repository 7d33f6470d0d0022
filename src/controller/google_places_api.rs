use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use serde_json::json;
use tracing::warn;
use crate::controller::AppState;
use crate::places::{PlacesClient, ReviewsError};

pub fn router(app_state: AppState) -> Router {
    let places_client = Arc::new(PlacesClient::new(
        app_state.http_client,
        app_state.config.google_places_url,
        app_state.config.google_maps_api_key,
    ));

    Router::new()
        .route("/", get(retrieve_academy_reviews))
        .route_layer(Extension(places_client))
}

/// Relays the academy's Google reviews. Inbound parameters are ignored;
/// the place and requested fields are fixed server-side so the secret key
/// never reaches the browser.
pub async fn retrieve_academy_reviews(
    Extension(places_client): Extension<Arc<PlacesClient>>,
) -> impl IntoResponse {
    let reviews_res = places_client
        .fetch_place_reviews()
        .await;

    return match reviews_res {
        Ok(reviews) => {
            (StatusCode::OK, Json(reviews)).into_response()
        }
        Err(ReviewsError::MissingReviews { raw }) => {
            warn!("Place details response carried no reviews, echoing upstream body");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "No reviews found", "raw": raw })),
            ).into_response()
        }
        Err(ReviewsError::Upstream(e)) => {
            warn!("Something went wrong fetching place details from Google due to: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch data from Google API" })),
            ).into_response()
        }
    };
}
