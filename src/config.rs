use clap::Parser;
use crate::places::GOOGLE_PLACE_DETAILS_URL;

#[derive(Parser, Clone)]
pub struct Config {
    /// Google Maps Platform secret. Sent verbatim on every place-details
    /// request, empty included; the upstream decides whether it is valid.
    #[clap(env, long, default_value = "")]
    pub google_maps_api_key: String,

    #[clap(env, long, default_value = GOOGLE_PLACE_DETAILS_URL)]
    pub google_places_url: String,

    #[clap(env, long, default_value = "3000")]
    pub port: u16,
}
