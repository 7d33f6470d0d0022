use clap::Parser;
use dotenv::dotenv;
use beauty_academy_backend::config::Config;
use beauty_academy_backend::controller::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    let http_client = reqwest::Client::new();

    controller::serve(AppState {
        http_client,
        config,
    }).await
}
