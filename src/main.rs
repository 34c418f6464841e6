mod config;
mod routes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env()?;
    if config.api_base_url.is_empty() {
        tracing::warn!("PILOTPREP_API_BASE_URL not set; browser will call the API on this origin");
    }

    let app = routes::app(&config)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, api_base_url = %config.api_base_url, "pilotprep listening");
    axum::serve(listener, app).await?;
    Ok(())
}
