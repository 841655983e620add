use bird_server::{telemetry, BirdServer, ServerConfig, ServerError};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    telemetry::init();

    let config = ServerConfig::from_env()?;
    let server = BirdServer::start_with(&config).await?;

    tokio::signal::ctrl_c().await?;
    server.stop().await
}
