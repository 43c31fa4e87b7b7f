use news_sentiment::{NsClient, server::{self, ServerConfig}};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let client = NsClient::new()?;
    let config = ServerConfig::new()?;
    server::serve(&config, client).await?;
    Ok(())
}
