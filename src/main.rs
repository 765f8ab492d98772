use interview_insights::config::AppConfig;
use interview_insights::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env().map_err(|e| {
        log::error!("Startup failed: {}", e);
        anyhow::anyhow!(e)
    })?;

    server::start_server(config).await
}
