use movie_catalog::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Default to Info, overridable through RUST_LOG
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load()?;
    log::info!(
        "Configuration loaded: server={}:{}, seed data={}",
        config.server.host,
        config.server.port,
        config.catalog.load_seed_data
    );

    movie_catalog::run_server(&config).await
}
