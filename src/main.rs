use std::error::Error;

use ravvedimento_engine::api::{AppState, create_router};
use ravvedimento_engine::config::ConfigLoader;
use ravvedimento_engine::settings::Settings;
use ravvedimento_engine::telemetry;
use tracing::info;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let settings = Settings::load()?;
    telemetry::init(&settings.log_level)?;

    let loader = match &settings.config_dir {
        Some(dir) => {
            info!(config_dir = %dir.display(), "Loading reference data");
            ConfigLoader::load(dir)?
        }
        None => {
            info!("Using built-in reference data");
            ConfigLoader::builtin()
        }
    };

    if let Some((first, last)) = loader.rate_table().years() {
        info!(first_year = first, last_year = last, "Interest rate table ready");
    }

    let app = create_router(AppState::new(loader));
    let addr = settings.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, "ravvedimento engine listening");

    axum::serve(listener, app).await?;
    Ok(())
}
