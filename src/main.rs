//! Tutor Match Engine HTTP server.

use std::env;
use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use tutor_match::api::{AppState, create_router};
use tutor_match::config::ConfigLoader;
use tutor_match::store::{ProfileStore, SeedData};

const CONFIG_ENV: &str = "TUTOR_MATCH_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/tutor-match.yaml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let mut loader = match env::var(CONFIG_ENV) {
        Ok(path) => ConfigLoader::load(path)?,
        Err(_) => ConfigLoader::load_or_default(DEFAULT_CONFIG_PATH)?,
    };
    if let Ok(port) = env::var("PORT") {
        loader = loader.with_port(port.trim().parse()?);
    }

    let store = match &loader.data().seed_file {
        Some(path) => {
            let seed = SeedData::load(path)?;
            info!(
                path = %path.display(),
                students = seed.students.len(),
                tutors = seed.tutors.len(),
                "Seed data loaded"
            );
            seed.into_store()
        }
        None => ProfileStore::default(),
    };

    let address = loader.server().bind_address();
    let state = AppState::new(store, *loader.weights());
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(address = %address, version = env!("CARGO_PKG_VERSION"), "Tutor Match Engine listening");
    axum::serve(listener, router).await?;

    Ok(())
}

/// Installs the global subscriber; `LOG_FORMAT=pretty` switches to multi-line output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if env::var("LOG_FORMAT").is_ok_and(|format| format == "pretty") {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}
