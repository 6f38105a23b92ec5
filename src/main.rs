use std::{sync::Arc, time::Duration};

use moviebox::{AppState, app, config::Config, db, models::Movie, store::MovieStore, tmdb::TmdbClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,moviebox=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let http = reqwest::Client::builder()
        .user_agent("moviebox/0.1")
        .timeout(Duration::from_secs(30))
        .build()?;

    let db = db::connect_and_migrate(&config.database_url).await?;
    let store = MovieStore::new(db);

    let tmdb = TmdbClient::new(
        http,
        config.api_key.clone(),
        config.tmdb_base_url.clone(),
        config.tmdb_language.clone(),
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        store,
        tmdb: Arc::new(tmdb),
        seed: Movie::seed()?,
    });

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app(state)).await?;

    Ok(())
}
