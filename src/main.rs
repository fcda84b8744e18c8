//! Admin Shell - server and client entry points
//!
//! With the `server` feature this serves the session API and the
//! server-rendered Dioxus app; otherwise it launches the client.

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use admin_shell::{api, app::App, config};
    use std::net::SocketAddr;
    use tower_http::{compression::CompressionLayer, trace::TraceLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "admin_shell=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Admin Shell");

    // Load configuration
    let config = config::load_config()?;
    tracing::info!(?config, "Configuration loaded");

    // Server functions read the same state as the JSON API
    let state = api::AppState::new(config.session);
    api::install(state.clone());

    // Session API first, then the Dioxus app (SSR + hydration assets)
    let app = api::router(state)
        .merge(dioxus::server::router(App))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(admin_shell::app::App);
}
