//! Symptom dashboard server.
//!
//! Serves the dashboard page and the `/api/symptoms` keyword counts over the
//! same JSON record directory the bot writes to.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use healmate::config::DashboardConfig;
use healmate::dashboard;
use healmate::store::UserStore;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("healmate=info".parse()?)
                .add_directive("dashboard=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DashboardConfig::from_env()?;

    tracing::info!(
        data_dir = %config.data_dir.display(),
        "-- Starting Healmate dashboard on {}",
        config.addr
    );

    let app = dashboard::router(UserStore::new(config.data_dir));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
