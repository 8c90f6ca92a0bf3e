//! Terminal entry point: fetch once on launch, then refresh on demand.

use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use localcast::{
    Display, GeocodingClient, LocalcastConfig, LocationScreen, OpenPermissionGate,
    StaticLocationProvider, WeatherClient,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::var_os("LOCALCAST_CONFIG").map(PathBuf::from);
    let config = LocalcastConfig::load(config_path.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(version = localcast::VERSION, "starting localcast");

    let (display, handle) = Display::new(true);
    let renderer = tokio::spawn(display.run());

    let provider = StaticLocationProvider::new(config.fixed_coordinate());
    let mut screen = LocationScreen::new(
        provider,
        OpenPermissionGate,
        GeocodingClient::new(&config.geocoding)?,
        WeatherClient::new(&config.weather)?,
        handle,
    );

    screen.refresh().await;
    screen.settled().await;

    while tokio::task::spawn_blocking(prompt_refresh)
        .await
        .context("prompt task failed")??
    {
        screen.refresh().await;
        screen.settled().await;
    }

    drop(screen);
    renderer.await.context("display task failed")?;
    Ok(())
}

/// Blocking prompt: Enter refreshes, a line starting with `q` quits.
/// EOF quits as well, so piped runs fetch exactly once.
fn prompt_refresh() -> Result<bool> {
    println!();
    println!("Press Enter to refresh, q to quit.");
    let mut line = String::new();
    let read = std::io::stdin().lock().read_line(&mut line)?;
    Ok(read > 0 && !line.trim_start().starts_with('q'))
}
