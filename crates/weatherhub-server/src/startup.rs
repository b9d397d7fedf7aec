//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r#"
 _       __           __  __               __  __      __
| |     / /__  ____ _/ /_/ /_  ___  _____/ / / /_  __/ /_
| | /| / / _ \/ __ `/ __/ __ \/ _ \/ ___/ /_/ / / / / __ \
| |/ |/ /  __/ /_/ / /_/ / / /  __/ /  / __  / /_/ / /_/ /
|__/|__/\___/\__,_/\__/_/ /_/\___/_/  /_/ /_/\__,_/_.___/

    "#
    );
}

/// Prints server startup information.
pub fn print_startup_info(port: u16) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://0.0.0.0:{}/api/v1/weather", port);
    info!("Health:    http://0.0.0.0:{}/health", port);
    info!("API Docs:  http://0.0.0.0:{}/swagger-ui", port);
    info!("{}", separator);
}
