//! Power Menu - popup entry point
//!
//! Shows the popup and exits with status 0 whether or not an action was
//! chosen. Only a broken configuration or a window that cannot be opened
//! ends the process with a non-zero status.

use anyhow::Context;
use power_menu::config::PopupConfig;
use power_menu::gui;

fn main() -> anyhow::Result<()> {
    // Log to stderr; stdout stays clean for shell callers
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    tracing::info!("Power menu starting...");

    let handle = gui::initialize(PopupConfig::default())?;

    handle.run().context("Failed to open the power menu window")?;

    Ok(())
}
