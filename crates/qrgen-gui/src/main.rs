//! QR Code Generator - Desktop GUI Application
//!
//! Turns a URL or piece of text into a QR code, previews it and saves it
//! as PNG or JPEG.

use anyhow::Context;
use iced::{Size, window};
use qrgen_gui::app::App;
use qrgen_gui::logging::{LogConfig, init_logging};
use qrgen_gui::settings::Settings;

fn main() -> anyhow::Result<()> {
    let settings_path = Settings::config_path();
    let (settings, settings_error) = match Settings::read_from(&settings_path) {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };

    let log_config = LogConfig::from_settings(&settings.logging);
    init_logging(&log_config).context("initialize logging")?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting QR Code Generator");
    match &settings_error {
        Some(e) => tracing::warn!(
            path = %settings_path.display(),
            error = %e,
            "ignoring settings file, using defaults"
        ),
        None => tracing::debug!(path = %settings_path.display(), "settings loaded"),
    }

    iced::application(move || App::new(settings.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window::Settings {
            size: Size::new(600.0, 700.0),
            min_size: Some(Size::new(480.0, 560.0)),
            position: window::Position::Centered,
            ..Default::default()
        })
        .run()
        .context("run GUI event loop")?;

    Ok(())
}
