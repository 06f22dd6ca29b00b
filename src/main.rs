//! Tempscope - Main Entry Point
//!
//! Opens the instrument's serial port, logs a short diagnostic preview of
//! the incoming lines, and hands a pull-based sampler to the chart window.

use anyhow::Context;
use tempscope::backend::{parse, Sampler};
use tempscope::config::AppConfig;
use tempscope::frontend::TempscopeApp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tempscope=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = AppConfig::load_or_default();

    // A single optional argument overrides the configured port name.
    if let Some(port) = std::env::args().nth(1) {
        config.serial.port = port;
    }

    tracing::info!(port = %config.serial.port, "starting tempscope");

    #[cfg(feature = "mock-serial")]
    let mut source = tempscope::backend::ScriptedLineSource::synthetic(100_000)
        .with_delay(config.chart.sample_interval());

    #[cfg(not(feature = "mock-serial"))]
    let mut source = tempscope::backend::SerialLineSource::open(&config.serial)
        .with_context(|| format!("failed to open serial port {}", config.serial.port))?;

    // Diagnostic preview of the first few lines, before the chart starts.
    parse::preview(&mut source, config.preview_lines)
        .context("startup diagnostic preview failed")?;

    let sampler = Sampler::new(source);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 540.0])
            .with_title("Temp vs time"),
        ..Default::default()
    };

    eframe::run_native(
        "Temp vs time",
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(TempscopeApp::new(&config, sampler)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("ui error: {e}"))?;

    tracing::info!("window closed, exiting");
    Ok(())
}
