//! Frontend module for egui UI
//!
//! A single-window eframe application. The update loop is also the sampling
//! timer: every interval it pulls exactly one sample from the backend and
//! feeds it to the strip chart, suspending on the blocking line read while
//! the device is silent. Closing the window ends the run loop, which is the
//! one designed exit path.

pub mod chart;

pub use chart::StripChart;

use std::time::{Duration, Instant};

use egui::Color32;

use crate::backend::{LineSource, Sampler};
use crate::config::AppConfig;
use crate::error::TempscopeError;

/// Main application state implementing [`eframe::App`]
pub struct TempscopeApp<S> {
    sampler: Sampler<S>,
    chart: StripChart,
    interval: Duration,
    next_pull: Instant,
    /// Set on the first sampler failure; sampling never resumes afterwards
    halted: Option<TempscopeError>,
}

impl<S: LineSource> TempscopeApp<S> {
    /// Build the application around an already-opened sampler
    pub fn new(config: &AppConfig, sampler: Sampler<S>) -> Self {
        tracing::info!(source = %sampler.describe_source(), "chart started");
        Self {
            sampler,
            chart: StripChart::new(&config.chart),
            interval: config.chart.sample_interval(),
            next_pull: Instant::now(),
            halted: None,
        }
    }

    /// Pull at most one sample when the timer is due
    fn pump(&mut self) {
        if self.halted.is_some() {
            return;
        }
        let now = Instant::now();
        if now < self.next_pull {
            return;
        }
        self.next_pull = now + self.interval;

        match self.sampler.next_sample() {
            Ok(sample) => {
                tracing::trace!(tick = sample.tick, value = sample.value, "sample");
                self.chart.push(sample);
            }
            Err(e) => {
                tracing::error!(error = %e, "sampling halted");
                self.halted = Some(e);
            }
        }
    }
}

/// Warning banner shown once sampling has halted
fn halt_banner(ui: &mut egui::Ui, error: &TempscopeError) {
    egui::Frame::new()
        .fill(Color32::from_rgb(255, 200, 100))
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(20.0).color(Color32::BLACK));
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new("Sampling halted")
                            .strong()
                            .color(Color32::BLACK),
                    );
                    ui.label(
                        egui::RichText::new(error.to_string()).color(Color32::from_gray(40)),
                    );
                });
            });
        });
    ui.add_space(4.0);
}

impl<S: LineSource> eframe::App for TempscopeApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pump();

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(error) = &self.halted {
                halt_banner(ui, error);
            }
            self.chart.show(ui);
        });

        // A halted chart is static; only keep the timer running while
        // samples can still arrive.
        if self.halted.is_none() {
            ctx.request_repaint_after(self.interval);
        }
    }
}
