//! Strip chart
//!
//! Owns the sample trace, the scrolling x window, and the latest-value
//! annotation, and renders them with egui_plot. The plot is display-only:
//! the visible window is controlled by the scroll rule, not by user pan or
//! zoom.

use egui::{Align2, Color32, Ui};
use egui_plot::{Line, Plot, PlotBounds, PlotPoint, PlotPoints, Text};

use crate::config::ChartConfig;
use crate::types::{Sample, Trace};

const PLOT_TITLE: &str = "Temp vs time";
const X_LABEL: &str = "Time-axis";
const Y_LABEL: &str = "Temp-axis";
const LINE_WIDTH: f32 = 2.0;

/// The latest-value annotation. Replaced wholesale on every accepted
/// sample; the previous label is dropped before the next one is drawn.
#[derive(Debug, Clone, PartialEq)]
struct ValueLabel {
    pos: [f64; 2],
    text: String,
}

/// Live scrolling line chart over a [`Trace`]
pub struct StripChart {
    trace: Trace,
    x_window: f64,
    y_range: (f64, f64),
    /// Current visible x range under the scroll rule
    x_bounds: (f64, f64),
    label: Option<ValueLabel>,
}

impl StripChart {
    /// Create an empty chart with the configured geometry
    pub fn new(config: &ChartConfig) -> Self {
        let x_window = config.x_window as f64;
        Self {
            trace: Trace::new(),
            x_window,
            y_range: (config.y_min, config.y_max),
            x_bounds: (0.0, x_window),
            label: None,
        }
    }

    /// Feed one sample into the chart.
    ///
    /// The pre-start sentinel is ignored. An accepted sample extends the
    /// trace, scrolls the window once its tick passes the window width, and
    /// replaces the value label at the top edge of the plot.
    pub fn push(&mut self, sample: Sample) {
        if sample.is_sentinel() {
            return;
        }
        self.trace.push(sample);

        let t = sample.tick as f64;
        if t > self.x_window {
            self.x_bounds = (t - self.x_window, t);
        }
        self.label = Some(ValueLabel {
            pos: [t, self.y_range.1],
            text: format!("{:.2}", sample.value),
        });
    }

    /// The accumulated series
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Visible x range under the scrolling rule
    pub fn x_bounds(&self) -> (f64, f64) {
        self.x_bounds
    }

    /// Render the chart into `ui`
    pub fn show(&self, ui: &mut Ui) {
        ui.vertical_centered(|ui| ui.heading(PLOT_TITLE));

        let plot = Plot::new("strip_chart")
            .x_axis_label(X_LABEL)
            .y_axis_label(Y_LABEL)
            .show_grid(true)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false);

        plot.show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [self.x_bounds.0, self.y_range.0],
                [self.x_bounds.1, self.y_range.1],
            ));
            plot_ui.set_auto_bounds(egui::Vec2b::new(false, false));

            let points: PlotPoints = self.trace.as_plot_points().to_vec().into();
            plot_ui.line(Line::new("temp", points).width(LINE_WIDTH));

            if let Some(label) = &self.label {
                let text = egui::RichText::new(&label.text).color(Color32::BLACK);
                plot_ui.text(
                    Text::new(
                        "latest_value",
                        PlotPoint::new(label.pos[0], label.pos[1]),
                        text,
                    )
                    .anchor(Align2::LEFT_BOTTOM),
                );
            }
        });
    }
}
