use crate::chart::spec::ChartSpec;
use crate::view::{ChartTarget, Slot, ViewSink};
use log::{info, warn};

/// A display that reports every write through the `log` facade.
///
/// Text writes are logged as `slot = "value"`; charts are logged as their JSON
/// form. Install a logger (for example `env_logger`) to see the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogView;

impl ViewSink for LogView {
    fn set_text(&self, slot: Slot, value: &str) {
        info!(target: "stormberry_dashboard::view", "{} = {:?}", slot, value);
    }

    fn render_chart(&self, target: ChartTarget, chart: &ChartSpec) {
        match serde_json::to_string(chart) {
            Ok(json) => info!(target: "stormberry_dashboard::view", "#{} <- {}", target, json),
            Err(e) => warn!(
                target: "stormberry_dashboard::view",
                "Could not serialize chart for #{}: {}",
                target,
                e
            ),
        }
    }
}
