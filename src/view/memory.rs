use crate::chart::spec::ChartSpec;
use crate::view::{ChartTarget, Slot, ViewSink};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Contents {
    texts: HashMap<Slot, String>,
    charts: HashMap<ChartTarget, ChartSpec>,
    writes: usize,
}

/// A thread-safe, in-memory display.
///
/// Holds the latest value written to each slot and chart target. Useful for
/// tests and for hosts that render the dashboard themselves.
///
/// # Examples
///
/// ```rust
/// use stormberry_dashboard::{MemoryView, Slot, ViewSink};
///
/// let view = MemoryView::new();
/// view.set_text(Slot::CurrentTemp, "20.0");
/// assert_eq!(view.text(Slot::CurrentTemp).as_deref(), Some("20.0"));
/// assert_eq!(view.text(Slot::CurrentTempF), None);
/// ```
#[derive(Debug, Default)]
pub struct MemoryView {
    contents: Mutex<Contents>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Contents> {
        // Contents stay consistent even if a writer panicked mid-way.
        self.contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// The current text of `slot`, or `None` if nothing has been written to it.
    pub fn text(&self, slot: Slot) -> Option<String> {
        self.lock().texts.get(&slot).cloned()
    }

    /// The chart currently shown by `target`, if any.
    pub fn chart(&self, target: ChartTarget) -> Option<ChartSpec> {
        self.lock().charts.get(&target).cloned()
    }

    /// Total number of writes (text and chart) received so far.
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    /// A copy of every populated slot.
    pub fn texts(&self) -> HashMap<Slot, String> {
        self.lock().texts.clone()
    }
}

impl ViewSink for MemoryView {
    fn set_text(&self, slot: Slot, value: &str) {
        let mut contents = self.lock();
        contents.texts.insert(slot, value.to_string());
        contents.writes += 1;
    }

    fn render_chart(&self, target: ChartTarget, chart: &ChartSpec) {
        let mut contents = self.lock();
        contents.charts.insert(target, chart.clone());
        contents.writes += 1;
    }
}
