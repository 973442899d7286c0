//! This module provides the main entry point: a [`Dashboard`] owns a payload source
//! and a view, and refreshes the view from the backend one reader at a time or all at once.

use crate::error::DashboardError;
use crate::fetch::source::{fetch_json, HttpSource, PayloadSource};
use crate::readers::basic_prediction::BasicPredictionReader;
use crate::readers::comfort::ComfortReader;
use crate::readers::latest_reading::LatestReadingReader;
use crate::readers::past_day::PastDayReader;
use crate::readers::past_week::PastWeekReader;
use crate::readers::weekly_trend::WeeklyTrendReader;
use crate::readers::{Reader, ReaderKind};
use crate::view::ViewSink;
use bon::bon;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::future::Future;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

const DEFAULT_USER_AGENT: &str = concat!("stormberry-dashboard/", env!("CARGO_PKG_VERSION"));

/// The outcome of one [`Dashboard::refresh_all`] round.
#[derive(Debug)]
pub struct RefreshReport {
    /// When the round started.
    pub started_at: DateTime<Utc>,
    /// One entry per reader, in [`ReaderKind::ALL`] order.
    pub outcomes: Vec<(ReaderKind, Result<(), DashboardError>)>,
}

impl RefreshReport {
    /// `true` when every reader refreshed its targets.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|(_, outcome)| outcome.is_ok())
    }

    pub fn outcome(&self, kind: ReaderKind) -> Option<&Result<(), DashboardError>> {
        self.outcomes
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, outcome)| outcome)
    }

    /// The readers that failed, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (ReaderKind, &DashboardError)> {
        self.outcomes
            .iter()
            .filter_map(|(kind, outcome)| outcome.as_ref().err().map(|e| (*kind, e)))
    }
}

/// The dashboard client.
///
/// Readers never share a display target, so they can be refreshed in any order
/// or concurrently. A failed refresh leaves that reader's targets untouched and
/// has no effect on the other readers.
///
/// Responses are applied in the order they arrive; there is no sequence check,
/// so a slow response from an older refresh can overwrite a newer one.
///
/// # Examples
///
/// ```rust
/// # use stormberry_dashboard::{Dashboard, DashboardError, MemoryView};
/// # async fn run() -> Result<(), DashboardError> {
/// let dashboard = Dashboard::builder()
///     .base_url("http://weatherpi.local:5000")
///     .view(MemoryView::new())
///     .build()?;
///
/// let report = dashboard.refresh_all().await;
/// for (reader, error) in report.failures() {
///     eprintln!("{reader} failed: {error}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct Dashboard<S, V> {
    source: S,
    view: V,
}

#[bon]
impl<V: ViewSink> Dashboard<HttpSource, V> {
    /// Creates a dashboard reading from the backend at `base_url`.
    ///
    /// # Arguments
    ///
    /// * `.base_url(impl Into<String>)`: **Required.** Root of the backend, e.g. `http://weatherpi.local:5000`.
    /// * `.view(V)`: **Required.** Where results are displayed.
    /// * `.user_agent(impl Into<String>)`: Optional. Defaults to `stormberry-dashboard/<version>`.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidBaseUrl`] if `base_url` is not an http(s) URL, and
    /// [`DashboardError::HttpClient`] if the HTTP client cannot be constructed.
    #[builder]
    pub fn new(
        #[builder(into)] base_url: String,
        view: V,
        #[builder(into)] user_agent: Option<String>,
    ) -> Result<Self, DashboardError> {
        let trimmed = base_url.trim();
        let has_host = ["http://", "https://"]
            .iter()
            .any(|scheme| trimmed.len() > scheme.len() && trimmed.starts_with(scheme));
        if !has_host {
            return Err(DashboardError::InvalidBaseUrl(base_url));
        }

        let user_agent = user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        let source = HttpSource::new(trimmed, &user_agent).map_err(DashboardError::HttpClient)?;
        Ok(Self { source, view })
    }
}

impl<S: PayloadSource, V: ViewSink> Dashboard<S, V> {
    /// Creates a dashboard reading from any [`PayloadSource`].
    pub fn with_source(source: S, view: V) -> Self {
        Self { source, view }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Fetches `R`'s endpoint once and writes the result to the view.
    ///
    /// Nothing is written unless the payload was fetched and decoded successfully.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stormberry_dashboard::{ComfortReader, Dashboard, DashboardError, Endpoint, FixtureSource, MemoryView, Slot};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), DashboardError> {
    /// let source = FixtureSource::new().with(
    ///     Endpoint::ComfortNow,
    ///     r#"{"comfort_safety_str": "cool", "safe_to_run": "yes", "method": "wbgt", "comfort_safety_value": 12.0}"#,
    /// );
    /// let dashboard = Dashboard::with_source(source, MemoryView::new());
    /// dashboard.refresh::<ComfortReader>().await?;
    ///
    /// assert_eq!(
    ///     dashboard.view().text(Slot::CurrentComfort).as_deref(),
    ///     Some("Consider wearing a jacket.")
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub async fn refresh<R: Reader>(&self) -> Result<(), DashboardError> {
        let endpoint = R::KIND.endpoint();
        let payload: R::Payload = fetch_json(&self.source, endpoint).await?;
        let updates = R::updates(&payload);
        debug!("{} writing {} updates", R::KIND, updates.len());
        self.view.apply(&updates);
        Ok(())
    }

    /// Runtime-dispatched form of [`Dashboard::refresh`].
    pub async fn refresh_kind(&self, kind: ReaderKind) -> Result<(), DashboardError> {
        match kind {
            ReaderKind::LatestReading => self.refresh::<LatestReadingReader>().await,
            ReaderKind::Comfort => self.refresh::<ComfortReader>().await,
            ReaderKind::BasicPrediction => self.refresh::<BasicPredictionReader>().await,
            ReaderKind::PastDay => self.refresh::<PastDayReader>().await,
            ReaderKind::PastWeek => self.refresh::<PastWeekReader>().await,
            ReaderKind::WeeklyTrend => self.refresh::<WeeklyTrendReader>().await,
        }
    }

    /// Refreshes every reader concurrently and reports each outcome.
    pub async fn refresh_all(&self) -> RefreshReport {
        let started_at = Utc::now();
        let (latest, comfort, prediction, past_day, past_week, weekly_trend) = tokio::join!(
            self.refresh::<LatestReadingReader>(),
            self.refresh::<ComfortReader>(),
            self.refresh::<BasicPredictionReader>(),
            self.refresh::<PastDayReader>(),
            self.refresh::<PastWeekReader>(),
            self.refresh::<WeeklyTrendReader>(),
        );

        let report = RefreshReport {
            started_at,
            outcomes: vec![
                (ReaderKind::LatestReading, latest),
                (ReaderKind::Comfort, comfort),
                (ReaderKind::BasicPrediction, prediction),
                (ReaderKind::PastDay, past_day),
                (ReaderKind::PastWeek, past_week),
                (ReaderKind::WeeklyTrend, weekly_trend),
            ],
        };
        for (kind, error) in report.failures() {
            warn!("Refresh of {} failed: {}", kind, error);
        }
        report
    }

    /// Calls [`Dashboard::refresh_all`] every `period` until `shutdown` completes.
    ///
    /// The first round starts immediately. A round in progress always runs to
    /// completion; `shutdown` is checked between rounds. A zero `period` is
    /// treated as one millisecond.
    ///
    /// Returns the number of completed rounds.
    pub async fn run_periodic<F>(&self, period: Duration, shutdown: F) -> usize
    where
        F: Future<Output = ()>,
    {
        let mut interval = tokio::time::interval(period.max(Duration::from_millis(1)));
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        let mut rounds = 0;
        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    info!("Stopping periodic refresh after {} rounds", rounds);
                    return rounds;
                }
                _ = interval.tick() => {
                    let report = self.refresh_all().await;
                    rounds += 1;
                    debug!(
                        "Refresh round {} finished, {} of {} readers succeeded",
                        rounds,
                        report.outcomes.len() - report.failures().count(),
                        report.outcomes.len()
                    );
                }
            }
        }
    }
}
