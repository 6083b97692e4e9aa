//! Progress reporting for database generation.
//!
//! Generating the full radical database inserts tens of thousands of rows in
//! one transaction. Callers can pass a reporter to receive periodic updates and
//! cancel the run.
//!
//! # Examples
//!
//! ```
//! use congkit::utils::progress_report::ProgressState;
//!
//! fn my_reporter(state: &mut ProgressState) -> bool {
//!     println!("{}: {}/{}", state.state_id, state.current, state.total);
//!     false // Return true to cancel the operation
//! }
//!
//! let mut progress = ProgressState::new("generating", 100, 10, Some(my_reporter));
//! for i in 0..100 {
//!     if progress.report(i) {
//!         break;
//!     }
//! }
//! ```

/// Function type for progress reporting callbacks.
///
/// The function receives a mutable reference to the progress state and
/// returns `true` to cancel the operation, or `false` to continue.
pub type ProgressReportFn = fn(&mut ProgressState) -> bool;

/// State information for progress reporting.
pub struct ProgressState {
    /// Identifier for this progress state (e.g., "DbGenerator::generate")
    pub state_id: String,
    /// Total number of rows to process
    pub total: u64,
    /// Row being processed at the last report
    pub current: u64,
    /// Row at which progress was last reported
    pub last: u64,
    /// Number of rows between reports
    pub report_interval: u64,
    pub reporter: Option<ProgressReportFn>,
}

impl ProgressState {
    /// Creates a new progress state reporting every `report_interval_percent` percent of `total`.
    pub fn new(state_id: &str, total: u64, report_interval_percent: u64, reporter: Option<ProgressReportFn>) -> Self {
        Self {
            state_id: state_id.to_string(),
            total,
            current: 0,
            last: 0,
            report_interval: total * report_interval_percent / 100,
            reporter,
        }
    }

    /// Reports progress for row `current`.
    ///
    /// Returns `true` if the reporter asked to cancel.
    pub fn report(&mut self, current: u64) -> bool {
        let Some(reporter) = self.reporter else {
            return false;
        };
        if current.saturating_sub(self.last) > self.report_interval || current + 1 >= self.total {
            self.current = current;
            let cancelled = reporter(self);
            self.last = current;
            cancelled
        } else {
            false
        }
    }
}
