// Utility functions and helpers
//
// This module provides progress reporting and small text helpers shared by the
// table loader and the generator.

pub mod progress_report;
pub mod text_utils;

pub use progress_report::{ProgressState, ProgressReportFn};
pub use text_utils::{skip_utf8_bom, strip_line_ending};
