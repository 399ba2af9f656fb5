//! Summaries, integrity checks and reports over generated datasets.

pub mod engine;
pub mod errors;
pub mod integrity;
pub mod report;
pub mod summary;

pub use engine::{EvaluationResult, evaluate_export, get_summary};
pub use errors::EvalError;
pub use integrity::{IntegrityIssue, IntegrityReport, check_integrity};
pub use report::render_report;
pub use summary::{DataSummary, MaterialTypeCounts, OrderStatusCounts, summarize};
