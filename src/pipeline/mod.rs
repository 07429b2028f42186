pub mod lister;
pub mod details;
pub mod issues;
pub mod filter;
pub mod state;
pub mod orchestrator;

pub use lister::{list_recent_reports, select_recent, ReportListing};
pub use details::fetch_report_details;
pub use issues::fetch_issues;
pub use filter::filter_irrelevant;
pub use state::{ReportOutcome, RunSummary};
pub use orchestrator::PipelineOrchestrator;
