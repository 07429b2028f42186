use std::sync::Arc;
use std::time::Instant;
use chrono::Utc;
use tokio_util::sync::CancellationToken;
use crate::client::MobbApi;
use crate::errors::ExtractorError;
use crate::models::ExportRow;
use crate::reporting::CsvExporter;
use super::details::fetch_report_details;
use super::filter::filter_irrelevant;
use super::issues::fetch_issues;
use super::lister::list_recent_reports;
use super::state::{ReportOutcome, RunSummary};
use tracing::{error, info, warn};

/// Drives one extraction run: list reports, then for each report fetch its
/// details and issues, filter, and append rows. Reports are handled strictly
/// one after another.
pub struct PipelineOrchestrator {
    api: Arc<dyn MobbApi>,
    exporter: CsvExporter,
    window_days: u32,
    cancel_token: CancellationToken,
}

impl PipelineOrchestrator {
    pub fn new(api: Arc<dyn MobbApi>, exporter: CsvExporter, window_days: u32) -> Self {
        Self {
            api,
            exporter,
            window_days,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Replace the orchestrator's cancel token with an external one (e.g. a Ctrl-C handler).
    pub fn with_cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel_token = token;
        self
    }

    pub fn exporter(&self) -> &CsvExporter {
        &self.exporter
    }

    pub async fn run(&self) -> Result<RunSummary, ExtractorError> {
        let started = Instant::now();
        info!(base_url = %self.api.base_url(), "Starting to process all active reports");

        let listing = tokio::select! {
            biased;
            _ = self.cancel_token.cancelled() => return Err(ExtractorError::Interrupted),
            listing = list_recent_reports(self.api.as_ref(), self.window_days, Utc::now()) => listing,
        };

        let mut summary = RunSummary::from_listing(&listing);
        if listing.report_ids.is_empty() {
            warn!("No active reports found");
        }

        for report_id in &listing.report_ids {
            // Row appends are synchronous, so cancellation only lands between
            // requests and never splits a row.
            let outcome = tokio::select! {
                biased;
                _ = self.cancel_token.cancelled() => {
                    warn!(
                        report_id = %report_id,
                        rows_exported = summary.rows_exported,
                        "Extraction interrupted"
                    );
                    return Err(ExtractorError::Interrupted);
                }
                outcome = self.process_report(report_id) => outcome,
            };
            summary.record(&outcome);
        }

        summary.duration_ms = started.elapsed().as_millis() as u64;
        info!(
            rows_exported = summary.rows_exported,
            rows_failed = summary.rows_failed,
            reports_processed = summary.reports_processed,
            reports_skipped = summary.reports_skipped,
            "Total irrelevant issues found across all reports"
        );
        Ok(summary)
    }

    /// Process one report. Failures stay local to the report: a missing
    /// detail skips it, failed row writes are logged and counted.
    pub async fn process_report(&self, report_id: &str) -> ReportOutcome {
        let Some(details) = fetch_report_details(self.api.as_ref(), report_id).await else {
            return ReportOutcome::SkippedNoDetails;
        };

        let issues = fetch_issues(self.api.as_ref(), report_id).await;
        let issues_seen = issues.len();
        let tagged = filter_irrelevant(issues);

        let mut rows_exported = 0;
        let mut rows_failed = 0;
        for issue in &tagged {
            let row = ExportRow::new(&details, issue);
            match self.exporter.append(&row) {
                Ok(()) => {
                    info!(
                        project = %row.project_name,
                        repo = %row.repo_name,
                        state = %row.state,
                        "Added row"
                    );
                    rows_exported += 1;
                }
                Err(e) => {
                    error!(
                        report_id = %report_id,
                        error = %e,
                        error_type = e.classify().error_type,
                        "Error appending to CSV file"
                    );
                    rows_failed += 1;
                }
            }
        }

        info!(
            report_id = %report_id,
            issues = issues_seen,
            irrelevant = tagged.len(),
            "Processed report"
        );

        ReportOutcome::Processed { issues_seen, rows_exported, rows_failed }
    }
}
