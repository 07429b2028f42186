use serde::Serialize;
use super::lister::ReportListing;

/// What processing one report produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// Detail fetch failed or returned nothing; no rows possible.
    SkippedNoDetails,
    Processed {
        issues_seen: usize,
        rows_exported: usize,
        rows_failed: usize,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Reports in the listing response.
    pub reports_total: usize,
    pub reports_in_window: usize,
    pub reports_too_old: usize,
    pub reports_unparseable: usize,
    pub reports_processed: usize,
    pub reports_skipped: usize,
    pub issues_seen: usize,
    pub rows_exported: usize,
    pub rows_failed: usize,
    pub listing_failed: bool,
    pub duration_ms: u64,
}

impl RunSummary {
    pub fn from_listing(listing: &ReportListing) -> Self {
        Self {
            reports_total: listing.total,
            reports_in_window: listing.report_ids.len(),
            reports_too_old: listing.too_old,
            reports_unparseable: listing.unparseable,
            listing_failed: listing.failure.is_some(),
            ..Default::default()
        }
    }

    pub fn record(&mut self, outcome: &ReportOutcome) {
        match outcome {
            ReportOutcome::SkippedNoDetails => self.reports_skipped += 1,
            ReportOutcome::Processed { issues_seen, rows_exported, rows_failed } => {
                self.reports_processed += 1;
                self.issues_seen += issues_seen;
                self.rows_exported += rows_exported;
                self.rows_failed += rows_failed;
            }
        }
    }
}
