use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use crate::client::MobbApi;
use crate::errors::FetchError;
use crate::models::ReportSummary;
use tracing::{debug, error, info, warn};

/// Result of listing active reports against the lookback window.
#[derive(Debug)]
pub struct ReportListing {
    /// Ids within the window, in response order.
    pub report_ids: Vec<String>,
    /// Reports in the response, before any filtering.
    pub total: usize,
    pub too_old: usize,
    /// Reports skipped for a missing id or a missing/unparseable timestamp.
    pub unparseable: usize,
    pub cutoff: DateTime<Utc>,
    /// Set when the listing request failed and the run degraded to no reports.
    pub failure: Option<FetchError>,
}

impl ReportListing {
    fn failed(cutoff: DateTime<Utc>, failure: FetchError) -> Self {
        Self {
            report_ids: Vec::new(),
            total: 0,
            too_old: 0,
            unparseable: 0,
            cutoff,
            failure: Some(failure),
        }
    }
}

/// `now - window_days`, clamped to the earliest representable instant.
pub fn cutoff_for(now: DateTime<Utc>, window_days: u32) -> DateTime<Utc> {
    now.checked_sub_signed(Duration::days(i64::from(window_days)))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Parse a report creation timestamp. Only offset-qualified timestamps are
/// accepted; `Z` and `+hh:mm` forms with `T` or space separators both parse.
pub fn parse_created_on(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    let normalized = raw.replacen(' ', "T", 1);
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%:z"] {
        if let Ok(ts) = DateTime::parse_from_str(&normalized, fmt) {
            return Some(ts.with_timezone(&Utc));
        }
    }
    if let Some(stripped) = normalized.strip_suffix('Z') {
        if let Ok(naive) = NaiveDateTime::parse_from_str(stripped, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(naive.and_utc());
        }
    }
    None
}

/// Keep the reports created at or after `cutoff`, preserving order.
pub fn select_recent(reports: &[ReportSummary], cutoff: DateTime<Utc>) -> ReportListing {
    let mut listing = ReportListing {
        report_ids: Vec::new(),
        total: reports.len(),
        too_old: 0,
        unparseable: 0,
        cutoff,
        failure: None,
    };

    for report in reports {
        let (Some(id), Some(raw)) = (report.id.as_deref(), report.created_on.as_deref()) else {
            debug!(report_id = ?report.id, "Skipping report without id or string timestamp");
            listing.unparseable += 1;
            continue;
        };
        if id.is_empty() {
            listing.unparseable += 1;
            continue;
        }

        match parse_created_on(raw) {
            Some(created_on) if created_on >= cutoff => {
                info!(report_id = %id, created_on = %created_on.to_rfc3339(), "Including report");
                listing.report_ids.push(id.to_string());
            }
            Some(created_on) => {
                debug!(report_id = %id, created_on = %created_on.to_rfc3339(), "Excluding report (too old)");
                listing.too_old += 1;
            }
            None => {
                error!(report_id = %id, created_on = %raw, "Error parsing date for report");
                listing.unparseable += 1;
            }
        }
    }

    listing
}

/// Fetch active reports and keep those within `window_days` of `now`.
/// A failed request yields an empty listing with `failure` set.
pub async fn list_recent_reports(
    api: &dyn MobbApi,
    window_days: u32,
    now: DateTime<Utc>,
) -> ReportListing {
    info!(days_of_data = window_days, "Fetching active reports");
    let cutoff = cutoff_for(now, window_days);

    let response = match api.active_reports().await {
        Ok(response) => response,
        Err(e) => {
            error!(error = %e, kind = e.kind(), "Failed to fetch active reports");
            return ReportListing::failed(cutoff, e);
        }
    };

    info!(cutoff = %cutoff.to_rfc3339(), "Filtering reports created after cutoff");
    let listing = select_recent(response.reports(), cutoff);

    if listing.unparseable > 0 {
        warn!(skipped = listing.unparseable, "Skipped reports without a usable id or timestamp");
    }
    info!(
        in_window = listing.report_ids.len(),
        total = listing.total,
        days_of_data = window_days,
        "Found active reports within window"
    );
    listing
}
