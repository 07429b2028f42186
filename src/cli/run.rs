use std::sync::Arc;
use console::style;
use tokio_util::sync::CancellationToken;
use crate::audit::RunSession;
use crate::client::{MobbApi, MobbClient};
use crate::config::Settings;
use crate::errors::ExtractorError;
use crate::pipeline::{PipelineOrchestrator, RunSummary};
use crate::reporting::CsvExporter;
use crate::utils::formatting::{format_days, format_duration};
use tracing::{info, warn};

/// Run a full extraction with already validated settings. The session's
/// log file is open by the time this is called.
pub async fn handle_run(settings: Settings, session: RunSession, quiet: bool) -> Result<(), ExtractorError> {
    info!(
        tenant = %settings.tenant,
        base_url = %settings.base_url,
        days_of_data = settings.days_of_data,
        git_hash = option_env!("GIT_HASH").unwrap_or("dev"),
        built = option_env!("BUILD_TIMESTAMP").unwrap_or("unknown"),
        "Starting Mobb FP extraction"
    );

    let client: Arc<dyn MobbApi> = Arc::new(MobbClient::new(&settings.api_token, &settings.base_url)?);
    let exporter = CsvExporter::create(&session.csv_path())?;

    if !quiet {
        println!("{}", style("Starting Mobb FP extraction").bold());
        println!(
            "  Tenant: {}  Window: {}",
            style(&settings.tenant).cyan(),
            format_days(settings.days_of_data)
        );
        println!("  Log file:   {}", session.log_path().display());
        println!("  Output CSV: {}", exporter.path().display());
        println!();
    }

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let orchestrator = PipelineOrchestrator::new(client, exporter, settings.days_of_data)
        .with_cancel_token(cancel);
    let summary = orchestrator.run().await?;

    info!(
        rows_exported = summary.rows_exported,
        summary = %serde_json::to_string(&summary)?,
        "Mobb FP extraction completed"
    );
    if summary.listing_failed {
        warn!("Active report listing failed; the export contains no rows");
    }

    if !quiet {
        print_summary(&summary, &orchestrator);
    }
    Ok(())
}

fn print_summary(summary: &RunSummary, orchestrator: &PipelineOrchestrator) {
    println!();
    println!("{}", style("Extraction completed").green().bold());
    println!(
        "  Reports: {} in window of {} listed ({} too old, {} unusable, {} skipped)",
        summary.reports_in_window,
        summary.reports_total,
        summary.reports_too_old,
        summary.reports_unparseable,
        summary.reports_skipped,
    );
    println!("  Issues reviewed: {}", summary.issues_seen);
    println!(
        "  Total irrelevant issues exported: {}",
        style(summary.rows_exported).bold()
    );
    if summary.rows_failed > 0 {
        println!("  {}", style(format!("Rows failed to write: {}", summary.rows_failed)).red());
    }
    println!("  CSV file: {}", orchestrator.exporter().path().display());
    println!("  Duration: {}", format_duration(summary.duration_ms));
}
