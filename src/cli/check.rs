use chrono::Utc;
use console::style;
use crate::cli::commands::ConfigArgs;
use crate::client::{MobbApi, MobbClient};
use crate::config;
use crate::errors::ExtractorError;
use crate::pipeline::lister::{cutoff_for, select_recent};
use crate::utils::formatting::format_days;
use super::validate::print_settings;
use tracing::info;

/// Validate configuration, then make one listing call and report how many
/// reports fall inside the window.
pub async fn handle_check(args: ConfigArgs) -> Result<(), ExtractorError> {
    let settings = config::load_settings(args.config_path(), &args.overrides()).await?;
    println!("{}", style("Configuration is valid").green());
    print_settings(&settings);

    println!();
    println!("Testing API connectivity...");
    let client = MobbClient::new(&settings.api_token, &settings.base_url)?;
    let response = client.active_reports().await?;

    let listing = select_recent(response.reports(), cutoff_for(Utc::now(), settings.days_of_data));
    info!(in_window = listing.report_ids.len(), total = listing.total, "Connectivity check succeeded");

    println!("{}", style("Successfully connected to Mobb API").green());
    println!(
        "  Found {} reports within {} out of {} total active reports",
        listing.report_ids.len(),
        format_days(settings.days_of_data),
        listing.total,
    );
    if listing.report_ids.is_empty() && listing.total > 0 {
        println!(
            "  {}",
            style("No reports fall within the window. Consider increasing daysOfData.").yellow()
        );
    }
    Ok(())
}
