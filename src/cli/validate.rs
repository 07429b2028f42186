use console::style;
use crate::cli::commands::ConfigArgs;
use crate::config::{self, credentials::mask_token, Settings};
use crate::errors::ExtractorError;
use crate::utils::formatting::format_days;

pub async fn handle_validate(args: ConfigArgs) -> Result<(), ExtractorError> {
    let settings = config::load_settings(args.config_path(), &args.overrides()).await?;
    println!("{}", style("Configuration is valid").green());
    print_settings(&settings);
    Ok(())
}

pub fn print_settings(settings: &Settings) {
    println!("  Tenant:   {}", settings.tenant);
    println!("  Base URL: {}", settings.base_url);
    println!("  Window:   {}", format_days(settings.days_of_data));
    println!("  Token:    {}", mask_token(&settings.api_token));
}
