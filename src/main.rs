use std::path::{Path, PathBuf};
use std::sync::Mutex;
use clap::Parser;
use mobb_fp::audit::RunSession;
use mobb_fp::cli::{self, Cli, Commands};
use mobb_fp::config::{self, Settings};
use mobb_fp::errors::ExtractorError;
use tracing::{error, warn, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    // A run validates its configuration before anything is written to the
    // output directory; until then logs go to the console only.
    let prepared = match &cli.command {
        Commands::Run(args) => {
            let _console = tracing::subscriber::set_default(
                tracing_subscriber::registry()
                    .with(env_filter(&cli))
                    .with(console_layer(&cli)),
            );
            match prepare_run(args).await {
                Ok(prepared) => Some(prepared),
                Err(e) => exit_with(e),
            }
        }
        _ => None,
    };

    let log_file = prepared.as_ref().map(|(_, session)| session.log_path());
    if let Err(e) = init_logging(&cli, log_file.as_deref()) {
        exit_with(e);
    }

    let result = match cli.command {
        Commands::Run(_) => match prepared {
            Some((settings, session)) => cli::run::handle_run(settings, session, cli.quiet).await,
            None => Err(ExtractorError::Internal("run was not prepared".into())),
        },
        Commands::Check(args) => cli::check::handle_check(args).await,
        Commands::Validate(args) => cli::validate::handle_validate(args).await,
    };

    if let Err(e) = result {
        exit_with(e);
    }
}

async fn prepare_run(args: &cli::commands::RunArgs) -> Result<(Settings, RunSession), ExtractorError> {
    let settings = config::load_settings(args.config.config_path(), &args.config.overrides()).await?;
    let session = RunSession::initialize(&PathBuf::from(&args.output))?;
    Ok((settings, session))
}

fn env_filter(cli: &Cli) -> EnvFilter {
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

fn console_layer<S>(cli: &Cli) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let console_level = if cli.quiet { LevelFilter::WARN } else { LevelFilter::TRACE };
    tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_filter(console_level)
}

fn init_logging(cli: &Cli, log_file: Option<&Path>) -> Result<(), ExtractorError> {
    let file_layer = match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter(cli))
        .with(console_layer(cli))
        .with(file_layer)
        .init();
    Ok(())
}

fn exit_with(e: ExtractorError) -> ! {
    let class = e.classify();
    if matches!(e, ExtractorError::Interrupted) {
        warn!("Extraction cancelled by user");
        println!("\nExtraction cancelled by user");
    } else {
        error!(error = %e, error_type = class.error_type, "Fatal error");
        eprintln!("Error: {}", e);
    }
    std::process::exit(class.exit_code);
}
