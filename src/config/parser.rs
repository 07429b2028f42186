use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use regex::Regex;
use crate::errors::ExtractorError;
use super::credentials::{is_unset_token, resolve_credential};
use super::schema::CONFIG_SCHEMA;
use super::types::*;
use tracing::{debug, warn};

static TENANT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]([a-z0-9-]*[a-z0-9])?$").unwrap());

pub async fn parse_config(path: &Path) -> Result<ExtractorConfig, ExtractorError> {
    if !path.exists() {
        return Err(ExtractorError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(ExtractorError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    // Objects go through the JSON parser (YAML rejects tab indentation);
    // anything else is read as YAML.
    let value: serde_json::Value = if content.trim_start().starts_with('{') {
        serde_json::from_str(&content).map_err(|e| {
            ExtractorError::Config(format!("Invalid JSON in configuration file {}: {}", path.display(), e))
        })?
    } else {
        serde_yaml::from_str(&content)?
    };
    if value.is_null() {
        return Ok(ExtractorConfig::default());
    }

    validate_schema(&value)?;

    serde_json::from_value(value).map_err(|e| {
        ExtractorError::Config(format!("Invalid configuration in {}: {}", path.display(), e))
    })
}

/// Load and validate settings for a run.
///
/// With no explicit path, `config.json` in the working directory is used when
/// present; otherwise everything must come from overrides and the environment.
pub async fn load_settings(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<Settings, ExtractorError> {
    let file_config = match path {
        Some(path) => parse_config(path).await?,
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                parse_config(&default_path).await?
            } else {
                debug!(path = DEFAULT_CONFIG_FILE, "No config file, using overrides and environment");
                ExtractorConfig::default()
            }
        }
    };

    resolve_settings(file_config, overrides, std::env::var(TOKEN_ENV_VAR).ok())
}

/// Merge file values, overrides and the environment token, then validate.
pub fn resolve_settings(
    file: ExtractorConfig,
    overrides: &ConfigOverrides,
    env_token: Option<String>,
) -> Result<Settings, ExtractorError> {
    let api_token = file
        .mobb_api_token
        .as_deref()
        .and_then(resolve_credential)
        .filter(|t| !is_unset_token(t))
        .or_else(|| env_token.filter(|t| !is_unset_token(t)))
        .ok_or_else(|| {
            ExtractorError::Config(format!(
                "Please set your Mobb API token in the config file or the {} environment variable",
                TOKEN_ENV_VAR
            ))
        })?;

    let tenant = overrides
        .tenant
        .clone()
        .or(file.tenant)
        .unwrap_or_else(|| DEFAULT_TENANT.to_string());
    if !TENANT_PATTERN.is_match(&tenant) {
        return Err(ExtractorError::Config(format!(
            "Invalid tenant '{}': must be a lowercase host label",
            tenant
        )));
    }
    if !KNOWN_TENANTS.contains(&tenant.as_str()) {
        warn!(tenant = %tenant, known = ?KNOWN_TENANTS, "Unrecognized tenant");
    }

    let days_of_data = validate_window(overrides.days_of_data.or(file.days_of_data))?;

    let base_url = match overrides.base_url.clone().or(file.base_url) {
        Some(url) => validate_base_url(&url)?,
        None => tenant_base_url(&tenant),
    };

    Ok(Settings {
        api_token: api_token.trim().to_string(),
        tenant,
        days_of_data,
        base_url,
    })
}

fn validate_window(days: Option<i64>) -> Result<u32, ExtractorError> {
    let days = days.ok_or_else(|| {
        ExtractorError::Config("daysOfData is required (set it in the config file or pass --days)".into())
    })?;
    if days < 1 {
        return Err(ExtractorError::Config(format!(
            "Invalid daysOfData '{}': must be a positive integer",
            days
        )));
    }
    let days = u32::try_from(days)
        .map_err(|_| ExtractorError::Config(format!("daysOfData '{}' is out of range", days)))?;
    if days > MAX_EXPECTED_WINDOW_DAYS {
        warn!(days_of_data = days, "daysOfData spans more than a year");
    }
    Ok(days)
}

fn validate_base_url(url: &str) -> Result<String, ExtractorError> {
    let trimmed = url.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ExtractorError::Config(format!(
            "Invalid base URL '{}': must start with http:// or https://",
            url
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(json_value: &serde_json::Value) -> Result<(), ExtractorError> {
    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| ExtractorError::Internal(format!("Schema compilation error: {}", e)))?;

    if let Err(errors) = compiled.validate(json_value) {
        // Advisory only; typed parsing and resolve_settings decide.
        for e in errors {
            warn!(validation_error = %e, path = %e.instance_path, "Config schema warning");
        }
    }

    Ok(())
}
