use serde::{Deserialize, Serialize};

pub const DEFAULT_TENANT: &str = "api";
pub const KNOWN_TENANTS: &[&str] = &["api", "api-st-finacct"];
pub const TOKEN_PLACEHOLDER: &str = "YOUR_MOBB_API_TOKEN_HERE";
pub const TOKEN_ENV_VAR: &str = "MOBB_API_TOKEN";
pub const DEFAULT_CONFIG_FILE: &str = "config.json";
/// Windows longer than this are allowed but logged as unusual.
pub const MAX_EXPECTED_WINDOW_DAYS: u32 = 365;

/// On-disk configuration. Accepted as JSON or YAML.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ExtractorConfig {
    pub mobb_api_token: Option<String>,
    pub tenant: Option<String>,
    #[serde(rename = "daysOfData")]
    pub days_of_data: Option<i64>,
    #[serde(rename = "baseUrl")]
    pub base_url: Option<String>,
}

/// Values supplied on the command line; each wins over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub tenant: Option<String>,
    pub days_of_data: Option<i64>,
    pub base_url: Option<String>,
}

/// Fully validated settings for one run.
#[derive(Clone)]
pub struct Settings {
    pub api_token: String,
    pub tenant: String,
    pub days_of_data: u32,
    pub base_url: String,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_token", &super::credentials::mask_token(&self.api_token))
            .field("tenant", &self.tenant)
            .field("days_of_data", &self.days_of_data)
            .field("base_url", &self.base_url)
            .finish()
    }
}

pub fn tenant_base_url(tenant: &str) -> String {
    format!("https://{}.mobb.ai", tenant)
}
