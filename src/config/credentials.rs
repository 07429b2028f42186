use tracing::debug;
use super::types::TOKEN_PLACEHOLDER;

/// Resolve a credential value. A value of the form `$NAME` is read from the
/// environment; an unset variable resolves to nothing.
pub fn resolve_credential(value: &str) -> Option<String> {
    let value = value.trim();
    if let Some(var_name) = value.strip_prefix('$') {
        match std::env::var(var_name) {
            Ok(resolved) => {
                debug!(var = %var_name, "Resolved credential from environment");
                Some(resolved)
            }
            Err(_) => {
                debug!(var = %var_name, "Environment variable not set");
                None
            }
        }
    } else {
        Some(value.to_string())
    }
}

/// True for tokens that cannot be sent: empty or the shipped placeholder.
pub fn is_unset_token(token: &str) -> bool {
    let token = token.trim();
    token.is_empty() || token == TOKEN_PLACEHOLDER
}

/// Display form of a token: twenty asterisks followed by its last eight characters.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let tail: String = chars[chars.len().saturating_sub(8)..].iter().collect();
    format!("{}{}", "*".repeat(20), tail)
}
