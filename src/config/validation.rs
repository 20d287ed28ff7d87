//! Configuration validation logic.

use url::Url;

use crate::config::loader::{env_keys, Config};
use crate::error::{Error, Result};

/// Validate the entire configuration.
///
/// Only presence and shape are checked. Credential contents are passed to the
/// server untouched, so a bad token surfaces as an authentication failure.
pub fn validate_config(config: &Config) -> Result<()> {
    require(env_keys::JWT, &config.account.jwt)?;
    require(env_keys::COOKIE, &config.account.cookie)?;
    require(env_keys::DEPENDENT_ID, &config.account.dependent_id)?;
    require(env_keys::JOIN_DATE, &config.account.join_date)?;
    config.join_date()?;
    validate_api_base(&config.options.api_base)?;

    Ok(())
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::MissingConfig(field.to_string()));
    }
    Ok(())
}

/// Validate the API base URL.
pub fn validate_api_base(api_base: &str) -> Result<()> {
    let url = Url::parse(api_base)?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "api_base".to_string(),
            message: format!("Unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(())
}
