//! Configuration validation.

use anyhow::{bail, Result};
use std::path::Path;
use url::Url;

use super::Config;

/// Validate configuration.
pub fn validate(config: &Config) -> Result<()> {
    check_path("log_path", &config.log_path)?;
    check_path("store_path", &config.store_path)?;

    let search = match Url::parse(&config.search_url) {
        Ok(url) => url,
        Err(e) => bail!("Invalid search_url '{}': {}", config.search_url, e),
    };
    if !matches!(search.scheme(), "http" | "https") || search.host_str().is_none() {
        bail!(
            "Invalid search_url '{}': must be an absolute http(s) URL",
            config.search_url
        );
    }

    if config.min_filter_length == 0 {
        bail!("min_filter_length must be at least 1");
    }

    if config.block_message.trim().is_empty() {
        bail!("block_message cannot be empty");
    }

    Ok(())
}

fn check_path(key: &str, path: &Path) -> Result<()> {
    // Path will be created if it doesn't exist, so just check it's valid
    if path.to_string_lossy().contains('\0') {
        bail!("Invalid {}: contains null character", key);
    }
    Ok(())
}
