use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::schema::{
    Config, CrmConfig, API_KEY_PLACEHOLDER, DEFAULT_API_URL, LOCATION_ID_PLACEHOLDER,
};
use super::{ensure_config_dir, get_config_path};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout().flush().context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Create a starter config file with the shipped scoring defaults.
///
/// Prompts for the CRM credentials; accepting the defaults leaves the
/// placeholder sentinels in place, which `leadscore check` will then report
/// as still unconfigured. Refuses to overwrite an existing file.
pub fn run_init(path: Option<PathBuf>) -> Result<()> {
    let config_path = path.unwrap_or_else(get_config_path);

    if config_path.exists() {
        anyhow::bail!(
            "Config file already exists at {}. Edit it directly or remove it first.",
            config_path.display()
        );
    }

    println!("leadscore configuration");
    println!("Credentials live in your CRM account settings (Settings > API).");
    println!();

    let api_key = prompt_with_default("CRM API key", API_KEY_PLACEHOLDER)?;
    let location_id = prompt_with_default("CRM location ID", LOCATION_ID_PLACEHOLDER)?;
    let api_url = prompt_with_default("CRM contacts endpoint", DEFAULT_API_URL)?;

    let config = Config {
        crm: CrmConfig {
            api_key,
            location_id,
            api_url,
        },
        ..Config::default()
    };

    if config_path == get_config_path() {
        ensure_config_dir()?;
    } else if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create config directory at {}", parent.display())
        })?;
    }

    let yaml = serde_saphyr::to_string(&config).context("Failed to serialize config")?;
    std::fs::write(&config_path, yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!();
    println!("Wrote {}", config_path.display());
    if config.crm.api_key == API_KEY_PLACEHOLDER || config.crm.location_id == LOCATION_ID_PLACEHOLDER
    {
        println!("Placeholder credentials remain; run `leadscore check` after filling them in.");
    }

    Ok(())
}
