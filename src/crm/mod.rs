pub mod client;
pub mod types;

pub use client::{CrmClient, CrmError};
pub use types::{CustomField, SubmissionPayload};

use crate::config::{CrmConfig, API_KEY_PLACEHOLDER, LOCATION_ID_PLACEHOLDER};

/// Validate CRM credentials and endpoint before submitting anything.
/// Returns all validation errors at once, in a fixed order (key, location,
/// URL). Placeholder sentinels count as unconfigured. No network calls.
pub fn validate_crm_config(config: &CrmConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.api_key.is_empty() || config.api_key == API_KEY_PLACEHOLDER {
        errors.push("CRM API key is not configured".to_string());
    }

    if config.location_id.is_empty() || config.location_id == LOCATION_ID_PLACEHOLDER {
        errors.push("CRM location ID is not configured".to_string());
    }

    if config.api_url.is_empty() {
        errors.push("CRM API URL is not configured".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
