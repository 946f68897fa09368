use serde::{Deserialize, Serialize};

use crate::scoring::{ScoringConfig, TagsConfig};

/// Sentinel left in freshly-created config files until a real key is set.
pub const API_KEY_PLACEHOLDER: &str = "YOUR_GHL_API_KEY_HERE";
/// Sentinel left in freshly-created config files until a real location is set.
pub const LOCATION_ID_PLACEHOLDER: &str = "YOUR_LOCATION_ID_HERE";
/// v1 contacts endpoint; v2 deployments use services.leadconnectorhq.com.
pub const DEFAULT_API_URL: &str = "https://rest.gohighlevel.com/v1/contacts/";

/// Top-level configuration file shape.
///
/// Every section may be omitted: scoring, tags and custom-field keys fall
/// back to the shipped defaults, CRM credentials fall back to placeholder
/// sentinels that `validate_crm_config` reports as unconfigured.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub crm: CrmConfig,

    #[serde(default)]
    pub scoring: ScoringConfig,

    #[serde(default)]
    pub tags: TagsConfig,

    #[serde(default)]
    pub custom_fields: CustomFieldKeys,
}

/// CRM credentials and endpoint.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CrmConfig {
    /// API key, sent as a bearer token
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// Account location identifier
    #[serde(default = "default_location_id")]
    pub location_id: String,

    /// Contacts endpoint the submission is POSTed to
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_key() -> String {
    API_KEY_PLACEHOLDER.to_string()
}

fn default_location_id() -> String {
    LOCATION_ID_PLACEHOLDER.to_string()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for CrmConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            location_id: default_location_id(),
            api_url: default_api_url(),
        }
    }
}

/// Custom-field keys on the CRM contact record.
/// These must match the field keys defined in the CRM account.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CustomFieldKeys {
    #[serde(default = "default_score_key")]
    pub score: String,

    #[serde(default = "default_paying_more_key")]
    pub paying_more: String,

    #[serde(default = "default_shade_key")]
    pub shade: String,

    #[serde(default = "default_inverter_outside_key")]
    pub inverter_outside: String,

    #[serde(default = "default_qualification_key")]
    pub qualification: String,
}

fn default_score_key() -> String {
    "solar_case_score".to_string()
}

fn default_paying_more_key() -> String {
    "paying_more_post_solar".to_string()
}

fn default_shade_key() -> String {
    "panels_shaded".to_string()
}

fn default_inverter_outside_key() -> String {
    "inverter_outside".to_string()
}

fn default_qualification_key() -> String {
    "qualification_status".to_string()
}

impl Default for CustomFieldKeys {
    fn default() -> Self {
        Self {
            score: default_score_key(),
            paying_more: default_paying_more_key(),
            shade: default_shade_key(),
            inverter_outside: default_inverter_outside_key(),
            qualification: default_qualification_key(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_takes_all_defaults() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config.crm.api_key, API_KEY_PLACEHOLDER);
        assert_eq!(config.crm.api_url, DEFAULT_API_URL);
        assert_eq!(config.scoring.threshold, 60);
        assert_eq!(config.tags.qualified, "good_solar_case");
        assert_eq!(config.custom_fields.score, "solar_case_score");
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
crm:
  api_key: live-key-123
  location_id: loc-9
  api_url: https://services.leadconnectorhq.com/contacts/
scoring:
  paying_more_yes: 40
  shade_yes: 40
  inverter_outside_yes: 20
  threshold: 50
tags:
  qualified: hot_lead
  unqualified: cold_lead
custom_fields:
  score: my_score
  paying_more: my_paying_more
  shade: my_shade
  inverter_outside: my_inverter
  qualification: my_status
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.crm.api_key, "live-key-123");
        assert_eq!(config.crm.location_id, "loc-9");
        assert_eq!(config.scoring.paying_more_yes, 40);
        assert_eq!(config.scoring.threshold, 50);
        assert_eq!(config.tags.unqualified, "cold_lead");
        assert_eq!(config.custom_fields.qualification, "my_status");
    }

    #[test]
    fn test_partial_crm_section() {
        let yaml = r#"
crm:
  api_key: live-key-123
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.crm.api_key, "live-key-123");
        // Unset credentials stay at their placeholders for the validator
        assert_eq!(config.crm.location_id, LOCATION_ID_PLACEHOLDER);
        assert_eq!(config.crm.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_unknown_section_rejected() {
        let yaml = "webhooks:\n  url: https://example.com\n";
        assert!(serde_saphyr::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}
