use serde::{Deserialize, Serialize};

/// Scoring weights and qualification threshold.
///
/// Each weight is awarded when its question is answered "yes"; a score at or
/// above `threshold` qualifies the lead.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   paying_more_yes: 50
///   shade_yes: 30
///   inverter_outside_yes: 20
///   threshold: 60
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Points when the customer pays more for electricity after going solar
    #[serde(default = "default_paying_more_yes")]
    pub paying_more_yes: u32,

    /// Points when the panels are shaded during the day
    #[serde(default = "default_shade_yes")]
    pub shade_yes: u32,

    /// Points when the inverter is mounted outside
    #[serde(default = "default_inverter_outside_yes")]
    pub inverter_outside_yes: u32,

    /// Minimum score for a lead to count as qualified
    #[serde(default = "default_threshold")]
    pub threshold: u32,
}

fn default_paying_more_yes() -> u32 {
    50
}

fn default_shade_yes() -> u32 {
    30
}

fn default_inverter_outside_yes() -> u32 {
    20
}

fn default_threshold() -> u32 {
    60
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            paying_more_yes: default_paying_more_yes(),
            shade_yes: default_shade_yes(),
            inverter_outside_yes: default_inverter_outside_yes(),
            threshold: default_threshold(),
        }
    }
}

/// CRM tags applied by qualification outcome.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TagsConfig {
    /// Tag applied to leads scoring at or above the threshold
    #[serde(default = "default_qualified_tag")]
    pub qualified: String,

    /// Tag applied to leads scoring below the threshold
    #[serde(default = "default_unqualified_tag")]
    pub unqualified: String,
}

fn default_qualified_tag() -> String {
    "good_solar_case".to_string()
}

fn default_unqualified_tag() -> String {
    "low_quality_case".to_string()
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            qualified: default_qualified_tag(),
            unqualified: default_unqualified_tag(),
        }
    }
}
