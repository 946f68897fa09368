use super::config::TagsConfig;
use crate::config::CustomFieldKeys;

/// Validate tag and custom-field configuration at startup.
/// Returns all validation errors at once (not just the first).
///
/// Weights and the threshold are unsigned in the schema, so non-negativity
/// needs no runtime check.
pub fn validate_scoring(tags: &TagsConfig, fields: &CustomFieldKeys) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if tags.qualified.trim().is_empty() {
        errors.push("tags.qualified: must not be empty".to_string());
    }
    if tags.unqualified.trim().is_empty() {
        errors.push("tags.unqualified: must not be empty".to_string());
    }

    let keys = [
        ("score", &fields.score),
        ("paying_more", &fields.paying_more),
        ("shade", &fields.shade),
        ("inverter_outside", &fields.inverter_outside),
        ("qualification", &fields.qualification),
    ];
    for (name, key) in keys {
        if key.trim().is_empty() {
            errors.push(format!("custom_fields.{}: must not be empty", name));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
