use serde::Serialize;

use crate::config::CustomFieldKeys;
use crate::form::{answer_field_value, FormData};
use crate::scoring::Qualification;

/// One `{key, field_value}` slot on the contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomField {
    pub key: String,
    pub field_value: String,
}

/// Contact record shape expected by the CRM contacts endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionPayload {
    pub email: String,
    pub phone: String,
    pub name: String,
    pub tags: Vec<String>,
    #[serde(rename = "customFields")]
    pub custom_fields: Vec<CustomField>,
}

impl SubmissionPayload {
    /// Project form data plus the scoring outcome into the wire shape.
    ///
    /// Custom fields are emitted in a fixed order: score (stringified), the
    /// three raw answers, then the qualification label.
    pub fn new(
        form: &FormData,
        score: u32,
        qualification: Qualification,
        tag: &str,
        keys: &CustomFieldKeys,
    ) -> Self {
        Self {
            email: form.email.clone(),
            phone: form.phone.clone(),
            name: form.full_name.clone(),
            tags: vec![tag.to_string()],
            custom_fields: vec![
                CustomField {
                    key: keys.score.clone(),
                    field_value: score.to_string(),
                },
                CustomField {
                    key: keys.paying_more.clone(),
                    field_value: answer_field_value(form.paying_more).to_string(),
                },
                CustomField {
                    key: keys.shade.clone(),
                    field_value: answer_field_value(form.shade).to_string(),
                },
                CustomField {
                    key: keys.inverter_outside.clone(),
                    field_value: answer_field_value(form.inverter_outside).to_string(),
                },
                CustomField {
                    key: keys.qualification.clone(),
                    field_value: qualification.as_str().to_string(),
                },
            ],
        }
    }
}
