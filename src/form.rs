use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A yes/no answer from the intake form.
///
/// An unanswered question is `None` at the `FormData` level, so the three
/// states are yes / no / absent. Any other string fails at the parse
/// boundary instead of silently scoring zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Answer::Yes => "yes",
            Answer::No => "no",
        }
    }
}

/// Custom-field projection of a tri-state answer. Unanswered questions are
/// sent as an empty value, the CRM's representation of an untouched field.
pub fn answer_field_value(answer: Option<Answer>) -> &'static str {
    answer.map(|a| a.as_str()).unwrap_or("")
}

/// One completed intake form. Field names follow the form's JSON shape
/// (`payingMore`, `fullName`, ...). Consumed immediately, never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub paying_more: Option<Answer>,
    #[serde(default)]
    pub shade: Option<Answer>,
    #[serde(default)]
    pub inverter_outside: Option<Answer>,
}
