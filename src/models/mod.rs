//! Data models for the LAMFO website backend.
//!
//! Member and project models match the frontend TypeScript interfaces; request bodies use
//! the camelCase field names the forms submit.

mod budget;
mod chat;
mod member;
mod project;

pub use budget::*;
pub use chat::*;
pub use member::*;
pub use project::*;

use serde::{Deserialize, Deserializer};

/// Years are written either as strings (`"2021"`) or bare integers (`2021`) in content files.
#[derive(Deserialize)]
#[serde(untagged)]
enum YearValue {
    Text(String),
    Number(i64),
}

impl From<YearValue> for String {
    fn from(value: YearValue) -> Self {
        match value {
            YearValue::Text(text) => text,
            YearValue::Number(number) => number.to_string(),
        }
    }
}

fn year<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    YearValue::deserialize(deserializer).map(String::from)
}

fn optional_year<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<YearValue>::deserialize(deserializer).map(|value| value.map(String::from))
}
